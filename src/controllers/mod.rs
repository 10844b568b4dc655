pub mod explorer;
pub mod export;
pub mod ports;
pub mod recording;
pub mod view;
