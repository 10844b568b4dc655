pub mod ansi;
pub mod frame;
pub mod presenter;
pub mod status_line;
