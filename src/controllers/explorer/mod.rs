pub mod explorer;
pub mod throttle;
