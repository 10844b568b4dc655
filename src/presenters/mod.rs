pub mod file;
pub mod terminal;
