pub mod controller;
pub mod shared_view;
