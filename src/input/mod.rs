//! Input adapters for the fractal explorer.
//!
//! This module contains adapters that read key presses and terminal state
//! and translate them into domain input.

pub mod terminal;
