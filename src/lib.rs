//! QLOCKTWO-style word clock in Bernese German for a 64x64 RGB LED panel.

pub mod color;
pub mod config;
pub mod display;
pub mod driver;
pub mod error;
pub mod font;
pub mod grid;
pub mod renderer;
pub mod sink;
pub mod translator;

pub use error::ClockError;
pub use translator::{translate, Translation};
