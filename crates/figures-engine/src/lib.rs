//! Figures engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demos:
//! window/event loop, input tracking, GPU device, mesh registration and the
//! shader program / mesh renderer pair.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod error;
pub mod logging;
pub mod coords;
pub mod mesh;
pub mod render;
pub mod paint;

pub use error::{BuildStep, EngineError};
