//! Coordinate types shared across the runtime and the demos.
//!
//! Two spaces are in play:
//! - logical pixels (DPI-aware, origin top-left, +Y down) for pointer input
//! - normalized device coordinates (origin center, +Y up) for geometry
//!
//! `Viewport` converts between them.

mod viewport;

pub use viewport::Viewport;
