//! Color representation shared by the frame clear and the solid shaders.

pub mod color;

pub use color::Color;
