//! Mesh data and its GPU registration.
//!
//! - `Mesh`: immutable CPU-side vertex/index tables
//! - `Drawable`: GPU copies of a mesh plus its attribute layout
//! - `BufferAllocator`: the seam drawables are created through

mod drawable;
mod data;
mod vertex;

pub use drawable::{BufferAllocator, Drawable};
pub use data::Mesh;
pub use vertex::{ColorVertex, PositionVertex, Vertex, VertexLayout};
