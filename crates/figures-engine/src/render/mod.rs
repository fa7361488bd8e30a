//! GPU rendering subsystem.
//!
//! - `ShaderProgram`: builds a vertex + fragment pair, reporting compile and link failures
//! - `MeshRenderer`: owns drawables, one transform uniform per object, and the pipeline
//!
//! Convention: geometry is authored in normalized device coordinates
//! (origin center, +Y up); the per-object transform is applied in the vertex shader.

mod ctx;
mod mesh_renderer;
mod program;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh_renderer::{MeshRenderer, TransformUniform};
pub use program::{ShaderProgram, ShaderSources, FRAGMENT_ENTRY, VERTEX_ENTRY};
