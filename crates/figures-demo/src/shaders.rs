//! The demos' WGSL programs.

use figures_engine::render::ShaderSources;

/// Per-vertex color; expects `ColorVertex` meshes.
pub const COLORED: ShaderSources = ShaderSources {
    label: "colored",
    vertex: include_str!("shaders/colored.vert.wgsl"),
    fragment: include_str!("shaders/colored.frag.wgsl"),
};

/// Fixed color (1.0, 0.6, 0.1); expects `PositionVertex` meshes.
pub const SOLID: ShaderSources = ShaderSources {
    label: "solid",
    vertex: include_str!("shaders/solid.vert.wgsl"),
    fragment: include_str!("shaders/solid.frag.wgsl"),
};
