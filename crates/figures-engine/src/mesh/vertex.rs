use bytemuck::{Pod, Zeroable};

/// Interleaving of a mesh's vertex buffer.
///
/// | Layout          | Stride | position | color     |
/// |-----------------|--------|----------|-----------|
/// | `Position`      | 12     | 0        | -         |
/// | `PositionColor` | 24     | 0        | 12        |
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexLayout {
    Position,
    PositionColor,
}

impl VertexLayout {
    const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
    const POSITION_COLOR_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    /// Number of `f32` values per vertex.
    #[inline]
    pub const fn floats_per_vertex(self) -> usize {
        match self {
            VertexLayout::Position => 3,
            VertexLayout::PositionColor => 6,
        }
    }

    /// Byte distance between consecutive vertices.
    #[inline]
    pub const fn stride(self) -> u64 {
        (self.floats_per_vertex() * std::mem::size_of::<f32>()) as u64
    }

    /// Byte offset of the color attribute, if the layout carries one.
    #[inline]
    pub const fn color_offset(self) -> Option<u64> {
        match self {
            VertexLayout::Position => None,
            VertexLayout::PositionColor => Some(3 * std::mem::size_of::<f32>() as u64),
        }
    }

    pub fn attributes(self) -> &'static [wgpu::VertexAttribute] {
        match self {
            VertexLayout::Position => &Self::POSITION_ATTRS,
            VertexLayout::PositionColor => &Self::POSITION_COLOR_ATTRS,
        }
    }

    pub fn buffer_layout(self) -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: self.attributes(),
        }
    }
}

/// A vertex type that can back a `Mesh`.
///
/// Implementors are plain `f32` aggregates so mesh data can be stored as a
/// flat float table.
pub trait Vertex: Pod {
    const LAYOUT: VertexLayout;
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

impl Vertex for PositionVertex {
    const LAYOUT: VertexLayout = VertexLayout::Position;
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

impl Vertex for ColorVertex {
    const LAYOUT: VertexLayout = VertexLayout::PositionColor;
}
