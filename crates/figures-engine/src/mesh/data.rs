use super::vertex::{Vertex, VertexLayout};

/// Immutable vertex/index tables for one shape.
///
/// Vertex data is stored as a flat `f32` table in the layout's interleaving;
/// indices are triangle triples into that table. Geometry is not validated:
/// out-of-range indices surface at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    label: String,
    layout: VertexLayout,
    vertex_data: Vec<f32>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new<V: Vertex>(label: impl Into<String>, vertices: &[V], indices: &[u32]) -> Self {
        Self {
            label: label.into(),
            layout: V::LAYOUT,
            vertex_data: bytemuck::cast_slice::<V, f32>(vertices).to_vec(),
            indices: indices.to_vec(),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len() / self.layout.floats_per_vertex()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaved vertex data as floats.
    #[inline]
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Typed view of the vertices; `None` if `V` does not match the layout.
    pub fn vertices<V: Vertex>(&self) -> Option<&[V]> {
        if V::LAYOUT != self.layout {
            return None;
        }
        bytemuck::try_cast_slice(&self.vertex_data).ok()
    }

    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_data)
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
