use wgpu::util::DeviceExt;

use super::{Mesh, VertexLayout};

/// Creates GPU buffers initialized with the given bytes.
///
/// `wgpu::Device` is the production implementation. Tests register meshes
/// into host memory to inspect what would be uploaded.
pub trait BufferAllocator {
    type Buffer;

    fn alloc_buffer(&self, label: &str, contents: &[u8], usage: wgpu::BufferUsages)
        -> Self::Buffer;
}

impl BufferAllocator for wgpu::Device {
    type Buffer = wgpu::Buffer;

    fn alloc_buffer(
        &self,
        label: &str,
        contents: &[u8],
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        self.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage,
        })
    }
}

/// GPU-resident copy of a `Mesh`, ready for indexed draws.
///
/// Buffers are released when the drawable is dropped.
#[derive(Debug)]
pub struct Drawable<B = wgpu::Buffer> {
    label: String,
    layout: VertexLayout,
    vertex_buffer: B,
    index_buffer: B,
    index_count: u32,
}

impl<B> Drawable<B> {
    /// Uploads the mesh's vertex and index tables.
    pub fn new<A>(allocator: &A, mesh: &Mesh) -> Self
    where
        A: BufferAllocator<Buffer = B>,
    {
        let vertex_buffer = allocator.alloc_buffer(
            &format!("{} vbo", mesh.label()),
            mesh.vertex_bytes(),
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = allocator.alloc_buffer(
            &format!("{} ibo", mesh.label()),
            mesh.index_bytes(),
            wgpu::BufferUsages::INDEX,
        );

        log::debug!(
            "registered drawable '{}': {} vertices, {} triangles, stride {}",
            mesh.label(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.layout().stride()
        );

        Self {
            label: mesh.label().to_owned(),
            layout: mesh.layout(),
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count() as u32,
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
    pub fn vertex_buffer(&self) -> &B {
        &self.vertex_buffer
    }

    #[inline]
    pub fn index_buffer(&self) -> &B {
        &self.index_buffer
    }

    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

impl Drawable<wgpu::Buffer> {
    /// Binds the buffers and issues one indexed triangle draw.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
