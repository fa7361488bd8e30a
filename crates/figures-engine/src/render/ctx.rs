use bytemuck::Pod;

use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame};

/// What a renderer needs from the device for one frame or one setup call.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Format of the surface images the pipeline writes to.
    pub color_format: wgpu::TextureFormat,
    /// Logical window size.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    pub fn for_gpu(gpu: &'a Gpu<'_>, viewport: Viewport) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            color_format: gpu.surface_format(),
            viewport,
        }
    }

    /// Queues an overwrite of `buffer` with `value`, applied before the next submit.
    #[inline]
    pub fn write_uniform<T: Pod>(&self, buffer: &wgpu::Buffer, value: &T) {
        self.queue.write_buffer(buffer, 0, bytemuck::bytes_of(value));
    }
}

/// The acquired image of the current frame, already cleared.
pub struct RenderTarget<'f> {
    encoder: &'f mut wgpu::CommandEncoder,
    view: &'f wgpu::TextureView,
}

impl<'f> RenderTarget<'f> {
    pub(crate) fn for_frame(frame: &'f mut GpuFrame) -> Self {
        Self {
            encoder: &mut frame.encoder,
            view: &frame.view,
        }
    }

    /// Opens a pass that keeps the cleared contents and draws over them.
    pub fn begin_load_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        let attachment = wgpu::RenderPassColorAttachment {
            view: self.view,
            resolve_target: None,
            depth_slice: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
        };
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(attachment)],
            ..Default::default()
        })
    }
}
