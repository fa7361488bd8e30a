use anyhow::{ensure, Result};
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::mesh::{Drawable, Mesh, VertexLayout};
use crate::render::{RenderCtx, RenderTarget, ShaderProgram, ShaderSources};

/// Matches `struct Transform { matrix: mat4x4<f32> }` in WGSL (column-major).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub matrix: [[f32; 4]; 4],
}

impl From<Mat4> for TransformUniform {
    fn from(m: Mat4) -> Self {
        Self {
            matrix: m.to_cols_array_2d(),
        }
    }
}

struct TransformSlot {
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws a fixed list of meshes, one indexed draw per object, each with its
/// own transform uniform.
///
/// Drawables, uniforms and the pipeline are released together in `release`
/// (or on drop).
pub struct MeshRenderer {
    layout: VertexLayout,
    pipeline: wgpu::RenderPipeline,
    drawables: Vec<Drawable>,
    slots: Vec<TransformSlot>,
}

impl MeshRenderer {
    /// Builds the shader program, registers every mesh and creates the pipeline.
    ///
    /// All meshes must share one vertex layout; it selects the pipeline's
    /// vertex buffer layout.
    pub fn new(ctx: &RenderCtx<'_>, sources: &ShaderSources, meshes: &[Mesh]) -> Result<Self> {
        ensure!(!meshes.is_empty(), "mesh renderer needs at least one mesh");
        let layout = meshes[0].layout();
        ensure!(
            meshes.iter().all(|m| m.layout() == layout),
            "meshes for '{}' mix vertex layouts",
            sources.label
        );

        let program = ShaderProgram::build(ctx.device, sources)?;

        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("figures transform bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<TransformUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("figures mesh pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(program.label()),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: program.vertex_module(),
                entry_point: Some(super::VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[layout.buffer_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: program.fragment_module(),
                entry_point: Some(super::FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let drawables: Vec<Drawable> = meshes.iter().map(|m| Drawable::new(ctx.device, m)).collect();

        let slots = drawables
            .iter()
            .map(|d| {
                let ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} transform ubo", d.label())),
                    contents: bytemuck::bytes_of(&TransformUniform::from(Mat4::IDENTITY)),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("{} transform bind group", d.label())),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: ubo.as_entire_binding(),
                    }],
                });
                TransformSlot { ubo, bind_group }
            })
            .collect();

        log::info!(
            "mesh renderer '{}' ready: {} object(s), {:?}",
            sources.label,
            drawables.len(),
            layout
        );

        Ok(Self {
            layout,
            pipeline,
            drawables,
            slots,
        })
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.drawables.len()
    }

    #[inline]
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Uploads one transform per object and draws the objects in order.
    ///
    /// Extra transforms are ignored; objects without a transform are skipped.
    /// Nothing is drawn into a zero-sized viewport.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, transforms: &[Mat4]) {
        if !ctx.viewport.is_valid() {
            return;
        }

        for (slot, m) in self.slots.iter().zip(transforms) {
            ctx.write_uniform(&slot.ubo, &TransformUniform::from(*m));
        }

        let mut rpass = target.begin_load_pass("figures mesh pass");
        rpass.set_pipeline(&self.pipeline);

        for (drawable, slot) in self.drawables.iter().zip(&self.slots).take(transforms.len()) {
            rpass.set_bind_group(0, &slot.bind_group, &[]);
            drawable.draw(&mut rpass);
        }
    }

    /// Releases every GPU resource the renderer owns.
    pub fn release(self) {
        log::debug!("releasing {} drawable(s)", self.drawables.len());
        drop(self);
    }
}
