// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use log::warn;
use wgpu::util::DeviceExt;

use geometric_shapes::palette::Color;
use geometric_shapes::ShapePlacement;

use super::tessellate::{outline_points, place};
use super::vertex::Vertex;

const RENDERER_MAX_VERTICES: usize = 4096;
const RENDERER_MAX_INDICES: usize = RENDERER_MAX_VERTICES * 3;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewDimensionsUniform {
    width: f32,
    height: f32,
    _padding1: f32,
    _padding2: f32,
}

pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,

    frame_vertices: Vec<Vertex>,
    frame_indices: Vec<u16>,

    view_uniform_buffer: wgpu::Buffer,
    view_bind_group: wgpu::BindGroup,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        initial_view_width: f32,
        initial_view_height: f32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shapes Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let view_uniform_data = ViewDimensionsUniform {
            width: initial_view_width,
            height: initial_view_height,
            _padding1: 0.0,
            _padding2: 0.0,
        };
        let view_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("View Dimensions Uniform Buffer"),
            contents: bytemuck::bytes_of(&view_uniform_data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let view_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("view_dimensions_bind_group_layout"),
        });

        let view_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &view_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: view_uniform_buffer.as_entire_binding(),
            }],
            label: Some("view_dimensions_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Shapes Pipeline Layout"),
                bind_group_layouts: &[&view_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shapes Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
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
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shapes Vertex Buffer"),
            size: (RENDERER_MAX_VERTICES * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shapes Index Buffer"),
            size: (RENDERER_MAX_INDICES * std::mem::size_of::<u16>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            frame_vertices: Vec::with_capacity(RENDERER_MAX_VERTICES),
            frame_indices: Vec::with_capacity(RENDERER_MAX_INDICES),
            view_uniform_buffer,
            view_bind_group,
        }
    }

    /// Queues a convex loop as a triangle fan from its first point.
    fn add_fan_to_frame(&mut self, points: &[[f32; 2]], color: Color) {
        if points.len() < 3 {
            return;
        }
        let index_count = (points.len() - 2) * 3;
        if self.frame_vertices.len() + points.len() > RENDERER_MAX_VERTICES
            || self.frame_indices.len() + index_count > RENDERER_MAX_INDICES
        {
            warn!("Renderer: frame data exceeds pre-allocated buffer capacity, shape skipped.");
            return;
        }
        let start_vertex_index = self.frame_vertices.len() as u16;
        for point in points {
            self.frame_vertices.push(Vertex::new(*point, color));
        }
        for i in 1..(points.len() as u16 - 1) {
            self.frame_indices.push(start_vertex_index);
            self.frame_indices.push(start_vertex_index + i);
            self.frame_indices.push(start_vertex_index + i + 1);
        }
    }

    pub fn render_shapes<'a>(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        placements: impl Iterator<Item = ShapePlacement<'a>>,
        view_width: f32,
        view_height: f32,
        clear_color: wgpu::Color,
    ) {
        let view_uniform_data = ViewDimensionsUniform {
            width: view_width,
            height: view_height,
            _padding1: 0.0,
            _padding2: 0.0,
        };
        queue.write_buffer(&self.view_uniform_buffer, 0, bytemuck::bytes_of(&view_uniform_data));

        self.frame_vertices.clear();
        self.frame_indices.clear();

        for placement in placements {
            let local = outline_points(&placement.shape.outline);
            let placed = place(&local, placement.position, placement.angle);
            self.add_fan_to_frame(&placed, placement.color);
        }

        if !self.frame_vertices.is_empty() && !self.frame_indices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.frame_vertices));
            let mut padded_indices_data = self.frame_indices.clone();
            // write_buffer needs a multiple of 4 bytes
            if padded_indices_data.len() % 2 == 1 {
                padded_indices_data.push(0);
            }
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&padded_indices_data));
        }

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shapes Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: output_view,
                    resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Clear(clear_color), store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });

            if !self.frame_vertices.is_empty() && !self.frame_indices.is_empty() {
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.view_bind_group, &[]);

                let vertex_buffer_slice_size = (self.frame_vertices.len() * std::mem::size_of::<Vertex>()) as u64;
                let effective_indices_count = self.frame_indices.len();
                let padded_index_count = effective_indices_count + effective_indices_count % 2;
                let index_buffer_slice_size = (padded_index_count * std::mem::size_of::<u16>()) as u64;

                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..vertex_buffer_slice_size));
                render_pass.set_index_buffer(self.index_buffer.slice(..index_buffer_slice_size), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..effective_indices_count as u32, 0, 0..1);
            }
        }
    }
}
