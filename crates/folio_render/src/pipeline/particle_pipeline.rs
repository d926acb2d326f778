//! Render pipeline for the particle background
//!
//! Two instanced pipelines share one screen uniform: filled circles for the
//! particles and the pointer ring, and stroked quads for connection lines.
//! Lines are drawn first so particles sit on top of their connections.

use wgpu::util::DeviceExt;

use super::types::{CircleInstance, InstanceBatch, LineInstance, ScreenUniforms};

/// Vertices per instanced quad (two triangles)
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Instances the buffers are sized for before the first grow
const INITIAL_CAPACITY: usize = 256;

/// A vertex buffer that is reallocated when an upload outgrows it
struct InstanceBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: u32,
    label: &'static str,
}

impl InstanceBuffer {
    fn new<T>(device: &wgpu::Device, label: &'static str) -> Self {
        Self {
            buffer: Self::allocate::<T>(device, label, INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            len: 0,
            label,
        }
    }

    fn allocate<T>(device: &wgpu::Device, label: &'static str, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<T>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn upload<T: bytemuck::Pod>(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, items: &[T]) {
        if items.len() > self.capacity {
            let capacity = items.len().next_power_of_two();
            log::debug!("Growing {} to {} instances", self.label, capacity);
            self.buffer = Self::allocate::<T>(device, self.label, capacity);
            self.capacity = capacity;
        }
        if !items.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(items));
        }
        self.len = items.len() as u32;
    }
}

/// Instanced circle and line pipelines for the particle field
#[allow(dead_code)] // bind_group_layout kept alive alongside the bind group
pub struct ParticlePipeline {
    circle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    circles: InstanceBuffer,
    lines: InstanceBuffer,
}

impl ParticlePipeline {
    /// Create the pipelines for a surface format
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Particle Bind Group Layout"),
            entries: &[
                // Screen size
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Particle Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/particles.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Particle Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let circle_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            "Circle Pipeline",
            ("vs_circle", "fs_circle"),
            Self::circle_buffer_layout(),
        );
        let line_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            "Line Pipeline",
            ("vs_line", "fs_line"),
            Self::line_buffer_layout(),
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Uniform Buffer"),
            contents: bytemuck::bytes_of(&ScreenUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Particle Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        });

        Self {
            circle_pipeline,
            line_pipeline,
            bind_group_layout,
            uniform_buffer,
            bind_group,
            circles: InstanceBuffer::new::<CircleInstance>(device, "Circle Instance Buffer"),
            lines: InstanceBuffer::new::<LineInstance>(device, "Line Instance Buffer"),
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        label: &str,
        (vs_entry, fs_entry): (&str, &str),
        buffer_layout: wgpu::VertexBufferLayout<'static>,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some(vs_entry),
                buffers: &[buffer_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some(fs_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Quads are emitted in both windings
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Per-instance layout for CircleInstance
    fn circle_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // center: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // radius: f32
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 8,
                    shader_location: 1,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 2,
                },
            ],
        }
    }

    /// Per-instance layout for LineInstance
    fn line_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                // start: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // end: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 8,
                    shader_location: 1,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 2,
                },
                // width: f32
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 32,
                    shader_location: 3,
                },
            ],
        }
    }

    /// Update the screen uniform after a resize
    pub fn update_screen(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let uniforms = ScreenUniforms::new(width, height);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Upload this frame's instances
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batch: &InstanceBatch) {
        self.circles.upload(device, queue, &batch.circles);
        self.lines.upload(device, queue, &batch.lines);
    }

    /// Number of circle and line instances uploaded by the last prepare
    pub fn instance_counts(&self) -> (u32, u32) {
        (self.circles.len, self.lines.len)
    }

    /// Clear the target and draw the prepared instances
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Particle Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        if self.lines.len > 0 {
            render_pass.set_pipeline(&self.line_pipeline);
            render_pass.set_vertex_buffer(0, self.lines.buffer.slice(..));
            render_pass.draw(0..QUAD_VERTEX_COUNT, 0..self.lines.len);
        }

        if self.circles.len > 0 {
            render_pass.set_pipeline(&self.circle_pipeline);
            render_pass.set_vertex_buffer(0, self.circles.buffer.slice(..));
            render_pass.draw(0..QUAD_VERTEX_COUNT, 0..self.circles.len);
        }
    }
}

/// Convert a straight-alpha color to a wgpu clear color
pub fn clear_color(color: folio_math::Rgba) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_layout_stride() {
        let layout = ParticlePipeline::circle_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<CircleInstance>() as u64);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
    }

    #[test]
    fn test_line_layout_stride() {
        let layout = ParticlePipeline::line_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<LineInstance>() as u64);
        assert_eq!(layout.attributes.len(), 4);
    }

    #[test]
    fn test_attributes_fit_in_stride() {
        for layout in [
            ParticlePipeline::circle_buffer_layout(),
            ParticlePipeline::line_buffer_layout(),
        ] {
            for attr in layout.attributes {
                assert!(attr.offset + attr.format.size() <= layout.array_stride);
            }
        }
    }

    #[test]
    fn test_clear_color() {
        let color = clear_color(folio_math::Rgba::new(0.0, 0.5, 1.0, 1.0));
        assert_eq!(color.g, 0.5);
        assert_eq!(color.a, 1.0);
    }
}
