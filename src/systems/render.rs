//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Particle pipeline and instance upload
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use folio_math::Rgba;
use folio_particles::DrawList;
use folio_render::{
    context::RenderContext,
    pipeline::{clear_color, InstanceBatch, ParticlePipeline},
    RenderError,
};

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: ParticlePipeline,
    batch: InstanceBatch,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = ParticlePipeline::new(&context.device, context.config.format);
        pipeline.update_screen(&context.queue, context.config.width, context.config.height);

        log::info!(
            "Renderer ready: {:?} at {}x{}",
            context.config.format,
            context.config.width,
            context.config.height
        );

        Ok(Self {
            context,
            pipeline,
            batch: InstanceBatch::default(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.update_screen(
            &self.context.queue,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface after it was lost or outdated
    pub fn recover_surface(&mut self) {
        log::warn!("Surface lost, reconfiguring");
        self.context.reconfigure();
    }

    /// Render the draw lists, bottom to top, over a background colour
    pub fn render_frame(
        &mut self,
        lists: &[&DrawList],
        background: Rgba,
    ) -> Result<(), RenderError> {
        self.batch.clear();
        for list in lists {
            self.batch.extend(list);
        }
        self.pipeline
            .prepare(&self.context.device, &self.context.queue, &self.batch);

        // Get surface texture
        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Particle Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, clear_color(background));

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
