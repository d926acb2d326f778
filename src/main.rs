//! Folio - portfolio presenter
//!
//! Opens a window showing the animated particle background.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use folio::config::AppConfig;
use folio::input::{InputAction, InputMapper};
use folio::systems::{surface_size, RenderSystem, SimulationSystem, WindowSystem};
use folio_core::{Theme, ThemeStore};
use folio_math::Rgba;
use folio_render::RenderError;

/// Frames between title refreshes when stats are shown
const TITLE_REFRESH_FRAMES: u64 = 30;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    theme_store: ThemeStore,
    theme: Theme,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let theme_store = ThemeStore::new(config.theme.dir.clone());
        let theme = theme_store.load().unwrap_or_else(|e| {
            log::warn!("Failed to load theme preference: {}. Using default.", e);
            Theme::default()
        });
        log::info!("Theme: {}", theme.name());

        let simulation =
            SimulationSystem::new(&config.particles, config.rendering.ring_segments);

        Self {
            config,
            window: None,
            render: None,
            simulation,
            theme_store,
            theme,
        }
    }

    fn background(&self) -> Rgba {
        match self.config.rendering.background_color {
            Some([r, g, b, a]) => Rgba::new(r, g, b, a),
            None => self.theme.background(),
        }
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            let stats = if self.config.debug.show_stats {
                self.simulation.last_stats()
            } else {
                None
            };
            window.update_title(self.theme, self.simulation.is_running(), stats);
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        let surface = self.window.as_ref().and_then(|w| w.surface_size());
        match action {
            InputAction::Exit => self.shutdown(event_loop),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ToggleTheme => {
                self.theme = match self.theme_store.toggle(self.theme) {
                    Ok(theme) => theme,
                    Err(e) => {
                        log::warn!("Failed to save theme preference: {}", e);
                        self.theme.toggled()
                    }
                };
                log::info!("Theme switched to {}", self.theme.name());
                self.refresh_title();
                self.request_redraw();
            }
            InputAction::TogglePause => {
                let running = self.simulation.toggle_pause(surface);
                self.refresh_title();
                if running {
                    self.request_redraw();
                }
            }
            InputAction::ResetField => {
                self.simulation.reset(surface);
                self.request_redraw();
            }
        }
    }

    /// Unmount the layer before the event loop exits
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.unmount();
        event_loop.exit();
    }

    fn redraw(&mut self) {
        let result = self.simulation.update();

        if self.config.debug.show_stats
            && result.steps > 0
            && self.simulation.frame_count() % TITLE_REFRESH_FRAMES == 0
        {
            self.refresh_title();
        }

        let background = self.background();
        if let Some(render) = &mut self.render {
            match render.render_frame(&self.simulation.draw_lists(), background) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if result.redraw {
            self.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.simulation.mount(window.surface_size());
        window.request_redraw();

        self.window = Some(window);
        self.render = Some(render);
        self.refresh_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(pointer_event) = self.simulation.pointer_mut().process_event(&event) {
            self.simulation.pointer_event(pointer_event);
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.simulation.resize(surface_size(physical_size));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state, event.repeat) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}

fn main() {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
