//! Particle field and per-frame simulation

use crate::canvas::Canvas;
use crate::palette::Palette;
use crate::particle::{Particle, ParticleKey};
use folio_math::{Rgba, Vec2};
use rand::rngs::StdRng;
use rand::Rng;
use slotmap::SlotMap;

/// Configuration for the particle field
///
/// All rates are per frame: the field advances one step per display refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Particles created on initialize
    pub initial_count: usize,
    /// Downward acceleration added to vy each frame (screen y points down)
    pub gravity: f32,
    /// Multiplicative velocity damping per frame (< 1)
    pub friction: f32,
    /// Fraction of speed kept when bouncing off an edge
    pub bounce: f32,
    /// Magnitude bound of each initial velocity component
    pub initial_speed: f32,
    /// Smallest particle radius
    pub min_size: f32,
    /// Radius spread above `min_size`
    pub size_range: f32,
    /// Shortest lifespan in frames
    pub min_lifespan: u32,
    /// Lifespan spread above `min_lifespan`
    pub lifespan_range: u32,
    /// Chance of spawning at the pointer on each pointer move
    pub pointer_spawn_chance: f64,
    /// Chance of an ambient spawn per frame while below the floor
    pub ambient_spawn_chance: f64,
    /// Ambient spawning only happens while the population is below this
    pub population_floor: usize,
    /// Particles closer than this are connected by a line
    pub connection_distance: f32,
    /// Scale applied to connection alpha
    pub connection_alpha_scale: f32,
    /// Connection line width
    pub connection_width: f32,
    /// Connection line colour (alpha replaced per line)
    pub connection_color: Rgba,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            initial_count: 30,
            gravity: 0.01,
            friction: 0.99,
            bounce: 0.8,
            initial_speed: 1.0,
            min_size: 1.0,
            size_range: 3.0,
            min_lifespan: 50,
            lifespan_range: 100,
            pointer_spawn_chance: 0.3,
            ambient_spawn_chance: 0.02,
            population_floor: 50,
            connection_distance: 100.0,
            connection_alpha_scale: 0.3,
            connection_width: 0.5,
            connection_color: Rgba::from_rgb8(59, 130, 246),
        }
    }
}

/// Size of the drawing surface in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a point lies within the surface bounds
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// What happened during one update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles that survived the update
    pub updated: usize,
    /// Particles removed because they expired
    pub removed: usize,
    /// Ambient spawns this frame
    pub spawned: usize,
    /// Population after the update
    pub population: usize,
}

/// Alpha of the line between two particles, or None if they are too far apart
///
/// `(1 - distance / threshold) * opacity_a * opacity_b * scale`. Symmetric in
/// its particle arguments.
pub fn connection_alpha(a: &Particle, b: &Particle, config: &FieldConfig) -> Option<f32> {
    let threshold = config.connection_distance;
    let distance = a.position.distance(b.position);
    if distance < threshold {
        // Opacities multiply first so swapping the pair cannot change rounding
        let opacity = a.opacity * b.opacity;
        Some((1.0 - distance / threshold) * opacity * config.connection_alpha_scale)
    } else {
        None
    }
}

/// The particle field containing all live particles
///
/// The random source is injected so runs can be reproduced from a seed.
pub struct ParticleField<R: Rng = StdRng> {
    /// All live particles (using generational keys)
    particles: SlotMap<ParticleKey, Particle>,
    /// Current drawing surface; None means nothing to draw into
    surface: Option<SurfaceSize>,
    /// Last pointer position while the pointer is over the surface
    pointer: Option<Vec2>,
    palette: Palette,
    rng: R,
    /// Field configuration
    pub config: FieldConfig,
}

impl<R: Rng> ParticleField<R> {
    /// Create an empty field with the given configuration and random source
    pub fn new(config: FieldConfig, rng: R) -> Self {
        Self {
            particles: SlotMap::with_key(),
            surface: None,
            pointer: None,
            palette: Palette::default(),
            rng,
            config,
        }
    }

    /// Use a custom colour palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Reset the field and scatter `initial_count` particles over the surface
    ///
    /// With no surface the field stays empty.
    pub fn initialize(&mut self, surface: Option<SurfaceSize>) {
        self.particles.clear();
        self.pointer = None;
        self.surface = surface;

        if let Some(surface) = surface {
            for _ in 0..self.config.initial_count {
                let position = self.random_position(surface);
                self.spawn(position);
            }
        }
    }

    /// Change the surface size; particle positions are left untouched
    pub fn resize(&mut self, surface: Option<SurfaceSize>) {
        self.surface = surface;
    }

    /// Current surface size
    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    /// The palette particles pick their colours from
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Record a pointer move and maybe spawn a particle under it
    pub fn pointer_moved(&mut self, position: Vec2) -> Option<ParticleKey> {
        self.surface?;
        self.pointer = Some(position);

        let chance = self.config.pointer_spawn_chance.clamp(0.0, 1.0);
        if self.rng.random_bool(chance) {
            Some(self.spawn(position))
        } else {
            None
        }
    }

    /// Forget the pointer position
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Last known pointer position, if the pointer is over the surface
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Create a particle with randomized velocity, size, colour and lifespan
    pub fn spawn(&mut self, position: Vec2) -> ParticleKey {
        let speed = self.config.initial_speed;
        let velocity = Vec2::new(
            (self.rng.random::<f32>() - 0.5) * 2.0 * speed,
            (self.rng.random::<f32>() - 0.5) * 2.0 * speed,
        );
        let size = self.config.min_size + self.rng.random::<f32>() * self.config.size_range;
        let opacity = self.rng.random::<f32>() * 0.8 + 0.2;
        let color = self.palette.pick(&mut self.rng);
        let lifespan = self.config.min_lifespan
            + if self.config.lifespan_range > 0 {
                self.rng.random_range(0..self.config.lifespan_range)
            } else {
                0
            };

        let particle = Particle::new(position, velocity, size, color, lifespan).with_opacity(opacity);
        self.insert(particle)
    }

    /// Add a fully specified particle and return its key
    pub fn insert(&mut self, particle: Particle) -> ParticleKey {
        self.particles.insert(particle)
    }

    /// Remove a particle and return it
    pub fn remove(&mut self, key: ParticleKey) -> Option<Particle> {
        self.particles.remove(key)
    }

    /// Get an immutable reference to a particle by key
    pub fn get(&self, key: ParticleKey) -> Option<&Particle> {
        self.particles.get(key)
    }

    /// Get a mutable reference to a particle by key
    pub fn get_mut(&mut self, key: ParticleKey) -> Option<&mut Particle> {
        self.particles.get_mut(key)
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate over all particles with their keys
    pub fn iter(&self) -> impl Iterator<Item = (ParticleKey, &Particle)> {
        self.particles.iter()
    }

    /// Advance the simulation by one frame
    ///
    /// This performs, per particle:
    /// 1. Position integration and aging
    /// 2. Gravity and friction
    /// 3. Opacity fade and removal of expired particles
    /// 4. Edge reflection
    ///
    /// then at most one ambient spawn if the population is below the floor.
    pub fn update(&mut self) -> FrameStats {
        let Some(surface) = self.surface else {
            return FrameStats::default();
        };

        let gravity = self.config.gravity;
        let friction = self.config.friction;
        let bounce = self.config.bounce;

        let before = self.particles.len();
        self.particles.retain(|_key, particle| {
            particle.position += particle.velocity;
            particle.life += 1;

            particle.velocity.y += gravity;
            particle.velocity *= friction;

            particle.fade();
            if particle.is_expired() {
                return false;
            }

            reflect(particle, surface, bounce);
            true
        });
        let updated = self.particles.len();

        let mut spawned = 0;
        let chance = self.config.ambient_spawn_chance.clamp(0.0, 1.0);
        if self.particles.len() < self.config.population_floor && self.rng.random_bool(chance) {
            let position = self.random_position(surface);
            self.spawn(position);
            spawned = 1;
        }

        let stats = FrameStats {
            updated,
            removed: before - updated,
            spawned,
            population: self.particles.len(),
        };
        log::trace!("Particle frame: {:?}", stats);
        stats
    }

    /// Draw every particle and every connection between nearby pairs
    ///
    /// Returns the number of connection lines drawn. Each unordered pair is
    /// considered once, so the pass is O(n²) in the population.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> usize {
        canvas.clear();
        if self.surface.is_none() {
            return 0;
        }

        for particle in self.particles.values() {
            canvas.fill_circle(particle.position, particle.size, particle.display_color());
        }

        let live: Vec<&Particle> = self.particles.values().collect();
        let mut connections = 0;
        for i in 0..live.len() {
            for j in (i + 1)..live.len() {
                let (a, b) = (live[i], live[j]);
                if let Some(alpha) = connection_alpha(a, b, &self.config) {
                    canvas.stroke_line(
                        a.position,
                        b.position,
                        self.config.connection_width,
                        self.config.connection_color.with_alpha(alpha),
                    );
                    connections += 1;
                }
            }
        }
        connections
    }

    fn random_position(&mut self, surface: SurfaceSize) -> Vec2 {
        Vec2::new(
            self.rng.random::<f32>() * surface.width,
            self.rng.random::<f32>() * surface.height,
        )
    }
}

/// Flip a velocity component when the particle is outside that edge and still moving away
fn reflect(particle: &mut Particle, surface: SurfaceSize, bounce: f32) {
    let p = particle.position;
    let v = particle.velocity;

    if (p.x < 0.0 && v.x < 0.0) || (p.x > surface.width && v.x > 0.0) {
        particle.velocity.x = -v.x * bounce;
    }
    if (p.y < 0.0 && v.y < 0.0) || (p.y > surface.height && v.y > 0.0) {
        particle.velocity.y = -v.y * bounce;
    }
}
