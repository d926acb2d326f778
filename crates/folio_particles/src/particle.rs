//! Particle type for the background field

use folio_math::{Rgba, Vec2};
use slotmap::new_key_type;

// Define generational key type for particles
new_key_type! {
    /// Key to a particle in the field
    ///
    /// Uses generational indexing so a particle can be followed across frames.
    /// Once a particle expires its key resolves to None, even if the slot is
    /// reused by a newly spawned particle.
    pub struct ParticleKey;
}

/// A short-lived point with position, velocity and an age-derived opacity
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface pixels (may lie outside the surface)
    pub position: Vec2,
    /// Velocity in pixels per frame
    pub velocity: Vec2,
    /// Radius in pixels
    pub size: f32,
    /// Opacity in [0, 1], recomputed from age on every update
    pub opacity: f32,
    /// Palette colour chosen at creation
    pub color: Rgba,
    /// Age in frames
    pub life: u32,
    /// Lifespan in frames (always at least 1)
    pub max_life: u32,
}

impl Particle {
    /// Create a newborn particle (age 0, fully opaque)
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Rgba, max_life: u32) -> Self {
        Self {
            position,
            velocity,
            size,
            opacity: 1.0,
            color,
            life: 0,
            max_life: max_life.max(1),
        }
    }

    /// Set the opacity shown before the first update
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the age of this particle
    pub fn with_life(mut self, life: u32) -> Self {
        self.life = life;
        self
    }

    /// Opacity implied by the current age: `max(0, 1 - life / max_life)`
    pub fn faded_opacity(&self) -> f32 {
        (1.0 - self.life as f32 / self.max_life as f32).clamp(0.0, 1.0)
    }

    /// Recompute opacity from age
    pub fn fade(&mut self) {
        self.opacity = self.faded_opacity();
    }

    /// Whether this particle should be removed
    pub fn is_expired(&self) -> bool {
        self.life >= self.max_life || self.opacity <= 0.0
    }

    /// Colour composited with the current opacity
    pub fn display_color(&self) -> Rgba {
        self.color.with_alpha(self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(max_life: u32) -> Particle {
        Particle::new(Vec2::new(10.0, 20.0), Vec2::new(1.0, -1.0), 2.0, Rgba::WHITE, max_life)
    }

    #[test]
    fn test_new_particle() {
        let p = particle(100);
        assert_eq!(p.life, 0);
        assert_eq!(p.max_life, 100);
        assert_eq!(p.opacity, 1.0);
        assert!(!p.is_expired());
    }

    #[test]
    fn test_zero_lifespan_is_raised_to_one() {
        assert_eq!(particle(0).max_life, 1);
    }

    #[test]
    fn test_fade_tracks_age() {
        let mut p = particle(100).with_life(25);
        p.fade();
        assert!((p.opacity - 0.75).abs() < 0.0001);

        p.life = 100;
        p.fade();
        assert_eq!(p.opacity, 0.0);
        assert!(p.is_expired());
    }

    #[test]
    fn test_faded_opacity_never_negative() {
        let p = particle(10).with_life(40);
        assert_eq!(p.faded_opacity(), 0.0);
    }

    #[test]
    fn test_with_opacity_clamps() {
        assert_eq!(particle(10).with_opacity(1.5).opacity, 1.0);
        assert_eq!(particle(10).with_opacity(-0.5).opacity, 0.0);
    }

    #[test]
    fn test_display_color_uses_opacity() {
        let p = particle(10).with_opacity(0.25);
        assert_eq!(p.display_color().a, 0.25);
    }
}
