//! The particle store and its per-tick update.
//!
//! A [`ParticleField`] owns every particle on a `width` x `height` surface.
//! Each [`tick`](ParticleField::tick) it pushes particles away from the
//! pointer, lets them drift, and bounces them off the surface edges.
//!
//! ```
//! use neurofield::{FieldConfig, ParticleField};
//!
//! let mut field = ParticleField::new(1500.0, 1000.0, FieldConfig::default(), 7);
//! assert_eq!(field.len(), 100);
//!
//! field.set_pointer(glam::Vec2::new(750.0, 500.0));
//! field.tick();
//! ```

use crate::config::FieldConfig;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement per tick.
    pub velocity: Vec2,
    /// Radius when drawn.
    pub size: f32,
}

/// Where the pointer is, if it is over the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
    radius: f32,
}

impl PointerState {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Influence radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Displacement the pointer applies to a particle at `point`.
    ///
    /// Points away from the pointer with magnitude
    /// `(radius - distance) / radius * strength`, and is zero outside the
    /// radius, when the pointer is absent, or exactly on top of the particle
    /// (no direction to push in).
    pub fn repulsion(&self, point: Vec2, strength: f32) -> Vec2 {
        let Some(pointer) = self.position else {
            return Vec2::ZERO;
        };

        let away = point - pointer;
        let distance = away.length();
        if distance <= 0.0 || distance >= self.radius {
            return Vec2::ZERO;
        }

        let force = (self.radius - distance) / self.radius;
        away / distance * force * strength
    }
}

/// Number of particles for a `width` x `height` surface.
///
/// `floor(width * height / density_area)`, capped at `max_particles`. Zero or
/// negative areas give zero.
pub fn particle_count(width: f32, height: f32, config: &FieldConfig) -> usize {
    let area = width.max(0.0) as f64 * height.max(0.0) as f64;
    if area <= 0.0 || config.density_area <= 0.0 {
        return 0;
    }

    let count = (area / config.density_area as f64).floor();
    if count >= config.max_particles as f64 {
        config.max_particles
    } else {
        count as usize
    }
}

/// All particles on one drawing surface plus the pointer that disturbs them.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    pointer: PointerState,
    rng: SmallRng,
}

impl ParticleField {
    /// Create a field and populate it with random particles.
    ///
    /// The same `seed` and size always produce the same particles.
    pub fn new(width: f32, height: f32, config: FieldConfig, seed: u64) -> Self {
        let mut field = Self {
            pointer: PointerState::new(config.pointer_radius),
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
        };
        field.resize(width, height);
        field
    }

    /// Create a field with exactly the given particles.
    ///
    /// Nothing is randomized until the next [`resize`](Self::resize).
    pub fn from_particles(
        width: f32,
        height: f32,
        config: FieldConfig,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            pointer: PointerState::new(config.pointer_radius),
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            particles,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    /// Adopt a new surface size and rebuild every particle from scratch.
    ///
    /// Old particles are discarded rather than rescaled; the pointer is kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let count = particle_count(self.width, self.height, &self.config);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.spawn();
            self.particles.push(particle);
        }

        log::debug!(
            "Particle field reset to {}x{} with {} particles",
            self.width,
            self.height,
            count
        );
    }

    fn spawn(&mut self) -> Particle {
        let position = Vec2::new(
            self.rng.gen::<f32>() * self.width,
            self.rng.gen::<f32>() * self.height,
        );

        let size = if self.config.max_size > self.config.min_size {
            self.rng.gen_range(self.config.min_size..self.config.max_size)
        } else {
            self.config.min_size
        };

        let speed = self.config.max_speed;
        let velocity = if speed > 0.0 {
            Vec2::new(
                self.rng.gen_range(-speed..speed),
                self.rng.gen_range(-speed..speed),
            )
        } else {
            Vec2::ZERO
        };

        Particle {
            position,
            velocity,
            size,
        }
    }

    /// Advance every particle by one frame.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        let strength = self.config.repel_strength;

        for particle in &mut self.particles {
            particle.position += self.pointer.repulsion(particle.position, strength);
            particle.position += particle.velocity;

            bounce(&mut particle.position.x, &mut particle.velocity.x, width);
            bounce(&mut particle.position.y, &mut particle.velocity.y, height);
        }
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer.set(position);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

/// Elastic bounce on one axis: a coordinate past an edge is mirrored back
/// inside and its velocity turned to point inward.
fn bounce(position: &mut f32, velocity: &mut f32, extent: f32) {
    if *position < 0.0 {
        *position = -*position;
        *velocity = velocity.abs();
    } else if *position > extent {
        *position = 2.0 * extent - *position;
        *velocity = -velocity.abs();
    }

    // Only reachable when a push overshoots a surface narrower than the push.
    if *position < 0.0 || *position > extent {
        *position = position.clamp(0.0, extent);
    }
}
