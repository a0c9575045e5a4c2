//! Painting a [`ParticleField`] onto a [`RenderSurface`].
//!
//! A frame is: clear, one filled circle per particle, then one line for every
//! pair of particles closer than the link distance. The pair pass is a plain
//! O(n²) scan; the particle cap keeps it small.

use crate::field::{Particle, ParticleField};
use crate::surface::RenderSurface;
use glam::Vec2;

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityEdge {
    pub from: Vec2,
    pub to: Vec2,
    /// Line alpha, already scaled.
    pub opacity: f32,
}

/// Alpha of the line joining two particles `distance` apart.
///
/// `(1 - distance / link_distance) * scale` when closer than `link_distance`,
/// `None` otherwise.
#[inline]
pub fn edge_opacity(distance: f32, link_distance: f32, scale: f32) -> Option<f32> {
    if distance < link_distance {
        Some((1.0 - distance / link_distance) * scale)
    } else {
        None
    }
}

/// Every unordered pair of particles closer than `link_distance`.
pub fn proximity_edges(
    particles: &[Particle],
    link_distance: f32,
    scale: f32,
) -> impl Iterator<Item = ProximityEdge> + '_ {
    particles.iter().enumerate().flat_map(move |(i, a)| {
        particles[i + 1..].iter().filter_map(move |b| {
            let distance = a.position.distance(b.position);
            edge_opacity(distance, link_distance, scale).map(|opacity| ProximityEdge {
                from: a.position,
                to: b.position,
                opacity,
            })
        })
    })
}

impl ParticleField {
    /// Proximity edges for the current particle positions.
    pub fn edges(&self) -> impl Iterator<Item = ProximityEdge> + '_ {
        let config = self.config();
        proximity_edges(self.particles(), config.link_distance, config.link_opacity)
    }

    /// Paint the current state of the field.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let config = self.config();
        surface.clear(self.width(), self.height());

        for particle in self.particles() {
            surface.fill_circle(particle.position, particle.size, config.particle_color);
        }

        for edge in self.edges() {
            surface.stroke_line(
                edge.from,
                edge.to,
                config.line_width,
                config.link_color.with_alpha(edge.opacity),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::surface::{DrawCommand, Recorder};

    fn at(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size: 2.0,
        }
    }

    #[test]
    fn test_edge_opacity_falloff() {
        assert_eq!(edge_opacity(0.0, 120.0, 0.3), Some(0.3));
        assert_eq!(edge_opacity(60.0, 120.0, 0.3), Some((1.0 - 60.0 / 120.0) * 0.3));
        assert_eq!(edge_opacity(120.0, 120.0, 0.3), None);
        assert_eq!(edge_opacity(500.0, 120.0, 0.3), None);
    }

    #[test]
    fn test_pairs_are_unordered_and_unique() {
        let particles = vec![at(0.0, 0.0), at(10.0, 0.0), at(20.0, 0.0)];
        let edges: Vec<_> = proximity_edges(&particles, 120.0, 0.3).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].from, Vec2::new(0.0, 0.0));
        assert_eq!(edges[0].to, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_render_order() {
        let field = ParticleField::from_particles(
            200.0,
            100.0,
            FieldConfig::default(),
            vec![at(10.0, 10.0), at(40.0, 50.0), at(190.0, 90.0)],
        );
        let mut recorder = Recorder::new();
        field.render(&mut recorder);

        let commands = recorder.commands();
        assert_eq!(commands[0], DrawCommand::Clear { width: 200.0, height: 100.0 });
        assert!(commands[1..4]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
        assert_eq!(commands.len(), 4 + field.edges().count());

        // (10,10)-(40,50) is 50 apart; the far particle is out of range of the first
        let lines: Vec<_> = recorder.lines().collect();
        assert_eq!(lines[0].0, Vec2::new(10.0, 10.0));
        assert_eq!(lines[0].2.a, (1.0 - 50.0 / 120.0) * 0.3);
    }

    #[test]
    fn test_empty_field_only_clears() {
        let field = ParticleField::new(0.0, 0.0, FieldConfig::default(), 3);
        let mut recorder = Recorder::new();
        field.render(&mut recorder);
        assert_eq!(
            recorder.commands(),
            &[DrawCommand::Clear { width: 0.0, height: 0.0 }]
        );
    }
}
