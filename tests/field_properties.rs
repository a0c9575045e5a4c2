//! Integration tests for the particle field as a host sees it.
//!
//! These drive the public API only: build a field, feed it input through an
//! animator, and inspect what lands on a recording surface.

use glam::Vec2;
use neurofield::{
    particle_count, Animator, DrawCommand, FieldConfig, FrameStatus, InputEvent, Particle,
    ParticleField, Recorder,
};

fn still(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::ZERO,
        size: 2.0,
    }
}

// ============================================================================
// Particle count
// ============================================================================

#[test]
fn test_count_follows_area() {
    let config = FieldConfig::default();

    assert_eq!(particle_count(1500.0, 1000.0, &config), 100);
    assert_eq!(particle_count(1000.0, 1000.0, &config), 66);
    assert_eq!(particle_count(122.0, 123.0, &config), 1);
    assert_eq!(particle_count(100.0, 100.0, &config), 0);
}

#[test]
fn test_count_is_capped() {
    let config = FieldConfig::default();
    assert_eq!(particle_count(3840.0, 2160.0, &config), 150);
    assert_eq!(particle_count(10_000.0, 10_000.0, &config), 150);
}

#[test]
fn test_zero_area_has_no_particles() {
    let config = FieldConfig::default();
    assert_eq!(particle_count(0.0, 1000.0, &config), 0);
    assert_eq!(particle_count(1000.0, 0.0, &config), 0);

    let field = ParticleField::new(0.0, 0.0, config, 1);
    assert!(field.is_empty());

    let mut surface = Recorder::new();
    field.render(&mut surface);
    assert_eq!(surface.circle_count(), 0);
    assert_eq!(surface.lines().count(), 0);
}

#[test]
fn test_config_file_values_reach_the_field() {
    let config = FieldConfig::from_json(r#"{ "max_particles": 10 }"#).unwrap();
    let field = ParticleField::new(1500.0, 1000.0, config, 3);
    assert_eq!(field.len(), 10);
}

// ============================================================================
// Motion
// ============================================================================

#[test]
fn test_particles_stay_in_bounds() {
    let mut field = ParticleField::new(800.0, 600.0, FieldConfig::default(), 99);
    assert_eq!(field.len(), 32);

    for _ in 0..10_000 {
        field.tick();
        for p in field.particles() {
            assert!(
                (0.0..=800.0).contains(&p.position.x) && (0.0..=600.0).contains(&p.position.y),
                "particle escaped to {:?}",
                p.position
            );
        }
    }
}

#[test]
fn test_particles_stay_in_bounds_under_pointer() {
    let mut field = ParticleField::new(400.0, 400.0, FieldConfig::default(), 5);
    let corners = [
        Vec2::new(1.0, 1.0),
        Vec2::new(399.0, 1.0),
        Vec2::new(200.0, 200.0),
        Vec2::new(1.0, 399.0),
    ];

    for step in 0..4_000 {
        field.set_pointer(corners[(step / 500) % corners.len()]);
        field.tick();
        for p in field.particles() {
            assert!((0.0..=400.0).contains(&p.position.x));
            assert!((0.0..=400.0).contains(&p.position.y));
        }
    }
}

#[test]
fn test_repulsion_magnitude_and_direction() {
    let config = FieldConfig::default();
    let mut field = ParticleField::from_particles(1000.0, 1000.0, config, vec![still(500.0, 500.0)]);

    // Pointer 60px to the left: push (150 - 60) / 150 * 2 = 1.2 to the right
    field.set_pointer(Vec2::new(440.0, 500.0));
    field.tick();

    let p = field.particles()[0].position;
    assert!((p.x - 501.2).abs() < 1e-4, "x = {}", p.x);
    assert!((p.y - 500.0).abs() < 1e-6);
}

#[test]
fn test_no_repulsion_at_or_beyond_radius() {
    let config = FieldConfig::default();
    let mut field = ParticleField::from_particles(1000.0, 1000.0, config, vec![still(500.0, 500.0)]);

    field.set_pointer(Vec2::new(500.0, 350.0));
    field.tick();
    assert_eq!(field.particles()[0].position, Vec2::new(500.0, 500.0));

    field.set_pointer(Vec2::new(100.0, 100.0));
    field.tick();
    assert_eq!(field.particles()[0].position, Vec2::new(500.0, 500.0));
}

#[test]
fn test_pointer_leave_stops_repulsion() {
    let config = FieldConfig::default();
    let mut animator = Animator::new(ParticleField::from_particles(
        1000.0,
        1000.0,
        config,
        vec![still(500.0, 500.0)],
    ));
    let mut surface = Recorder::new();

    animator.push(InputEvent::PointerMoved(Vec2::new(500.0, 450.0)));
    animator.frame(&mut surface, &mut || {});
    let pushed = animator.field().particles()[0].position;
    assert!(pushed.y > 500.0);

    animator.push(InputEvent::PointerLeft);
    for _ in 0..10 {
        animator.frame(&mut surface, &mut || {});
    }
    assert_eq!(animator.field().particles()[0].position, pushed);

    animator.push(InputEvent::PointerMoved(Vec2::new(500.0, 450.0)));
    animator.frame(&mut surface, &mut || {});
    assert!(animator.field().particles()[0].position.y > pushed.y);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_edge_opacity_is_exact() {
    let config = FieldConfig::default();
    let field = ParticleField::from_particles(
        1000.0,
        1000.0,
        config,
        vec![still(100.0, 100.0), still(160.0, 100.0)],
    );

    let mut surface = Recorder::new();
    field.render(&mut surface);

    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), 1);
    let (from, to, color) = lines[0];
    assert_eq!(from, Vec2::new(100.0, 100.0));
    assert_eq!(to, Vec2::new(160.0, 100.0));
    assert_eq!(color.a, (1.0 - 60.0 / 120.0) * 0.3);
    assert_eq!((color.r, color.g, color.b), (0, 212, 255));
}

#[test]
fn test_no_edge_at_link_distance() {
    let config = FieldConfig::default();
    let field = ParticleField::from_particles(
        1000.0,
        1000.0,
        config,
        vec![still(100.0, 100.0), still(220.0, 100.0), still(100.0, 500.0)],
    );

    let mut surface = Recorder::new();
    field.render(&mut surface);
    assert_eq!(surface.circle_count(), 3);
    assert_eq!(surface.lines().count(), 0);
}

#[test]
fn test_frame_order_is_clear_circles_lines() {
    let mut animator = Animator::new(ParticleField::new(900.0, 700.0, FieldConfig::default(), 21));
    let mut surface = Recorder::new();
    animator.frame(&mut surface, &mut || {});

    let commands = surface.commands();
    assert_eq!(
        commands[0],
        DrawCommand::Clear {
            width: 900.0,
            height: 700.0
        }
    );

    let first_line = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Line { .. }))
        .unwrap_or(commands.len());
    assert!(commands[1..first_line]
        .iter()
        .all(|c| matches!(c, DrawCommand::Circle { .. })));
    assert!(commands[first_line..]
        .iter()
        .all(|c| matches!(c, DrawCommand::Line { .. })));
}

// ============================================================================
// Frame loop
// ============================================================================

#[test]
fn test_stop_ends_the_frame_chain() {
    let mut animator = Animator::new(ParticleField::new(600.0, 600.0, FieldConfig::default(), 8));
    let handle = animator.stop_handle();
    let mut surface = Recorder::new();
    let mut scheduled = 0;

    for _ in 0..3 {
        assert_eq!(
            animator.frame(&mut surface, &mut || scheduled += 1),
            FrameStatus::Continue
        );
    }
    handle.stop();
    surface.take();

    assert_eq!(
        animator.frame(&mut surface, &mut || scheduled += 1),
        FrameStatus::Stopped
    );
    assert_eq!(scheduled, 3);
    assert!(surface.commands().is_empty());
}

#[test]
fn test_resize_keeps_pointer() {
    let mut animator = Animator::new(ParticleField::new(600.0, 600.0, FieldConfig::default(), 8));
    let mut surface = Recorder::new();

    animator.push(InputEvent::PointerMoved(Vec2::new(10.0, 10.0)));
    animator.push(InputEvent::Resized {
        width: 1500.0,
        height: 1000.0,
    });
    animator.frame(&mut surface, &mut || {});

    assert_eq!(animator.field().len(), 100);
    assert_eq!(
        animator.field().pointer().position(),
        Some(Vec2::new(10.0, 10.0))
    );
}

// ============================================================================
// GPU shader
// ============================================================================

#[cfg(feature = "viewer")]
#[test]
fn test_shader_validates() {
    let module = naga::front::wgsl::parse_str(neurofield::gpu::SHADER_SOURCE)
        .unwrap_or_else(|e| panic!("WGSL parse error: {:?}", e));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {:?}", e));

    for entry in ["vs_circle", "fs_circle", "vs_line", "fs_line"] {
        assert!(
            module.entry_points.iter().any(|ep| ep.name == entry),
            "missing entry point {}",
            entry
        );
    }
}
