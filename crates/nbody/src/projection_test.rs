use approx::assert_relative_eq;

use crate::body::{Body, BodyId, Color};
use crate::config::SimulationConfig;
use crate::projection::{Projection, RenderMode};
use crate::state::NBodySystem;
use crate::vector::Vector2D;

fn screen() -> Projection {
    Projection::centered(1200.0, 1200.0, 350.0)
}

fn system_with(positions: &[[f64; 2]]) -> NBodySystem {
    let mut system = NBodySystem::new(SimulationConfig::default()).unwrap();
    for (i, position) in positions.iter().enumerate() {
        let body = Body::new(
            1.0,
            10.0 + i as f64,
            Color::rgb(i as u8, 0, 0),
            (*position).into(),
            Vector2D::zeros(),
        )
        .unwrap();
        system.push(body).unwrap();
    }
    system
}

#[test]
fn test_centered_offset() {
    assert_eq!(screen().offset, Vector2D::new(600.0, 600.0));
    assert_eq!(screen().scale, 350.0);
}

#[test]
fn test_linear() {
    let pixel = screen().linear(Vector2D::new(1.0, -0.5));
    assert_eq!(pixel, Vector2D::new(950.0, 425.0));
}

#[test]
fn test_log_scaled_keeps_direction() {
    let position = Vector2D::new(3.0, 4.0);
    let pixel = screen().log_scaled(position);
    let from_center = pixel - screen().offset;

    assert_relative_eq!(from_center.magnitude(), 6.0_f64.log10() * 350.0, max_relative = 1e-12);
    assert_relative_eq!(from_center.direction(), position.direction(), max_relative = 1e-12);
}

#[test]
fn test_log_scaled_origin_is_center() {
    assert_eq!(screen().log_scaled(Vector2D::zeros()), screen().offset);
}

#[test]
fn test_log_relative() {
    let reference = Vector2D::new(0.1, 0.0);
    let position = Vector2D::new(1.1, 0.0);

    // Reference placed linearly, then log10(1 + 1) * scale further out
    let pixel = screen().log_relative(position, reference);
    let expected_x = 600.0 + 0.1 * 350.0 + 2.0_f64.log10() * 350.0;
    assert_relative_eq!(pixel.x(), expected_x, max_relative = 1e-12);
    assert_eq!(pixel.y(), 600.0);

    // A body sitting on the reference lands where the reference is drawn
    assert_eq!(
        screen().log_relative(reference, reference),
        screen().linear(reference)
    );
}

#[test]
fn test_render_points_linear() {
    let system = system_with(&[[0.0, 0.0], [1.0, 0.0]]);
    let points = system.render_points(RenderMode::Linear, &screen());

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].id, BodyId(0));
    assert_eq!(points[0].pixel, Vector2D::new(600.0, 600.0));
    assert_eq!(points[1].pixel, Vector2D::new(950.0, 600.0));
    assert_eq!(points[1].radius, 11.0);
    assert_eq!(points[1].color, Color::rgb(1, 0, 0));
}

#[test]
fn test_render_points_log_relative_uses_first_body() {
    let system = system_with(&[[0.5, 0.0], [1.5, 0.0], [0.5, 9.0]]);
    let projection = screen();
    let points = system.render_points(RenderMode::LogRelative, &projection);

    let sun = Vector2D::new(0.5, 0.0);
    assert_eq!(points[0].pixel, projection.linear(sun));
    assert_eq!(
        points[1].pixel,
        projection.log_relative(Vector2D::new(1.5, 0.0), sun)
    );
    assert_eq!(
        points[2].pixel,
        projection.log_relative(Vector2D::new(0.5, 9.0), sun)
    );
}

#[test]
fn test_render_points_log() {
    let system = system_with(&[[0.0, 0.0], [0.0, 9.0]]);
    let points = system.render_points(RenderMode::Log, &screen());

    assert_eq!(points[0].pixel, screen().offset);
    assert_relative_eq!(points[1].pixel.y(), 600.0 + 350.0, max_relative = 1e-12);
}

#[test]
fn test_render_points_empty_system() {
    let system = system_with(&[]);
    assert!(system
        .render_points(RenderMode::LogRelative, &screen())
        .is_empty());
}

#[test]
fn test_render_mode_parsing() {
    for mode in [RenderMode::Linear, RenderMode::Log, RenderMode::LogRelative] {
        assert_eq!(mode.to_string().parse::<RenderMode>().unwrap(), mode);
    }
    assert!("polar".parse::<RenderMode>().is_err());
}
