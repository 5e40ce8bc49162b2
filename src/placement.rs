//! Positions handed to the 3D views. The globe and the carousel only ever
//! receive `(label, position)` pairs computed here.

use crate::eventos::coordinates::Coordinates;
use crate::eventos::model::Event;
use std::f64::consts::PI;

/// Markers float slightly above a unit globe
pub const MARKER_RADIUS: f64 = 1.02;

const MAX_FACE_WIDTH: f64 = 240.0;
const FACE_OVERLAP: f64 = 1.1;
const RING_SPREAD: f64 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobeMarker<'a> {
    pub event_id: &'a str,
    pub label: &'a str,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSlot {
    /// Rotation around the vertical axis, in degrees
    pub angle: f64,
    /// Distance from the ring's centre
    pub translate_z: f64,
    pub face_width: f64,
}

pub fn globe_position(coordinates: Coordinates, radius: f64) -> Vec3 {
    let phi = (90.0 - coordinates.lat).to_radians();
    let theta = (coordinates.lng + 180.0).to_radians();

    Vec3 {
        x: -(radius * phi.sin() * theta.cos()),
        y: radius * phi.cos(),
        z: radius * phi.sin() * theta.sin(),
    }
}

pub fn globe_markers(events: &[Event], radius: f64) -> Vec<GlobeMarker<'_>> {
    events
        .iter()
        .map(|event| GlobeMarker {
            event_id: &event.id,
            label: &event.title,
            position: globe_position(event.coordinates, radius),
        })
        .collect()
}

/// Evenly spreads `count` cards around a ring whose circumference is
/// `cylinder_width`.
pub fn carousel_ring(count: usize, cylinder_width: f64) -> Vec<RingSlot> {
    if count == 0 {
        return Vec::new();
    }

    let faces = count as f64;
    let face_width = (cylinder_width / faces * FACE_OVERLAP).min(MAX_FACE_WIDTH);
    let translate_z = cylinder_width / (2.0 * PI) * RING_SPREAD;

    (0..count)
        .map(|i| RingSlot {
            angle: i as f64 * (360.0 / faces),
            translate_z,
            face_width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPSILON, "{} != {}", a, b);
    }

    #[test_log::test]
    fn north_pole_should_be_on_top() {
        let position = globe_position(Coordinates::new(90.0, 0.0), 1.0);

        assert_close(position.x, 0.0);
        assert_close(position.y, 1.0);
        assert_close(position.z, 0.0);
    }

    #[test_log::test]
    fn null_island_should_face_positive_x() {
        let position = globe_position(Coordinates::new(0.0, 0.0), 2.0);

        assert_close(position.x, 2.0);
        assert_close(position.y, 0.0);
        assert_close(position.z, 0.0);
    }

    #[test_log::test]
    fn positions_should_lie_on_the_sphere() {
        let position = globe_position(Coordinates::new(-23.5505, -46.6333), MARKER_RADIUS);
        let length = (position.x.powi(2) + position.y.powi(2) + position.z.powi(2)).sqrt();

        assert_close(length, MARKER_RADIUS);
        assert!(position.y < 0.0, "southern hemisphere should be below the equator");
    }

    #[test_log::test]
    fn ring_should_split_full_turn_evenly() {
        let slots = carousel_ring(4, 1800.0);

        let angles: Vec<f64> = slots.iter().map(|slot| slot.angle).collect();

        assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
        assert_close(slots[0].translate_z, 1800.0 / (2.0 * PI) * 1.3);
    }

    #[test_log::test]
    fn face_width_should_be_capped() {
        assert_close(carousel_ring(2, 1800.0)[0].face_width, 240.0);
        assert_close(carousel_ring(20, 1800.0)[0].face_width, 99.0);
    }

    #[test_log::test]
    fn empty_ring_should_have_no_slots() {
        assert!(carousel_ring(0, 1800.0).is_empty());
    }
}
