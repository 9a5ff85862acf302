// src/rendering_lib/tessellate.rs
//
// Turns shape outlines into convex point loops that can be drawn as a
// triangle fan from their first point.

use std::f32::consts::TAU;

use geometric_shapes::{ArcDescriptor, Outline, Point2};
use glam::{Affine2, Vec2};

const MIN_ARC_SEGMENTS: usize = 8;
const MAX_ARC_SEGMENTS: usize = 96;
/// Target chord length in view points.
const ARC_CHORD_LENGTH: f32 = 3.0;

pub fn arc_segments(arc: &ArcDescriptor) -> usize {
    let length = arc.radius * arc.sweep();
    ((length / ARC_CHORD_LENGTH).ceil() as usize).clamp(MIN_ARC_SEGMENTS, MAX_ARC_SEGMENTS)
}

/// Flattens an arc at draw time. Pie slices start with the centre so the
/// fan covers the slice.
pub fn flatten_arc(arc: &ArcDescriptor) -> Vec<Point2> {
    let segments = arc_segments(arc);
    let mut sweep = arc.end_angle - arc.start_angle;
    if arc.clockwise && sweep < 0.0 {
        sweep += TAU;
    } else if !arc.clockwise && sweep > 0.0 {
        sweep -= TAU;
    }

    let full = arc.is_full_circle();
    // a full circle repeats its first point at the end; drop it
    let last = if full { segments - 1 } else { segments };

    let mut points = Vec::with_capacity(last + 2);
    if arc.close_with_chord && !full {
        points.push(arc.center);
    }
    points.extend(
        (0..=last).map(|i| arc.point_at(arc.start_angle + sweep * i as f32 / segments as f32)),
    );
    points
}

pub fn outline_points(outline: &Outline) -> Vec<Point2> {
    match outline {
        Outline::Polygon(points) => points.clone(),
        Outline::Arc(arc) => flatten_arc(arc),
    }
}

/// Rotates about the shape's local origin, then moves it to `position`.
pub fn place(points: &[Point2], position: Point2, angle: f32) -> Vec<[f32; 2]> {
    let transform = Affine2::from_angle_translation(angle, Vec2::new(position.x, position.y));
    points
        .iter()
        .map(|p| transform.transform_point2(Vec2::new(p.x, p.y)).to_array())
        .collect()
}
