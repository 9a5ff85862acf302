// src/curve.rs

use log::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::Point2;

// Samples are taken at t = i * step for i in 0..point_count - 1, which never
// reaches t = 1. The last point is then set to the end control point itself,
// so the output always holds exactly `point_count` points and ends on it
// bit for bit.
fn sample_steps(point_count: usize) -> Result<impl Iterator<Item = f32>> {
    if point_count < 2 {
        return Err(GeometryError::invalid(
            "point_count",
            format!("need at least 2 samples, got {point_count}"),
        ));
    }
    let step = 1.0 / (point_count as f64 - 1.0);
    Ok((0..point_count - 1).map(move |i| (i as f64 * step) as f32))
}

/// B(t) = (1−t)²·p1 + 2(1−t)t·p2 + t²·p3
pub fn quadratic_point(p1: Point2, p2: Point2, p3: Point2, t: f32) -> Point2 {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    Point2::new(
        a * p1.x + b * p2.x + c * p3.x,
        a * p1.y + b * p2.y + c * p3.y,
    )
}

/// B(t) = (1−t)³p0 + 3t(1−t)²p1 + 3t²(1−t)p2 + t³p3
pub fn cubic_point(p0: Point2, p1: Point2, p2: Point2, p3: Point2, t: f32) -> Point2 {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * t * mt * mt;
    let c = 3.0 * t * t * mt;
    let d = t * t * t;
    Point2::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

pub fn sample_quadratic_bezier(
    p1: Point2,
    p2: Point2,
    p3: Point2,
    point_count: usize,
) -> Result<Vec<Point2>> {
    let mut points: Vec<Point2> = sample_steps(point_count)?
        .map(|t| quadratic_point(p1, p2, p3, t))
        .collect();
    points.push(p3);
    trace!("quadratic bezier sampled {} points", points.len());
    Ok(points)
}

pub fn sample_cubic_bezier(
    p0: Point2,
    p1: Point2,
    p2: Point2,
    p3: Point2,
    point_count: usize,
) -> Result<Vec<Point2>> {
    let mut points: Vec<Point2> = sample_steps(point_count)?
        .map(|t| cubic_point(p0, p1, p2, p3, t))
        .collect();
    points.push(p3);
    trace!("cubic bezier sampled {} points", points.len());
    Ok(points)
}
