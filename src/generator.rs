// src/generator.rs

use std::f32::consts::PI;
use std::ops::RangeInclusive;

use log::trace;
use rand::Rng;

use crate::error::{ensure_positive, GeometryError, Result};
use crate::geometry::{degrees_to_radians, ArcDescriptor, Outline, Point2, ShapeKind, ShapeOutline};

pub const CIRCLE_RADIUS: RangeInclusive<i32> = 15..=25;
pub const SEGMENT_RADIUS: RangeInclusive<i32> = 15..=25;
pub const SEGMENT_SWEEP_DEGREES: RangeInclusive<i32> = 30..=180;
pub const RECTANGLE_WIDTH: RangeInclusive<i32> = 25..=45;
pub const RECTANGLE_HEIGHT: RangeInclusive<i32> = 15..=30;
pub const TRIANGLE_RADIUS: RangeInclusive<i32> = 13..=35;
pub const QUARTER_RADIUS: RangeInclusive<i32> = 17..=35;
pub const POLYGON_RADIUS: RangeInclusive<i32> = 13..=20;
pub const POLYGON_FACETS: RangeInclusive<i32> = 5..=7;

/// Uniform integer over the inclusive range `[low, high]`.
///
/// A degenerate or inverted range yields `low`.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if low >= high {
        return low;
    }
    rng.gen_range(low..=high)
}

fn draw<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<i32>) -> i32 {
    uniform_int(rng, *range.start(), *range.end())
}

impl ShapeKind {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
        let last = ShapeKind::ALL.len() as i32 - 1;
        ShapeKind::ALL[uniform_int(rng, 0, last) as usize]
    }
}

pub struct ShapeGenerator;

impl ShapeGenerator {
    /// Vertices of a regular polygon inscribed in the circle of `radius`
    /// around `center`, starting at `angle_deg` and stepping by
    /// `360 / facets_count` degrees.
    pub fn polygon_points(
        facets_count: usize,
        angle_deg: f32,
        radius: f32,
        center: Point2,
    ) -> Result<Vec<Point2>> {
        if facets_count < 1 {
            return Err(GeometryError::invalid("facets_count", "must be >= 1"));
        }
        ensure_positive("radius", radius)?;

        let start = degrees_to_radians(angle_deg);
        let points = (0..facets_count)
            .map(|n| {
                let angle_rad = start + 2.0 * PI * n as f32 / facets_count as f32;
                Point2::new(
                    center.x - radius * angle_rad.cos(),
                    center.y - radius * angle_rad.sin(),
                )
            })
            .collect();
        Ok(points)
    }

    pub fn rectangle_points(width: f32, height: f32) -> Result<Vec<Point2>> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        Ok(vec![
            Point2::ZERO,
            Point2::new(0.0, height),
            Point2::new(width, height),
            Point2::new(width, 0.0),
        ])
    }

    pub fn circle(radius: f32) -> Result<ArcDescriptor> {
        ensure_positive("radius", radius)?;
        Ok(ArcDescriptor {
            center: Point2::ZERO,
            radius,
            start_angle: 0.0,
            end_angle: 2.0 * PI,
            clockwise: true,
            close_with_chord: false,
        })
    }

    /// Pie slice from angle 0 to `end_angle` (radians), closed through the centre.
    pub fn segment(radius: f32, end_angle: f32) -> Result<ArcDescriptor> {
        ensure_positive("radius", radius)?;
        Ok(ArcDescriptor {
            center: Point2::ZERO,
            radius,
            start_angle: 0.0,
            end_angle,
            clockwise: true,
            close_with_chord: true,
        })
    }

    pub fn outline<R: Rng + ?Sized>(kind: ShapeKind, rng: &mut R) -> Result<ShapeOutline> {
        let outline = match kind {
            ShapeKind::Circle => {
                let radius = draw(rng, &CIRCLE_RADIUS) as f32;
                Outline::Arc(Self::circle(radius)?)
            }
            ShapeKind::Segment => {
                let radius = draw(rng, &SEGMENT_RADIUS) as f32;
                let sweep = degrees_to_radians(draw(rng, &SEGMENT_SWEEP_DEGREES) as f32);
                Outline::Arc(Self::segment(radius, sweep)?)
            }
            ShapeKind::Rectangle => {
                let width = draw(rng, &RECTANGLE_WIDTH) as f32;
                let height = draw(rng, &RECTANGLE_HEIGHT) as f32;
                Outline::Polygon(Self::rectangle_points(width, height)?)
            }
            ShapeKind::Triangle => {
                let radius = draw(rng, &TRIANGLE_RADIUS) as f32;
                Outline::Polygon(Self::polygon_points(3, 0.0, radius, Point2::ZERO)?)
            }
            ShapeKind::QuarterArcPolygon => {
                let radius = draw(rng, &QUARTER_RADIUS) as f32;
                Outline::Polygon(Self::polygon_points(4, 0.0, radius, Point2::ZERO)?)
            }
            ShapeKind::Polygon => {
                let facets = draw(rng, &POLYGON_FACETS) as usize;
                let radius = draw(rng, &POLYGON_RADIUS) as f32;
                Outline::Polygon(Self::polygon_points(facets, 0.0, radius, Point2::ZERO)?)
            }
        };
        trace!("generated {} outline: {:?}", kind.name(), outline);
        Ok(ShapeOutline { kind, outline })
    }

    pub fn random_outline<R: Rng + ?Sized>(rng: &mut R) -> Result<ShapeOutline> {
        let kind = ShapeKind::random(rng);
        Self::outline(kind, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    use crate::geometry::polygon_area;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn min_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn square_starts_on_negative_x_axis() {
        let points = ShapeGenerator::polygon_points(4, 0.0, 10.0, Point2::ZERO).unwrap();
        assert_eq!(points.len(), 4);
        assert!((points[0].x + 10.0).abs() < 1e-5);
        assert!(points[0].y.abs() < 1e-5);
        for pair in points.windows(2) {
            let a = pair[0].y.atan2(pair[0].x);
            let b = pair[1].y.atan2(pair[1].x);
            let mut delta = (b - a).abs();
            if delta > PI {
                delta = 2.0 * PI - delta;
            }
            assert!((delta - PI / 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn vertices_lie_on_the_circle() {
        let center = Point2::new(12.5, -3.0);
        for facets in 3..=12 {
            let points = ShapeGenerator::polygon_points(facets, 17.0, 21.0, center).unwrap();
            assert_eq!(points.len(), facets);
            for p in &points {
                assert!((p.distance(&center) - 21.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn start_angle_rotates_first_vertex() {
        let points = ShapeGenerator::polygon_points(3, 90.0, 5.0, Point2::ZERO).unwrap();
        assert!(points[0].x.abs() < 1e-5);
        assert!((points[0].y + 5.0).abs() < 1e-5);
    }

    #[test]
    fn invalid_polygon_parameters() {
        assert!(matches!(
            ShapeGenerator::polygon_points(0, 0.0, 10.0, Point2::ZERO),
            Err(GeometryError::InvalidParameter { name: "facets_count", .. })
        ));
        assert!(matches!(
            ShapeGenerator::polygon_points(3, 0.0, 0.0, Point2::ZERO),
            Err(GeometryError::InvalidParameter { name: "radius", .. })
        ));
        assert!(ShapeGenerator::polygon_points(3, 0.0, f32::NAN, Point2::ZERO).is_err());
        assert!(ShapeGenerator::rectangle_points(-1.0, 4.0).is_err());
        assert!(ShapeGenerator::rectangle_points(4.0, 0.0).is_err());
        assert!(ShapeGenerator::circle(-2.0).is_err());
    }

    #[test]
    fn uniform_int_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = uniform_int(&mut rng, -40, 40);
            assert!((-40..=40).contains(&v));
        }
        assert_eq!(uniform_int(&mut rng, 5, 5), 5);
        assert_eq!(uniform_int(&mut min_rng(), 150, 320), 150);
        assert_eq!(uniform_int(&mut min_rng(), -40, 40), -40);
    }

    #[test]
    fn minimum_rng_polygon_is_five_sided_radius_thirteen() {
        let shape = ShapeGenerator::outline(ShapeKind::Polygon, &mut min_rng()).unwrap();
        assert_eq!(shape.kind, ShapeKind::Polygon);
        let points = shape.outline.vertices().unwrap();
        assert_eq!(points.len(), 5);
        for p in points {
            assert!((p.distance(&Point2::ZERO) - 13.0).abs() < 1e-4);
        }
    }

    #[test]
    fn minimum_rng_picks_first_kind() {
        assert_eq!(ShapeKind::random(&mut min_rng()), ShapeKind::Circle);
        let shape = ShapeGenerator::random_outline(&mut min_rng()).unwrap();
        let arc = shape.outline.arc().unwrap();
        assert_eq!(arc.radius, 15.0);
        assert!(arc.is_full_circle());
        assert!(!arc.close_with_chord);
    }

    #[test]
    fn minimum_rng_segment_and_rectangle() {
        let segment = ShapeGenerator::outline(ShapeKind::Segment, &mut min_rng()).unwrap();
        let arc = segment.outline.arc().unwrap();
        assert_eq!(arc.radius, 15.0);
        assert_eq!(arc.start_angle, 0.0);
        assert!((arc.end_angle - PI / 6.0).abs() < 1e-6);
        assert!(arc.close_with_chord);

        let rect = ShapeGenerator::outline(ShapeKind::Rectangle, &mut min_rng()).unwrap();
        assert_eq!(
            rect.outline.vertices().unwrap(),
            &[
                Point2::ZERO,
                Point2::new(0.0, 15.0),
                Point2::new(25.0, 15.0),
                Point2::new(25.0, 0.0)
            ]
        );
    }

    /// Circumradius of a regular polygon centred on the origin. Also checks
    /// that every vertex sits on the circle and the shoelace area matches
    /// `n·r²·sin(2π/n)/2`, which only holds for a simple, evenly spaced loop.
    fn regular_radius(points: &[Point2]) -> i32 {
        let radius = points[0].distance(&Point2::ZERO);
        for p in points {
            assert!((p.distance(&Point2::ZERO) - radius).abs() < 1e-3);
        }
        let n = points.len() as f32;
        let expected = n * radius * radius * (2.0 * PI / n).sin() / 2.0;
        assert!((polygon_area(points) - expected).abs() < expected * 1e-4);
        radius.round() as i32
    }

    #[test]
    fn every_kind_is_drawn_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        let mut largest: HashMap<&'static str, i32> = HashMap::new();
        let mut record = |key: &'static str, value: i32, range: &RangeInclusive<i32>| {
            assert!(range.contains(&value), "{key} = {value} outside {range:?}");
            let entry = largest.entry(key).or_insert(value);
            *entry = (*entry).max(value);
        };

        for _ in 0..20_000 {
            let shape = ShapeGenerator::random_outline(&mut rng).unwrap();
            seen.insert(shape.kind);
            match (&shape.kind, &shape.outline) {
                (ShapeKind::Circle, Outline::Arc(arc)) => {
                    assert!(arc.is_full_circle());
                    record("circle radius", arc.radius as i32, &CIRCLE_RADIUS);
                }
                (ShapeKind::Segment, Outline::Arc(arc)) => {
                    record("segment radius", arc.radius as i32, &SEGMENT_RADIUS);
                    let degrees = arc.end_angle.to_degrees().round() as i32;
                    record("segment sweep", degrees, &SEGMENT_SWEEP_DEGREES);
                }
                (ShapeKind::Rectangle, Outline::Polygon(points)) => {
                    assert_eq!(points.len(), 4);
                    let (width, height) = (points[2].x, points[2].y);
                    record("rectangle width", width as i32, &RECTANGLE_WIDTH);
                    record("rectangle height", height as i32, &RECTANGLE_HEIGHT);
                    assert_eq!(polygon_area(points), width * height);
                }
                (ShapeKind::Triangle, Outline::Polygon(points)) => {
                    assert_eq!(points.len(), 3);
                    record("triangle radius", regular_radius(points), &TRIANGLE_RADIUS);
                }
                (ShapeKind::QuarterArcPolygon, Outline::Polygon(points)) => {
                    assert_eq!(points.len(), 4);
                    record("quarter radius", regular_radius(points), &QUARTER_RADIUS);
                }
                (ShapeKind::Polygon, Outline::Polygon(points)) => {
                    record("polygon facets", points.len() as i32, &POLYGON_FACETS);
                    record("polygon radius", regular_radius(points), &POLYGON_RADIUS);
                }
                (kind, outline) => panic!("{kind:?} produced {outline:?}"),
            }
        }
        assert_eq!(seen.len(), ShapeKind::ALL.len());

        for (key, range) in [
            ("circle radius", CIRCLE_RADIUS),
            ("segment radius", SEGMENT_RADIUS),
            ("segment sweep", SEGMENT_SWEEP_DEGREES),
            ("rectangle width", RECTANGLE_WIDTH),
            ("rectangle height", RECTANGLE_HEIGHT),
            ("triangle radius", TRIANGLE_RADIUS),
            ("quarter radius", QUARTER_RADIUS),
            ("polygon facets", POLYGON_FACETS),
            ("polygon radius", POLYGON_RADIUS),
        ] {
            assert_eq!(largest.get(key), Some(range.end()), "{key} never reached its maximum");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                ShapeGenerator::random_outline(&mut a).unwrap(),
                ShapeGenerator::random_outline(&mut b).unwrap()
            );
        }
    }
}
