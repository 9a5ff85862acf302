// src/geometry.rs

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(&self, other: &Point2, t: f32) -> Point2 {
        Point2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<Point2> for [f32; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

/// `radians = degrees * π / 180`
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    QuarterArcPolygon,
    Polygon,
    Segment,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::QuarterArcPolygon,
        ShapeKind::Polygon,
        ShapeKind::Segment,
        ShapeKind::Rectangle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::QuarterArcPolygon => "quarter",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Segment => "segment",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

/// Parametric circular arc. Angles are in radians.
///
/// `close_with_chord` closes the path with a straight line back to `center`
/// (pie slice); otherwise the arc is drawn on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcDescriptor {
    pub center: Point2,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub clockwise: bool,
    pub close_with_chord: bool,
}

impl ArcDescriptor {
    pub fn point_at(&self, angle: f32) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Swept angle, always non-negative.
    pub fn sweep(&self) -> f32 {
        (self.end_angle - self.start_angle).abs()
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep() >= 2.0 * PI - 1e-6
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Closed polygon, vertices in path order.
    Polygon(Vec<Point2>),
    Arc(ArcDescriptor),
}

impl Outline {
    pub fn vertices(&self) -> Option<&[Point2]> {
        match self {
            Outline::Polygon(points) => Some(points),
            Outline::Arc(_) => None,
        }
    }

    pub fn arc(&self) -> Option<&ArcDescriptor> {
        match self {
            Outline::Arc(arc) => Some(arc),
            Outline::Polygon(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeOutline {
    pub kind: ShapeKind,
    pub outline: Outline,
}

/// Shoelace area of a closed point loop.
pub fn polygon_area(points: &[Point2]) -> f32 {
    let count = points.len();
    if count < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..count {
        let j = (i + 1) % count;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area.abs() / 2.0
}
