// src/lib.rs

pub mod config;
pub mod curve;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod motion;
pub mod palette;
pub mod pool;

pub use config::{MotionStyle, SceneConfig};
pub use curve::{sample_cubic_bezier, sample_quadratic_bezier};
pub use error::{GeometryError, SceneError};
pub use generator::{uniform_int, ShapeGenerator};
pub use geometry::{ArcDescriptor, Outline, Point2, ShapeKind, ShapeOutline};
pub use pool::{InstanceId, ShapePlacement, ShapeScene};
