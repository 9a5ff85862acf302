// src/config.rs

use std::ops::RangeInclusive;

use crate::error::SceneError;
use crate::geometry::Point2;
use crate::palette::Palette;

/// How a spawned shape travels before it is recycled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionStyle {
    /// Up to a random peak and back, ease-out then ease-in.
    #[default]
    RiseAndReturn,
    /// Stepped path up and back with key times from a cubic remap.
    EasedBounce,
    /// Stepped path up with key times from a quadratic remap, played back in reverse.
    QuadraticRise,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub population: usize,
    /// Seconds for one position track.
    pub motion_duration: f32,
    /// Seconds for one full turn; rotation repeats forever.
    pub rotation_duration: f32,
    pub spawn_offset_from_bottom: f32,
    pub rise: RangeInclusive<i32>,
    pub drift: RangeInclusive<i32>,
    /// Intermediate steps for the stepped motion styles.
    pub motion_steps: usize,
    pub motion_style: MotionStyle,
    pub palette: Palette,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            population: 4,
            motion_duration: 1.0,
            rotation_duration: 2.0,
            spawn_offset_from_bottom: 200.0,
            rise: 150..=320,
            drift: -40..=40,
            motion_steps: 20,
            motion_style: MotionStyle::RiseAndReturn,
            palette: Palette::default(),
        }
    }
}

impl SceneConfig {
    /// Spawn origin for a view of the given size: horizontally centred,
    /// `spawn_offset_from_bottom` above the bottom edge.
    pub fn origin_for_view(&self, width: f32, height: f32) -> Point2 {
        Point2::new(width / 2.0, height - self.spawn_offset_from_bottom)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.population == 0 {
            return Err(SceneError::InvalidConfig("population must be at least 1".into()));
        }
        if self.population > self.palette.len() {
            return Err(SceneError::InvalidConfig(format!(
                "population {} exceeds the {} palette colours",
                self.population,
                self.palette.len()
            )));
        }
        if !(self.motion_duration > 0.0) || !(self.rotation_duration > 0.0) {
            return Err(SceneError::InvalidConfig("durations must be positive".into()));
        }
        if self.motion_steps == 0 {
            return Err(SceneError::InvalidConfig("motion_steps must be at least 1".into()));
        }
        if self.rise.is_empty() || self.drift.is_empty() {
            return Err(SceneError::InvalidConfig("rise and drift ranges must not be empty".into()));
        }
        Ok(())
    }
}
