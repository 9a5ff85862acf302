// src/motion.rs
//
// Keyframe tracks for a spawned shape: a one-shot position track and an
// endlessly repeating rotation track. Non-linear timing is built from the
// Bezier samplers in `curve`.

use std::f32::consts::PI;

use rand::Rng;

use crate::config::{MotionStyle, SceneConfig};
use crate::curve::{sample_cubic_bezier, sample_quadratic_bezier};
use crate::error::{ensure_positive, GeometryError, Result};
use crate::generator::uniform_int;
use crate::geometry::Point2;

const EASING_SAMPLES: usize = 64;

pub const ROTATION_KEY_TIMES: [f32; 5] = [0.0, 0.1, 0.8, 0.9, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
}

impl Easing {
    /// Inner control points of the unit timing curve from (0,0) to (1,1).
    fn control_points(&self) -> Option<(Point2, Point2)> {
        match self {
            Easing::Linear => None,
            Easing::EaseIn => Some((Point2::new(0.42, 0.0), Point2::new(1.0, 1.0))),
            Easing::EaseOut => Some((Point2::new(0.0, 0.0), Point2::new(0.58, 1.0))),
        }
    }
}

/// A sampled timing curve, looked up by x with linear interpolation.
#[derive(Clone, Debug)]
pub struct TimingCurve {
    samples: Option<Vec<Point2>>,
}

impl TimingCurve {
    pub fn new(easing: Easing) -> Result<Self> {
        let samples = match easing.control_points() {
            None => None,
            Some((c1, c2)) => Some(sample_cubic_bezier(
                Point2::ZERO,
                c1,
                c2,
                Point2::new(1.0, 1.0),
                EASING_SAMPLES,
            )?),
        };
        Ok(Self { samples })
    }

    pub fn apply(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        let samples = match &self.samples {
            None => return x,
            Some(samples) => samples,
        };
        if x >= 1.0 {
            return samples[samples.len() - 1].y;
        }
        let idx = samples.partition_point(|p| p.x < x);
        if idx == 0 {
            return samples[0].y;
        }
        if idx >= samples.len() {
            return samples[samples.len() - 1].y;
        }
        let a = samples[idx - 1];
        let b = samples[idx];
        let span = b.x - a.x;
        if span <= f32::EPSILON {
            return b.y.clamp(0.0, 1.0);
        }
        (a.y + (b.y - a.y) * (x - a.x) / span).clamp(0.0, 1.0)
    }
}

/// Index of the keyframe segment containing `progress`.
fn segment_index(key_times: &[f32], progress: f32) -> usize {
    let idx = key_times.partition_point(|k| *k <= progress);
    idx.saturating_sub(1).min(key_times.len().saturating_sub(2))
}

fn local_progress(key_times: &[f32], segment: usize, progress: f32) -> f32 {
    let start = key_times[segment];
    let span = key_times[segment + 1] - start;
    if span <= 0.0 {
        1.0
    } else {
        ((progress - start) / span).clamp(0.0, 1.0)
    }
}

fn validate_key_times(key_times: &[f32], expected: usize) -> Result<()> {
    if key_times.len() != expected {
        return Err(GeometryError::invalid(
            "key_times",
            format!("expected {expected} key times, got {}", key_times.len()),
        ));
    }
    if key_times.first() != Some(&0.0) || key_times.last() != Some(&1.0) {
        return Err(GeometryError::invalid("key_times", "must start at 0 and end at 1"));
    }
    if key_times.windows(2).any(|w| w[1] < w[0]) {
        return Err(GeometryError::invalid("key_times", "must be non-decreasing"));
    }
    Ok(())
}

/// Key times from the y components of `cubic((0,0), (n,0.3), (0,0.95), (n,1))`.
pub fn cubic_key_times(count: usize) -> Result<Vec<f32>> {
    let n = count as f32;
    let samples = sample_cubic_bezier(
        Point2::ZERO,
        Point2::new(n, 0.3),
        Point2::new(0.0, 0.95),
        Point2::new(n, 1.0),
        count,
    )?;
    Ok(samples.into_iter().map(|p| p.y).collect())
}

/// Key times from the y components of `quad((0,0), (2n,0.05), (n,1))`.
pub fn quadratic_key_times(count: usize) -> Result<Vec<f32>> {
    let n = count as f32;
    let samples = sample_quadratic_bezier(
        Point2::ZERO,
        Point2::new(2.0 * n, 0.05),
        Point2::new(n, 1.0),
        count,
    )?;
    Ok(samples.into_iter().map(|p| p.y).collect())
}

/// `steps + 1` evenly spaced points from `start` to `end`.
pub fn stepped_path(start: Point2, end: Point2, steps: usize) -> Vec<Point2> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| start.lerp(&end, i as f32 / steps as f32))
        .collect()
}

#[derive(Clone, Debug)]
pub struct PositionTrack {
    values: Vec<Point2>,
    key_times: Vec<f32>,
    timings: Vec<TimingCurve>,
    duration: f32,
    autoreverse: bool,
}

impl PositionTrack {
    pub fn new(
        values: Vec<Point2>,
        key_times: Vec<f32>,
        easings: &[Easing],
        duration: f32,
    ) -> Result<Self> {
        if values.len() < 2 {
            return Err(GeometryError::invalid("values", "need at least 2 keyframes"));
        }
        validate_key_times(&key_times, values.len())?;
        if easings.len() != values.len() - 1 {
            return Err(GeometryError::invalid(
                "easings",
                format!("expected {} easings, got {}", values.len() - 1, easings.len()),
            ));
        }
        ensure_positive("duration", duration)?;
        let timings = easings
            .iter()
            .map(|e| TimingCurve::new(*e))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            values,
            key_times,
            timings,
            duration,
            autoreverse: false,
        })
    }

    /// Plays forward then backward; the total duration doubles.
    pub fn autoreversing(mut self) -> Self {
        self.autoreverse = true;
        self
    }

    /// Builds the track for `style`, drawing the rise and drift from `rng`.
    pub fn for_style<R: Rng + ?Sized>(
        style: MotionStyle,
        start: Point2,
        rng: &mut R,
        config: &SceneConfig,
    ) -> Result<Self> {
        let rise = uniform_int(rng, *config.rise.start(), *config.rise.end()) as f32;
        let drift = uniform_int(rng, *config.drift.start(), *config.drift.end()) as f32;
        let end = Point2::new(start.x + drift, start.y - rise);

        match style {
            MotionStyle::RiseAndReturn => Self::new(
                vec![start, end, start],
                vec![0.0, 0.5, 1.0],
                &[Easing::EaseOut, Easing::EaseIn],
                config.motion_duration,
            ),
            MotionStyle::EasedBounce => {
                let mut values = stepped_path(start, end, config.motion_steps);
                let back: Vec<Point2> = values.iter().rev().skip(1).copied().collect();
                values.extend(back);
                let key_times = cubic_key_times(values.len())?;
                let easings = vec![Easing::Linear; values.len() - 1];
                Self::new(values, key_times, &easings, config.motion_duration)
            }
            MotionStyle::QuadraticRise => {
                let values = stepped_path(start, end, config.motion_steps);
                let key_times = quadratic_key_times(values.len())?;
                let easings = vec![Easing::Linear; values.len() - 1];
                Ok(Self::new(values, key_times, &easings, config.motion_duration)?.autoreversing())
            }
        }
    }

    pub fn keyframes(&self) -> &[Point2] {
        &self.values
    }

    pub fn key_times(&self) -> &[f32] {
        &self.key_times
    }

    pub fn total_duration(&self) -> f32 {
        if self.autoreverse {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    pub fn is_complete(&self, elapsed: f32) -> bool {
        elapsed >= self.total_duration()
    }

    pub fn position_at(&self, elapsed: f32) -> Point2 {
        let mut progress = elapsed.max(0.0) / self.duration;
        if self.autoreverse && progress > 1.0 {
            progress = 2.0 - progress;
        }
        let progress = progress.clamp(0.0, 1.0);

        let segment = segment_index(&self.key_times, progress);
        let local = local_progress(&self.key_times, segment, progress);
        let eased = self.timings[segment].apply(local);
        self.values[segment].lerp(&self.values[segment + 1], eased)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RotationTrack {
    values: [f32; 5],
    duration: f32,
}

impl RotationTrack {
    pub fn new(counter_clockwise: bool, duration: f32) -> Result<Self> {
        ensure_positive("duration", duration)?;
        let mut values = [0.0, PI / 2.0, PI, PI * 3.0 / 2.0, PI * 2.0];
        if counter_clockwise {
            values.reverse();
        }
        Ok(Self { values, duration })
    }

    /// Even draws from `1..=10` spin the shape backwards.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, duration: f32) -> Result<Self> {
        let counter_clockwise = uniform_int(rng, 1, 10) % 2 == 0;
        Self::new(counter_clockwise, duration)
    }

    pub fn values(&self) -> &[f32; 5] {
        &self.values
    }

    pub fn angle_at(&self, elapsed: f32) -> f32 {
        let phase = (elapsed / self.duration).rem_euclid(1.0);
        let segment = segment_index(&ROTATION_KEY_TIMES, phase);
        let local = local_progress(&ROTATION_KEY_TIMES, segment, phase);
        self.values[segment] + (self.values[segment + 1] - self.values[segment]) * local
    }
}
