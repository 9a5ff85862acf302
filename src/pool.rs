// src/pool.rs
//
// Host-side instance pool: keeps a constant number of shapes alive, each
// with its own outline, colour and motion. Completion of a position track is
// reported by `tick` and fed back through `on_motion_complete`, which
// recycles the instance.

use log::{debug, info};
use rand::Rng;

use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::generator::ShapeGenerator;
use crate::geometry::{Point2, ShapeOutline};
use crate::motion::{PositionTrack, RotationTrack};
use crate::palette::{Color, ColorPool};

pub type InstanceId = u32;

#[derive(Clone, Debug)]
pub struct ShapeInstance {
    pub id: InstanceId,
    pub shape: ShapeOutline,
    pub color_index: usize,
    pub color: Color,
    pub position: PositionTrack,
    pub rotation: RotationTrack,
    pub elapsed: f32,
    completed: bool,
}

impl ShapeInstance {
    pub fn current_position(&self) -> Point2 {
        self.position.position_at(self.elapsed)
    }

    pub fn current_angle(&self) -> f32 {
        self.rotation.angle_at(self.elapsed)
    }
}

/// Snapshot of one live shape for the renderer.
#[derive(Clone, Debug)]
pub struct ShapePlacement<'a> {
    pub id: InstanceId,
    pub shape: &'a ShapeOutline,
    pub color: Color,
    pub position: Point2,
    pub angle: f32,
}

pub struct ShapeScene<R: Rng> {
    config: SceneConfig,
    rng: R,
    colors: ColorPool,
    instances: Vec<ShapeInstance>,
    next_id: InstanceId,
    origin: Point2,
}

impl<R: Rng> ShapeScene<R> {
    pub fn new(config: SceneConfig, rng: R, origin: Point2) -> Result<Self, SceneError> {
        config.validate()?;
        let colors = ColorPool::new(config.palette.clone());
        Ok(Self {
            config,
            rng,
            colors,
            instances: Vec::new(),
            next_id: 0,
            origin,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Affects spawns from now on; live shapes keep their tracks.
    pub fn set_origin(&mut self, origin: Point2) {
        self.origin = origin;
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[ShapeInstance] {
        &self.instances
    }

    pub fn get(&self, id: InstanceId) -> Option<&ShapeInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Fills the scene up to the configured population.
    pub fn run(&mut self) -> Result<(), SceneError> {
        while self.instances.len() < self.config.population {
            self.spawn()?;
        }
        info!("scene running with {} shapes", self.instances.len());
        Ok(())
    }

    pub fn spawn(&mut self) -> Result<InstanceId, SceneError> {
        let shape = ShapeGenerator::random_outline(&mut self.rng)?;
        let rotation = RotationTrack::random(&mut self.rng, self.config.rotation_duration)?;
        let position = PositionTrack::for_style(
            self.config.motion_style,
            self.origin,
            &mut self.rng,
            &self.config,
        )?;
        let color_index = self
            .colors
            .acquire(&mut self.rng)
            .ok_or(SceneError::PaletteExhausted)?;
        let color = self
            .colors
            .palette()
            .get(color_index)
            .ok_or(SceneError::PaletteExhausted)?;

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        debug!(
            "spawned shape {} ({}) with colour {}",
            id,
            shape.kind.name(),
            color_index
        );
        self.instances.push(ShapeInstance {
            id,
            shape,
            color_index,
            color,
            position,
            rotation,
            elapsed: 0.0,
            completed: false,
        });
        Ok(id)
    }

    /// Advances every live shape by `dt` seconds and returns the ids whose
    /// position track finished during this step. Membership is unchanged.
    pub fn tick(&mut self, dt: f32) -> Vec<InstanceId> {
        let dt = dt.max(0.0);
        let mut finished = Vec::new();
        for instance in &mut self.instances {
            instance.elapsed += dt;
            if !instance.completed && instance.position.is_complete(instance.elapsed) {
                instance.completed = true;
                finished.push(instance.id);
            }
        }
        finished
    }

    /// Removes the finished instance, frees its colour and spawns its
    /// replacement. Returns the replacement's id.
    pub fn on_motion_complete(&mut self, id: InstanceId) -> Result<InstanceId, SceneError> {
        let removed = self.remove(id)?;
        let replacement = self.spawn()?;
        debug!("recycled shape {} as {}", removed.id, replacement);
        Ok(replacement)
    }

    /// Drops an in-flight instance without spawning a replacement.
    pub fn cancel(&mut self, id: InstanceId) -> Result<(), SceneError> {
        self.remove(id).map(|_| ())
    }

    pub fn stop(&mut self) {
        for instance in self.instances.drain(..) {
            self.colors.release(instance.color_index);
        }
        info!("scene stopped");
    }

    fn remove(&mut self, id: InstanceId) -> Result<ShapeInstance, SceneError> {
        let index = self
            .instances
            .iter()
            .position(|i| i.id == id)
            .ok_or(SceneError::UnknownInstance(id))?;
        let instance = self.instances.swap_remove(index);
        self.colors.release(instance.color_index);
        Ok(instance)
    }

    pub fn placements(&self) -> impl Iterator<Item = ShapePlacement<'_>> {
        self.instances.iter().map(|instance| ShapePlacement {
            id: instance.id,
            shape: &instance.shape,
            color: instance.color,
            position: instance.current_position(),
            angle: instance.current_angle(),
        })
    }
}
