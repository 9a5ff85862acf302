// src/rendering_lib/mod.rs

pub mod renderer;
pub mod shader;
pub mod tessellate;
pub mod vertex;
