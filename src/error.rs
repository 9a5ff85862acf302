// src/error.rs

use crate::pool::InstanceId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GeometryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GeometryError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Rejects zero, negative and non-finite lengths.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid(name, format!("must be > 0, got {value}")))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("no unused colour left in the palette")]
    PaletteExhausted,
    #[error("instance {0} is not live")]
    UnknownInstance(InstanceId),
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
}
