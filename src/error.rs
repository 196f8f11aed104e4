use thiserror::Error;

/// Top-level error type for the surface generation pipeline.
#[derive(Debug, Error)]
pub enum SolidifyError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Floor(#[from] FloorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors related to the host scene model.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors raised while refreshing the tracked floor surface.
///
/// These are transient: the scheduler logs and discards them for the
/// current firing only.
#[derive(Debug, Error)]
pub enum FloorError {
    #[error("tracked point unavailable: {0}")]
    TrackedPointUnavailable(String),

    #[error("tracked point has a non-finite position")]
    NonFinitePosition,

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`SolidifyError`].
pub type Result<T> = std::result::Result<T, SolidifyError>;
