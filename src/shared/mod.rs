//! Geteilte Konfiguration der Rotation.

pub mod options;

pub use options::{
    Condition, FeatureFilter, LayerFilter, RotateOptions, RotateSettings,
    DEFAULT_HIT_TOLERANCE_PX, DEFAULT_PIVOT_LAYER,
};
