//! Core-Domänentypen: Geometrien, Features, Feature-Store, Azimut- und Pivot-Mathematik.

pub mod azimuth;
pub mod feature;
pub mod feature_store;
pub mod geometry;
pub mod pivot;

pub use azimuth::{azimuth, rotation_delta};
pub use feature::{Feature, FeatureId, LayerId};
pub use feature_store::{FeatureCollection, FeatureKey, FeatureStore};
pub use geometry::{Coordinate, Extent, Geometry};
pub use pivot::{center_of, PivotError};
