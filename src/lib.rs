//! Zeiger-gesteuerte Rotation von Karten-Features.
//!
//! Press auf ein Feature (oder den Pivot-Marker), Drag, Release: alle aktiven
//! Features drehen sich gemeinsam um den Mittelpunkt ihres Begrenzungsrahmens.
//! Jeder Drag-Frame rotiert eine unveränderte Baseline, damit wiederholte
//! Frames keine Rundungsfehler aufaddieren.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    ActiveFeatures, DragSession, HostMap, ListenerId, Modifiers, PointerEvent, PointerEventKind,
    RotateContext, RotateEvent, RotateEventKind, RotateInteraction, SnapshotCache, SnapshotKey,
};
pub use core::{
    azimuth, center_of, rotation_delta, Coordinate, Extent, Feature, FeatureCollection,
    FeatureId, FeatureKey, FeatureStore, Geometry, LayerId, PivotError,
};
pub use shared::{LayerFilter, RotateOptions, RotateSettings};
