//! Zustand einer laufenden Drag-Session.

use crate::core::{Coordinate, FeatureCollection, FeatureKey};

/// Quelle der zu rotierenden Features.
#[derive(Debug, Clone)]
pub enum ActiveFeatures {
    /// Vom Aufrufer geteilte, feste Sammlung (wird pro Frame neu gelesen)
    Collection(FeatureCollection),
    /// Nur das beim Press getroffene Feature
    Single(FeatureKey),
}

impl ActiveFeatures {
    /// Aktuelle Handles in Rotationsreihenfolge.
    pub fn keys(&self) -> Vec<FeatureKey> {
        match self {
            ActiveFeatures::Collection(collection) => collection.keys(),
            ActiveFeatures::Single(key) => vec![*key],
        }
    }
}

/// Transienter Zustand zwischen Press und Release.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Fester Drehpunkt der Session
    pub pivot: Coordinate,
    /// Zeigerposition beim Press
    pub start_coordinate: Coordinate,
    /// Zuletzt verarbeitete Zeigerposition
    pub last_coordinate: Coordinate,
    /// Azimut vom Pivot zur Press-Position (Grad)
    pub start_azimuth: f64,
    /// Rotierte Features
    pub features: ActiveFeatures,
}

impl DragSession {
    /// Öffnet eine Session; `last_coordinate` startet auf der Press-Position.
    pub fn new(
        pivot: Coordinate,
        start_coordinate: Coordinate,
        start_azimuth: f64,
        features: ActiveFeatures,
    ) -> Self {
        Self {
            pivot,
            start_coordinate,
            last_coordinate: start_coordinate,
            start_azimuth,
            features,
        }
    }
}
