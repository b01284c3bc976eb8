//! Features: Geometrie plus optionale Identität und Layer-Zugehörigkeit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Geometry;

/// Stabile, vom Host vergebene Feature-Identität.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// Numerische ID
    Num(u64),
    /// Text-ID
    Str(String),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Num(n) => write!(f, "{n}"),
            FeatureId::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for FeatureId {
    fn from(value: u64) -> Self {
        FeatureId::Num(value)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::Str(value.to_owned())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        FeatureId::Str(value)
    }
}

/// Name eines Karten-Layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub String);

impl LayerId {
    /// Erstellt eine Layer-ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Gibt den Layer-Namen zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ein Karten-Feature.
///
/// Features ohne `id` lassen sich innerhalb einer Drag-Session driftfrei rotieren,
/// ihre Baseline kann aber nicht über Sessions hinweg wiedergefunden werden,
/// wenn der Host sie neu einfügt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Optionale stabile ID
    pub id: Option<FeatureId>,
    /// Aktuelle Geometrie
    pub geometry: Geometry,
    /// Layer, auf dem das Feature liegt
    pub layer: Option<LayerId>,
}

impl Feature {
    /// Erstellt ein Feature ohne ID und Layer.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: None,
            geometry,
            layer: None,
        }
    }

    /// Setzt die ID.
    pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Setzt den Layer.
    pub fn with_layer(mut self, layer: impl Into<LayerId>) -> Self {
        self.layer = Some(layer.into());
        self
    }
}
