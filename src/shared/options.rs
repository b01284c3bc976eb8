//! Konfiguration der Rotations-Interaktion.
//!
//! `RotateOptions` enthält die Laufzeit-Konfiguration inkl. Prädikaten.
//! `RotateSettings` ist der serialisierbare Teil, der als TOML gespeichert wird.

use serde::{Deserialize, Serialize};

use crate::app::{conditions, PointerEvent};
use crate::core::{Feature, FeatureCollection, FeatureKey, LayerId};

/// Standard-Hit-Toleranz in Screen-Pixeln.
pub const DEFAULT_HIT_TOLERANCE_PX: f64 = 0.0;
/// Standard-Layer für den Pivot-Marker.
pub const DEFAULT_PIVOT_LAYER: &str = "rotate-pivot";

/// Aktivierungs-Bedingung auf dem Eingabe-Event.
pub type Condition = Box<dyn Fn(&PointerEvent) -> bool>;
/// Auswahl-Prädikat pro Feature und Layer.
pub type FeatureFilter = Box<dyn Fn(&Feature, Option<&LayerId>) -> bool>;

/// Erlaubte Layer für den Hit-Test.
#[derive(Default)]
pub enum LayerFilter {
    /// Alle Layer, auch Features ohne Layer
    #[default]
    All,
    /// Nur die aufgeführten Layer
    List(Vec<LayerId>),
    /// Layer, für die das Prädikat `true` liefert
    Predicate(Box<dyn Fn(&LayerId) -> bool>),
}

impl LayerFilter {
    /// Prüft einen Layer. Features ohne Layer passieren nur `All`.
    pub fn accepts(&self, layer: Option<&LayerId>) -> bool {
        match (self, layer) {
            (LayerFilter::All, _) => true,
            (_, None) => false,
            (LayerFilter::List(layers), Some(layer)) => layers.contains(layer),
            (LayerFilter::Predicate(predicate), Some(layer)) => predicate(layer),
        }
    }
}

/// Laufzeit-Konfiguration der Rotation.
pub struct RotateOptions {
    /// Aktivierungs-Bedingung für den Press (Standard: immer)
    pub condition: Condition,
    /// Feste Sammlung zu rotierender Features; ersetzt Layer/Filter
    pub features: Option<FeatureCollection>,
    /// Erlaubte Layer
    pub layers: LayerFilter,
    /// Zusätzliches Feature-Prädikat
    pub filter: Option<FeatureFilter>,
    /// Hit-Toleranz in Screen-Pixeln
    pub hit_tolerance: f64,
    /// Layer, auf dem der Pivot-Marker abgelegt wird
    pub pivot_layer: LayerId,
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self {
            condition: Box::new(conditions::always),
            features: None,
            layers: LayerFilter::All,
            filter: None,
            hit_tolerance: DEFAULT_HIT_TOLERANCE_PX,
            pivot_layer: LayerId::new(DEFAULT_PIVOT_LAYER),
        }
    }
}

impl RotateOptions {
    /// Übernimmt die serialisierbaren Werte aus `RotateSettings`.
    pub fn from_settings(settings: &RotateSettings) -> Self {
        let layers = match &settings.layers {
            Some(names) => LayerFilter::List(names.iter().map(LayerId::new).collect()),
            None => LayerFilter::All,
        };
        Self {
            layers,
            hit_tolerance: settings.hit_tolerance_px,
            pivot_layer: LayerId::new(settings.pivot_layer.clone()),
            ..Self::default()
        }
    }

    /// Setzt die Aktivierungs-Bedingung.
    pub fn with_condition(mut self, condition: impl Fn(&PointerEvent) -> bool + 'static) -> Self {
        self.condition = Box::new(condition);
        self
    }

    /// Setzt die feste Feature-Sammlung.
    pub fn with_features(mut self, features: FeatureCollection) -> Self {
        self.features = Some(features);
        self
    }

    /// Setzt den Layer-Filter.
    pub fn with_layers(mut self, layers: LayerFilter) -> Self {
        self.layers = layers;
        self
    }

    /// Setzt das Feature-Prädikat.
    pub fn with_filter(
        mut self,
        filter: impl Fn(&Feature, Option<&LayerId>) -> bool + 'static,
    ) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Setzt die Hit-Toleranz in Pixeln.
    pub fn with_hit_tolerance(mut self, hit_tolerance: f64) -> Self {
        self.hit_tolerance = hit_tolerance;
        self
    }

    /// Setzt den Pivot-Layer.
    pub fn with_pivot_layer(mut self, layer: impl Into<LayerId>) -> Self {
        self.pivot_layer = layer.into();
        self
    }

    /// Prüft, ob ein Feature per Hit-Test eine Rotation auslösen darf.
    ///
    /// Mit fester Sammlung zählt nur die Mitgliedschaft, sonst Layer und Filter.
    pub fn is_selectable(&self, key: FeatureKey, feature: &Feature) -> bool {
        if let Some(collection) = &self.features {
            return collection.contains(key);
        }
        let layer = feature.layer.as_ref();
        self.layers.accepts(layer) && self.filter.as_ref().is_none_or(|f| f(feature, layer))
    }
}

impl std::fmt::Debug for RotateOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotateOptions")
            .field("features", &self.features)
            .field("has_filter", &self.filter.is_some())
            .field("hit_tolerance", &self.hit_tolerance)
            .field("pivot_layer", &self.pivot_layer)
            .finish_non_exhaustive()
    }
}

// ── Persistierbare Einstellungen ────────────────────────────────────

/// Serialisierbarer Teil der Konfiguration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotateSettings {
    /// Hit-Toleranz in Screen-Pixeln
    #[serde(default = "default_hit_tolerance_px")]
    pub hit_tolerance_px: f64,
    /// Layer-Name für den Pivot-Marker
    #[serde(default = "default_pivot_layer")]
    pub pivot_layer: String,
    /// Erlaubte Layer (`None` = alle)
    #[serde(default)]
    pub layers: Option<Vec<String>>,
}

impl Default for RotateSettings {
    fn default() -> Self {
        Self {
            hit_tolerance_px: DEFAULT_HIT_TOLERANCE_PX,
            pivot_layer: DEFAULT_PIVOT_LAYER.to_owned(),
            layers: None,
        }
    }
}

/// Serde-Default für `hit_tolerance_px`.
fn default_hit_tolerance_px() -> f64 {
    DEFAULT_HIT_TOLERANCE_PX
}

/// Serde-Default für `pivot_layer`.
fn default_pivot_layer() -> String {
    DEFAULT_PIVOT_LAYER.to_owned()
}

impl RotateSettings {
    /// Parst Einstellungen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Lädt Einstellungen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(settings) => {
                    log::info!("Rotate-Einstellungen geladen aus: {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!(
                        "Rotate-Einstellungen fehlerhaft, verwende Standardwerte: {}",
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Rotate-Einstellungen gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Einstellungen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Rotate-Einstellungen gespeichert nach: {}", path.display());
        Ok(())
    }
}
