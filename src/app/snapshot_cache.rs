//! Baseline-Geometrien für driftfreie Rotation.
//!
//! Jeder Drag-Frame rotiert eine frische Kopie der Baseline, nie die bereits
//! rotierte Live-Geometrie. Der Cache gehört dem Aufrufer und überlebt Sessions;
//! beschrieben wird er ausschließlich über `snapshot` und `commit`.

use std::collections::HashMap;

use crate::core::{Feature, FeatureId, FeatureKey, Geometry};

/// Schlüssel einer Baseline.
///
/// Features mit ID werden über die ID gefunden, Features ohne ID über ihr
/// Store-Handle. Letzteres trägt nur, solange der Host das Feature nicht unter
/// neuem Handle neu einfügt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    /// Stabile Feature-ID
    Id(FeatureId),
    /// Store-Handle (Feature ohne ID)
    Handle(FeatureKey),
}

impl SnapshotKey {
    /// Ermittelt den Schlüssel für ein Feature.
    pub fn for_feature(key: FeatureKey, feature: &Feature) -> Self {
        match &feature.id {
            Some(id) => SnapshotKey::Id(id.clone()),
            None => SnapshotKey::Handle(key),
        }
    }
}

/// Persistenz-Map: Schlüssel → unrotierte Baseline.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    baselines: HashMap<SnapshotKey, Geometry>,
}

impl SnapshotCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert eine frische Kopie der Baseline.
    ///
    /// Ist noch keine Baseline vorhanden, wird `live` als Baseline übernommen.
    /// Eine vorhandene Baseline wird nie verändert.
    pub fn snapshot(&mut self, key: SnapshotKey, live: &Geometry) -> Geometry {
        self.baselines
            .entry(key)
            .or_insert_with(|| live.clone())
            .clone()
    }

    /// Überschreibt die Baseline mit der final rotierten Geometrie.
    pub fn commit(&mut self, key: SnapshotKey, geometry: Geometry) {
        self.baselines.insert(key, geometry);
    }

    /// Gibt die gespeicherte Baseline zurück.
    pub fn baseline(&self, key: &SnapshotKey) -> Option<&Geometry> {
        self.baselines.get(key)
    }

    /// Prüft, ob eine Baseline vorhanden ist.
    pub fn contains(&self, key: &SnapshotKey) -> bool {
        self.baselines.contains_key(key)
    }

    /// Verwirft eine einzelne Baseline (z.B. nach externer Geometrie-Änderung).
    pub fn remove(&mut self, key: &SnapshotKey) -> Option<Geometry> {
        self.baselines.remove(key)
    }

    /// Verwirft alle Baselines, etwa zwischen unabhängigen Bearbeitungssitzungen.
    pub fn clear(&mut self) {
        self.baselines.clear();
    }

    /// Anzahl gespeicherter Baselines.
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    /// Gibt `true` zurück, wenn keine Baseline gespeichert ist.
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    /// Iteriert über alle Baselines (Reihenfolge unbestimmt).
    pub fn iter(&self) -> impl Iterator<Item = (&SnapshotKey, &Geometry)> {
        self.baselines.iter()
    }
}
