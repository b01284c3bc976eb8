//! Host-eigene Feature-Tabelle und geteilte Feature-Sammlungen.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use super::{Feature, Geometry};

/// Handle eines Features innerhalb eines `FeatureStore`.
///
/// Handles werden nie wiederverwendet, solange der Store lebt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey(pub u64);

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Alle Features der Karte, in Einfügereihenfolge.
///
/// Der Store gehört dem Host. Die Rotation liest und ersetzt nur Geometrien
/// bestehender Features; einzige Ausnahme ist der synthetische Pivot-Marker.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    features: IndexMap<FeatureKey, Feature>,
    next_key: u64,
}

impl FeatureStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Feature hinzu und gibt sein Handle zurück.
    pub fn insert(&mut self, feature: Feature) -> FeatureKey {
        let key = FeatureKey(self.next_key);
        self.next_key += 1;
        self.features.insert(key, feature);
        key
    }

    /// Entfernt ein Feature.
    pub fn remove(&mut self, key: FeatureKey) -> Option<Feature> {
        self.features.shift_remove(&key)
    }

    /// Gibt das Feature zum Handle zurück.
    pub fn get(&self, key: FeatureKey) -> Option<&Feature> {
        self.features.get(&key)
    }

    /// Gibt das Feature zum Handle mutable zurück.
    pub fn get_mut(&mut self, key: FeatureKey) -> Option<&mut Feature> {
        self.features.get_mut(&key)
    }

    /// Prüft, ob das Handle existiert.
    pub fn contains(&self, key: FeatureKey) -> bool {
        self.features.contains_key(&key)
    }

    /// Gibt die Geometrie eines Features zurück.
    pub fn geometry(&self, key: FeatureKey) -> Option<&Geometry> {
        self.features.get(&key).map(|f| &f.geometry)
    }

    /// Ersetzt die Geometrie eines Features. `false` wenn das Handle unbekannt ist.
    pub fn set_geometry(&mut self, key: FeatureKey, geometry: Geometry) -> bool {
        match self.features.get_mut(&key) {
            Some(feature) => {
                feature.geometry = geometry;
                true
            }
            None => false,
        }
    }

    /// Anzahl der Features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iteriert in Einfügereihenfolge (zuletzt eingefügt = oben).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (FeatureKey, &Feature)> {
        self.features.iter().map(|(k, f)| (*k, f))
    }
}

/// Geteilte, geordnete Menge von Feature-Handles.
///
/// Klone teilen sich denselben Inhalt: Änderungen des Aufrufers sind in einer
/// laufenden Drag-Session sofort sichtbar.
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    keys: Rc<RefCell<IndexSet<FeatureKey>>>,
}

impl FeatureCollection {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Handle hinzu. `false` wenn es bereits enthalten war.
    pub fn insert(&self, key: FeatureKey) -> bool {
        self.keys.borrow_mut().insert(key)
    }

    /// Entfernt ein Handle unter Beibehaltung der Reihenfolge.
    pub fn remove(&self, key: FeatureKey) -> bool {
        self.keys.borrow_mut().shift_remove(&key)
    }

    /// Prüft, ob das Handle enthalten ist.
    pub fn contains(&self, key: FeatureKey) -> bool {
        self.keys.borrow().contains(&key)
    }

    /// Leert die Sammlung.
    pub fn clear(&self) {
        self.keys.borrow_mut().clear();
    }

    /// Anzahl der Handles.
    pub fn len(&self) -> usize {
        self.keys.borrow().len()
    }

    /// Gibt `true` zurück, wenn die Sammlung leer ist.
    pub fn is_empty(&self) -> bool {
        self.keys.borrow().is_empty()
    }

    /// Momentaufnahme aller Handles in Einfügereihenfolge.
    pub fn keys(&self) -> Vec<FeatureKey> {
        self.keys.borrow().iter().copied().collect()
    }
}

impl FromIterator<FeatureKey> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = FeatureKey>>(iter: I) -> Self {
        Self {
            keys: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}
