//! Schnittstelle zum Host (Karte/Viewport) und Kontext pro Event.

use glam::DVec2;

use super::SnapshotCache;
use crate::core::{Feature, FeatureKey, FeatureStore};

/// Filter, den die Rotation beim Hit-Test an den Host übergibt.
pub type HitFilter<'a> = &'a dyn Fn(FeatureKey, &Feature) -> bool;

/// Fähigkeiten der Karte, die die Rotation benötigt.
pub trait HostMap {
    /// Sucht das oberste Feature unter `pixel`, das `accept` erfüllt.
    ///
    /// `hit_tolerance_px` vergrößert den Trefferbereich in Screen-Pixeln.
    fn hit_test(
        &self,
        features: &FeatureStore,
        pixel: DVec2,
        hit_tolerance_px: f64,
        accept: HitFilter<'_>,
    ) -> Option<FeatureKey>;

    /// Zeigt an, ob der Zeiger über einem rotierbaren Feature steht (Cursor o.ä.).
    fn indicate_rotatable(&mut self, rotatable: bool);
}

/// Alles, was ein Event-Handler vom Aufrufer braucht.
pub struct RotateContext<'a> {
    /// Feature-Tabelle des Hosts (inkl. Pivot-Marker-Layer)
    pub features: &'a mut FeatureStore,
    /// Persistenz-Map der Baselines
    pub snapshots: &'a mut SnapshotCache,
    /// Karte für Hit-Tests und Cursor-Hinweise
    pub host: &'a mut dyn HostMap,
}

impl<'a> RotateContext<'a> {
    /// Bündelt die Kollaborateure für einen Handler-Aufruf.
    pub fn new(
        features: &'a mut FeatureStore,
        snapshots: &'a mut SnapshotCache,
        host: &'a mut dyn HostMap,
    ) -> Self {
        Self {
            features,
            snapshots,
            host,
        }
    }
}
