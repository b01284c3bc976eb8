//! Gemeinsame Test-Hilfen: Extent-basierter Host und Fixture.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use map_feature_rotate::app::HitFilter;
use map_feature_rotate::{
    FeatureKey, FeatureStore, Geometry, HostMap, PointerEvent, PointerEventKind, RotateContext,
    RotateEvent, RotateInteraction, SnapshotCache,
};

/// Host, bei dem Pixel und Kartenkoordinate identisch sind.
#[derive(Default)]
pub struct TestHost {
    /// Alle Cursor-Hinweise in Aufrufreihenfolge
    pub rotatable_hints: Vec<bool>,
}

impl HostMap for TestHost {
    fn hit_test(
        &self,
        features: &FeatureStore,
        pixel: DVec2,
        hit_tolerance_px: f64,
        accept: HitFilter<'_>,
    ) -> Option<FeatureKey> {
        features
            .iter()
            .rev()
            .find(|(key, feature)| {
                feature.geometry.extent().contains(pixel, hit_tolerance_px)
                    && accept(*key, feature)
            })
            .map(|(key, _)| key)
    }

    fn indicate_rotatable(&mut self, rotatable: bool) {
        self.rotatable_hints.push(rotatable);
    }
}

/// Store, Baseline-Cache und Host eines Tests.
#[derive(Default)]
pub struct Fixture {
    pub store: FeatureStore,
    pub cache: SnapshotCache,
    pub host: TestHost,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctx(&mut self) -> RotateContext<'_> {
        RotateContext::new(&mut self.store, &mut self.cache, &mut self.host)
    }

    pub fn down(&mut self, rotate: &mut RotateInteraction, x: f64, y: f64) -> bool {
        rotate.handle_event(&mut self.ctx(), &pointer(PointerEventKind::Down, x, y))
    }

    pub fn drag(&mut self, rotate: &mut RotateInteraction, x: f64, y: f64) -> bool {
        rotate.handle_event(&mut self.ctx(), &pointer(PointerEventKind::Drag, x, y))
    }

    pub fn up(&mut self, rotate: &mut RotateInteraction, x: f64, y: f64) -> bool {
        rotate.handle_event(&mut self.ctx(), &pointer(PointerEventKind::Up, x, y))
    }

    pub fn hover(&mut self, rotate: &mut RotateInteraction, x: f64, y: f64) -> bool {
        rotate.handle_event(&mut self.ctx(), &pointer(PointerEventKind::Move, x, y))
    }

    pub fn geometry(&self, key: FeatureKey) -> Geometry {
        self.store
            .geometry(key)
            .cloned()
            .expect("Feature sollte im Store liegen")
    }
}

pub fn pointer(kind: PointerEventKind, x: f64, y: f64) -> PointerEvent {
    let p = DVec2::new(x, y);
    PointerEvent::new(kind, p, p)
}

/// Achsenparalleles Quadrat mit Mittelpunkt und halber Kantenlänge.
pub fn square(center: DVec2, half: f64) -> Geometry {
    Geometry::rectangle(center - DVec2::splat(half), center + DVec2::splat(half))
}

/// Unregelmäßiges Polygon, dessen Koordinaten sich nicht exakt darstellen lassen.
pub fn irregular_polygon() -> Geometry {
    Geometry::Polygon(vec![vec![
        DVec2::new(0.1, 0.3),
        DVec2::new(7.7, 1.0 / 3.0),
        DVec2::new(5.9, 4.2),
        DVec2::new(1.0 / 7.0, 3.3),
        DVec2::new(0.1, 0.3),
    ]])
}

/// Zeichnet alle Rotate-Events auf.
pub fn record_events(rotate: &mut RotateInteraction) -> Rc<RefCell<Vec<RotateEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    rotate.on(move |event| sink.borrow_mut().push(event.clone()));
    events
}
