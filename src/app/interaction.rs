//! Rotations-Interaktion: Press → Drag → Release als Zustandsmaschine.
//!
//! `Idle` nimmt nur Press-Events an, `Dragging` nur Drag- und Release-Events.
//! Jeder Drag-Frame rotiert die Baseline aus dem `SnapshotCache` absolut um den
//! Winkel zwischen Start- und aktuellem Azimut; der Release schreibt die finalen
//! Geometrien als neue Baselines zurück.

use glam::DVec2;

use super::{
    ActiveFeatures, DragSession, ListenerId, PointerEvent, PointerEventKind, RotateContext,
    RotateEvent, RotateEventKind, RotateListeners, SnapshotKey,
};
use crate::core::{
    azimuth, center_of, rotation_delta, Coordinate, Feature, FeatureKey, FeatureStore, Geometry,
    PivotError,
};
use crate::shared::RotateOptions;

/// Zeiger-gesteuerte Rotation von Features um einen gemeinsamen Pivot.
#[derive(Debug)]
pub struct RotateInteraction {
    options: RotateOptions,
    session: Option<DragSession>,
    listeners: RotateListeners,
    pivot_marker: Option<FeatureKey>,
}

impl RotateInteraction {
    /// Erstellt die Interaktion im Zustand `Idle`.
    pub fn new(options: RotateOptions) -> Self {
        Self {
            options,
            session: None,
            listeners: RotateListeners::default(),
            pivot_marker: None,
        }
    }

    /// Aktuelle Konfiguration.
    pub fn options(&self) -> &RotateOptions {
        &self.options
    }

    /// Hit-Toleranz in Screen-Pixeln.
    pub fn hit_tolerance(&self) -> f64 {
        self.options.hit_tolerance
    }

    /// Setzt die Hit-Toleranz in Screen-Pixeln.
    pub fn set_hit_tolerance(&mut self, hit_tolerance: f64) {
        self.options.hit_tolerance = hit_tolerance;
    }

    /// Registriert einen Listener für `Start`/`Rotating`/`End`.
    pub fn on(&mut self, listener: impl FnMut(&RotateEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Entfernt einen Listener.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Anzahl registrierter Listener.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// `true` solange eine Drag-Session offen ist.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Offene Drag-Session.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Handle des aktuellen Pivot-Markers im Feature-Store.
    pub fn pivot_marker(&self) -> Option<FeatureKey> {
        self.pivot_marker
    }

    /// Verteilt ein Zeiger-Event nach Art. Gibt zurück, ob es verbraucht wurde.
    pub fn handle_event(&mut self, ctx: &mut RotateContext<'_>, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.handle_down(ctx, event),
            PointerEventKind::Drag => self.handle_drag(ctx, event),
            PointerEventKind::Up => self.handle_up(ctx, event),
            PointerEventKind::Move => self.handle_move(ctx, event),
        }
    }

    /// `Idle → Dragging`: öffnet eine Session, wenn Bedingung und Hit-Test passen.
    pub fn handle_down(&mut self, ctx: &mut RotateContext<'_>, event: &PointerEvent) -> bool {
        if self.session.is_some() {
            log::debug!("Press während laufender Rotation ignoriert");
            return false;
        }
        if !(self.options.condition)(event) {
            return false;
        }
        let Some(hit) = self.hit_test(ctx, event.pixel) else {
            return false;
        };

        let features = match &self.options.features {
            Some(collection) => ActiveFeatures::Collection(collection.clone()),
            None => ActiveFeatures::Single(hit),
        };
        let pivot = match self.compute_pivot(ctx.features, &features) {
            Ok(pivot) => pivot,
            Err(e) => {
                log::warn!("Rotation nicht gestartet (Treffer {hit}): {e}");
                return false;
            }
        };

        let start_azimuth = azimuth(pivot, event.coordinate);
        let session = DragSession::new(pivot, event.coordinate, start_azimuth, features);
        let keys = rotatable_keys(&session.features, self.pivot_marker);
        log::debug!(
            "Rotation gestartet: {} Features, Pivot ({:.3}, {:.3}), Start-Azimut {:.3}°",
            keys.len(),
            pivot.x,
            pivot.y,
            start_azimuth
        );

        self.session = Some(session);
        self.emit(RotateEventKind::Start, keys, event.coordinate, event);
        true
    }

    /// `Dragging → Dragging`: rotiert alle aktiven Features absolut ab Baseline.
    pub fn handle_drag(&mut self, ctx: &mut RotateContext<'_>, event: &PointerEvent) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let current_azimuth = azimuth(session.pivot, event.coordinate);
        let delta = rotation_delta(session.start_azimuth, current_azimuth);
        let keys = rotatable_keys(&session.features, self.pivot_marker);

        for &key in &keys {
            let Some(feature) = ctx.features.get(key) else {
                continue;
            };
            let snapshot_key = SnapshotKey::for_feature(key, feature);
            let mut geometry = ctx.snapshots.snapshot(snapshot_key, &feature.geometry);
            geometry.rotate(delta, session.pivot);
            ctx.features.set_geometry(key, geometry);
        }

        session.last_coordinate = event.coordinate;
        let start = session.start_coordinate;
        log::trace!(
            "Rotation: Azimut {:.3}°, Delta {:.6} rad",
            current_azimuth,
            delta
        );

        self.emit(RotateEventKind::Rotating, keys, start, event);
        true
    }

    /// `Dragging → Idle`: übernimmt die finalen Geometrien als neue Baselines.
    pub fn handle_up(&mut self, ctx: &mut RotateContext<'_>, event: &PointerEvent) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        let keys = rotatable_keys(&session.features, self.pivot_marker);
        let mut committed = 0usize;
        for &key in &keys {
            let Some(feature) = ctx.features.get(key) else {
                continue;
            };
            ctx.snapshots.commit(
                SnapshotKey::for_feature(key, feature),
                feature.geometry.clone(),
            );
            committed += 1;
        }
        log::debug!("Rotation beendet: {committed} Baselines übernommen");

        self.emit(RotateEventKind::End, keys, session.start_coordinate, event);
        true
    }

    /// Hover im Zustand `Idle`: meldet dem Host, ob ein rotierbares Feature unter dem Zeiger liegt.
    ///
    /// Verbraucht das Event nie.
    pub fn handle_move(&mut self, ctx: &mut RotateContext<'_>, event: &PointerEvent) -> bool {
        if self.session.is_some() {
            return false;
        }
        let over_feature = self.hit_test(ctx, event.pixel).is_some();
        ctx.host.indicate_rotatable(over_feature);
        false
    }

    /// Berechnet den Pivot der festen Sammlung neu und ersetzt den Pivot-Marker.
    ///
    /// Der alte Marker wird immer entfernt. Ohne feste Sammlung oder ohne
    /// verwertbare Geometrie entsteht kein neuer Marker.
    pub fn refresh_pivot(&mut self, features: &mut FeatureStore) -> Option<Coordinate> {
        if let Some(old) = self.pivot_marker.take() {
            features.remove(old);
        }
        let collection = self.options.features.as_ref()?;

        let active = ActiveFeatures::Collection(collection.clone());
        let center = match self.compute_pivot(features, &active) {
            Ok(center) => center,
            Err(e) => {
                log::debug!("Kein Pivot-Marker: {e}");
                return None;
            }
        };

        let marker =
            Feature::new(Geometry::Point(center)).with_layer(self.options.pivot_layer.clone());
        let key = features.insert(marker);
        self.pivot_marker = Some(key);
        log::debug!(
            "Pivot-Marker {key} auf Layer '{}' bei ({:.3}, {:.3})",
            self.options.pivot_layer,
            center.x,
            center.y
        );
        Some(center)
    }

    fn hit_test(&self, ctx: &RotateContext<'_>, pixel: DVec2) -> Option<FeatureKey> {
        let marker = self.pivot_marker;
        let options = &self.options;
        let accept = |key: FeatureKey, feature: &Feature| {
            Some(key) == marker || options.is_selectable(key, feature)
        };
        ctx.host
            .hit_test(&*ctx.features, pixel, options.hit_tolerance, &accept)
    }

    fn compute_pivot(
        &self,
        store: &FeatureStore,
        features: &ActiveFeatures,
    ) -> Result<Coordinate, PivotError> {
        let keys = rotatable_keys(features, self.pivot_marker);
        center_of(keys.iter().filter_map(|key| store.geometry(*key)))
    }

    fn emit(
        &mut self,
        kind: RotateEventKind,
        features: Vec<FeatureKey>,
        start_coordinate: Coordinate,
        input: &PointerEvent,
    ) {
        let event = RotateEvent {
            kind,
            features,
            coordinate: input.coordinate,
            start_coordinate,
            input: *input,
        };
        self.listeners.emit(&event);
    }
}

/// Aktive Handles ohne den Pivot-Marker.
fn rotatable_keys(features: &ActiveFeatures, pivot_marker: Option<FeatureKey>) -> Vec<FeatureKey> {
    features
        .keys()
        .into_iter()
        .filter(|key| Some(*key) != pivot_marker)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{HitFilter, HostMap, SnapshotCache};
    use crate::core::FeatureCollection;
    use approx::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Host mit Pixel = Kartenkoordinate und Extent-basiertem Hit-Test.
    #[derive(Default)]
    struct ExtentHost {
        rotatable: Option<bool>,
    }

    impl HostMap for ExtentHost {
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
            self.rotatable = Some(rotatable);
        }
    }

    fn event(kind: PointerEventKind, x: f64, y: f64) -> PointerEvent {
        let p = DVec2::new(x, y);
        PointerEvent::new(kind, p, p)
    }

    fn square(center: DVec2, half: f64) -> Feature {
        Feature::new(Geometry::rectangle(
            center - DVec2::splat(half),
            center + DVec2::splat(half),
        ))
    }

    #[test]
    fn press_on_empty_map_is_not_consumed() {
        let mut store = FeatureStore::new();
        let mut cache = SnapshotCache::new();
        let mut host = ExtentHost::default();
        let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);
        let mut rotate = RotateInteraction::new(RotateOptions::default());

        assert!(!rotate.handle_down(&mut ctx, &event(PointerEventKind::Down, 0.0, 0.0)));
        assert!(!rotate.is_dragging());
    }

    #[test]
    fn condition_gates_press() {
        let mut store = FeatureStore::new();
        store.insert(square(DVec2::ZERO, 10.0));
        let mut cache = SnapshotCache::new();
        let mut host = ExtentHost::default();
        let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);
        let mut rotate =
            RotateInteraction::new(RotateOptions::default().with_condition(|e| e.modifiers.alt));

        assert!(!rotate.handle_down(&mut ctx, &event(PointerEventKind::Down, 5.0, 0.0)));
        assert!(!rotate.is_dragging());
    }

    #[test]
    fn press_drag_release_rotates_hit_feature() {
        let mut store = FeatureStore::new();
        let key = store.insert(square(DVec2::ZERO, 10.0).with_id(1u64));
        let mut cache = SnapshotCache::new();
        let mut host = ExtentHost::default();
        let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);
        let mut rotate = RotateInteraction::new(RotateOptions::default());

        assert!(rotate.handle_event(&mut ctx, &event(PointerEventKind::Down, 10.0, 0.0)));
        let session = rotate.session().expect("Session erwartet");
        assert_eq!(session.pivot, DVec2::ZERO);
        assert_eq!(session.start_azimuth, 90.0);

        assert!(rotate.handle_event(&mut ctx, &event(PointerEventKind::Drag, 0.0, 10.0)));
        assert!(rotate.handle_event(&mut ctx, &event(PointerEventKind::Up, 0.0, 10.0)));
        assert!(!rotate.is_dragging());

        let mut expected = Geometry::rectangle(DVec2::splat(-10.0), DVec2::splat(10.0));
        expected.rotate(rotation_delta(90.0, 0.0), DVec2::ZERO);
        let geometry = ctx.features.geometry(key).expect("Feature vorhanden");
        assert_eq!(geometry, &expected);
    }

    #[test]
    fn drag_and_release_without_session_are_ignored() {
        let mut store = FeatureStore::new();
        let mut cache = SnapshotCache::new();
        let mut host = ExtentHost::default();
        let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);
        let mut rotate = RotateInteraction::new(RotateOptions::default());

        assert!(!rotate.handle_drag(&mut ctx, &event(PointerEventKind::Drag, 1.0, 1.0)));
        assert!(!rotate.handle_up(&mut ctx, &event(PointerEventKind::Up, 1.0, 1.0)));
        assert!(ctx.snapshots.is_empty());
    }

    #[test]
    fn hover_reports_rotatable_features() {
        let mut store = FeatureStore::new();
        store.insert(square(DVec2::ZERO, 1.0).with_layer("parcels"));
        let mut cache = SnapshotCache::new();
        let mut host = ExtentHost::default();
        let mut rotate = RotateInteraction::new(RotateOptions::default().with_filter(
            |_, layer| layer.is_some_and(|l| l.as_str() == "parcels"),
        ));

        {
            let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);
            assert!(!rotate.handle_move(&mut ctx, &event(PointerEventKind::Move, 0.5, 0.5)));
        }
        assert_eq!(host.rotatable, Some(true));

        {
            let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);
            rotate.handle_move(&mut ctx, &event(PointerEventKind::Move, 5.0, 5.0));
        }
        assert_eq!(host.rotatable, Some(false));
    }

    #[test]
    fn hit_tolerance_accessors_feed_hit_test() {
        let mut store = FeatureStore::new();
        store.insert(square(DVec2::ZERO, 1.0));
        let mut cache = SnapshotCache::new();
        let mut host = ExtentHost::default();
        let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);
        let mut rotate = RotateInteraction::new(RotateOptions::default());

        assert_eq!(rotate.hit_tolerance(), 0.0);
        assert!(!rotate.handle_down(&mut ctx, &event(PointerEventKind::Down, 3.0, 0.0)));

        rotate.set_hit_tolerance(2.5);
        assert_eq!(rotate.hit_tolerance(), 2.5);
        assert!(rotate.handle_down(&mut ctx, &event(PointerEventKind::Down, 3.0, 0.0)));
    }

    #[test]
    fn refresh_pivot_places_marker_at_collection_center() {
        let mut store = FeatureStore::new();
        let a = store.insert(square(DVec2::new(0.0, 0.0), 1.0));
        let b = store.insert(square(DVec2::new(10.0, 4.0), 1.0));
        let collection: FeatureCollection = [a, b].into_iter().collect();
        let mut rotate = RotateInteraction::new(
            RotateOptions::default()
                .with_features(collection.clone())
                .with_pivot_layer("pivots"),
        );

        let center = rotate.refresh_pivot(&mut store).expect("Pivot erwartet");
        assert_eq!(center, DVec2::new(5.0, 2.0));

        let first = rotate.pivot_marker().expect("Marker erwartet");
        let marker = store.get(first).expect("Marker im Store");
        assert_eq!(marker.geometry, Geometry::Point(center));
        assert_eq!(marker.layer.as_ref().map(|l| l.as_str()), Some("pivots"));

        collection.remove(b);
        let center = rotate.refresh_pivot(&mut store).expect("Pivot erwartet");
        assert_eq!(center, DVec2::ZERO);
        assert!(!store.contains(first));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn press_on_pivot_marker_rotates_collection() {
        let mut store = FeatureStore::new();
        let a = store.insert(square(DVec2::new(-5.0, 0.0), 1.0));
        let b = store.insert(square(DVec2::new(5.0, 0.0), 1.0));
        let collection: FeatureCollection = [a, b].into_iter().collect();
        let mut rotate =
            RotateInteraction::new(RotateOptions::default().with_features(collection));
        rotate.refresh_pivot(&mut store);
        let marker = rotate.pivot_marker().expect("Marker erwartet");

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        rotate.on(move |e| sink.borrow_mut().push(e.clone()));

        let mut cache = SnapshotCache::new();
        let mut host = ExtentHost::default();
        let mut ctx = RotateContext::new(&mut store, &mut cache, &mut host);

        // Marker liegt bei (0, 0): Start-Azimut 0°, Drag nach Osten = 90°
        assert!(rotate.handle_down(&mut ctx, &event(PointerEventKind::Down, 0.0, 0.0)));
        assert!(rotate.handle_drag(&mut ctx, &event(PointerEventKind::Drag, 3.0, 0.0)));

        let center_a = ctx.features.geometry(a).expect("a").extent().center();
        assert_abs_diff_eq!(center_a.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(center_a.y, -5.0, epsilon = 1e-9);
        assert_eq!(
            ctx.features.geometry(marker),
            Some(&Geometry::Point(DVec2::ZERO))
        );

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].features, vec![a, b]);
        assert_eq!(events[1].kind, RotateEventKind::Rotating);
    }
}
