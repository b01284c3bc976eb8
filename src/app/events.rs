//! Eingabe-Events vom Host und Lifecycle-Events der Rotation.

use glam::DVec2;

use crate::core::{Coordinate, FeatureKey};

/// Art eines Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Taste gedrückt
    Down,
    /// Bewegung mit gedrückter Taste
    Drag,
    /// Taste losgelassen
    Up,
    /// Bewegung ohne gedrückte Taste (Hover)
    Move,
}

/// Zustand der Modifier-Tasten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift gedrückt
    pub shift: bool,
    /// Ctrl/Cmd gedrückt
    pub ctrl: bool,
    /// Alt gedrückt
    pub alt: bool,
}

/// Zeiger-Event in Pixel- und Kartenkoordinaten.
///
/// Die Umrechnung Pixel → Karte erledigt der Host vor der Übergabe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event-Art
    pub kind: PointerEventKind,
    /// Position in Screen-Pixeln (für Hit-Tests)
    pub pixel: DVec2,
    /// Position in Kartenkoordinaten
    pub coordinate: Coordinate,
    /// Modifier-Tasten
    pub modifiers: Modifiers,
    /// Primäre Maustaste bzw. primärer Touch-Kontakt
    pub is_primary: bool,
}

impl PointerEvent {
    /// Erstellt ein Event ohne Modifier mit primärer Taste.
    pub fn new(kind: PointerEventKind, pixel: DVec2, coordinate: Coordinate) -> Self {
        Self {
            kind,
            pixel,
            coordinate,
            modifiers: Modifiers::default(),
            is_primary: true,
        }
    }

    /// Setzt die Modifier-Tasten.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Lifecycle-Phase einer Rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateEventKind {
    /// Session geöffnet
    Start,
    /// Drag-Frame verarbeitet
    Rotating,
    /// Session beendet
    End,
}

/// Benachrichtigung an Subscriber; wird nur ausgeliefert, nie gespeichert.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateEvent {
    /// Lifecycle-Phase
    pub kind: RotateEventKind,
    /// Aktive Features zum Zeitpunkt des Events
    pub features: Vec<FeatureKey>,
    /// Aktuelle Zeigerposition
    pub coordinate: Coordinate,
    /// Zeigerposition beim Session-Start
    pub start_coordinate: Coordinate,
    /// Auslösendes Eingabe-Event
    pub input: PointerEvent,
}

/// ID eines registrierten Listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&RotateEvent)>;

/// Ein gemeinsamer Kanal für alle Rotate-Events.
#[derive(Default)]
pub struct RotateListeners {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl RotateListeners {
    /// Registriert einen Listener; Auslieferung in Registrierungsreihenfolge.
    pub fn subscribe(&mut self, listener: impl FnMut(&RotateEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Entfernt einen Listener. `false` wenn die ID unbekannt ist.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Anzahl registrierter Listener.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Gibt `true` zurück, wenn kein Listener registriert ist.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Liefert ein Event an alle Listener aus.
    pub fn emit(&mut self, event: &RotateEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for RotateListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotateListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
