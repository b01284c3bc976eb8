//! Vorgefertigte Aktivierungs-Bedingungen für `RotateOptions::condition`.

use super::PointerEvent;

/// Immer aktiv (Standard).
pub fn always(_event: &PointerEvent) -> bool {
    true
}

/// Nie aktiv.
pub fn never(_event: &PointerEvent) -> bool {
    false
}

/// Nur mit Shift und ohne weitere Modifier.
pub fn shift_key_only(event: &PointerEvent) -> bool {
    let m = event.modifiers;
    m.shift && !m.ctrl && !m.alt
}

/// Nur ohne Modifier.
pub fn no_modifier_keys(event: &PointerEvent) -> bool {
    let m = event.modifiers;
    !m.shift && !m.ctrl && !m.alt
}

/// Nur mit primärer Taste bzw. primärem Touch-Kontakt.
pub fn primary_action(event: &PointerEvent) -> bool {
    event.is_primary
}
