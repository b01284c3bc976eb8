//! Interaktions-Schicht: Zustandsmaschine, Drag-Session, Baseline-Cache und Events.

pub mod conditions;
mod events;
mod host;
mod interaction;
mod session;
mod snapshot_cache;

pub use events::{
    ListenerId, Modifiers, PointerEvent, PointerEventKind, RotateEvent, RotateEventKind,
    RotateListeners,
};
pub use host::{HitFilter, HostMap, RotateContext};
pub use interaction::RotateInteraction;
pub use session::{ActiveFeatures, DragSession};
pub use snapshot_cache::{SnapshotCache, SnapshotKey};
