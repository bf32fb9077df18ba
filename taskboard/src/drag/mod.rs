//! Drag-and-drop: gesture tracking and release reconciliation

mod gesture;
mod reconcile;

pub use gesture::{DragGesture, DragPhase};
pub use reconcile::DragEnd;
