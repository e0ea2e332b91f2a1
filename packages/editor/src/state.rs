//! Drag state machine.
//!
//! ```text
//! Idle -> Dragging   (pointer down inside the canvas)
//! Dragging -> Dragging (pointer move, live overlay only)
//! Dragging -> Idle   (pointer up, height committed to the document)
//! ```
//!
//! The active target only exists inside `Dragging`. The status line further
//! splits `Dragging` into `initialized` (no move yet) and `dragging`.

use crate::{ListenerHandle, Point};
use std::fmt;
use webshape_model::BlockId;

#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn status(&self) -> DragStatus {
        match self {
            Self::Idle => DragStatus::Idle,
            Self::Dragging(session) if session.overlay().is_none() => DragStatus::Initialized,
            Self::Dragging(_) => DragStatus::Dragging,
        }
    }
}

/// One drag, from pointer-down to pointer-up
#[derive(Debug, Clone)]
pub struct DragSession {
    target_id: BlockId,
    handle: ListenerHandle,
    origin: Point,
    /// Presentation-only height shown since the last move
    overlay: Option<f64>,
}

impl DragSession {
    pub(crate) fn new(target_id: BlockId, handle: ListenerHandle, origin: Point) -> Self {
        Self {
            target_id,
            handle,
            origin,
            overlay: None,
        }
    }

    pub fn target_id(&self) -> &BlockId {
        &self.target_id
    }

    pub fn handle(&self) -> ListenerHandle {
        self.handle
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn overlay(&self) -> Option<f64> {
        self.overlay
    }

    pub(crate) fn set_overlay(&mut self, height: f64) {
        self.overlay = Some(height);
    }

    pub(crate) fn into_target(self) -> BlockId {
        self.target_id
    }
}

/// Status line shown under the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStatus {
    Idle,
    /// Block created, no pointer move yet
    Initialized,
    Dragging,
}

impl fmt::Display for DragStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DragStatus::Idle => "idle",
            DragStatus::Initialized => "initialized",
            DragStatus::Dragging => "dragging",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Listener, ListenerRegistry, PointerEventKind};

    #[test]
    fn test_status_follows_session() {
        let handle = ListenerRegistry::new().register(Listener::Session, &[PointerEventKind::Up]);
        let mut session = DragSession::new(BlockId::from("a-1"), handle, Point::new(0.0, 10.0));

        assert_eq!(DragState::Idle.status(), DragStatus::Idle);
        assert_eq!(
            DragState::Dragging(session.clone()).status(),
            DragStatus::Initialized
        );

        session.set_overlay(25.0);
        let state = DragState::Dragging(session);
        assert_eq!(state.status(), DragStatus::Dragging);
        assert_eq!(state.status().to_string(), "dragging");
        assert_eq!(DragStatus::Initialized.to_string(), "initialized");
    }
}
