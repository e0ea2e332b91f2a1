//! # Listener Registry
//!
//! Pointer listeners registered on the canvas. Each registration returns a
//! `ListenerHandle`; the same handle removes it again, so two drag sessions
//! can never remove each other's listeners.

use crate::PointerEventKind;
use slotmap::{new_key_type, SlotMap};

new_key_type! { pub struct ListenerHandle; }

/// Who receives the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// Permanent pointer-down listener installed when the canvas mounts
    Canvas,
    /// Move/up listener that lives for one drag session
    Session,
}

#[derive(Debug)]
struct Registration {
    listener: Listener,
    events: Vec<PointerEventKind>,
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    registrations: SlotMap<ListenerHandle, Registration>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Listener, events: &[PointerEventKind]) -> ListenerHandle {
        self.registrations.insert(Registration {
            listener,
            events: events.to_vec(),
        })
    }

    /// Remove a registration. Returns false if the handle was already gone.
    pub fn unregister(&mut self, handle: ListenerHandle) -> bool {
        self.registrations.remove(handle).is_some()
    }

    pub fn is_registered(&self, handle: ListenerHandle) -> bool {
        self.registrations.contains_key(handle)
    }

    /// Listeners subscribed to `kind`, snapshotted before dispatch
    pub fn subscribers(&self, kind: PointerEventKind) -> Vec<(ListenerHandle, Listener)> {
        self.registrations
            .iter()
            .filter(|(_, reg)| reg.events.contains(&kind))
            .map(|(handle, reg)| (handle, reg.listener))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointerEventKind::*;

    #[test]
    fn test_register_and_dispatch() {
        let mut registry = ListenerRegistry::new();
        let canvas = registry.register(Listener::Canvas, &[Down]);
        let session = registry.register(Listener::Session, &[Move, Up]);

        assert_eq!(registry.subscribers(Down), vec![(canvas, Listener::Canvas)]);
        assert_eq!(registry.subscribers(Move), vec![(session, Listener::Session)]);
        assert_eq!(registry.subscribers(Up), vec![(session, Listener::Session)]);
    }

    #[test]
    fn test_handles_remove_only_their_registration() {
        let mut registry = ListenerRegistry::new();
        let first = registry.register(Listener::Session, &[Move, Up]);
        let second = registry.register(Listener::Session, &[Move, Up]);

        assert!(registry.unregister(first));
        assert!(!registry.unregister(first));

        assert!(registry.is_registered(second));
        assert_eq!(registry.subscribers(Move), vec![(second, Listener::Session)]);
    }

    #[test]
    fn test_no_subscribers_when_empty() {
        let registry = ListenerRegistry::new();
        assert!(registry.subscribers(Move).is_empty());
        assert!(registry.is_empty());
    }
}
