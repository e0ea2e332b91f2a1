//! # Drag-Edit Controller
//!
//! Turns pointer events on the canvas into block tree edits.
//!
//! The controller keeps two update paths apart:
//!
//! - **Authoritative**: the `Document`, replaced only when a session starts
//!   (block created) and when it ends (height committed). Each change is
//!   followed by a full render.
//! - **Live**: the session overlay plus a direct height write on the rendered
//!   element, on every pointer move. The document stays stale until commit.

use crate::{
    DragSession, DragState, DragStatus, EditorError, EditorOptions, Listener, ListenerHandle,
    ListenerRegistry, Point, PointerEvent, PointerEventKind, Renderer,
};
use std::fmt;
use tracing::{debug, error, info, warn};
use webshape_model::{
    project, px, BlockId, Document, IdGenerator, SequentialIdGenerator, Style,
};

const SESSION_EVENTS: [PointerEventKind; 2] = [PointerEventKind::Move, PointerEventKind::Up];

/// What a dispatched event did
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// A block was created and a drag session opened
    Started { block_id: BlockId },

    /// The live element was resized. `applied` is false when the element
    /// could not be found; the session continues.
    Resized {
        block_id: BlockId,
        height: f64,
        applied: bool,
    },

    /// The final height was written to the document and the session closed
    Committed { block_id: BlockId, height: f64 },

    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Nothing is listening for this event kind
    NotListening,
    /// Pointer down while another drag is in progress
    SessionActive,
    /// Pointer down outside the canvas bounds
    OutsideCanvas,
    /// Coordinates are NaN or infinite
    InvalidPosition,
}

impl fmt::Display for EventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventOutcome::Started { block_id } => write!(f, "started {}", block_id),
            EventOutcome::Resized {
                block_id,
                height,
                applied: true,
            } => write!(f, "resized {} to {}", block_id, px(*height)),
            EventOutcome::Resized {
                block_id,
                applied: false,
                ..
            } => write!(f, "resize of {} skipped (not mounted)", block_id),
            EventOutcome::Committed { block_id, height } => {
                write!(f, "committed {} at {}", block_id, px(*height))
            }
            EventOutcome::Ignored(reason) => write!(f, "ignored ({:?})", reason),
        }
    }
}

/// Drag-to-create controller for one canvas
pub struct DragEditController<R: Renderer, G: IdGenerator = SequentialIdGenerator> {
    document: Document,
    renderer: R,
    ids: G,
    options: EditorOptions,
    listeners: ListenerRegistry,
    state: DragState,
}

impl<R: Renderer, G: IdGenerator> DragEditController<R, G> {
    /// Mount on the default document
    pub fn new(renderer: R, ids: G, options: EditorOptions) -> Self {
        Self::with_document(Document::default(), renderer, ids, options)
    }

    /// Mount on an existing document: render it and start listening for
    /// pointer-down on the canvas.
    pub fn with_document(
        document: Document,
        mut renderer: R,
        ids: G,
        options: EditorOptions,
    ) -> Self {
        renderer.render(&project(&document));

        let mut listeners = ListenerRegistry::new();
        listeners.register(Listener::Canvas, &[PointerEventKind::Down]);

        debug!(blocks = document.len(), "Canvas mounted");

        Self {
            document,
            renderer,
            ids,
            options,
            listeners,
            state: DragState::Idle,
        }
    }

    /// Dispatch one pointer event to whoever is listening for it
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<EventOutcome, EditorError> {
        if !event.position.is_finite() {
            warn!(kind = %event.kind, position = %event.position, "Non-finite pointer position");
            return Ok(EventOutcome::Ignored(IgnoreReason::InvalidPosition));
        }

        let subscribers = self.listeners.subscribers(event.kind);
        if subscribers.is_empty() {
            debug!(kind = %event.kind, "No listener for pointer event");
            return Ok(EventOutcome::Ignored(IgnoreReason::NotListening));
        }

        let mut outcome = EventOutcome::Ignored(IgnoreReason::NotListening);
        for (handle, listener) in subscribers {
            outcome = match (listener, event.kind) {
                (Listener::Canvas, PointerEventKind::Down) => {
                    self.on_pointer_down(event.position)?
                }
                (Listener::Session, PointerEventKind::Move) => {
                    self.on_pointer_move(handle, event.position)
                }
                (Listener::Session, PointerEventKind::Up) => {
                    self.on_pointer_up(handle, event.position)?
                }
                _ => continue,
            };
        }
        Ok(outcome)
    }

    /// Dispatch a sequence of events, stopping at the first fatal error
    pub fn handle_events<I>(&mut self, events: I) -> Result<Vec<EventOutcome>, EditorError>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        events
            .into_iter()
            .map(|event| self.handle_event(event))
            .collect()
    }

    fn on_pointer_down(&mut self, position: Point) -> Result<EventOutcome, EditorError> {
        if let DragState::Dragging(session) = &self.state {
            debug!(active = %session.target_id(), "Pointer down during active drag, ignoring");
            return Ok(EventOutcome::Ignored(IgnoreReason::SessionActive));
        }

        if let Some(canvas) = &self.options.canvas {
            if !canvas.contains(position) {
                debug!(%position, "Pointer down outside canvas");
                return Ok(EventOutcome::Ignored(IgnoreReason::OutsideCanvas));
            }
        }

        let (document, block_id) = self
            .document
            .create_block(&mut self.ids, &self.options.template, position.height())
            .map_err(|err| {
                error!(%err, "Failed to create block, drag not started");
                err
            })?;

        self.document = document;
        self.renderer.render(&project(&self.document));

        let handle = self.listeners.register(Listener::Session, &SESSION_EVENTS);
        self.state = DragState::Dragging(DragSession::new(block_id.clone(), handle, position));

        info!(block_id = %block_id, %position, "Drag session started");
        Ok(EventOutcome::Started { block_id })
    }

    fn on_pointer_move(&mut self, handle: ListenerHandle, position: Point) -> EventOutcome {
        let DragState::Dragging(session) = &mut self.state else {
            warn!("Move listener fired while idle");
            return EventOutcome::Ignored(IgnoreReason::NotListening);
        };
        if session.handle() != handle {
            warn!("Move listener from a closed session fired");
            return EventOutcome::Ignored(IgnoreReason::NotListening);
        }

        let height = position.height();
        session.set_overlay(height);

        let applied = match self.renderer.query_block(session.target_id()) {
            Some(element) => {
                element.set_height(&px(height));
                true
            }
            None => {
                debug!(block_id = %session.target_id(), "Live element not mounted yet");
                false
            }
        };

        EventOutcome::Resized {
            block_id: session.target_id().clone(),
            height,
            applied,
        }
    }

    fn on_pointer_up(
        &mut self,
        handle: ListenerHandle,
        position: Point,
    ) -> Result<EventOutcome, EditorError> {
        self.listeners.unregister(handle);

        let session = match std::mem::take(&mut self.state) {
            DragState::Dragging(session) if session.handle() == handle => session,
            other => {
                self.state = other;
                error!("Pointer up without a matching drag session");
                return Err(EditorError::NoActiveDrag);
            }
        };
        let block_id = session.into_target();

        if !self.document.contains_id(block_id.as_str()) {
            error!(block_id = %block_id, "Drag target vanished before commit");
            return Err(EditorError::TargetMissing(block_id));
        }

        let height = position.height();
        self.document = self
            .document
            .patch_block_style(block_id.as_str(), &Style::with_height(height));
        self.renderer.render(&project(&self.document));

        info!(block_id = %block_id, height, "Drag session committed");
        Ok(EventOutcome::Committed { block_id, height })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn status(&self) -> DragStatus {
        self.state.status()
    }

    /// Block being dragged, if a session is open
    pub fn active_target(&self) -> Option<&BlockId> {
        self.state.session().map(DragSession::target_id)
    }

    /// Height from the latest pointer move of the open session
    pub fn live_height(&self) -> Option<f64> {
        self.state.session().and_then(DragSession::overlay)
    }

    /// Number of registered listeners (1 while idle, 2 while dragging)
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
