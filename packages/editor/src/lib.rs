//! # Webshape Editor
//!
//! Drag-to-create block editor for the webshape canvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ pointer: down / move / up on the canvas     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DragEditController                  │
//! │  - down: create block, open session         │
//! │  - move: live height on rendered element    │
//! │  - up:   commit height to the document      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: full render / live element write  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: the render tree is a derived view
//! 2. **Live writes are disposable**: the next full render overwrites them
//! 3. **One session at a time**: the active target lives in `DragState`
//! 4. **Listeners are handles**: a session removes exactly what it added
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webshape_editor::{DragEditController, EditorOptions, HeadlessRenderer, PointerEvent};
//! use webshape_model::SequentialIdGenerator;
//!
//! let mut editor = DragEditController::new(
//!     HeadlessRenderer::new(),
//!     SequentialIdGenerator::new("/canvas"),
//!     EditorOptions::default(),
//! );
//!
//! editor.handle_event(PointerEvent::down(100.0, 50.0))?;
//! editor.handle_event(PointerEvent::moved(100.0, 120.0))?;
//! editor.handle_event(PointerEvent::up(100.0, 150.0))?;
//! ```

mod controller;
mod errors;
mod listeners;
mod options;
mod pointer;
mod renderer;
mod state;

pub use controller::{DragEditController, EventOutcome, IgnoreReason};
pub use errors::EditorError;
pub use listeners::{Listener, ListenerHandle, ListenerRegistry};
pub use options::EditorOptions;
pub use pointer::{CanvasBounds, Point, PointerEvent, PointerEventKind};
pub use renderer::{HeadlessRenderer, LiveElement, Renderer};
pub use state::{DragSession, DragState, DragStatus};

// Re-export model types for convenience
pub use webshape_model::{BlockId, BlockTemplate, Document, RenderTree};
