//! # Webshape Model
//!
//! Block tree model for the webshape canvas editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ block: typed Container / Content blocks     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: root forest + copy-on-write ops   │
//! │  - create_block (new top-level container)   │
//! │  - patch_block_style (merge by identity)    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ projection: Document → RenderTree           │
//! │ html: RenderTree → nested markup            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every document operation returns a new `Document`; the previous value is
//! never observed half-updated.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webshape_model::{project, BlockTemplate, Document, SequentialIdGenerator, Style};
//!
//! let mut ids = SequentialIdGenerator::new("/canvas");
//! let doc = Document::default();
//! let (doc, id) = doc.create_block(&mut ids, &BlockTemplate::default(), 50.0)?;
//! let doc = doc.patch_block_style(&id, &Style::with_height(150.0));
//! let tree = project(&doc);
//! ```

mod block;
mod document;
mod error;
mod html;
mod id_generator;
mod projection;
mod style;
mod template;

pub use block::{
    Block, BlockId, BlockKind, ComponentRef, ContainerBlock, ContainerTag, ContentBlock,
    ContentData, ContentTag,
};
pub use document::{Document, ROOT_BLOCK_ID};
pub use error::{ModelError, ModelResult};
pub use html::{render_html, render_page, HtmlOptions, CANVAS_CLASS};
pub use id_generator::{get_seed_id, IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use projection::{
    project, RenderNode, RenderTree, BLOCK_ID_ATTRIBUTE, CLASS_ATTRIBUTE, SRC_ATTRIBUTE,
};
pub use style::{parse_px, px, Style, HEIGHT};
pub use template::BlockTemplate;
