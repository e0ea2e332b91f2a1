//! # Projection
//!
//! Pure mapping from a `Document` to the renderer-facing `RenderTree`.
//! Every element carries the source block id in `data-block-id`, which is
//! how the drag controller finds the live element while a drag is active.

use crate::{Block, ContentData, ContentTag, Document};
use std::collections::BTreeMap;

/// Identity attribute linking a rendered element back to its block
pub const BLOCK_ID_ATTRIBUTE: &str = "data-block-id";

pub const CLASS_ATTRIBUTE: &str = "class";

/// Image source, filled from a text payload on `img` blocks
pub const SRC_ATTRIBUTE: &str = "src";

/// Renderer-facing node
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<RenderNode>,
    },

    /// Literal text payload
    Text { content: String },

    /// Embedded component, resolved by the host renderer
    Component { name: String },
}

impl RenderNode {
    pub fn element(tag: impl Into<String>) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        RenderNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_styles(mut self, new_styles: BTreeMap<String, String>) -> Self {
        if let RenderNode::Element { ref mut styles, .. } = self {
            styles.extend(new_styles);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<RenderNode>) -> Self {
        if let RenderNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            RenderNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        match self {
            RenderNode::Element { styles, .. } => styles.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Overwrite one inline style property. No-op on non-elements.
    pub fn set_style(&mut self, name: impl Into<String>, value: impl Into<String>) {
        if let RenderNode::Element { styles, .. } = self {
            styles.insert(name.into(), value.into());
        }
    }

    pub fn block_id(&self) -> Option<&str> {
        self.attribute(BLOCK_ID_ATTRIBUTE)
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn find_block(&self, id: &str) -> Option<&RenderNode> {
        if self.block_id() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_block(id))
    }

    pub fn find_block_mut(&mut self, id: &str) -> Option<&mut RenderNode> {
        if self.block_id() == Some(id) {
            return Some(self);
        }
        match self {
            RenderNode::Element { children, .. } => children
                .iter_mut()
                .find_map(|child| child.find_block_mut(id)),
            _ => None,
        }
    }
}

/// Projected document: one node per root block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderTree {
    pub nodes: Vec<RenderNode>,
}

impl RenderTree {
    pub fn find_block(&self, id: &str) -> Option<&RenderNode> {
        self.nodes.iter().find_map(|node| node.find_block(id))
    }

    pub fn find_block_mut(&mut self, id: &str) -> Option<&mut RenderNode> {
        self.nodes.iter_mut().find_map(|node| node.find_block_mut(id))
    }
}

/// Project a document into a render tree
pub fn project(document: &Document) -> RenderTree {
    RenderTree {
        nodes: document.blocks().iter().map(project_block).collect(),
    }
}

fn project_block(block: &Block) -> RenderNode {
    let node = RenderNode::element(block.tag())
        .with_attr(BLOCK_ID_ATTRIBUTE, block.id().as_str())
        .with_attr(CLASS_ATTRIBUTE, block.class_list().join(" "))
        .with_styles(block.style().cloned().map(BTreeMap::from).unwrap_or_default());

    match block {
        Block::Container(container) => {
            node.with_children(container.children.iter().map(project_block).collect())
        }
        // Void element: a text payload is the image source, nothing nests inside
        Block::Content(content) if content.tag == ContentTag::Img => match &content.data {
            ContentData::Text(src) => node.with_attr(SRC_ATTRIBUTE, src.as_str()),
            ContentData::Component(_) => node,
        },
        Block::Content(content) => node.with_children(vec![project_data(&content.data)]),
    }
}

fn project_data(data: &ContentData) -> RenderNode {
    match data {
        ContentData::Text(text) => RenderNode::text(text.clone()),
        ContentData::Component(component) => RenderNode::Component {
            name: component.name.clone(),
        },
    }
}
