//! # Blocks
//!
//! A block is either a container (owns child blocks) or a content block
//! (holds a renderable payload). The variant is fixed at construction; only
//! style, classes and container children change afterwards.

use crate::Style;
use std::borrow::Borrow;
use std::fmt;

/// Block identity, unique across a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BlockId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Container element tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerTag {
    Div,
    Section,
}

impl ContainerTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerTag::Div => "div",
            ContainerTag::Section => "section",
        }
    }
}

/// Content element tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTag {
    P,
    H1,
    H2,
    Img,
}

impl ContentTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTag::P => "p",
            ContentTag::H1 => "h1",
            ContentTag::H2 => "h2",
            ContentTag::Img => "img",
        }
    }
}

/// Reference to an embedded component, rendered by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    pub name: String,
}

impl ComponentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Payload of a content block. Never interpreted by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentData {
    Text(String),
    Component(ComponentRef),
}

impl ContentData {
    pub fn text(content: impl Into<String>) -> Self {
        ContentData::Text(content.into())
    }

    pub fn component(name: impl Into<String>) -> Self {
        ContentData::Component(ComponentRef::new(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Container,
    Content,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerBlock {
    id: BlockId,
    pub tag: ContainerTag,
    pub class_list: Vec<String>,
    pub style: Option<Style>,
    pub children: Vec<Block>,
}

impl ContainerBlock {
    pub fn new(id: impl Into<BlockId>, tag: ContainerTag) -> Self {
        Self {
            id: id.into(),
            tag,
            class_list: Vec::new(),
            style: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_list.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_child(mut self, child: impl Into<Block>) -> Self {
        self.children.push(child.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    id: BlockId,
    pub tag: ContentTag,
    pub class_list: Vec<String>,
    pub style: Option<Style>,
    pub data: ContentData,
}

impl ContentBlock {
    pub fn new(id: impl Into<BlockId>, tag: ContentTag, data: ContentData) -> Self {
        Self {
            id: id.into(),
            tag,
            class_list: Vec::new(),
            style: None,
            data,
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_list.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Container(ContainerBlock),
    Content(ContentBlock),
}

impl Block {
    pub fn id(&self) -> &BlockId {
        match self {
            Block::Container(c) => c.id(),
            Block::Content(c) => c.id(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Container(_) => BlockKind::Container,
            Block::Content(_) => BlockKind::Content,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Block::Container(c) => c.tag.as_str(),
            Block::Content(c) => c.tag.as_str(),
        }
    }

    pub fn class_list(&self) -> &[String] {
        match self {
            Block::Container(c) => &c.class_list,
            Block::Content(c) => &c.class_list,
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Block::Container(c) => c.style.as_ref(),
            Block::Content(c) => c.style.as_ref(),
        }
    }

    pub(crate) fn style_mut(&mut self) -> &mut Option<Style> {
        match self {
            Block::Container(c) => &mut c.style,
            Block::Content(c) => &mut c.style,
        }
    }

    /// Child blocks (always empty for content blocks)
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Container(c) => &c.children,
            Block::Content(_) => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Block::Container(c) => Some(&mut c.children),
            Block::Content(_) => None,
        }
    }

    /// Depth-first search of this block and its subtree
    pub fn find(&self, id: &str) -> Option<&Block> {
        if self.id().as_str() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Block> {
        if self.id().as_str() == id {
            return Some(self);
        }
        self.children_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Visit the ids of this block and every descendant, pre-order
    pub fn collect_ids<'a>(&'a self, out: &mut Vec<&'a BlockId>) {
        out.push(self.id());
        for child in self.children() {
            child.collect_ids(out);
        }
    }
}

impl From<ContainerBlock> for Block {
    fn from(block: ContainerBlock) -> Self {
        Block::Container(block)
    }
}

impl From<ContentBlock> for Block {
    fn from(block: ContentBlock) -> Self {
        Block::Content(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Block {
        ContainerBlock::new("root", ContainerTag::Section)
            .with_child(
                ContainerBlock::new("inner", ContainerTag::Div).with_child(ContentBlock::new(
                    "title",
                    ContentTag::H1,
                    ContentData::text("Hello"),
                )),
            )
            .into()
    }

    #[test]
    fn test_find_nested_block() {
        let block = sample();

        let found = block.find("title").expect("nested block should be found");
        assert_eq!(found.kind(), BlockKind::Content);
        assert_eq!(found.tag(), "h1");
        assert!(block.find("missing").is_none());
    }

    #[test]
    fn test_collect_ids_pre_order() {
        let block = sample();
        let mut ids = Vec::new();
        block.collect_ids(&mut ids);

        let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["root", "inner", "title"]);
    }

    #[test]
    fn test_content_block_has_no_children() {
        let block: Block = ContentBlock::new("p", ContentTag::P, ContentData::text("x")).into();
        assert!(block.children().is_empty());
        assert_eq!(block.kind(), BlockKind::Content);
    }
}
