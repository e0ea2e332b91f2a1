//! # Document
//!
//! The ordered forest of root-level blocks being edited.
//!
//! Documents are values: `create_block` and `patch_block_style` take `&self`
//! and return a new `Document`, leaving the receiver untouched. The renderer
//! only ever sees a fully updated tree.

use crate::{
    Block, BlockId, BlockTemplate, ContainerBlock, ContainerTag, ContentBlock, IdGenerator,
    ModelError, ModelResult, Style,
};
use std::collections::HashSet;
use tracing::{debug, error};

/// Identity of the root container in the default document
pub const ROOT_BLOCK_ID: &str = "1018493";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Default for Document {
    /// A single empty root container
    fn default() -> Self {
        Self {
            blocks: vec![ContainerBlock::new(ROOT_BLOCK_ID, ContainerTag::Div)
                .with_classes(["bg-red-400"])
                .into()],
        }
    }
}

impl Document {
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Build a document from existing blocks, rejecting duplicate ids
    pub fn from_blocks(blocks: Vec<Block>) -> ModelResult<Self> {
        let doc = Self { blocks };
        {
            let mut seen = HashSet::new();
            for id in doc.block_ids() {
                if !seen.insert(id) {
                    return Err(ModelError::DuplicateId(id.clone()));
                }
            }
        }
        Ok(doc)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Find a block anywhere in the tree
    pub fn find_block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find_map(|block| block.find(id))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find_block(id).is_some()
    }

    /// Every id in the tree, pre-order
    pub fn block_ids(&self) -> Vec<&BlockId> {
        let mut ids = Vec::new();
        for block in &self.blocks {
            block.collect_ids(&mut ids);
        }
        ids
    }

    /// Append a new top-level container built from `template`.
    ///
    /// The container gets `style.height = <initial_height>px` and one
    /// placeholder content child. Returns the new document and the
    /// container's id.
    pub fn create_block<G: IdGenerator + ?Sized>(
        &self,
        ids: &mut G,
        template: &BlockTemplate,
        initial_height: f64,
    ) -> ModelResult<(Document, BlockId)> {
        let block_id = self.fresh_id(ids, &[])?;
        let child_id = self.fresh_id(ids, &[&block_id])?;

        debug!(block_id = %block_id, height = initial_height, "Adding block");

        let child = ContentBlock::new(child_id, template.child_tag, template.placeholder.clone())
            .with_classes(template.child_class_list.iter().cloned());

        let block = ContainerBlock::new(block_id.clone(), template.tag)
            .with_classes(template.class_list.iter().cloned())
            .with_style(Style::with_height(initial_height))
            .with_child(child);

        let mut next = self.clone();
        next.blocks.push(block.into());
        Ok((next, block_id))
    }

    /// Merge `patch` into the style of the block with `target_id`.
    ///
    /// An unknown id yields an unchanged copy.
    pub fn patch_block_style(&self, target_id: &str, patch: &Style) -> Document {
        let mut next = self.clone();

        match next
            .blocks
            .iter_mut()
            .find_map(|block| block.find_mut(target_id))
        {
            Some(block) => {
                let style = block.style_mut();
                *style = Some(match style.take() {
                    Some(existing) => existing.merge(patch),
                    None => patch.clone(),
                });
                debug!(block_id = %target_id, properties = patch.len(), "Patched block style");
            }
            None => debug!(block_id = %target_id, "Style patch target not found"),
        }

        next
    }

    fn fresh_id<G: IdGenerator + ?Sized>(
        &self,
        ids: &mut G,
        pending: &[&BlockId],
    ) -> ModelResult<BlockId> {
        let id = ids.generate_id();
        if self.contains_id(id.as_str()) || pending.contains(&&id) {
            error!(block_id = %id, "Id generator produced a colliding id");
            return Err(ModelError::IdCollision(id));
        }
        Ok(id)
    }
}
