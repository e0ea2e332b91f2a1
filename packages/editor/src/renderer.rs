//! # Renderer seam
//!
//! The controller drives any presentation layer through two paths:
//!
//! - `render`: full re-projection after the model changes
//! - `query_block` + `set_height`: direct write to one live element while a
//!   drag is in progress, without touching the model

use webshape_model::{
    parse_px, render_html, render_page, BlockId, HtmlOptions, RenderNode, RenderTree, HEIGHT,
};

/// A rendered element that can be resized in place
pub trait LiveElement {
    fn set_height(&mut self, height: &str);
}

pub trait Renderer {
    /// Replace everything on screen with `tree`
    fn render(&mut self, tree: &RenderTree);

    /// Resolve the live element carrying `data-block-id == id`
    fn query_block(&mut self, id: &BlockId) -> Option<&mut dyn LiveElement>;
}

impl LiveElement for RenderNode {
    fn set_height(&mut self, height: &str) {
        self.set_style(HEIGHT, height);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, tree: &RenderTree) {
        (**self).render(tree)
    }

    fn query_block(&mut self, id: &BlockId) -> Option<&mut dyn LiveElement> {
        (**self).query_block(id)
    }
}

/// Retained-tree renderer with no display attached
///
/// Keeps a copy of the last rendered tree. Live writes mutate that copy and
/// are discarded by the next `render`.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    mounted: RenderTree,
    render_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &RenderTree {
        &self.mounted
    }

    /// Number of full renders so far
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Height currently shown for a block, in pixels
    pub fn live_height(&self, id: &str) -> Option<f64> {
        self.mounted
            .find_block(id)
            .and_then(|node| node.style(HEIGHT))
            .and_then(parse_px)
    }

    pub fn html(&self, options: &HtmlOptions) -> String {
        render_html(&self.mounted, options)
    }

    pub fn page(&self, options: &HtmlOptions) -> String {
        render_page(&self.mounted, options)
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, tree: &RenderTree) {
        self.mounted = tree.clone();
        self.render_count += 1;
    }

    fn query_block(&mut self, id: &BlockId) -> Option<&mut dyn LiveElement> {
        self.mounted
            .find_block_mut(id.as_str())
            .map(|node| node as &mut dyn LiveElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webshape_model::{project, Document, ROOT_BLOCK_ID};

    #[test]
    fn test_live_write_is_discarded_by_render() {
        let tree = project(&Document::default());
        let mut renderer = HeadlessRenderer::new();
        renderer.render(&tree);

        renderer
            .query_block(&BlockId::from(ROOT_BLOCK_ID))
            .expect("root is mounted")
            .set_height("300px");
        assert_eq!(renderer.live_height(ROOT_BLOCK_ID), Some(300.0));

        renderer.render(&tree);
        assert_eq!(renderer.live_height(ROOT_BLOCK_ID), None);
        assert_eq!(renderer.render_count(), 2);
    }

    #[test]
    fn test_query_unknown_block() {
        let mut renderer = HeadlessRenderer::new();
        assert!(renderer.query_block(&BlockId::from("nope")).is_none());
    }
}
