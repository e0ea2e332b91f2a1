use crate::CanvasBounds;
use webshape_model::BlockTemplate;

#[derive(Debug, Clone, Default)]
pub struct EditorOptions {
    /// Shape of each block spawned by a drag
    pub template: BlockTemplate,
    /// Canvas extent; `None` accepts pointer-down anywhere
    pub canvas: Option<CanvasBounds>,
}

impl EditorOptions {
    pub fn with_canvas(mut self, canvas: CanvasBounds) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn with_template(mut self, template: BlockTemplate) -> Self {
        self.template = template;
        self
    }
}
