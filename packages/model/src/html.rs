use crate::{RenderNode, RenderTree};
use std::collections::BTreeMap;

/// Classes of the canvas element the blocks are rendered into
pub const CANVAS_CLASS: &str = "w-screen h-[calc(100vh_-_100px)] bg-slate-200";

/// Options for markup output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Write the render tree as nested markup
pub fn render_html(tree: &RenderTree, options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    for node in &tree.nodes {
        write_node(node, &mut ctx);
    }
    ctx.get_output()
}

/// Write a standalone page with the tree mounted inside the canvas element
pub fn render_page(tree: &RenderTree, options: &HtmlOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<title>Webshape</title>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line(&format!("<div class=\"{}\">", escape_html(CANVAS_CLASS)));
    ctx.indent();
    for node in &tree.nodes {
        write_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn write_node(node: &RenderNode, ctx: &mut Context) {
    match node {
        RenderNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => write_element(tag, attributes, styles, children, ctx),

        RenderNode::Text { content } => ctx.add_line(&escape_html(content)),

        RenderNode::Component { name } => {
            ctx.add_line(&format!("<!-- component: {} -->", escape_html(name)))
        }
    }
}

fn write_element(
    tag: &str,
    attributes: &BTreeMap<String, String>,
    styles: &BTreeMap<String, String>,
    children: &[RenderNode],
    ctx: &mut Context,
) {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    ctx.add(&format!("<{}", tag));

    for (name, value) in attributes {
        ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
    }

    if !styles.is_empty() {
        let declarations: Vec<String> = styles
            .iter()
            .map(|(key, value)| format!("{}: {};", key, value))
            .collect();
        ctx.add(&format!(" style=\"{}\"", escape_html(&declarations.join(" "))));
    }

    // Void elements never carry content
    if is_self_closing(tag) {
        ctx.add(" />");
        ctx.newline();
        return;
    }

    ctx.add(">");

    if !children.is_empty() {
        ctx.newline();
        ctx.indent();
        for child in children {
            write_node(child, ctx);
        }
        ctx.dedent();
        if ctx.options.pretty {
            ctx.add_indent();
        }
    }

    ctx.add(&format!("</{}>", tag));
    ctx.newline();
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{project, Document};

    #[test]
    fn test_render_default_document() {
        let html = render_html(&project(&Document::default()), &HtmlOptions::default());

        assert_eq!(
            html,
            "<div class=\"bg-red-400\" data-block-id=\"1018493\"></div>\n"
        );
    }

    #[test]
    fn test_render_nested_with_styles() {
        let tree = RenderTree {
            nodes: vec![RenderNode::element("section")
                .with_attr("data-block-id", "a")
                .with_styles(BTreeMap::from([("height".to_string(), "20px".to_string())]))
                .with_children(vec![RenderNode::element("p")
                    .with_attr("data-block-id", "b")
                    .with_children(vec![RenderNode::text("Fish & <chips>")])])],
        };

        let html = render_html(&tree, &HtmlOptions::default());

        println!("Generated HTML:\n{}", html);

        assert!(html.contains("<section data-block-id=\"a\" style=\"height: 20px;\">"));
        assert!(html.contains("    Fish &amp; &lt;chips&gt;\n"));
        assert!(html.contains("  </p>\n"));
        assert!(html.ends_with("</section>\n"));
    }

    #[test]
    fn test_render_compact() {
        let options = HtmlOptions {
            pretty: false,
            ..HtmlOptions::default()
        };
        let tree = RenderTree {
            nodes: vec![RenderNode::element("div").with_children(vec![
                RenderNode::element("img"),
                RenderNode::Component {
                    name: "Widget".to_string(),
                },
            ])],
        };

        assert_eq!(
            render_html(&tree, &options),
            "<div><img /><!-- component: Widget --></div>"
        );
    }

    #[test]
    fn test_render_projected_image_is_void() {
        use crate::{BlockTemplate, ContentData, ContentTag, SequentialIdGenerator};

        let template = BlockTemplate {
            child_tag: ContentTag::Img,
            ..BlockTemplate::default()
        }
        .with_placeholder(ContentData::text("photo.png"));
        let mut ids = SequentialIdGenerator::new("/canvas");
        let (doc, _) = Document::default()
            .create_block(&mut ids, &template, 80.0)
            .unwrap();

        let html = render_html(&project(&doc), &HtmlOptions::default());

        println!("Generated HTML:\n{}", html);

        assert!(html.contains(" src=\"photo.png\" />\n"));
        assert!(!html.contains("</img>"));
        assert!(!html.contains("    photo.png"));
    }

    #[test]
    fn test_render_img_drops_children() {
        let tree = RenderTree {
            nodes: vec![RenderNode::element("img").with_children(vec![RenderNode::text("stray")])],
        };

        let options = HtmlOptions {
            pretty: false,
            ..HtmlOptions::default()
        };
        assert_eq!(render_html(&tree, &options), "<img />");
    }

    #[test]
    fn test_render_page_wraps_canvas() {
        let html = render_page(&project(&Document::default()), &HtmlOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains(CANVAS_CLASS));
        assert!(html.contains("      <div class=\"bg-red-400\""));
    }
}
