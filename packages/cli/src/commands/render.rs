use crate::config::Config;
use anyhow::Result;
use clap::Args;
use webshape_model::{project, render_html, render_page, Document};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Wrap the markup in a full HTML page
    #[arg(long)]
    pub page: bool,
}

/// Print the markup of the default document
pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree = project(&Document::default());
    let options = config.html_options();

    let html = if args.page {
        render_page(&tree, &options)
    } else {
        render_html(&tree, &options)
    };
    print!("{}", html);

    Ok(())
}
