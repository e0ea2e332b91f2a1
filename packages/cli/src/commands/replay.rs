use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use webshape_editor::{
    DragEditController, EditorOptions, EventOutcome, HeadlessRenderer, PointerEvent,
};

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON file with pointer events
    pub script: PathBuf,

    /// Print the outcome of every event
    #[arg(long)]
    pub steps: bool,

    /// Wrap the markup in a full HTML page
    #[arg(long)]
    pub page: bool,
}

pub fn replay(args: ReplayArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let script_path = if args.script.is_absolute() {
        args.script.clone()
    } else {
        PathBuf::from(cwd).join(&args.script)
    };
    if !script_path.exists() {
        return Err(anyhow!("Script does not exist: {}", script_path.display()));
    }

    let content = fs::read_to_string(&script_path)?;
    let events: Vec<PointerEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid pointer script {}", script_path.display()))?;

    let html = run_script(&config, events, args.steps, args.page)?;
    print!("{}", html);

    Ok(())
}

/// Feed `events` to a fresh controller and return the final markup
pub fn run_script(
    config: &Config,
    events: Vec<PointerEvent>,
    steps: bool,
    page: bool,
) -> Result<String> {
    let options = EditorOptions {
        canvas: config.canvas,
        ..EditorOptions::default()
    };
    let mut editor =
        DragEditController::new(HeadlessRenderer::new(), config.id_generator(), options);

    for (index, event) in events.into_iter().enumerate() {
        let outcome = editor.handle_event(event)?;
        if steps {
            print_step(index, &event, &outcome, &editor);
        }
    }

    if !editor.state().is_idle() {
        eprintln!(
            "{} script ended mid-drag; markup shows the last committed state",
            "⚠️".yellow()
        );
    }

    let html_options = config.html_options();
    let renderer = editor.renderer();
    Ok(if page {
        renderer.page(&html_options)
    } else {
        renderer.html(&html_options)
    })
}

fn print_step(
    index: usize,
    event: &PointerEvent,
    outcome: &EventOutcome,
    editor: &DragEditController<HeadlessRenderer, Box<dyn webshape_model::IdGenerator>>,
) {
    let marker = match outcome {
        EventOutcome::Ignored(_) => "·".dimmed(),
        _ => "✓".green(),
    };
    let live = editor
        .live_height()
        .map(|h| format!(" live={}", webshape_model::px(h)))
        .unwrap_or_default();

    println!(
        "  {} [{}] {} {} → {} (status: {}{})",
        marker,
        index,
        event.kind,
        event.position,
        outcome,
        editor.status(),
        live
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_script_commits_height() {
        let events = vec![
            PointerEvent::down(100.0, 50.0),
            PointerEvent::moved(100.0, 120.0),
            PointerEvent::up(100.0, 150.0),
        ];

        let html = run_script(&Config::default(), events, false, false).unwrap();

        assert!(html.contains("height: 150px;"));
        assert!(html.contains("<!-- component: ExampleComponent -->"));
    }

    #[test]
    fn test_run_script_page() {
        let html = run_script(&Config::default(), vec![], false, true).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
