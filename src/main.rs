// shapes-album: scripted shapes photo album with terminal viewer and HTML export

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use ratatui::{backend::CrosstermBackend, Terminal};

use shapes_album::config::{ViewConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use shapes_album::export::{render_text, web};
use shapes_album::interpreter::engine::Interpreter;
use shapes_album::logging::{init_logging, ColorMode, LoggingConfig};
use shapes_album::snapshot::SnapshotArchive;
use shapes_album::ui::terminal::TerminalGuard;
use shapes_album::ui::App;

/// Run a shapes script and show the snapshots it takes
#[derive(Parser)]
#[command(name = "shapes-album")]
#[command(about = "Scripted shapes photo album with terminal viewer and HTML export")]
struct Cli {
    /// Script file to run
    input: PathBuf,

    /// How to present the snapshots
    #[arg(long, value_enum, default_value_t = View::Tui)]
    view: View,

    /// Output file (required for `web`, optional for `text`)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Drawing width in scene units
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    width: u32,

    /// Drawing height in scene units
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    height: u32,

    /// Log filter, e.g. "info" or "shapes_album=debug" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// When to color log output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Tui,
    Web,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        filter: cli.log_level.clone(),
        color: cli.color,
    });

    if cli.width == 0 || cli.height == 0 {
        bail!("drawing size must be positive, got {}x{}", cli.width, cli.height);
    }
    if cli.view == View::Web && cli.out.is_none() {
        bail!("--out is required for the web view");
    }
    let view = ViewConfig::new(cli.width, cli.height);

    let mut interpreter = Interpreter::default();
    let report = interpreter
        .run_file(&cli.input)
        .with_context(|| format!("failed to read script {}", cli.input.display()))?;

    let archive = interpreter.into_album().into_archive();
    eprintln!(
        "{}: {} lines, {} applied, {} without target, {} failed, {} snapshots",
        cli.input.display(),
        report.lines,
        report.applied,
        report.no_ops,
        report.errors.len(),
        archive.len()
    );

    match cli.view {
        View::Tui => run_tui(archive, view),
        View::Web => {
            // Checked above
            let Some(out) = cli.out.as_deref() else {
                bail!("--out is required for the web view");
            };
            web::write_html(&archive, &view, out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            eprintln!("Wrote {}", out.display());
            Ok(())
        }
        View::Text => {
            let text = render_text(&archive);
            match cli.out.as_deref() {
                Some(out) => fs::write(out, text)
                    .with_context(|| format!("failed to write {}", out.display())),
                None => {
                    print!("{}", text);
                    Ok(())
                }
            }
        }
    }
}

fn run_tui(archive: SnapshotArchive, view: ViewConfig) -> Result<()> {
    // Set up terminal; the guard restores it however this function exits
    let _guard = TerminalGuard::enter(io::stdout(), true).context("failed to set up terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(archive, view);
    app.run(&mut terminal).context("terminal viewer failed")
}
