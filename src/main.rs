//! # Flowpad - A Flowchart Diagram Editor
//!
//! Edit flowchart diagram source with live syntax highlighting.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open a scratch diagram
//! cargo run
//!
//! # Open (or create) a diagram file
//! cargo run -- path/to/flow.mmd
//!
//! # Print the highlighted markup without opening a window
//! cargo run -- --render path/to/flow.mmd
//! ```

use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flowpad_core::{document, Config};
use flowpad_syntax::Palette;
use flowpad_ui::{run, Flags, Theme};

/// Flowpad - a flowchart diagram editor built in Rust
#[derive(Parser, Debug)]
#[command(name = "flowpad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Diagram file to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the highlighted markup of FILE (or stdin) and exit
    #[arg(long)]
    render: bool,

    /// Configuration file to use instead of the default
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON theme file for the window chrome
    #[arg(short, long, value_name = "PATH")]
    theme: Option<PathBuf>,

    /// Use the light chrome theme
    #[arg(long, conflicts_with = "theme")]
    light: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(log_filter(log_level))
        .init();

    tracing::info!("Starting Flowpad v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::resolve(args.config.as_deref()).context("Failed to load configuration")?;

    if args.render {
        let source = read_source(args.file.as_deref())?;
        for line in render_source(&source, &config.palette) {
            println!("{}", line);
        }
        return Ok(());
    }

    let theme = match (&args.theme, args.light) {
        (Some(path), _) => Theme::load(path)
            .with_context(|| format!("Failed to load theme {}", path.display()))?,
        (None, true) => Theme::light(),
        (None, false) => Theme::dark(),
    };

    let text = match &args.file {
        Some(path) => document::load(path)
            .with_context(|| format!("Failed to open {}", path.display()))?,
        None => String::new(),
    };

    // Build launch flags
    let flags = Flags {
        file: args.file,
        text,
        config,
        theme,
    };

    // Run the application
    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// `RUST_LOG` if set, otherwise the level picked with `-v`.
fn log_filter(level: tracing::Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    })
}

/// Reads the diagram from `file`, or from stdin when no file is given.
fn read_source(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Markup lines for `--render`. A single trailing line terminator does not
/// count as an extra empty line.
fn render_source(source: &str, palette: &Palette) -> Vec<String> {
    let source = source.strip_suffix('\n').unwrap_or(source);
    let source = source.strip_suffix('\r').unwrap_or(source);
    flowpad_syntax::render(source, palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["flowpad"]);
        assert!(args.file.is_none());
        assert!(!args.render);
        assert!(!args.light);
    }

    #[test]
    fn test_args_with_file() {
        let args = Args::parse_from(["flowpad", "flow.mmd"]);
        assert_eq!(args.file, Some(PathBuf::from("flow.mmd")));
    }

    #[test]
    fn test_args_render_with_config() {
        let args = Args::parse_from(["flowpad", "--render", "-c", "my.toml", "-vv", "flow.mmd"]);
        assert!(args.render);
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_theme_conflicts_with_light() {
        assert!(Args::try_parse_from(["flowpad", "--light", "--theme", "t.json"]).is_err());
    }

    #[test]
    fn test_render_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.mmd");
        std::fs::write(&path, "graph TD\nA-->B\n").unwrap();

        let source = read_source(Some(&path)).unwrap();
        let lines = render_source(&source, &Palette::default());

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(">graph</span>"));
        assert!(lines[1].contains(">--></span>"));
    }

    #[test]
    fn test_render_crlf_source() {
        let lines = render_source("graph TD\r\nA-->B\r\n", &Palette::default());
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| !line.contains('\r')));
        assert!(lines[1].ends_with(">B</span>"));
    }

    #[test]
    fn test_render_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_source(Some(&dir.path().join("missing.mmd"))).is_err());
    }
}
