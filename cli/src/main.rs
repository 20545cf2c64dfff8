//! CLI entrypoint for selah
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use selah_application::QuestionSourcePort;
use selah_domain::{QuizMode, TopicKey};
use selah_infrastructure::content::pack;
use selah_infrastructure::{BuiltinCatalog, BuiltinLibrary, ConfigLoader, FileConfig};
use selah_presentation::{Cli, ConsoleFormatter, NavTab, TuiApp, TuiOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Console paths log to stderr; the TUI logs to a file so log lines
    // never corrupt the alternate screen.
    let tui_mode = !cli.list && !cli.show_config;
    let _log_guard = if tui_mode {
        Some(init_file_logging(filter)?)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        None
    };

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|err| anyhow::anyhow!("failed to load configuration: {err}"))?
    };
    for issue in config.validate() {
        warn!("config {} [{}]: {}", issue.severity, issue.field, issue.message);
    }

    // === Dependency Injection ===
    let catalog = Arc::new(build_catalog(&config));
    let library = BuiltinLibrary::new();

    if cli.list {
        print!(
            "{}",
            ConsoleFormatter::format_topics(
                &catalog.topics(QuizMode::Theme),
                &catalog.topics(QuizMode::Book),
            )
        );
        return Ok(());
    }

    let start_tab: NavTab = config.ui.start_tab.parse().unwrap_or(NavTab::Home);
    let initial_topic = cli
        .theme
        .as_deref()
        .map(TopicKey::theme)
        .or_else(|| cli.book.as_deref().map(TopicKey::book));

    let options = TuiOptions {
        start_tab,
        show_hints: config.ui.show_hints,
        theme_fallback: config.quiz.fallback(QuizMode::Theme),
        book_fallback: config.quiz.fallback(QuizMode::Book),
        initial_topic,
    };

    info!("starting selah");
    let mut app = TuiApp::new(catalog, &library, options);
    app.run().await.context("TUI loop failed")?;

    Ok(())
}

/// Build the question catalog: built-ins plus configured packs.
fn build_catalog(config: &FileConfig) -> BuiltinCatalog {
    let mut catalog = BuiltinCatalog::new();
    for path in &config.content.packs {
        match pack::load(path) {
            Ok(loaded) => catalog.insert(loaded.key, loaded.title, loaded.locked, loaded.set),
            Err(err) => warn!("skipping pack {}: {}", path.display(), err),
        }
    }
    catalog
}

fn init_file_logging(filter: EnvFilter) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::data_dir()
        .map(|dir| dir.join("selah"))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "selah.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(guard)
}
