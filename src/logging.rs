use std::{fs::OpenOptions, io, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use crossterm::{execute, terminal::LeaveAlternateScreen};
use tracing_subscriber::EnvFilter;

/// Send tracing output to `path`.
///
/// The terminal belongs to the game screen, so without a file nothing is
/// logged. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    // RUST_LOG=grid_snake=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Put the terminal back before the default panic output, and record the panic
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("<non-string panic payload>");

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "<unknown>".to_string());

        tracing::error!(%location, %payload, "panic");
        default_hook(info);
    }));
}
