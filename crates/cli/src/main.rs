use std::{
    fs::{OpenOptions, create_dir_all},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use jobdeck_api::{HttpNavigationSource, MockNavigationSource, NavigationSource};
use jobdeck_util::{Settings, app_file_path};
use tracing_subscriber::EnvFilter;

const LOG_PATH_ENV: &str = "JOBDECK_LOG_PATH";
const LOG_FILE_NAME: &str = "jobdeck.log";

/// Job board dashboard for the terminal.
#[derive(Parser, Debug)]
#[command(name = "jobdeck", version, about)]
struct Args {
    /// Job postings per feed page
    #[arg(long)]
    page_size: Option<usize>,

    /// Base URL of a navigation backend; the built-in mock is used when absent
    #[arg(long)]
    api_base: Option<String>,

    /// Latency of the built-in mock source, in milliseconds
    #[arg(long)]
    api_delay_ms: Option<u64>,

    /// Settings file (defaults to JOBDECK_CONFIG_PATH, then the config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Flags win over the settings file and the environment.
    fn apply(&self, settings: &mut Settings) {
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        if let Some(base) = self.api_base.as_ref() {
            settings.api_base = Some(base.clone());
        }
        if let Some(delay) = self.api_delay_ms {
            settings.api_delay_ms = delay;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let mut settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    args.apply(&mut settings);
    settings.validate().context("invalid command-line settings")?;

    let source = build_source(&settings)?;
    jobdeck_tui::run(settings, source).await
}

/// Logs go to a file; the terminal belongs to the TUI.
fn init_tracing() -> Result<()> {
    let path = app_file_path(LOG_PATH_ENV, LOG_FILE_NAME);
    if let Some(parent) = path.parent() {
        create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn build_source(settings: &Settings) -> Result<Arc<dyn NavigationSource>> {
    match settings.api_base.as_deref() {
        Some(base) => {
            let source = HttpNavigationSource::new(base, settings.api_token.as_deref())
                .with_context(|| format!("cannot use navigation API at {base}"))?;
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(MockNavigationSource::with_delay(Duration::from_millis(settings.api_delay_ms)))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let args = Args::try_parse_from(["jobdeck", "--page-size", "3", "--api-delay-ms", "0"]).expect("parse");
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings.page_size, 3);
        assert_eq!(settings.api_delay_ms, 0);
        assert_eq!(settings.api_base, None);
    }

    #[test]
    fn zero_page_size_is_rejected_after_flags() {
        let args = Args::try_parse_from(["jobdeck", "--page-size", "0"]).expect("parse");
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn non_numeric_page_size_fails_to_parse() {
        assert!(Args::try_parse_from(["jobdeck", "--page-size", "six"]).is_err());
    }

    #[test]
    fn source_selection_follows_api_base() {
        let mut settings = Settings::default();
        assert!(build_source(&settings).expect("mock").describe().starts_with("mock"));

        settings.api_base = Some("http://localhost:8080".into());
        let http = build_source(&settings).expect("http");
        assert!(http.describe().contains("localhost:8080"));

        settings.api_base = Some("http://example.com".into());
        assert!(build_source(&settings).is_err());
    }
}
