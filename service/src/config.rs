use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default pause between two frames of an event stream.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 1000;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:4000,http://127.0.0.1:4000"
    )]
    pub allowed_origins: Vec<String>,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Directory served under the `/static` path prefix
    #[arg(long, env, default_value = "static")]
    static_dir: PathBuf,

    /// Directory holding the `index.html` page served at `/`
    #[arg(long, env, default_value = "static")]
    templates_dir: PathBuf,

    /// Milliseconds to wait between two frames of an event stream
    #[arg(long, env, default_value_t = DEFAULT_FRAME_INTERVAL_MS)]
    frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn set_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn set_templates_dir(mut self, templates_dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = templates_dir.into();
        self
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    pub fn set_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
