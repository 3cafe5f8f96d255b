use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{self, ConfigBuilder};

/// Modules to filter out from logging when not in Trace mode.
/// The HTTP stack logs every connection and chunk, which drowns out stream lifecycle logs.
const FILTERED_MODULES: &[&str] = &["tower", "tower_http", "hyper", "axum", "mio"];

pub struct Logger {}

impl Logger {
    /// Installs the global terminal logger at the configured level.
    ///
    /// Fails if a global logger has already been set.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let level = config.log_level_filter;
        let log_config = Self::build_log_config(Self::should_filter_dependencies(level));

        simplelog::TermLogger::init(
            level,
            log_config,
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )
    }

    /// Trace shows everything, every other level hides the HTTP stack.
    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(apply_filters: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder
            .set_time_format_rfc3339()
            .set_target_level(LevelFilter::Error)
            .set_thread_level(LevelFilter::Off);

        if apply_filters {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_modules_contains_http_stack() {
        for module in ["tower", "tower_http", "hyper", "axum", "mio"] {
            assert!(
                FILTERED_MODULES.contains(&module),
                "{module} should be filtered"
            );
        }
    }

    #[test]
    fn test_filtered_modules_never_hide_stream_logs() {
        assert!(!FILTERED_MODULES.contains(&"sse"));
        assert!(!FILTERED_MODULES.contains(&"web"));
    }

    #[test]
    fn test_trace_level_disables_filtering() {
        assert!(!Logger::should_filter_dependencies(LevelFilter::Trace));
    }

    #[test]
    fn test_other_levels_enable_filtering() {
        for level in [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
        ] {
            assert!(
                Logger::should_filter_dependencies(level),
                "{level} should enable filtering"
            );
        }
    }
}
