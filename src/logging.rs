//! Logger setup for the binary
//!
//! The library only talks to the `log` facade; `main` calls
//! [`init_logging`] once to route records through `env_logger`.

use std::sync::Once;

/// When log lines on stderr are colored (`--color`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for env_logger::WriteStyle {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => env_logger::WriteStyle::Auto,
            ColorMode::Always => env_logger::WriteStyle::Always,
            ColorMode::Never => env_logger::WriteStyle::Never,
        }
    }
}

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "shapes_album=debug").
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub color: ColorMode,
}

impl LoggingConfig {
    /// Filter to apply, given the value of `RUST_LOG` if it is set
    ///
    /// An explicit filter wins over the environment; with neither, only
    /// warnings and errors are shown, which includes rejected script lines.
    pub fn effective_filter(&self, env: Option<String>) -> String {
        self.filter
            .clone()
            .or(env)
            .unwrap_or_else(|| "warn".to_string())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.effective_filter(std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.color.into())
            .init();

        log::debug!("logging initialized with filter '{}'", filter);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_filter_beats_environment() {
        let config = LoggingConfig {
            filter: Some("debug".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.effective_filter(Some("error".to_string())), "debug");
    }

    #[test]
    fn test_environment_then_warn() {
        let config = LoggingConfig::default();
        assert_eq!(
            config.effective_filter(Some("shapes_album=info".to_string())),
            "shapes_album=info"
        );
        assert_eq!(config.effective_filter(None), "warn");
    }

    #[test]
    fn test_color_mode_maps_to_write_style() {
        assert_eq!(ColorMode::default(), ColorMode::Auto);
        assert!(matches!(
            env_logger::WriteStyle::from(ColorMode::Always),
            env_logger::WriteStyle::Always
        ));
        assert!(matches!(
            env_logger::WriteStyle::from(ColorMode::Never),
            env_logger::WriteStyle::Never
        ));
        assert!(matches!(
            env_logger::WriteStyle::from(ColorMode::Auto),
            env_logger::WriteStyle::Auto
        ));
    }
}
