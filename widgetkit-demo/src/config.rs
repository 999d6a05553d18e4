//! Demo host configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use simplelog::LevelFilter;

/// Command line of the demo host.
#[derive(Debug, Parser)]
#[command(name = "widgetkit-demo")]
#[command(version, about = "Drive the widgetkit sample screen from stdin", long_about = None)]
pub struct DemoArgs {
    /// How long the submit button stays loading, in milliseconds
    #[arg(
        long = "delay-ms",
        value_name = "MS",
        default_value = "5000",
        value_parser = parse_millis
    )]
    pub delay: Duration,

    /// File the log is written to
    #[arg(long, default_value = "widgetkit-demo.log")]
    pub log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "debug", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Complete every transition immediately
    #[arg(long)]
    pub reduced_motion: bool,

    /// Width of the area frames are laid out in
    #[arg(long, default_value_t = 60)]
    pub width: u16,

    /// Height of the area frames are laid out in
    #[arg(long, default_value_t = 24)]
    pub height: u16,
}

fn parse_millis(value: &str) -> Result<Duration, String> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| format!("expected milliseconds, got '{value}'"))
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(value).map_err(|_| format!("unknown log level '{value}'"))
}

/// Settings for the demo host.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// How long the processing task keeps the button loading.
    pub delay: Duration,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Complete every transition immediately.
    pub reduced_motion: bool,
    /// Size of the area frames are laid out in.
    pub width: u16,
    pub height: u16,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(5000),
            log_file: PathBuf::from("widgetkit-demo.log"),
            log_level: LevelFilter::Debug,
            reduced_motion: false,
            width: 60,
            height: 24,
        }
    }
}

impl From<DemoArgs> for DemoConfig {
    fn from(args: DemoArgs) -> Self {
        Self {
            delay: args.delay,
            log_file: args.log_file,
            log_level: args.log_level,
            reduced_motion: args.reduced_motion,
            width: args.width,
            height: args.height,
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<DemoConfig, clap::Error> {
        let argv = std::iter::once("widgetkit-demo").chain(args.iter().copied());
        DemoArgs::try_parse_from(argv).map(DemoConfig::from)
    }

    #[test]
    fn defaults_match_config_default() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.delay, Duration::from_secs(5));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.reduced_motion);
    }

    #[test]
    fn all_flags() {
        let config = parse(&[
            "--delay-ms",
            "250",
            "--log-file",
            "/tmp/demo.log",
            "--log-level",
            "warn",
            "--reduced-motion",
            "--width",
            "80",
            "--height",
            "30",
        ])
        .unwrap();

        assert_eq!(
            config,
            DemoConfig {
                delay: Duration::from_millis(250),
                log_file: PathBuf::from("/tmp/demo.log"),
                log_level: LevelFilter::Warn,
                reduced_motion: true,
                width: 80,
                height: 30,
            }
        );
    }

    #[test]
    fn equals_form_is_accepted() {
        let config = parse(&["--delay-ms=100", "--log-level=info"]).unwrap();
        assert_eq!(config.delay, Duration::from_millis(100));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn width_and_height_are_independent() {
        let config = parse(&["--height", "10"]).unwrap();
        assert_eq!((config.width, config.height), (60, 10));

        let config = parse(&["--width", "40"]).unwrap();
        assert_eq!((config.width, config.height), (40, 24));
    }

    #[test]
    fn help_is_reported_not_rejected() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn flag_is_not_taken_as_a_value() {
        let err = parse(&["--log-file", "--reduced-motion"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            parse(&["--bogus"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["--delay-ms", "soon"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--log-level", "loud"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--width", "wide"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
    }
}
