#![forbid(unsafe_code)]

//! Command-line argument parsing for the swatch demo.
//!
//! Parses args by hand. Supports environment variable overrides via the
//! `SWATCH_DEMO_*` prefix.

use std::env;
use std::fmt;
use std::num::NonZeroUsize;
use std::process;

use swatch_widgets::TitleStyle;
use swatch_widgets::config::DEFAULT_PAGE_SIZE;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Swatch Demo - scripted run of the paged color panel

USAGE:
    swatch-demo [OPTIONS]

OPTIONS:
    --page-size=N        Entries visible at once (default: 9)
    --title=TEXT         Simple title (default: Color)
    --style=STYLE        Title style: 'none', 'simple' (default) or 'name'
    --no-count           Hide the '(i of n)' suffix
    --width=W            Panel width (default: 431)
    --script=KEYS        One frame per character (default: '>>>><<.')
    --help, -h           Show this help message
    --version, -V        Show version

SCRIPT KEYS:
    >  Right         <  Left
    ]  Right bumper  [  Left bumper
    +  Widen by 40   -  Narrow by 40
    .  Idle frame    any other character is sent as a key press
    (q and e page left and right with the default bindings)

ENVIRONMENT VARIABLES:
    SWATCH_DEMO_PAGE_SIZE     Override --page-size
    SWATCH_DEMO_TITLE         Override --title
    SWATCH_DEMO_STYLE         Override --style
    SWATCH_DEMO_WIDTH         Override --width
    SWATCH_DEMO_SCRIPT        Override --script
    RUST_LOG                  Log filter (default: warn)";

const DEFAULT_SCRIPT: &str = ">>>><<.";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    pub page_size: NonZeroUsize,
    pub title: String,
    pub style: TitleStyle,
    pub show_count: bool,
    pub width: f32,
    pub script: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            title: "Color".into(),
            style: TitleStyle::Simple,
            show_count: true,
            width: 431.0,
            script: DEFAULT_SCRIPT.into(),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// A rejected argument or environment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
    UnknownArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { key, value } => write!(f, "Invalid {key} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_page_size(key: &str, val: &str) -> Result<NonZeroUsize, ConfigError> {
    val.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_owned(),
        value: val.to_owned(),
    })
}

fn parse_width(key: &str, val: &str) -> Result<f32, ConfigError> {
    match val.parse::<f32>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            value: val.to_owned(),
        }),
    }
}

fn parse_style(key: &str, val: &str) -> Result<TitleStyle, ConfigError> {
    match val {
        "none" => Ok(TitleStyle::None),
        "simple" => Ok(TitleStyle::Simple),
        "name" | "color-name" | "color_name" => Ok(TitleStyle::ColorName),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            value: val.to_owned(),
        }),
    }
}

impl Opts {
    /// Parse the process arguments and environment, exiting on help, version
    /// or bad input.
    pub fn parse() -> Self {
        let args = env::args().skip(1);
        match Self::from_sources(args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("swatch-demo {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` on top of environment values read through `var`.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn from_sources<I, F>(args: I, var: F) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = var("SWATCH_DEMO_PAGE_SIZE") {
            opts.page_size = parse_page_size("SWATCH_DEMO_PAGE_SIZE", &val)?;
        }
        if let Some(val) = var("SWATCH_DEMO_TITLE") {
            opts.title = val;
        }
        if let Some(val) = var("SWATCH_DEMO_STYLE") {
            opts.style = parse_style("SWATCH_DEMO_STYLE", &val)?;
        }
        if let Some(val) = var("SWATCH_DEMO_WIDTH") {
            opts.width = parse_width("SWATCH_DEMO_WIDTH", &val)?;
        }
        if let Some(val) = var("SWATCH_DEMO_SCRIPT") {
            opts.script = val;
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--no-count" => opts.show_count = false,
                other => {
                    if let Some(val) = other.strip_prefix("--page-size=") {
                        opts.page_size = parse_page_size("--page-size", val)?;
                    } else if let Some(val) = other.strip_prefix("--title=") {
                        opts.title = val.to_owned();
                    } else if let Some(val) = other.strip_prefix("--style=") {
                        opts.style = parse_style("--style", val)?;
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = parse_width("--width", val)?;
                    } else if let Some(val) = other.strip_prefix("--script=") {
                        opts.script = val.to_owned();
                    } else {
                        return Err(ConfigError::UnknownArgument(other.to_owned()));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}
