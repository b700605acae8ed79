use std::str::FromStr;

use crate::env::MiniunitEnv;

pub const DEFAULT_ELAPSED_PRECISION: usize = 3;
pub const MIN_ELAPSED_PRECISION: usize = 3;
pub const MAX_ELAPSED_PRECISION: usize = 6;

/// When to wrap reporter lines in ANSI escape sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when standard output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!("Invalid color mode: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub color_mode: ColorMode,
    /// Number of fractional digits in the elapsed-time line.
    pub elapsed_precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            elapsed_precision: DEFAULT_ELAPSED_PRECISION,
        }
    }
}

impl Config {
    /// `MINIUNIT_COLOR` wins over `NO_COLOR`; unparsable values are ignored.
    pub fn from_env(env: &MiniunitEnv) -> Self {
        let color_mode = env
            .color
            .as_deref()
            .and_then(|s| s.parse::<ColorMode>().ok())
            .unwrap_or(if env.no_color.is_some() {
                ColorMode::Never
            } else {
                ColorMode::Auto
            });
        let elapsed_precision = env
            .elapsed_precision
            .as_deref()
            .and_then(|s| s.parse::<usize>().ok())
            .map(clamp_precision)
            .unwrap_or(DEFAULT_ELAPSED_PRECISION);
        Self {
            color_mode,
            elapsed_precision,
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn with_elapsed_precision(mut self, precision: usize) -> Self {
        self.elapsed_precision = clamp_precision(precision);
        self
    }

    /// Whether output should be colored, given whether it is attached to a terminal.
    pub fn use_color(&self, is_term: bool) -> bool {
        if cfg!(feature = "no-color") {
            return false;
        }
        match self.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_term,
        }
    }
}

fn clamp_precision(precision: usize) -> usize {
    precision.clamp(MIN_ELAPSED_PRECISION, MAX_ELAPSED_PRECISION)
}
