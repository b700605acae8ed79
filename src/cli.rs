use clap::Parser;

use crate::config::{ColorMode, Config};
use crate::env::MiniunitEnv;

/// Run the miniunit smoke suite.
///
/// Exits with status 1 on the first failed assertion.
///
/// ENVIRONMENT VARIABLES:
///     MINIUNIT_COLOR               auto, always or never
///     MINIUNIT_ELAPSED_PRECISION   fractional digits of elapsed times (3 to 6)
///     NO_COLOR                     Set to disable colored output
#[derive(Parser, Debug)]
#[command(name = "miniunit", version)]
pub struct Opt {
    /// When to color output. Overrides MINIUNIT_COLOR and NO_COLOR.
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Number of fractional digits in elapsed-time lines, 3 to 6.
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Number of threads asserting concurrently in the "Parallel" case.
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub threads: usize,

    /// Finish the suite with a deliberately failing assertion.
    #[arg(long)]
    pub fail: bool,
}

impl Opt {
    /// Command-line options take precedence over the environment.
    pub fn config(&self, env: &MiniunitEnv) -> Config {
        let mut config = Config::from_env(env);
        if let Some(color_mode) = self.color {
            config = config.with_color_mode(color_mode);
        }
        if let Some(precision) = self.precision {
            config = config.with_elapsed_precision(precision);
        }
        config
    }
}
