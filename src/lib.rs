//! A tiny fail-fast unit-testing helper.
//!
//! ```no_run
//! use miniunit::{expect, test_case};
//!
//! test_case!("Arithmetic");
//! expect!("addition", 1 + 1 == 2);
//! expect!("subtraction", 3 - 1 == 2);
//! ```
//!
//! Each case is printed as `(<case>) <name>`, each assertion as
//! `(<case>-<item>) [Passed] <description>` or, with the condition's source
//! text and location, `[Failed]`. The process exits with status 1 on the
//! first failure.

pub mod cli;
pub mod color;
pub mod config;
pub mod env;
pub mod errors;
pub mod reporter;

use std::io::Stdout;

use lazy_static::lazy_static;

pub use crate::color::Color;
pub use crate::config::{ColorMode, Config};
pub use crate::errors::AssertionFailed;
pub use crate::reporter::{Assertion, Reporter};

lazy_static! {
    static ref REPORTER: Reporter<Stdout> =
        Reporter::stdout(&Config::from_env(&env::MiniunitEnv::init()));
}

/// The process-wide reporter used by `test_case!` and `expect!`, configured
/// from the environment on first use.
pub fn reporter() -> &'static Reporter<Stdout> {
    &REPORTER
}

/// Terminate the run after a failed assertion has been reported.
pub fn fatal(failure: &AssertionFailed) -> ! {
    #[cfg(not(test))]
    {
        use std::process;
        eprintln!("{}", failure);
        process::exit(1);
    }
    #[cfg(test)]
    panic!("{}\n", failure);
}

/// Start a case on the process-wide reporter; evaluates to `name`, which may
/// be anything implementing `AsRef<str>`.
#[macro_export]
macro_rules! test_case {
    ($name:expr $(,)?) => {{
        let name = $name;
        $crate::reporter().begin_case(::std::convert::AsRef::<str>::as_ref(&name));
        name
    }};
}

/// Report an assertion.
///
/// `expect!(description, condition)` uses the process-wide reporter and
/// exits the process if `condition` is false.
///
/// `expect!(in reporter, description, condition)` uses the given reporter
/// and evaluates to `Result<(), AssertionFailed>`.
#[macro_export]
macro_rules! expect {
    (in $reporter:expr, $description:expr, $condition:expr $(,)?) => {
        $reporter.assert(&$crate::Assertion {
            description: ::std::convert::AsRef::<str>::as_ref(&$description),
            expression: stringify!($condition),
            file: file!(),
            line: line!(),
            passed: $condition,
        })
    };
    ($description:expr, $condition:expr $(,)?) => {
        if let ::std::result::Result::Err(failure) =
            $crate::expect!(in $crate::reporter(), $description, $condition)
        {
            $crate::fatal(&failure);
        }
    };
}
