//! The test reporter: case and item counters, colorized line output and
//! elapsed time between cases.
//!
//! A [`Reporter`] owns its writer behind a single mutex, so counter updates
//! and the line they produce are serialized together and lines from
//! concurrent callers never interleave mid-line.

use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use console::Term;

use crate::color::Color;
use crate::config::Config;
use crate::errors::AssertionFailed;

/// One evaluated assertion, as captured at the call site by `expect!`.
#[derive(Clone, Copy, Debug)]
pub struct Assertion<'a> {
    pub description: &'a str,
    /// Source text of the condition.
    pub expression: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub passed: bool,
}

impl Assertion<'_> {
    fn to_failure(&self) -> AssertionFailed {
        AssertionFailed {
            description: self.description.to_string(),
            expression: self.expression.to_string(),
            file: self.file.to_string(),
            line: self.line,
        }
    }
}

struct State<W> {
    case_count: usize,
    case_name: String,
    item_count: usize,
    last_case_start: Option<Instant>,
    writer: W,
}

pub struct Reporter<W: Write> {
    state: Mutex<State<W>>,
    color: bool,
    elapsed_precision: usize,
}

impl Reporter<Stdout> {
    /// A reporter writing to standard output; `ColorMode::Auto` colors only
    /// when stdout is a terminal.
    pub fn stdout(config: &Config) -> Self {
        Self::new(io::stdout(), config, Term::stdout().is_term())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, config: &Config, is_term: bool) -> Self {
        Self {
            state: Mutex::new(State {
                case_count: 0,
                case_name: String::new(),
                item_count: 0,
                last_case_start: None,
                writer,
            }),
            color: config.use_color(is_term),
            elapsed_precision: config.elapsed_precision,
        }
    }

    /// Start a new case named `name` and return `name`.
    ///
    /// Reports the time spent in the previous case, if there was one, then
    /// prints `(<case>) <name>` in cyan.
    pub fn begin_case<'a>(&self, name: &'a str) -> &'a str {
        let mut state = self.lock();
        let now = Instant::now();
        let previous_start = state.last_case_start.replace(now);
        if let Some(start) = previous_start {
            self.write_elapsed(&mut state, now.duration_since(start).as_secs_f64());
        }
        state.case_count += 1;
        state.item_count = 0;
        state.case_name.clear();
        state.case_name.push_str(name);
        let case_count = state.case_count;
        self.write_line(
            &mut state,
            Color::Cyan,
            format_args!("({}) {}", case_count, name),
        );
        name
    }

    /// Count and report one assertion.
    ///
    /// A failed assertion is reported and then returned as `Err`, after the
    /// lock is released; terminating the run is up to the caller.
    pub fn assert(&self, assertion: &Assertion<'_>) -> Result<(), AssertionFailed> {
        {
            let mut state = self.lock();
            state.item_count += 1;
            let (case_count, item_count) = (state.case_count, state.item_count);
            if assertion.passed {
                self.write_line(
                    &mut state,
                    Color::Green,
                    format_args!(
                        "  ({}-{}) [Passed] {}",
                        case_count, item_count, assertion.description
                    ),
                );
            } else {
                self.write_line(
                    &mut state,
                    Color::Red,
                    format_args!(
                        "  ({}-{}) [Failed] {} ({}) [{}:{}]",
                        case_count,
                        item_count,
                        assertion.description,
                        assertion.expression,
                        assertion.file,
                        assertion.line
                    ),
                );
            }
        }
        if assertion.passed {
            Ok(())
        } else {
            Err(assertion.to_failure())
        }
    }

    /// Write one line in `color` and flush.
    pub fn log(&self, color: Color, args: fmt::Arguments<'_>) {
        let mut state = self.lock();
        self.write_line(&mut state, color, args);
    }

    /// Report the time spent in the case in progress, if any.
    pub fn finish(&self) {
        let mut state = self.lock();
        let start = state.last_case_start.take();
        if let Some(start) = start {
            self.write_elapsed(&mut state, start.elapsed().as_secs_f64());
        }
    }

    pub fn case_count(&self) -> usize {
        self.lock().case_count
    }

    pub fn case_name(&self) -> String {
        self.lock().case_name.clone()
    }

    pub fn item_count(&self) -> usize {
        self.lock().item_count
    }

    pub fn into_writer(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    // Every mutation leaves the state consistent, so a panic elsewhere while
    // holding the lock does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, State<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_elapsed(&self, state: &mut State<W>, seconds: f64) {
        let precision = self.elapsed_precision;
        self.write_line(
            state,
            Color::None,
            format_args!("  Elapsed time {:.*}sec.", precision, seconds),
        );
    }

    // Output is best effort: a closed stdout must not turn a passing
    // assertion into a failure.
    fn write_line(&self, state: &mut State<W>, color: Color, args: fmt::Arguments<'_>) {
        let line = if self.color {
            color.paint(&args.to_string())
        } else {
            args.to_string()
        };
        let _ = writeln!(state.writer, "{}", line);
        let _ = state.writer.flush();
    }
}
