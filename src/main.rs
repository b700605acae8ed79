use std::process;
use std::thread;

use anyhow::{anyhow, Result};
use clap::Parser;

use miniunit::cli::Opt;
use miniunit::env::MiniunitEnv;
use miniunit::{expect, AssertionFailed, Reporter};

fn main() {
    let opt = Opt::parse();
    let config = opt.config(&MiniunitEnv::init());
    let reporter = Reporter::stdout(&config);

    if let Err(error) = run_smoke_suite(&reporter, &opt) {
        match error.downcast_ref::<AssertionFailed>() {
            Some(failure) => miniunit::fatal(failure),
            None => {
                eprintln!("{}", error);
                process::exit(2);
            }
        }
    }
    reporter.finish();
}

fn run_smoke_suite<W>(reporter: &Reporter<W>, opt: &Opt) -> Result<()>
where
    W: std::io::Write + Send,
{
    reporter.begin_case("Arithmetic");
    expect!(in reporter, "addition", 1 + 1 == 2)?;
    expect!(in reporter, "integer division truncates", 7 / 2 == 3)?;
    expect!(in reporter, "checked overflow", 255u8.checked_add(1).is_none())?;

    reporter.begin_case("Strings");
    let name = "miniunit";
    expect!(in reporter, "length", name.len() == 8)?;
    expect!(in reporter, "uppercase", name.to_uppercase() == "MINIUNIT")?;

    reporter.begin_case("Parallel");
    let results = thread::scope(|s| {
        let handles: Vec<_> = (0..opt.threads)
            .map(|i| {
                s.spawn(move || expect!(in reporter, format!("worker {}", i), i < opt.threads))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("assertion thread panicked")))
            .collect::<Result<Vec<_>>>()
    })?;
    for result in results {
        result?;
    }
    expect!(in reporter, "every worker was counted", reporter.item_count() == opt.threads)?;

    if opt.fail {
        reporter.begin_case("Deliberate failure");
        expect!(in reporter, "one equals two", 1 == 2)?;
    }
    Ok(())
}
