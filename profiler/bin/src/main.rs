#![doc = include_str!("../README.md")]

mod log;

use profiler_collections::{constants::REPEAT, Suite};
use profiler_lib::{Config, Profiler};

/// What `main()` does:
/// 1. Initialize logging
/// 2. Build the fixtures
/// 3. Profile every benchmark, printing one line each
///
/// A panic inside a benchmark aborts the process,
/// an I/O error on stdout exits with a non-zero code.
fn main() -> anyhow::Result<()> {
    log::init_logger();

    let mut profiler = Profiler::stdout(Config::new());
    let mut suite = Suite::<REPEAT>::new();

    suite.run(&mut profiler)?;

    Ok(())
}
