//! Module implementing logging for the application.
//!
//! Records from the `log` crate are routed into `slog`
//! and written to standard error.

use std::env;
use std::sync::Mutex;

use log::SetLoggerError;
use slog::{Drain, FilterLevel, Logger};
use slog_envlogger::LogBuilder;
use slog_scope::GlobalLoggerGuard;


/// Environment variable with additional logging directives.
const LOG_DIRECTIVES_VAR: &str = "RUST_LOG";


/// Initialize logging with given verbosity.
///
/// The returned guard must be held for as long as logging is needed.
pub fn init(verbosity: isize) -> Result<GlobalLoggerGuard, SetLoggerError> {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build();

    let mut builder = LogBuilder::new(drain).filter(None, filter_level(verbosity));
    if let Ok(directives) = env::var(LOG_DIRECTIVES_VAR) {
        builder = builder.parse(&directives);
    }
    let drain = Mutex::new(builder.build().fuse());

    let guard = slog_scope::set_global_logger(Logger::root(drain.fuse(), slog::o!()));
    slog_stdlog::init()?;
    Ok(guard)
}


/// Maximum level of log records to show for given verbosity.
fn filter_level(verbosity: isize) -> FilterLevel {
    match verbosity {
        v if v <= -3 => FilterLevel::Critical,
        -2 => FilterLevel::Error,
        -1 => FilterLevel::Warning,
        0 => FilterLevel::Info,
        1 => FilterLevel::Debug,
        _ => FilterLevel::Trace,
    }
}
