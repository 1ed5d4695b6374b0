//! Course planner entry point.
//!
//! # Responsibility
//! - Assemble startup configuration and optional logging.
//! - Wire stdin/stdout into one interactive session over the configured
//!   catalog file.

use advisor_core::{init_logging, AppConfig, FileSource, Session};
use std::io;

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();

    // Logging is opt-in: without a configured directory the log macros in
    // core stay no-ops.
    if let Some(log_dir) = config.log_dir.as_deref() {
        let log_dir = log_dir.to_string_lossy();
        if let Err(err) = init_logging(&config.log_level, log_dir.as_ref()) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let source = FileSource::new(&config.catalog_path);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(source, stdin.lock(), stdout.lock());
    session.run()
}
