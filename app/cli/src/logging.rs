//! FILENAME: app/cli/src/logging.rs
// PURPOSE: Logging setup for the command-line front end.
// FORMAT: seq|level|category|message (category is the log target)

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global sequence counter for log lines
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default filter for a `-v` count. `RUST_LOG` still takes precedence.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr. Stdout stays free for previews and
/// for streaming the generated workbook.
pub fn init(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbosity));
    let result = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}|{}|{}|{}",
                next_seq(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if let Err(e) = result {
        eprintln!("[LOG_INIT] FAILED: {}", e);
    }
}
