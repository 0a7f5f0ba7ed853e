// src/log.rs
//
// Thin macro layer over the `log` facade. Library code logs through these;
// the binary decides where lines go (see `init`).
#[cfg(feature = "cli")]
use std::{sync::OnceLock, time::Instant};

#[cfg(feature = "cli")]
static START: OnceLock<Instant> = OnceLock::new();

#[cfg(feature = "cli")]
fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install `env_logger` with the `[hh:mm:ss.mmm][LEVEL] msg` line format.
/// `RUST_LOG` wins over `default_level` when set.
#[cfg(feature = "cli")]
pub fn init(default_level: &str) {
    use std::io::Write;

    start();
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}
