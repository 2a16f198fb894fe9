use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 5] = ["kana", "kana_core", "kana_ui", "kana_speech", "kana_lang_japanese"];

/// Installs the global subscriber. Logs go to stderr, the console owns stdout.
pub fn init_logging(json: bool) {
    let filter = build_env_filter("info");

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(atty::is(atty::Stream::Stderr))
                    .with_target(false),
            )
            .init();
    }
}

/// `RUST_LOG` wins; otherwise our crates log at `level` and dependencies at warn
fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}
