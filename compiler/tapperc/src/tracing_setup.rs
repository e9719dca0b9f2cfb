//! Tracing subscriber installation for the CLI.
//!
//! Filtering comes from `TAPPER_LOG` (falling back to `RUST_LOG`), e.g.
//! `TAPPER_LOG=tapper_lexer=trace`. Setting `TAPPER_LOG_TREE` switches to a
//! hierarchical span view. Nothing is installed when no filter is set.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TAPPER_LOG";

/// Environment variable enabling the hierarchical layer.
pub const LOG_TREE_ENV: &str = "TAPPER_LOG_TREE";

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = match std::env::var(LOG_ENV) {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
            Err(_) => return,
        };

        if std::env::var_os(LOG_TREE_ENV).is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
