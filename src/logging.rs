//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub fn default_directives(debug: bool) -> &'static str {
    if debug {
        "therapist_gateway=debug,warp=info"
    } else {
        "therapist_gateway=info,warp=info"
    }
}

/// Install the global fmt subscriber; `RUST_LOG` takes precedence
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
