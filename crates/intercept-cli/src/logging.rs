//! Tracing setup for the CLI binaries.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Targets logged at info level unless `RUST_LOG` says otherwise: this
/// library and the `intercept` binary.
pub const DEFAULT_DIRECTIVES: [&str; 2] = ["intercept_cli=info", "intercept=info"];

pub fn env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

/// Install a stderr fmt subscriber so stdout carries only reports.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter()?)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_binary_and_library() {
        for directive in DEFAULT_DIRECTIVES {
            assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
        }
        assert!(DEFAULT_DIRECTIVES.contains(&"intercept=info"));
        assert!(DEFAULT_DIRECTIVES.contains(&"intercept_cli=info"));
    }
}
