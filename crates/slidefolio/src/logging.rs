use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level.
fn directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "slidefolio=debug,warn",
        _ => "slidefolio=trace,info",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the CLI flags.
pub fn init(verbose: u8, quiet: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose, quiet)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(verbose > 1)
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_levels() {
        assert_eq!(directive(0, false), "warn");
        assert_eq!(directive(1, false), "slidefolio=debug,warn");
        assert_eq!(directive(3, false), "slidefolio=trace,info");
        assert_eq!(directive(2, true), "error");
    }
}
