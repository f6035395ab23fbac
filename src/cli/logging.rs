use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command line switches
pub fn level_for(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) -> LevelFilter {
    // Logs go to stderr so a TOC printed on stdout can be piped
    if let Err(e) = SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .env()
        .init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }

    level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(false, true), LevelFilter::Error);
        // debug wins over quiet
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }
}
