/// Initializes `env_logger` for the binary.
///
/// Verbose runs log at `Debug`, otherwise `Info`. `RUST_LOG` still overrides
/// per-module levels.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();
}
