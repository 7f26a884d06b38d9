mod resolver;

pub use resolver::*;

/// Install the `env_logger` backend (stderr, `RUST_LOG`, default `info`).
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .try_init();
}
