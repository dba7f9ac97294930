//! Diagnostics setup for the `voxsculpt` binary

use env_logger::{Builder, Env, Target};

/// Route `log` records to stderr, filtered at `info` unless `RUST_LOG` says otherwise.
///
/// Stdout stays free for the `--print` plane dump. Clipped-coordinate
/// reports are emitted at `debug`, so run with `RUST_LOG=voxsculpt=debug`
/// to see every rejected cell.
///
/// ```no_run
/// voxsculpt::core::logging::init();
/// log::debug!("shown only when RUST_LOG enables debug");
/// ```
pub fn init() {
    builder(Env::default()).init();
}

fn builder(env: Env) -> Builder {
    let mut builder = Builder::from_env(env.default_filter_or("info"));
    builder.target(Target::Stderr).format_timestamp(None);
    builder
}
