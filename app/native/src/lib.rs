//! Snapdock - magnetic window docking engine.
//!
//! This library is the native core of the Snapdock desktop shell. It
//! decides whether and how dragged windows snap: in-workspace windows
//! against the workspace edges and each other, and native top-level
//! windows against the screen work area. Rendering, drag input, and the
//! window relay live in the shell; the engine exchanges plain data with
//! them.

// Core modules
pub mod config;
pub mod constants;
pub mod docking;
pub mod error;
pub mod events;
pub mod store;

/// Initializes the tracing subscriber for the embedding shell.
///
/// Respects `RUST_LOG`; defaults to `info` when unset. Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
