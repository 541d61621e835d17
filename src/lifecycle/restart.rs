//! Process restart: the mechanism that applies rule changes.

/// Terminate the process immediately.
///
/// Relies on an external supervisor to relaunch the executable; on relaunch
/// the route binder re-reads the store and binds routes reflecting every
/// mutation made since the last start. In-flight requests are dropped —
/// an accepted tradeoff, not an error path.
pub fn restart() -> ! {
    tracing::info!("Restart requested, exiting for supervisor relaunch");
    std::process::exit(0);
}
