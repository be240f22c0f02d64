//! Ctrl-C handling.
//!
//! Once the handler is installed, SIGINT no longer kills the process. It raises
//! an [`InterruptFlag`] instead, and the orchestrator checks that flag between
//! iterations so the run can stop and still clean up its marker files.

use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

/// Shared flag raised when the user interrupts the run.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Listens for Ctrl-C on a background thread and raises the returned flag.
///
/// # Errors
/// * If the signal runtime or the listener thread cannot be created
pub fn install_ctrl_c_handler() -> io::Result<InterruptFlag> {
    let flag = InterruptFlag::new();
    let listener = flag.clone();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        tracing::info!("received SIGINT");
                        listener.raise();
                    }
                    Err(error) => tracing::warn!(%error, "failed to listen for Ctrl+C"),
                }
            });
        })?;

    Ok(flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_shared_between_clones() {
        let flag = InterruptFlag::new();
        let clone = flag.clone();
        assert!(!flag.is_raised());

        clone.raise();
        assert!(flag.is_raised());
    }
}
