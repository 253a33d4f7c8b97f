//! Host capability
//!
//! Whether this host can run the binding at all. The host answer is process
//! state: checked once, on first use, and shared by every facade built with
//! [`Capability::host`].

use std::sync::{Arc, OnceLock};

use tracing::info;

static HOST: OnceLock<Capability> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct Capability(Arc<OnceLock<bool>>);

impl Capability {
    /// The process-wide answer
    pub fn host() -> Self {
        HOST.get_or_init(Self::default).clone()
    }

    /// An answer of its own, for facades over collaborators that are not the
    /// host's (tests, simulators)
    pub fn isolated() -> Self {
        Self::default()
    }

    /// Cached answer, running `check` if nobody asked before
    pub fn get_or_check(&self, check: impl FnOnce() -> bool) -> bool {
        *self.0.get_or_init(|| {
            let supported = check();
            info!("Secure key storage supported: {}", supported);
            supported
        })
    }

    /// Cached answer without checking
    #[cfg(test)]
    pub fn cached(&self) -> Option<bool> {
        self.0.get().copied()
    }

    #[cfg(test)]
    pub(crate) fn shares_answer_with(&self, other: &Capability) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
