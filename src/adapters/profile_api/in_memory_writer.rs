//! In-memory profile writer for tests and offline runs.
//!
//! Records every update it receives and can be primed to fail the next call.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::DomainError;
use crate::ports::{ProfileRiskUpdate, RiskProfileWriter};

#[derive(Default)]
struct WriterState {
    saved: Vec<ProfileRiskUpdate>,
    next_error: Option<DomainError>,
}

/// `RiskProfileWriter` that keeps updates in memory.
#[derive(Clone, Default)]
pub struct InMemoryRiskProfileWriter {
    inner: Arc<Mutex<WriterState>>,
}

impl InMemoryRiskProfileWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next save with `error`.
    pub fn fail_next(&self, error: DomainError) {
        self.state().next_error = Some(error);
    }

    /// Updates saved so far, oldest first.
    pub fn saved(&self) -> Vec<ProfileRiskUpdate> {
        self.state().saved.clone()
    }

    pub fn last_saved(&self) -> Option<ProfileRiskUpdate> {
        self.saved().pop()
    }

    // A panic while holding the lock leaves the recorded state intact.
    fn state(&self) -> MutexGuard<'_, WriterState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl RiskProfileWriter for InMemoryRiskProfileWriter {
    async fn save_risk_profile(
        &self,
        _access_token: &SecretString,
        update: &ProfileRiskUpdate,
    ) -> Result<(), DomainError> {
        let mut state = self.state();

        if let Some(err) = state.next_error.take() {
            return Err(err);
        }

        state.saved.push(update.clone());
        Ok(())
    }
}
