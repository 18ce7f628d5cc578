//! Terminal implementations of the host ports.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use at_core::ports::{
    AlertPort, MediaKind, MediaPickerPort, PickerError, SetupEventPort, VerificationEventPort,
};
use at_core::setup::ProfileSetupState;
use at_core::verification::VerificationSnapshot;
use tracing::{debug, info};

/// Alerts go to stderr so stdout stays machine readable.
pub struct TerminalAlerts;

#[async_trait]
impl AlertPort for TerminalAlerts {
    async fn alert(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

/// Picker fed from command line arguments.
///
/// Each `pick` takes the next queued path; an empty queue behaves like a
/// dismissed picker.
#[derive(Default)]
pub struct QueuedPicker {
    paths: Mutex<VecDeque<PathBuf>>,
}

impl QueuedPicker {
    pub fn queue(&self, path: PathBuf) {
        if let Ok(mut paths) = self.paths.lock() {
            paths.push_back(path);
        }
    }
}

#[async_trait]
impl MediaPickerPort for QueuedPicker {
    async fn pick(&self, kind: MediaKind) -> Result<PathBuf, PickerError> {
        let next = self
            .paths
            .lock()
            .map_err(|_| PickerError::Failed("picker queue poisoned".into()))?
            .pop_front();
        let path = next.ok_or(PickerError::Cancelled)?;
        if !path.is_file() {
            return Err(PickerError::Failed(format!(
                "{} is not a readable file",
                path.display()
            )));
        }
        debug!(?kind, path = %path.display(), "picked file");
        Ok(path)
    }
}

/// Workflow events are only logged; each command prints its own result.
pub struct LoggingEvents;

#[async_trait]
impl SetupEventPort for LoggingEvents {
    async fn emit_setup_state_changed(&self, state: ProfileSetupState) {
        debug!(?state, "profile setup state changed");
    }
}

#[async_trait]
impl VerificationEventPort for LoggingEvents {
    async fn emit_verification_changed(&self, snapshot: VerificationSnapshot) {
        debug!(stage = ?snapshot.stage, kyc = snapshot.kyc_completed, portfolio = snapshot.portfolio_complete, "verification changed");
    }

    async fn verification_completed(&self) {
        info!("verification completed");
    }
}
