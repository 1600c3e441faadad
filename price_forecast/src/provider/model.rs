//! Model-backed price source
//!
//! The actual forecasting model lives behind the [`ModelBackend`] trait: a
//! deployment links its own inference runtime and implements the one-period
//! prediction call. [`ModelProvider`] wraps a backend and turns everything
//! that can go wrong with it, errors, panics, empty or non-finite answers,
//! and missed deadlines, into a typed [`ProviderError`] so a bad period can
//! never take the rest of a batch down with it.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::{ModelError, ProviderError};
use crate::provider::{ForecastProvider, ProviderKind};
use crate::request::ProductIdentity;
use crate::utils::round2;

/// The external "forecast one period" capability.
///
/// `Ok(None)` means the model ran but produced no value for that period;
/// the provider reports it as a failed period rather than a price.
pub trait ModelBackend: std::fmt::Debug + Send + Sync {
    /// Runtime name recorded as `model_used` in reports
    fn name(&self) -> &str;

    /// Predicted price for one identity in one calendar month
    fn predict_price(
        &self,
        identity: &ProductIdentity,
        year: i32,
        month: u32,
    ) -> Result<Option<f64>, ModelError>;
}

/// Provider delegating each period to an external model backend.
///
/// An optional per-call deadline bounds how long one period may take; a
/// missed deadline fails only that period.
#[derive(Debug, Clone)]
pub struct ModelProvider {
    backend: Arc<dyn ModelBackend>,
    deadline: Option<Duration>,
}

impl ModelProvider {
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        ModelProvider {
            backend,
            deadline: None,
        }
    }

    /// Bound every backend call to the given deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn call_direct(
        &self,
        identity: &ProductIdentity,
        year: i32,
        month: u32,
    ) -> Result<Option<f64>, ModelError> {
        // A panicking backend must cost one period, not the whole batch.
        catch_unwind(AssertUnwindSafe(|| {
            self.backend.predict_price(identity, year, month)
        }))
        .unwrap_or_else(|_| Err(ModelError::new("model backend panicked")))
    }

    fn call_with_deadline(
        &self,
        identity: &ProductIdentity,
        year: i32,
        month: u32,
        deadline: Duration,
    ) -> Result<Result<Option<f64>, ModelError>, ProviderError> {
        let backend = Arc::clone(&self.backend);
        let identity = identity.clone();
        let (tx, rx) = mpsc::channel();

        // The call runs on its own thread so a stuck backend can be
        // abandoned once the deadline passes.
        thread::spawn(move || {
            let _ = tx.send(backend.predict_price(&identity, year, month));
        });

        match rx.recv_timeout(deadline) {
            Ok(outcome) => Ok(outcome),
            Err(RecvTimeoutError::Timeout) => Err(ProviderError::DeadlineExceeded(deadline)),
            // The sender is only dropped without sending when the backend
            // panicked on the worker thread.
            Err(RecvTimeoutError::Disconnected) => {
                Ok(Err(ModelError::new("model backend panicked")))
            }
        }
    }
}

impl ForecastProvider for ModelProvider {
    fn label(&self) -> &str {
        self.backend.name()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Model
    }

    fn forecast(
        &self,
        identity: &ProductIdentity,
        year: i32,
        month: u32,
    ) -> Result<f64, ProviderError> {
        let outcome = match self.deadline {
            Some(deadline) => self.call_with_deadline(identity, year, month, deadline)?,
            None => self.call_direct(identity, year, month),
        };

        match outcome {
            // The rounded form is checked too: rounding scales by 100, which
            // overflows prices near the f64 ceiling.
            Ok(Some(price)) if round2(price).is_finite() => Ok(price),
            Ok(Some(_)) => Err(ProviderError::NonFinitePrice),
            Ok(None) => Err(ProviderError::EmptyPrediction),
            Err(err) => Err(ProviderError::Backend(err)),
        }
    }
}
