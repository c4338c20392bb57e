use crate::error::{Result, ShortlinkError};
use std::num::NonZeroUsize;
use tokio::sync::{Semaphore, SemaphorePermit, TryAcquireError};
use tracing::{debug, trace};

/// Result of submitting an operation to an [`AdmissionGate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum GateOutcome<T> {
    /// The operation ran in a slot and produced `T`, which may itself be an error.
    Admitted(T),
    /// No slot was free; the operation was never called.
    Rejected,
}

impl<T> GateOutcome<T> {
    pub fn is_admitted(&self) -> bool {
        matches!(self, GateOutcome::Admitted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, GateOutcome::Rejected)
    }

    /// Returns the admitted value, or `None` when rejected.
    pub fn admitted(self) -> Option<T> {
        match self {
            GateOutcome::Admitted(value) => Some(value),
            GateOutcome::Rejected => None,
        }
    }
}

impl<T> GateOutcome<Result<T>> {
    /// Flattens the outcome of a fallible operation, turning a rejection into
    /// [`ShortlinkError::Rejected`].
    pub fn into_result(self) -> Result<T> {
        match self {
            GateOutcome::Admitted(result) => result,
            GateOutcome::Rejected => Err(ShortlinkError::Rejected),
        }
    }
}

/// A slot held in an [`AdmissionGate`]. The slot is returned when this is dropped.
#[derive(Debug)]
pub struct Permit<'a> {
    _inner: SemaphorePermit<'a>,
}

/// Shed-or-run concurrency limiter.
///
/// At most `limit` operations run through the gate at once. Callers beyond
/// that are turned away immediately instead of waiting for a slot.
#[derive(Debug)]
pub struct AdmissionGate {
    slots: Semaphore,
    limit: usize,
}

impl AdmissionGate {
    /// Creates a gate with `limit` slots, capped at [`Semaphore::MAX_PERMITS`].
    pub fn new(limit: NonZeroUsize) -> Self {
        let limit = limit.get().min(Semaphore::MAX_PERMITS);
        Self {
            slots: Semaphore::new(limit),
            limit,
        }
    }

    /// Maximum number of concurrently admitted operations.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of free slots right now.
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }

    /// Takes a slot without waiting. Returns `None` if all slots are taken.
    pub fn try_acquire(&self) -> Option<Permit<'_>> {
        match self.slots.try_acquire() {
            Ok(permit) => Some(Permit { _inner: permit }),
            Err(TryAcquireError::NoPermits) => None,
            // The semaphore is never closed.
            Err(TryAcquireError::Closed) => None,
        }
    }

    /// Runs `op` in a slot if one is free.
    ///
    /// The slot is released when `op` returns or unwinds. When no slot is
    /// free `op` is dropped without being called.
    pub fn try_run<F, R>(&self, op: F) -> GateOutcome<R>
    where
        F: FnOnce() -> R,
    {
        let Some(_permit) = self.try_acquire() else {
            debug!(limit = self.limit, "admission rejected, all slots in use");
            return GateOutcome::Rejected;
        };

        trace!(available = self.available(), "admitted operation");
        GateOutcome::Admitted(op())
    }
}

impl Default for AdmissionGate {
    fn default() -> Self {
        Self::new(crate::settings::ShortlinkSettings::default().max_concurrent_requests)
    }
}
