//! Parking session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::SessionId;

/// Errors that can occur when closing a [`ParkingSession`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SessionError {
    /// The session already has an exit instant recorded.
    #[error("session {0} is already closed")]
    AlreadyClosed(SessionId),
    /// The exit instant is earlier than the entry instant.
    #[error("exit instant {exit_at} is before entry instant {entry_at}")]
    ExitBeforeEntry {
        /// When the vehicle entered.
        entry_at: DateTime<Utc>,
        /// The rejected exit instant.
        exit_at: DateTime<Utc>,
    },
}

/// A single continuous stay of one vehicle in the facility.
///
/// The entry instant is immutable once recorded; the exit instant is set
/// exactly once, via [`ParkingSession::close`]. Billing never reads the
/// session directly - callers derive elapsed minutes with
/// [`ParkingSession::duration_minutes`] and pass them to the billing
/// functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSession {
    /// Unique identifier for the session record.
    pub id: SessionId,
    /// Vehicle registration plate as scanned at the gate.
    pub plate: String,
    /// When the vehicle entered.
    pub entry_at: DateTime<Utc>,
    /// When the vehicle exited, if the session has ended.
    pub exit_at: Option<DateTime<Utc>>,
}

impl ParkingSession {
    /// Start a new session at the given entry instant.
    #[must_use]
    pub fn begin(id: SessionId, plate: impl Into<String>, entry_at: DateTime<Utc>) -> Self {
        Self {
            id,
            plate: plate.into(),
            entry_at,
            exit_at: None,
        }
    }

    /// True if the vehicle has not exited yet.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.exit_at.is_none()
    }

    /// Record the exit instant, ending the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is already closed or if `exit_at` is
    /// earlier than the entry instant.
    pub fn close(&mut self, exit_at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.exit_at.is_some() {
            return Err(SessionError::AlreadyClosed(self.id));
        }
        if exit_at < self.entry_at {
            return Err(SessionError::ExitBeforeEntry {
                entry_at: self.entry_at,
                exit_at,
            });
        }
        self.exit_at = Some(exit_at);
        Ok(())
    }

    /// Elapsed whole minutes from entry to exit, or to `now` while ongoing.
    #[must_use]
    pub fn duration_minutes(&self, now: DateTime<Utc>) -> i64 {
        let end = self.exit_at.unwrap_or(now);
        (end - self.entry_at).num_minutes()
    }
}
