//! Submit handler for the activity dialog.
//!
//! `submit` snapshots the form, hands the insert to a worker thread and
//! marks the dialog busy. `poll_submission` (once per frame) or
//! `wait_for_submission` (headless) picks up the result, notifies the user
//! and clears the busy flag.

use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::thread;

use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;

use super::state::{AcademicDialogState, WorkerResult};
use crate::models::activity::ActivityDraft;
use crate::models::session::UserSession;
use crate::services::activity::{ActivityId, ActivityRepository};
use crate::services::notification::{Notice, Notifier};
use crate::utils::date::{normalize_datetime_input, DateInputError};

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_DESCRIPTION: &str = "Activity saved.";
pub const ERROR_TITLE: &str = "Error";
pub const ERROR_DESCRIPTION: &str = "Could not save the activity.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    Busy,

    #[error("no signed-in user")]
    Unauthenticated,

    #[error(transparent)]
    InvalidDate(#[from] DateInputError),

    #[error("failed to save activity: {0}")]
    Persistence(String),
}

/// How a finished submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(ActivityId),
    Failed(SubmitError),
}

impl AcademicDialogState {
    /// Snapshot the form as a draft, converting the date text from `tz`.
    pub fn build_draft<Tz: TimeZone>(
        &self,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Result<ActivityDraft, DateInputError> {
        let occurs_at = normalize_datetime_input(&self.date, tz, now)?;
        Ok(ActivityDraft::new(
            self.activity_name.clone(),
            &self.details,
            self.tag,
            occurs_at,
        ))
    }

    /// Submit using the machine's local time zone.
    pub fn submit(
        &mut self,
        session: Option<&UserSession>,
        repository: Arc<dyn ActivityRepository>,
        notifier: &mut dyn Notifier,
    ) -> Result<(), SubmitError> {
        self.submit_in(session, repository, notifier, &Local, Utc::now())
    }

    /// Start saving the current form.
    ///
    /// Returns `Busy` without side effects while a previous submission is
    /// in flight, and `Unauthenticated` without touching the repository or
    /// the notifier when there is no session. A bad date goes down the same
    /// path as a failed insert: destructive notice, form kept.
    pub fn submit_in<Tz: TimeZone>(
        &mut self,
        session: Option<&UserSession>,
        repository: Arc<dyn ActivityRepository>,
        notifier: &mut dyn Notifier,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Result<(), SubmitError> {
        if self.busy {
            return Err(SubmitError::Busy);
        }

        let Some(session) = session else {
            log::warn!("Ignoring activity submit: no signed-in user");
            return Err(SubmitError::Unauthenticated);
        };

        let draft = match self.build_draft(tz, now) {
            Ok(draft) => draft,
            Err(e) => {
                let err = SubmitError::from(e);
                report_failure(&err, notifier);
                return Err(err);
            }
        };

        let owner_id = session.user_id;
        let (tx, rx) = mpsc::channel::<WorkerResult>();
        self.busy = true;
        self.pending = Some(rx);

        thread::spawn(move || {
            let result = repository
                .create_activity(owner_id, &draft)
                .map_err(|e| format!("{:#}", e));
            let _ = tx.send(result);
        });

        Ok(())
    }

    /// Check for a finished submission without blocking.
    ///
    /// Should be called once per frame, before rendering.
    pub fn poll_submission(&mut self, notifier: &mut dyn Notifier) -> Option<SubmitOutcome> {
        let received = match self.pending.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err("save worker disconnected unexpectedly".to_string())
            }
        };
        Some(self.finish_submission(received, notifier))
    }

    /// Block until the in-flight submission finishes.
    pub fn wait_for_submission(&mut self, notifier: &mut dyn Notifier) -> Option<SubmitOutcome> {
        let received = self
            .pending
            .as_ref()?
            .recv()
            .unwrap_or_else(|_| Err("save worker disconnected unexpectedly".to_string()));
        Some(self.finish_submission(received, notifier))
    }

    fn finish_submission(
        &mut self,
        result: WorkerResult,
        notifier: &mut dyn Notifier,
    ) -> SubmitOutcome {
        self.pending = None;
        self.busy = false;

        match result {
            Ok(id) => {
                notifier.notify(Notice::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
                self.reset_form();
                SubmitOutcome::Saved(id)
            }
            Err(message) => {
                let err = SubmitError::Persistence(message);
                report_failure(&err, notifier);
                SubmitOutcome::Failed(err)
            }
        }
    }
}

fn report_failure(err: &SubmitError, notifier: &mut dyn Notifier) {
    log::error!("Error saving activity: {}", err);
    notifier.notify(Notice::destructive(ERROR_TITLE, ERROR_DESCRIPTION));
}
