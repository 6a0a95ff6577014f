use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::activity::ActivityTag;
use crate::services::activity::ActivityId;
use crate::utils::date::{format_datetime_local, parse_datetime_local, DATETIME_LOCAL_FORMAT};

/// Result sent back by the insert worker
pub(super) type WorkerResult = Result<ActivityId, String>;

/// Time used when the picker sets a date and no time was typed yet
const DEFAULT_PICKER_TIME: (u32, u32) = (8, 0);

/// Form state for the "new academic activity" dialog
pub struct AcademicDialogState {
    pub activity_name: String,
    /// Free-text notes; empty means none
    pub details: String,
    pub tag: ActivityTag,
    /// Local date/time text, `YYYY-MM-DDTHH:MM`
    pub date: String,
    /// Date shown by the inline date picker
    pub picker_date: NaiveDate,
    /// Set when submit was pressed with required fields missing
    pub show_required_hint: bool,
    pub(super) busy: bool,
    pub(super) pending: Option<Receiver<WorkerResult>>,
}

impl Default for AcademicDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl AcademicDialogState {
    pub fn new() -> Self {
        Self {
            activity_name: String::new(),
            details: String::new(),
            tag: ActivityTag::default(),
            date: String::new(),
            picker_date: Local::now().date_naive(),
            show_required_hint: false,
            busy: false,
            pending: None,
        }
    }

    /// True while an insert is in flight. The submit button is disabled.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Put every form field back to its default. Leaves any in-flight
    /// submission alone.
    pub fn reset_form(&mut self) {
        self.activity_name.clear();
        self.details.clear();
        self.tag = ActivityTag::default();
        self.date.clear();
        self.show_required_hint = false;
    }

    /// Labels of required fields that are still blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.activity_name.is_empty() {
            missing.push("Activity");
        }
        if self.date.trim().is_empty() {
            missing.push("Date/Time");
        }
        missing
    }

    /// Replace the date part of the date/time text, keeping the typed time.
    pub fn set_date_part(&mut self, date: NaiveDate) {
        let time = parse_datetime_local(&self.date)
            .map(|dt| dt.time())
            .unwrap_or_else(|_| {
                let (h, m) = DEFAULT_PICKER_TIME;
                NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
            });
        self.date = date.and_time(time).format(DATETIME_LOCAL_FORMAT).to_string();
        self.picker_date = date;
    }

    /// Fill the date/time text with `now` in its own time zone.
    pub fn set_date_to<Tz: TimeZone>(&mut self, now: DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        let tz = now.timezone();
        self.date = format_datetime_local(now.with_timezone(&Utc), &tz);
        self.picker_date = now.date_naive();
    }
}
