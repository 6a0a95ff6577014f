use std::thread::{self, JoinHandle};

use anyhow::Result;
use notify_rust::{Notification, Timeout};

/// Visual style of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Error-styled
    Destructive,
}

/// A user-facing notification: short title plus a one-line description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Anything that can show a [`Notice`] to the user.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in memory; used by headless callers and tests.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Service for displaying system notifications
#[derive(Debug, Clone)]
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Check if notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable notifications
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Show a notice as a desktop notification
    pub fn show_notice(&self, notice: &Notice) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timeout = match notice.variant {
            NoticeVariant::Default => Timeout::Milliseconds(5000),
            NoticeVariant::Destructive => Timeout::Milliseconds(10000),
        };

        Notification::new()
            .summary(&notice.title)
            .body(&notice.description)
            .timeout(timeout)
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    /// Show `notice` on a background thread so the desktop round trip never
    /// stalls a frame. Returns `None` when disabled.
    pub fn dispatch(&self, notice: Notice) -> Option<JoinHandle<()>> {
        if !self.is_enabled() {
            return None;
        }

        let service = self.clone();
        Some(thread::spawn(move || {
            if let Err(e) = service.show_notice(&notice) {
                log::warn!("{}", e);
            }
        }))
    }
}

impl Notifier for NotificationService {
    fn notify(&mut self, notice: Notice) {
        self.dispatch(notice);
    }
}
