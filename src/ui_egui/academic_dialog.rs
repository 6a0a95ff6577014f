//! "New academic activity" dialog.
//!
//! Form state lives in [`AcademicDialogState`]; [`render_academic_dialog`]
//! draws it and reports saved activities back to the caller.

mod render;
mod state;
mod submission;

pub use render::{render_academic_dialog, AcademicDialogResult};
pub use state::AcademicDialogState;
pub use submission::{
    SubmitError, SubmitOutcome, ERROR_DESCRIPTION, ERROR_TITLE, SUCCESS_DESCRIPTION, SUCCESS_TITLE,
};
