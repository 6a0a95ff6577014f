pub mod academic_dialog;
mod app;

pub use app::{AcademicApp, Toast, ToastLevel, ToastManager};
