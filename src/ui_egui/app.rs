mod activity_list;
mod lifecycle;
mod toast;

use std::sync::Arc;

use crate::models::activity::Activity;
use crate::models::session::UserSession;
use crate::services::activity::ActivityRepository;
use crate::ui_egui::academic_dialog::{render_academic_dialog, AcademicDialogState};

pub use self::toast::{Toast, ToastLevel, ToastManager};

pub struct AcademicApp {
    session: Option<UserSession>,
    /// `None` when the database could not be opened at startup
    repository: Option<Arc<dyn ActivityRepository>>,
    startup_error: Option<String>,
    /// Current user's activities, refreshed after every save
    activities: Vec<Activity>,
    list_error: Option<String>,
    show_dialog: bool,
    dialog_state: AcademicDialogState,
    toast_manager: ToastManager,
}

impl eframe::App for AcademicApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_bar(ctx);
        self.render_activity_panel(ctx);

        if let Some(repository) = &self.repository {
            let result = render_academic_dialog(
                ctx,
                &mut self.dialog_state,
                self.session.as_ref(),
                repository,
                &mut self.toast_manager,
                &mut self.show_dialog,
            );

            if result.saved_activity.is_some() {
                self.refresh_activities();
            }
        }

        // Render toast notifications (last, so they appear on top)
        let is_dark = ctx.style().visuals.dark_mode;
        self.toast_manager.render(ctx, is_dark);
    }
}

impl AcademicApp {
    /// Build the app around an already-open repository.
    pub fn with_repository(
        session: Option<UserSession>,
        repository: Arc<dyn ActivityRepository>,
        toast_manager: ToastManager,
    ) -> Self {
        let mut app = Self {
            session,
            repository: Some(repository),
            startup_error: None,
            activities: Vec::new(),
            list_error: None,
            show_dialog: false,
            dialog_state: AcademicDialogState::new(),
            toast_manager,
        };
        app.refresh_activities();
        app
    }

    fn failed_startup(session: Option<UserSession>, error: String) -> Self {
        Self {
            session,
            repository: None,
            startup_error: Some(error),
            activities: Vec::new(),
            list_error: None,
            show_dialog: false,
            dialog_state: AcademicDialogState::new(),
            toast_manager: ToastManager::new(),
        }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Reload the signed-in user's activities from the repository.
    pub fn refresh_activities(&mut self) {
        let (Some(repository), Some(session)) = (&self.repository, &self.session) else {
            self.activities.clear();
            return;
        };

        match repository.list_activities(session.user_id) {
            Ok(activities) => {
                self.activities = activities;
                self.list_error = None;
            }
            Err(e) => {
                log::error!("Failed to load activities: {:#}", e);
                self.list_error = Some(format!("Failed to load activities: {}", e));
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("academic_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Academic Planner");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_add = self.repository.is_some();
                    if ui
                        .add_enabled(can_add, egui::Button::new("➕ New activity"))
                        .clicked()
                    {
                        self.show_dialog = true;
                    }

                    match &self.session {
                        Some(session) => {
                            ui.label(format!("Signed in as {}", session.greeting_name()));
                        }
                        None => {
                            ui.weak("Not signed in");
                        }
                    }
                });
            });
        });
    }
}
