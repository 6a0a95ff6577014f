use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use egui::{Color32, RichText};

use super::state::AcademicDialogState;
use super::submission::SubmitOutcome;
use crate::models::activity::ActivityTag;
use crate::models::session::UserSession;
use crate::services::activity::{ActivityId, ActivityRepository};
use crate::services::notification::Notifier;

const REQUIRED_COLOR: Color32 = Color32::from_rgb(255, 150, 150);
const DIALOG_WIDTH: f32 = 420.0;

#[derive(Debug, Default)]
pub struct AcademicDialogResult {
    /// Set once per successful insert; the caller should refresh its list
    pub saved_activity: Option<ActivityId>,
}

/// Draw the dialog and drive its submission.
///
/// Must be called every frame, even while `show_dialog` is false, so a save
/// that finishes after the window was dismissed is still reported.
pub fn render_academic_dialog(
    ctx: &egui::Context,
    state: &mut AcademicDialogState,
    session: Option<&UserSession>,
    repository: &Arc<dyn ActivityRepository>,
    notifier: &mut dyn Notifier,
    show_dialog: &mut bool,
) -> AcademicDialogResult {
    let mut result = AcademicDialogResult::default();

    if let Some(SubmitOutcome::Saved(id)) = state.poll_submission(notifier) {
        result.saved_activity = Some(id);
        *show_dialog = false;
    }

    if state.is_busy() {
        ctx.request_repaint_after(Duration::from_millis(200));
    }

    if !*show_dialog {
        return result;
    }

    let mut dialog_open = true;

    egui::Window::new("New academic activity")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(DIALOG_WIDTH);
            render_name_row(ui, state);
            ui.add_space(8.0);
            render_tag_and_date_row(ui, state);
            ui.add_space(8.0);
            render_details_row(ui, state);
            ui.add_space(12.0);
            render_submit_button(ui, state, session, repository, notifier);
        });

    // Handle Escape key
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        dialog_open = false;
    }

    if !dialog_open {
        *show_dialog = false;
        state.reset_form();
    }

    result
}

fn field_label(text: &str, missing: bool) -> RichText {
    if missing {
        RichText::new(text).strong().color(REQUIRED_COLOR)
    } else {
        RichText::new(text).strong()
    }
}

fn render_name_row(ui: &mut egui::Ui, state: &mut AcademicDialogState) {
    let missing = state.show_required_hint && state.activity_name.is_empty();
    ui.label(field_label("What are you going to do?", missing));
    ui.add(
        egui::TextEdit::singleline(&mut state.activity_name)
            .hint_text("e.g. Study maths, History exam...")
            .desired_width(f32::INFINITY),
    );
}

fn render_tag_and_date_row(ui: &mut egui::Ui, state: &mut AcademicDialogState) {
    ui.columns(2, |columns| {
        columns[0].label(RichText::new("Type").strong());
        egui::ComboBox::from_id_source("academic_activity_tag")
            .selected_text(state.tag.display_name())
            .width(180.0)
            .show_ui(&mut columns[0], |ui| {
                for tag in ActivityTag::ALL {
                    ui.selectable_value(&mut state.tag, tag, tag.display_name());
                }
            });

        let missing = state.show_required_hint && state.date.trim().is_empty();
        columns[1].label(field_label("Date/Time", missing));
        columns[1].add(
            egui::TextEdit::singleline(&mut state.date)
                .hint_text("2024-05-01T10:00")
                .desired_width(f32::INFINITY),
        );
        columns[1].horizontal(|ui| {
            let picked = ui
                .add(
                    egui_extras::DatePickerButton::new(&mut state.picker_date)
                        .id_source("academic_activity_date"),
                )
                .changed();
            if picked {
                let date = state.picker_date;
                state.set_date_part(date);
            }
            if ui.small_button("Now").clicked() {
                state.set_date_to(Local::now());
            }
        });
    });
}

fn render_details_row(ui: &mut egui::Ui, state: &mut AcademicDialogState) {
    ui.label(RichText::new("Notes (optional)").strong());
    ui.add(
        egui::TextEdit::multiline(&mut state.details)
            .hint_text("Topics to cover, chapters, notes...")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );
}

fn render_submit_button(
    ui: &mut egui::Ui,
    state: &mut AcademicDialogState,
    session: Option<&UserSession>,
    repository: &Arc<dyn ActivityRepository>,
    notifier: &mut dyn Notifier,
) {
    if state.show_required_hint {
        let missing = state.missing_required_fields();
        if !missing.is_empty() {
            ui.colored_label(
                REQUIRED_COLOR,
                format!("Please fill in: {}", missing.join(", ")),
            );
        }
    }

    ui.vertical_centered_justified(|ui| {
        if state.is_busy() {
            ui.add_enabled(false, egui::Button::new("Saving..."));
            ui.spinner();
            return;
        }

        if !ui.button("Schedule activity").clicked() {
            return;
        }

        if !state.missing_required_fields().is_empty() {
            state.show_required_hint = true;
            return;
        }

        if let Err(e) = state.submit(session, Arc::clone(repository), notifier) {
            log::debug!("Submit not started: {}", e);
        }
    });
}
