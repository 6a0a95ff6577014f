use chrono::Local;
use egui::{Color32, RichText};

use super::AcademicApp;
use crate::models::activity::Activity;

impl AcademicApp {
    pub(super) fn render_activity_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.startup_error {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                return;
            }

            if let Some(error) = &self.list_error {
                ui.colored_label(Color32::LIGHT_RED, error);
                ui.add_space(4.0);
            }

            if self.session.is_none() {
                ui.label("Set user_id in config.toml to see and schedule activities.");
                return;
            }

            if self.activities.is_empty() {
                ui.weak("No activities scheduled yet.");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for activity in &self.activities {
                    render_activity_row(ui, activity);
                    ui.separator();
                }
            });
        });
    }
}

fn render_activity_row(ui: &mut egui::Ui, activity: &Activity) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(activity.tag.emoji()).size(18.0));
        ui.vertical(|ui| {
            ui.label(RichText::new(&activity.name).strong());
            let when = activity.occurs_at.with_timezone(&Local);
            ui.weak(format!(
                "{} · {}",
                activity.tag.label(),
                when.format("%a %d %b %Y, %H:%M")
            ));
            if let Some(details) = &activity.details {
                ui.label(details);
            }
        });
    });
}
