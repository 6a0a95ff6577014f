// Integration tests for the activity dialog against a real SQLite file

mod fixtures;

use academic_planner::models::activity::ActivityTag;
use academic_planner::models::session::UserSession;
use academic_planner::services::activity::{ActivityRepository, SqliteActivityRepository};
use academic_planner::services::notification::Notice;
use academic_planner::ui_egui::academic_dialog::{
    AcademicDialogState, SubmitError, SubmitOutcome, ERROR_DESCRIPTION, SUCCESS_DESCRIPTION,
};
use academic_planner::ui_egui::{AcademicApp, ToastManager};
use fixtures::{brasilia, fixed_now, raw_rows, temp_database};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn filled_state(tag: ActivityTag, details: &str) -> AcademicDialogState {
    let mut state = AcademicDialogState::new();
    state.activity_name = "History exam".to_string();
    state.details = details.to_string();
    state.tag = tag;
    state.date = "2024-05-01T10:00".to_string();
    state
}

#[test]
fn test_submit_persists_expected_row() {
    let (_dir, path) = temp_database();
    let repository = Arc::new(SqliteActivityRepository::new(path.to_str().unwrap()));
    let session = UserSession::new(21);

    let mut state = filled_state(ActivityTag::Exam, "Chapters 1-4");
    let mut notices: Vec<Notice> = Vec::new();
    state
        .submit_in(Some(&session), repository, &mut notices, &brasilia(), fixed_now())
        .expect("submit should start");

    let outcome = state.wait_for_submission(&mut notices);
    assert!(matches!(outcome, Some(SubmitOutcome::Saved(_))));
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].description, SUCCESS_DESCRIPTION);

    assert_eq!(
        raw_rows(&path),
        vec![(
            21,
            "History exam".to_string(),
            Some("Chapters 1-4".to_string()),
            "prova".to_string(),
            "2024-05-01T13:00:00+00:00".to_string(),
        )]
    );

    assert!(state.activity_name.is_empty());
    assert!(state.date.is_empty());
    assert_eq!(state.tag, ActivityTag::Study);
}

#[test]
fn test_empty_details_persist_as_null() {
    let (_dir, path) = temp_database();
    let repository = Arc::new(SqliteActivityRepository::new(path.to_str().unwrap()));

    let mut state = filled_state(ActivityTag::Study, "");
    let mut notices: Vec<Notice> = Vec::new();
    state
        .submit_in(Some(&UserSession::new(1)), repository, &mut notices, &brasilia(), fixed_now())
        .unwrap();
    state.wait_for_submission(&mut notices);

    let rows = raw_rows(&path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].2, None);
}

#[test]
fn test_each_tag_persists_its_key() {
    let (_dir, path) = temp_database();
    let repository = Arc::new(SqliteActivityRepository::new(path.to_str().unwrap()));
    let session = UserSession::new(1);
    let mut notices: Vec<Notice> = Vec::new();

    for tag in ActivityTag::ALL {
        let mut state = filled_state(tag, "");
        state
            .submit_in(Some(&session), repository.clone(), &mut notices, &brasilia(), fixed_now())
            .unwrap();
        state.wait_for_submission(&mut notices);
    }

    let tags: Vec<String> = raw_rows(&path).into_iter().map(|row| row.3).collect();
    assert_eq!(tags, vec!["estudo", "prova", "trabalho", "leitura"]);
}

#[test]
fn test_unauthenticated_submit_writes_nothing() {
    let (_dir, path) = temp_database();
    let repository = Arc::new(SqliteActivityRepository::new(path.to_str().unwrap()));

    let mut state = filled_state(ActivityTag::Study, "");
    let mut notices: Vec<Notice> = Vec::new();
    let result = state.submit_in(None, repository, &mut notices, &brasilia(), fixed_now());

    assert_eq!(result, Err(SubmitError::Unauthenticated));
    assert!(notices.is_empty());
    assert!(raw_rows(&path).is_empty());
}

#[test]
fn test_missing_schema_reports_failure_and_keeps_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_schema.db");
    let repository = Arc::new(SqliteActivityRepository::new(path.to_str().unwrap()));

    let mut state = filled_state(ActivityTag::Reading, "Ch. 2");
    let mut notices: Vec<Notice> = Vec::new();
    state
        .submit_in(Some(&UserSession::new(1)), repository, &mut notices, &brasilia(), fixed_now())
        .unwrap();

    let outcome = state.wait_for_submission(&mut notices);
    assert!(matches!(outcome, Some(SubmitOutcome::Failed(SubmitError::Persistence(_)))));
    assert!(notices[0].is_destructive());
    assert_eq!(notices[0].description, ERROR_DESCRIPTION);
    assert_eq!(state.activity_name, "History exam");
    assert_eq!(state.details, "Ch. 2");
    assert_eq!(state.tag, ActivityTag::Reading);
    assert_eq!(state.date, "2024-05-01T10:00");
    assert!(!state.is_busy());
}

#[test]
fn test_app_lists_activities_for_signed_in_user() {
    let (_dir, path) = temp_database();
    let repository = Arc::new(SqliteActivityRepository::new(path.to_str().unwrap()));

    let mut notices: Vec<Notice> = Vec::new();
    for (owner, name) in [(1, "Mine"), (2, "Theirs")] {
        let mut state = filled_state(ActivityTag::Study, "");
        state.activity_name = name.to_string();
        state
            .submit_in(Some(&UserSession::new(owner)), repository.clone(), &mut notices, &brasilia(), fixed_now())
            .unwrap();
        state.wait_for_submission(&mut notices);
    }

    let app = AcademicApp::with_repository(
        Some(UserSession::new(1)),
        repository.clone(),
        ToastManager::new(),
    );
    let names: Vec<&str> = app.activities().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Mine"]);

    let signed_out = AcademicApp::with_repository(None, repository.clone(), ToastManager::new());
    assert!(signed_out.activities().is_empty());

    assert_eq!(repository.list_activities(2).unwrap().len(), 1);
}
