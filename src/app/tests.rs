use super::*;
use crate::core::actions::Action;
use crate::models::hashed_image::{HashedImage, ImageHash};
use ratatui::layout::Rect;
use std::fs;
use std::time::SystemTime;
use tempfile::TempDir;

fn image(path: &str, size: u64) -> HashedImage {
    HashedImage::new(
        PathBuf::from(path),
        (100, 80),
        size,
        SystemTime::now(),
        ImageHash::from_bits(vec![true; 16]),
    )
}

/// 그룹 0: a(원본), b / 그룹 1: c(원본), b
fn sample_groups() -> Vec<SimilarityGroup> {
    vec![
        SimilarityGroup::new(image("/photos/a.png", 100), vec![(image("/photos/b.png", 50), 3)]),
        SimilarityGroup::new(image("/photos/c.png", 70), vec![(image("/photos/b.png", 50), 5)]),
    ]
}

fn make_test_app(temp: &TempDir) -> App {
    let mut app = App::new_for_test(sample_groups(), temp.path().to_path_buf());
    app.layout.update(Rect::new(0, 0, 100, 30));
    app
}

fn script_files(temp: &TempDir) -> Vec<PathBuf> {
    fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "bat"))
        .collect()
}

#[test]
fn test_initial_state() {
    let temp = TempDir::new().unwrap();
    let app = make_test_app(&temp);

    assert_eq!(app.selected_path().as_deref(), Some("/photos/a.png"));
    assert_eq!(app.image_count(), 4);
    assert!(app.plan.is_empty());
    assert!(!app.has_unsaved_plan());
}

#[test]
fn test_toggle_marks_then_keeps() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ToggleMark);
    assert_eq!(app.plan.render(), "del \"/photos/a.png\"\n");

    app.execute_action(Action::ToggleMark);
    assert!(app.plan.is_empty());
}

#[test]
fn test_script_follows_activation_order() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    // b (그룹 0) → c (그룹 1 원본) → a
    app.execute_action(Action::MoveDown);
    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::NextGroup);
    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::GoToTop);
    app.execute_action(Action::ToggleMark);

    assert_eq!(
        app.plan.render(),
        "del \"/photos/b.png\"\ndel \"/photos/c.png\"\ndel \"/photos/a.png\"\n"
    );
}

#[test]
fn test_shared_path_toggled_from_either_group() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    // 그룹 0에서 b 표시
    app.execute_action(Action::MoveDown);
    app.execute_action(Action::ToggleMark);
    assert!(app.plan.contains("/photos/b.png"));

    // 그룹 1의 b에서 다시 누르면 해제
    app.execute_action(Action::GoToBottom);
    assert_eq!(app.selected_path().as_deref(), Some("/photos/b.png"));
    app.execute_action(Action::ToggleMark);
    assert!(app.plan.is_empty());
}

#[test]
fn test_pending_size_counts_each_path_once() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::MoveDown);
    app.execute_action(Action::ToggleMark);
    assert_eq!(app.pending_size(), 150);
}

#[test]
fn test_unmark_all() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::MoveDown);
    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::UnmarkAll);

    assert!(app.plan.is_empty());
    assert_eq!(app.toast(), Some("Keeping 2 files"));
}

#[test]
fn test_script_pane_toggle_removes_line() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::MoveDown);
    app.execute_action(Action::ToggleMark);

    app.execute_action(Action::TogglePane);
    app.execute_action(Action::GoToBottom);
    assert_eq!(app.script_selected, 1);
    app.execute_action(Action::ToggleMark);

    assert_eq!(app.plan.render(), "del \"/photos/a.png\"\n");
    assert_eq!(app.script_selected, 0);
}

#[test]
fn test_export_script_writes_file() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ToggleMark);
    assert!(app.has_unsaved_plan());
    app.execute_action(Action::ExportScript);

    assert!(matches!(app.dialog, Some(DialogKind::Message { .. })));
    assert!(!app.has_unsaved_plan());

    let files = script_files(&temp);
    assert_eq!(files.len(), 1);
    assert_eq!(
        fs::read_to_string(&files[0]).unwrap(),
        "del \"/photos/a.png\"\n"
    );
}

#[test]
fn test_export_empty_plan_shows_error() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ExportScript);

    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
    assert!(script_files(&temp).is_empty());
}

#[test]
fn test_export_into_missing_dir_keeps_session() {
    let temp = TempDir::new().unwrap();
    let mut app = App::new_for_test(sample_groups(), temp.path().join("missing"));

    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::ExportScript);

    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
    assert!(!app.should_quit());
    assert!(app.has_unsaved_plan());
}

#[test]
fn test_quit_without_plan_exits_immediately() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_quit_with_unsaved_plan_asks_first() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::Quit);
    assert!(!app.should_quit());
    assert!(matches!(
        app.dialog,
        Some(DialogKind::ConfirmQuit {
            pending: 1,
            selected_button: 1
        })
    ));

    // 기본 선택(Cancel)으로 확정하면 계속 진행
    app.confirm_quit_dialog();
    assert!(!app.should_quit());
    assert!(app.dialog.is_none());

    app.execute_action(Action::Quit);
    app.dialog_confirm_toggle();
    app.confirm_quit_dialog();
    assert!(app.should_quit());
}

#[test]
fn test_quit_after_export_skips_confirmation() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ToggleMark);
    app.execute_action(Action::ExportScript);
    app.close_dialog();
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_help_dialog_scroll() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::ShowHelp);
    app.dialog_help_scroll_up();
    app.dialog_help_scroll_down();
    app.dialog_help_scroll_down();
    assert_eq!(app.dialog, Some(DialogKind::Help { scroll_offset: 2 }));
}

#[test]
fn test_cycle_theme_shows_toast() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.execute_action(Action::CycleTheme);
    assert_eq!(app.toast(), Some("Theme: light"));
}

#[test]
fn test_pending_key_expiry() {
    let temp = TempDir::new().unwrap();
    let mut app = make_test_app(&temp);

    app.set_pending_key('g');
    assert!(!app.is_pending_key_expired());
    app.pending_key_time = Some(Instant::now() - std::time::Duration::from_secs(1));
    assert!(app.is_pending_key_expired());
    app.clear_pending_key();
    assert!(app.pending_key.is_none());
}

#[test]
fn test_single_pane_toggle_shows_toast_only_when_marking() {
    let temp = TempDir::new().unwrap();
    let mut app = App::new_for_test(sample_groups(), temp.path().to_path_buf());
    app.layout.update(Rect::new(0, 0, 60, 30));
    assert!(!app.layout.is_split());

    app.execute_action(Action::ToggleMark);
    assert_eq!(app.toast(), Some("Marked for deletion"));

    app.toast_message = None;
    app.execute_action(Action::ToggleMark);
    assert!(app.plan.is_empty());
    assert_eq!(app.toast(), None);
}
