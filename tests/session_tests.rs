//! EditorSession integration tests
//!
//! open / save / undo / redo / word count / search をセッションAPI経由で検証

use notare::session::{EditorSession, SaveOutcome};
use notare::NotareError;
use tempfile::TempDir;

#[test]
fn test_save_open_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("note.txt");
    let content = "line one\nline two\nこんにちは";

    let mut session = EditorSession::new();
    session.set_text(content);
    let outcome = session.save(Some(path.clone())).unwrap();
    assert_eq!(outcome, SaveOutcome::Saved(path.clone()));

    // 別セッションで開いてバイト単位で一致
    let mut other = EditorSession::new();
    other.open(&path).unwrap();
    assert_eq!(other.text(), content);
    assert_eq!(std::fs::read(&path).unwrap(), content.as_bytes());
    assert_eq!(other.current_path(), Some(path.as_path()));
}

#[test]
fn test_open_normalizes_crlf() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("crlf.txt");
    std::fs::write(&path, "a\r\nb\rc").unwrap();

    let mut session = EditorSession::new();
    session.open(&path).unwrap();
    assert_eq!(session.text(), "a\nb\nc");
}

#[test]
fn test_open_missing_file_fails_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let mut session = EditorSession::new();
    let error = session.open(&missing).unwrap_err();
    assert!(matches!(error, NotareError::File(_)));
}

#[test]
fn test_undo_redo_inverse_law() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.txt");

    let mut session = EditorSession::new();
    session.set_text("B0");
    session.save(Some(path)).unwrap(); // B0 を記録

    session.set_text("B1");
    assert!(session.undo());
    assert_eq!(session.text(), "B0");

    assert!(session.redo());
    assert_eq!(session.text(), "B1");
}

#[test]
fn test_empty_history_noops_leave_state_unchanged() {
    let mut session = EditorSession::new();
    session.set_text("stable");

    assert!(!session.undo());
    assert_eq!(session.text(), "stable");
    assert!(!session.can_undo());
    assert!(!session.can_redo());

    assert!(!session.redo());
    assert_eq!(session.text(), "stable");
}

#[test]
fn test_new_edit_after_undo_invalidates_redo() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.txt");

    let mut session = EditorSession::new();
    session.set_text("v1");
    session.save(Some(path.clone())).unwrap();
    session.set_text("v2");
    session.save(Some(path.clone())).unwrap();

    assert!(session.undo());
    assert!(session.can_redo());

    // save は redo 履歴を無効化する
    session.set_text("v3");
    session.save(Some(path)).unwrap();
    assert!(!session.can_redo());
}

#[test]
fn test_save_failure_keeps_state() {
    let temp_dir = TempDir::new().unwrap();
    // ディレクトリへは保存できない
    let dir_path = temp_dir.path().join("subdir");
    std::fs::create_dir(&dir_path).unwrap();

    let mut session = EditorSession::new();
    session.set_text("content");

    assert!(session.save(Some(dir_path)).is_err());
    assert_eq!(session.current_path(), None);
    assert!(!session.can_undo());
    assert_eq!(session.text(), "content");
}

#[test]
fn test_current_path_is_last_write_wins() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.txt");

    let mut session = EditorSession::new();
    session.set_text("x");
    session.save(Some(first.clone())).unwrap();
    assert_eq!(session.current_path(), Some(first.as_path()));

    session.save(Some(second.clone())).unwrap();
    assert_eq!(session.current_path(), Some(second.as_path()));

    // パス省略の保存は最後のパスへ
    session.set_text("y");
    let outcome = session.save(None).unwrap();
    assert_eq!(outcome, SaveOutcome::Saved(second.clone()));
    assert_eq!(std::fs::read_to_string(&second).unwrap(), "y");
    // 最初のファイルは変更されない
    assert_eq!(std::fs::read_to_string(&first).unwrap(), "x");
}

#[test]
fn test_end_to_end_scenario() {
    // 空バッファ → "hello world" 入力 → 保存 → 追記 → undo
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.txt");

    let mut session = EditorSession::new();
    assert_eq!(session.text(), "");

    session.set_text("hello world");
    session.save(Some(path)).unwrap();

    session.set_text("hello world foo");
    assert!(session.undo());

    assert_eq!(session.text(), "hello world");
    assert_eq!(session.word_count(), 2);
    assert_eq!(session.search("wor"), vec![1]);
}
