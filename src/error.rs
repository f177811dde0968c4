//! エラーハンドリングシステム
//!
//! notare 全体で使用される統一されたエラー型とユーティリティを定義。
//! 空履歴での undo/redo やプロンプトのキャンセルはエラーではなく、
//! 各モジュールが戻り値（bool / PromptResult）で表現する。

use std::io::ErrorKind;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum NotareError {
    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// UI操作エラー
    #[error("UI operation failed")]
    Ui(#[from] UiError),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum UiError {
    #[error("Terminal initialization failed")]
    TerminalInit,

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

impl NotareError {
    /// エコー行に表示するユーザー向けメッセージ
    pub fn user_message(&self) -> String {
        match self {
            NotareError::File(FileError::NotFound { path }) => {
                format!("ファイルが見つかりません: {}", path)
            }
            NotareError::File(FileError::PermissionDenied { path }) => {
                format!("アクセス権限がありません: {}", path)
            }
            NotareError::File(FileError::InvalidPath { path }) => {
                format!("無効なパスです: {}", path)
            }
            NotareError::File(FileError::Io { message }) => {
                format!("入出力エラー: {}", message)
            }
            NotareError::Ui(UiError::TerminalInit) => {
                "ターミナル初期化に失敗しました".to_string()
            }
            NotareError::Ui(UiError::RenderingFailed { component }) => {
                format!("描画に失敗しました: {}", component)
            }
            NotareError::Application(message) => {
                format!("エラーが発生しました: {}", message)
            }
        }
    }
}

// std::io::Error から FileError への変換（errno種別を保持）
pub fn io_error_for_path(error: std::io::Error, path: &std::path::Path) -> FileError {
    let path = path.display().to_string();
    match error.kind() {
        ErrorKind::NotFound => FileError::NotFound { path },
        ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
        _ => FileError::Io {
            message: format!("{}: {}", path, error),
        },
    }
}

impl From<std::io::Error> for NotareError {
    fn from(error: std::io::Error) -> Self {
        NotareError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

/// パニックハンドラの設定
///
/// 致命的エラーは即座に強制終了し、開発者向けに位置とスタックトレースを出力する。
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .unwrap_or_else(|| std::panic::Location::caller());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, NotareError>;
