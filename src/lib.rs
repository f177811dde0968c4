//! notare - Minimal notepad-style text editor
//!
//! 単一バッファのテキストエディタ。論理コア（セッション・履歴・解析）は
//! UI非依存で、TUIフロントエンドがそれを駆動する。

// コアモジュール
pub mod error;
pub mod logging;

// データ層
pub mod buffer;
pub mod file;

// 編集層
pub mod editor;
pub mod session;

// 解析層
pub mod analysis;

// ロジック層
pub mod input;
pub mod minibuffer;

// 表示層
pub mod app;
pub mod tui;
pub mod ui;

// 公開API
pub use app::App;
pub use error::{NotareError, Result};
pub use session::{EditorSession, SaveOutcome};
pub use tui::TuiApplication;
