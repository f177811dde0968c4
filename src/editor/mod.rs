//! エディタモジュール
//!
//! 編集履歴（undo / redo）の統合モジュール

pub mod history;

// 公開API
pub use history::HistoryStack;
