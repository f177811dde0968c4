//! ミニバッファ
//!
//! 画面下部の1行を使ったプロンプト入力とエコーメッセージ表示

pub mod prompt;

// 公開API
pub use prompt::{EchoMessage, MessageKind, PromptKind, PromptManager, PromptResult};
