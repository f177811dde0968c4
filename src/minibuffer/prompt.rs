//! プロンプト管理
//!
//! ユーザーからの入力を受け付けるプロンプトシステム。
//! キャンセル（Esc / Ctrl+G）はエラーではなく `Cancelled` として返す。

use crate::input::{Key, KeyCode, KeyModifiers};
use std::time::{Duration, Instant};

/// プロンプトの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// 入力が完了した
    Completed(String),
    /// 入力がキャンセルされた
    Cancelled,
    /// 入力継続中
    InProgress,
}

/// プロンプトの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// 開くファイルのパス入力
    OpenPath,
    /// 保存先ファイルのパス入力
    SavePath,
    /// 検索クエリ入力
    SearchQuery,
    /// 終了確認（y / n）
    ConfirmQuit,
}

impl PromptKind {
    /// プロンプトに表示するメッセージ
    pub fn message(self) -> &'static str {
        match self {
            PromptKind::OpenPath => "Open file: ",
            PromptKind::SavePath => "Save as: ",
            PromptKind::SearchQuery => "Search: ",
            PromptKind::ConfirmQuit => "未保存の変更があります。終了しますか? (y/n): ",
        }
    }
}

/// エコーメッセージの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// エコー行に表示するメッセージ
///
/// 表示開始から一定時間で消える。
#[derive(Debug, Clone)]
pub struct EchoMessage {
    pub text: String,
    pub kind: MessageKind,
    start_time: Instant,
    duration: Duration,
}

impl EchoMessage {
    const DISPLAY_DURATION: Duration = Duration::from_secs(5);

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_kind(text, MessageKind::Info)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_kind(text, MessageKind::Error)
    }

    fn with_kind(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            start_time: Instant::now(),
            duration: Self::DISPLAY_DURATION,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.start_time.elapsed() >= self.duration
    }

    #[cfg(test)]
    fn backdate(&mut self, elapsed: Duration) {
        self.start_time = Instant::now() - elapsed;
    }
}

/// プロンプト管理器
#[derive(Debug, Clone)]
pub struct PromptManager {
    /// 現在の入力内容
    input: String,
    /// プロンプトの種類
    kind: Option<PromptKind>,
}

impl PromptManager {
    /// 新しいプロンプト管理器を作成
    pub fn new() -> Self {
        Self {
            input: String::new(),
            kind: None,
        }
    }

    /// プロンプトを開始
    pub fn start(&mut self, kind: PromptKind) {
        self.kind = Some(kind);
        self.input.clear();
    }

    /// プロンプトがアクティブか
    pub fn is_active(&self) -> bool {
        self.kind.is_some()
    }

    /// アクティブなプロンプトの種類
    pub fn kind(&self) -> Option<PromptKind> {
        self.kind
    }

    /// 表示用のプロンプト行（メッセージ + 入力中の内容）
    pub fn display_line(&self) -> String {
        match self.kind {
            Some(kind) => format!("{}{}", kind.message(), self.input),
            None => String::new(),
        }
    }

    /// キー入力を処理
    ///
    /// 非アクティブ時は `InProgress` を返すだけで何もしない。
    pub fn handle_key(&mut self, key: &Key) -> PromptResult {
        if self.kind.is_none() {
            return PromptResult::InProgress;
        }

        // Esc / Ctrl+G でキャンセル
        if key.code == KeyCode::Esc || *key == Key::ctrl('g') {
            self.finish();
            return PromptResult::Cancelled;
        }

        match (&key.modifiers, &key.code) {
            (_, KeyCode::Enter) => {
                let input = std::mem::take(&mut self.input);
                self.finish();
                PromptResult::Completed(input)
            }
            (_, KeyCode::Backspace) => {
                self.input.pop();
                PromptResult::InProgress
            }
            (KeyModifiers { ctrl: false, alt: false }, KeyCode::Char(ch)) => {
                self.input.push(*ch);
                PromptResult::InProgress
            }
            _ => PromptResult::InProgress,
        }
    }

    fn finish(&mut self) {
        self.kind = None;
        self.input.clear();
    }
}

impl Default for PromptManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn type_str(prompt: &mut PromptManager, text: &str) {
        for ch in text.chars() {
            let result = prompt.handle_key(&Key::plain(KeyCode::Char(ch)));
            assert_eq!(result, PromptResult::InProgress);
        }
    }

    #[test]
    fn test_completed_input() {
        let mut prompt = PromptManager::new();
        prompt.start(PromptKind::SearchQuery);
        assert!(prompt.is_active());
        assert_eq!(prompt.display_line(), "Search: ");

        type_str(&mut prompt, "wor");
        assert_eq!(prompt.display_line(), "Search: wor");

        let result = prompt.handle_key(&Key::plain(KeyCode::Enter));
        assert_eq!(result, PromptResult::Completed("wor".to_string()));
        assert!(!prompt.is_active());
    }

    #[test]
    fn test_cancel_with_escape() {
        let mut prompt = PromptManager::new();
        prompt.start(PromptKind::OpenPath);
        type_str(&mut prompt, "/tmp/a.txt");

        let result = prompt.handle_key(&Key::plain(KeyCode::Esc));
        assert_eq!(result, PromptResult::Cancelled);
        assert!(!prompt.is_active());
    }

    #[test]
    fn test_cancel_with_ctrl_g() {
        let mut prompt = PromptManager::new();
        prompt.start(PromptKind::SavePath);

        let result = prompt.handle_key(&Key::ctrl('g'));
        assert_eq!(result, PromptResult::Cancelled);
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut prompt = PromptManager::new();
        prompt.start(PromptKind::SearchQuery);
        type_str(&mut prompt, "ab");
        prompt.handle_key(&Key::plain(KeyCode::Backspace));

        let result = prompt.handle_key(&Key::plain(KeyCode::Enter));
        assert_eq!(result, PromptResult::Completed("a".to_string()));
    }

    #[test]
    fn test_echo_message_expiry() {
        let mut message = EchoMessage::info("saved");
        assert!(!message.is_expired());

        message.backdate(Duration::from_secs(6));
        assert!(message.is_expired());
    }
}
