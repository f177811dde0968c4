//! メインアプリケーション構造体
//!
//! セッション・キーマップ・ミニバッファを統合し、キー入力を
//! アクションにディスパッチする。キーもボタン相当の操作もすべて
//! 同じディスパッチテーブル（`dispatch`）を通る。

use crate::error::Result;
use crate::file::expand_path;
use crate::input::{Action, Key, KeyMap, NavigationAction};
use crate::minibuffer::{EchoMessage, PromptKind, PromptManager, PromptResult};
use crate::session::{EditorSession, SaveOutcome};
use crate::ui::{RenderView, StatusLineInfo};
use crossterm::event::KeyEvent;
use std::path::Path;

/// 未保存バッファの表示名
const UNTITLED_LABEL: &str = "[untitled]";

/// タブ展開幅
const TAB_WIDTH: usize = 4;

/// メインアプリケーション構造体
///
/// 表示層とセッションの間に立ち、プロンプト状態とカーソルを管理する。
pub struct App {
    /// アプリケーション実行状態
    running: bool,
    /// 編集セッション（バッファ・履歴・現在ファイル参照）
    session: EditorSession,
    /// キーマップ
    keymap: KeyMap,
    /// プロンプト管理
    prompt: PromptManager,
    /// エコー行メッセージ
    echo: Option<EchoMessage>,
    /// カーソル位置（文字インデックス）
    cursor: usize,
}

impl App {
    /// 空のバッファでアプリケーションを作成
    pub fn new() -> Self {
        Self {
            running: true,
            session: EditorSession::new(),
            keymap: KeyMap::new(),
            prompt: PromptManager::new(),
            echo: None,
            cursor: 0,
        }
    }

    /// 起動時にファイルを開く
    ///
    /// 失敗してもアプリケーションは空バッファで継続し、エラーは
    /// エコー行に表示する。
    pub fn open_initial_file(&mut self, path: &Path) {
        if let Err(error) = self.session.open(path) {
            self.echo = Some(EchoMessage::error(error.user_message()));
        }
        self.cursor = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 期限切れのエコーメッセージを消す
    pub fn process_echo_timer(&mut self) {
        if let Some(message) = &self.echo {
            if message.is_expired() {
                self.echo = None;
            }
        }
    }

    /// 描画入力を構築
    pub fn render_view(&self) -> RenderView<'_> {
        let file_label = self
            .session
            .current_path()
            .and_then(|p| p.to_str())
            .unwrap_or(UNTITLED_LABEL);

        RenderView {
            buffer: self.session.buffer(),
            cursor: self.session.buffer().char_to_line_col(self.cursor),
            status: StatusLineInfo {
                file_label,
                is_modified: self.session.is_modified(),
            },
            echo_line: self.echo_line(),
            prompt_active: self.prompt.is_active(),
        }
    }

    fn echo_line(&self) -> String {
        if self.prompt.is_active() {
            self.prompt.display_line()
        } else {
            self.echo
                .as_ref()
                .map(|m| m.text.clone())
                .unwrap_or_default()
        }
    }

    /// プロンプト行の表示内容（プロンプト中のみ）
    pub fn prompt_line(&self) -> Option<String> {
        if self.prompt.is_active() {
            Some(self.prompt.display_line())
        } else {
            None
        }
    }

    /// キーイベントを処理
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        let key = Key::from(event);

        if self.prompt.is_active() {
            let Some(kind) = self.prompt.kind() else {
                return Ok(());
            };
            match self.prompt.handle_key(&key) {
                PromptResult::Completed(input) => self.complete_prompt(kind, input),
                // キャンセルは正常系の無処理
                PromptResult::Cancelled | PromptResult::InProgress => {}
            }
            return Ok(());
        }

        if let Some(action) = self.keymap.resolve(&key) {
            self.dispatch(action)?;
        }

        Ok(())
    }

    /// アクションディスパッチテーブル
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Navigate(nav) => self.move_cursor(nav),
            Action::InsertChar(ch) => self.insert_char(ch),
            Action::InsertNewline => self.insert_char('\n'),
            Action::InsertTab => self.insert_tab(),
            Action::DeleteBackward => self.delete_backward(),
            Action::DeleteForward => self.delete_forward(),
            Action::FileOpen => self.prompt.start(PromptKind::OpenPath),
            Action::FileSave => self.save(None),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::WordCount => self.word_count(),
            Action::Search => self.prompt.start(PromptKind::SearchQuery),
            Action::Quit => self.request_quit(),
        }
        Ok(())
    }

    /// プロンプト完了時の処理
    fn complete_prompt(&mut self, kind: PromptKind, input: String) {
        match kind {
            PromptKind::OpenPath => self.open(&input),
            PromptKind::SavePath => match expand_path(&input) {
                Ok(path) => self.save(Some(path.as_path())),
                Err(error) => self.echo = Some(EchoMessage::error(error.user_message())),
            },
            PromptKind::SearchQuery => self.search(&input),
            PromptKind::ConfirmQuit => {
                if matches!(input.trim(), "y" | "Y" | "yes") {
                    self.running = false;
                }
            }
        }
    }

    fn open(&mut self, input: &str) {
        let path = match expand_path(input) {
            Ok(path) => path,
            Err(error) => {
                self.echo = Some(EchoMessage::error(error.user_message()));
                return;
            }
        };

        match self.session.open(&path) {
            Ok(()) => {
                self.cursor = 0;
                self.echo = Some(EchoMessage::info(format!("Opened {}", path.display())));
            }
            // 失敗時はバッファ・履歴・現在ファイル参照とも不変
            Err(error) => self.echo = Some(EchoMessage::error(error.user_message())),
        }
    }

    fn save(&mut self, path: Option<&Path>) {
        match self.session.save(path.map(|p| p.to_path_buf())) {
            Ok(SaveOutcome::Saved(target)) => {
                self.echo = Some(EchoMessage::info(format!("Saved {}", target.display())));
            }
            Ok(SaveOutcome::PathRequired) => self.prompt.start(PromptKind::SavePath),
            Err(error) => self.echo = Some(EchoMessage::error(error.user_message())),
        }
    }

    fn undo(&mut self) {
        // 空履歴は無処理（エラーでも通知でもない）
        if self.session.undo() {
            self.clamp_cursor();
        }
    }

    fn redo(&mut self) {
        if self.session.redo() {
            self.clamp_cursor();
        }
    }

    fn word_count(&mut self) {
        let count = self.session.word_count();
        self.echo = Some(EchoMessage::info(format!("Word count: {}", count)));
    }

    fn search(&mut self, query: &str) {
        let indices = self.session.search(query);
        let message = if indices.is_empty() {
            format!("'{}' not found", query)
        } else {
            format!("Found '{}' at indices: {:?}", query, indices)
        };
        self.echo = Some(EchoMessage::info(message));
    }

    fn request_quit(&mut self) {
        if self.session.is_modified() {
            self.prompt.start(PromptKind::ConfirmQuit);
        } else {
            self.running = false;
        }
    }

    fn insert_char(&mut self, ch: char) {
        self.session.buffer_mut().insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    /// タブをスペースに展開して挿入
    ///
    /// タブ文字は表示幅の計算（unicode-width は '\t' を幅なし扱い）と
    /// 描画側のタブ処理が一致せずカーソルがずれるため、バッファには
    /// 入れない。
    fn insert_tab(&mut self) {
        for _ in 0..TAB_WIDTH {
            self.insert_char(' ');
        }
    }

    fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.session.buffer_mut().remove_char(self.cursor - 1);
        self.cursor -= 1;
    }

    fn delete_forward(&mut self) {
        self.session.buffer_mut().remove_char(self.cursor);
    }

    fn move_cursor(&mut self, nav: NavigationAction) {
        let buffer = self.session.buffer();
        let (line, col) = buffer.char_to_line_col(self.cursor);

        self.cursor = match nav {
            NavigationAction::MoveCharForward => {
                (self.cursor + 1).min(buffer.char_count())
            }
            NavigationAction::MoveCharBackward => self.cursor.saturating_sub(1),
            NavigationAction::MoveLineUp => {
                if line == 0 {
                    self.cursor
                } else {
                    buffer.line_col_to_char(line - 1, col)
                }
            }
            NavigationAction::MoveLineDown => {
                if line + 1 >= buffer.line_count() {
                    self.cursor
                } else {
                    buffer.line_col_to_char(line + 1, col)
                }
            }
            NavigationAction::MoveLineStart => buffer.line_col_to_char(line, 0),
            NavigationAction::MoveLineEnd => buffer.line_col_to_char(line, usize::MAX),
        };
    }

    /// undo / redo 後にカーソルをバッファ範囲内へ丸める
    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.session.buffer().char_count());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
