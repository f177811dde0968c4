//! キーバインドシステム
//!
//! キー入力をアクションに解決するディスパッチテーブル。
//! ボタン相当の操作もキーもすべて同じテーブルを通る。

use crossterm::event::{KeyCode as CrosstermKeyCode, KeyEvent, KeyModifiers as CrosstermModifiers};
use std::collections::HashMap;

/// キー入力の内部表現
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// 修飾キー
    pub modifiers: KeyModifiers,
    /// 基本キー
    pub code: KeyCode,
}

/// 修飾キーの組み合わせ
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
}

/// 基本キーコード
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Esc,
    Unknown,
}

impl Key {
    /// Ctrl+文字キー
    pub fn ctrl(ch: char) -> Self {
        Self {
            modifiers: KeyModifiers {
                ctrl: true,
                alt: false,
            },
            code: KeyCode::Char(ch),
        }
    }

    /// 修飾なしキー
    pub fn plain(code: KeyCode) -> Self {
        Self {
            modifiers: KeyModifiers {
                ctrl: false,
                alt: false,
            },
            code,
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let modifiers = KeyModifiers {
            ctrl: event.modifiers.contains(CrosstermModifiers::CONTROL),
            alt: event.modifiers.contains(CrosstermModifiers::ALT),
        };

        let code = match event.code {
            CrosstermKeyCode::Char(ch) => KeyCode::Char(ch),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Backspace => KeyCode::Backspace,
            CrosstermKeyCode::Delete => KeyCode::Delete,
            CrosstermKeyCode::Tab => KeyCode::Tab,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::Home => KeyCode::Home,
            CrosstermKeyCode::End => KeyCode::End,
            CrosstermKeyCode::Esc => KeyCode::Esc,
            _ => KeyCode::Unknown,
        };

        Key { modifiers, code }
    }
}

/// カーソル移動操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    MoveCharForward,
    MoveCharBackward,
    MoveLineUp,
    MoveLineDown,
    MoveLineStart,
    MoveLineEnd,
}

/// アクション定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// ナビゲーション操作
    Navigate(NavigationAction),
    /// 文字挿入
    InsertChar(char),
    /// 改行
    InsertNewline,
    /// タブ（スペースに展開して挿入）
    InsertTab,
    /// 後方削除（Backspace）
    DeleteBackward,
    /// 前方削除（Delete）
    DeleteForward,
    /// ファイルを開く
    FileOpen,
    /// 保存
    FileSave,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// 単語カウント
    WordCount,
    /// 単語検索
    Search,
    /// 終了
    Quit,
}

/// キーマップ
///
/// 登録済みバインドへの解決と、未登録の印字可能キーの挿入アクション化。
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<Key, Action>,
}

impl KeyMap {
    /// デフォルトバインドでキーマップを作成
    pub fn new() -> Self {
        let mut bindings = HashMap::with_capacity(32);
        Self::register_default_bindings(&mut bindings);
        Self { bindings }
    }

    /// デフォルトバインドの登録
    fn register_default_bindings(bindings: &mut HashMap<Key, Action>) {
        // ファイル操作
        bindings.insert(Key::ctrl('o'), Action::FileOpen);
        bindings.insert(Key::ctrl('s'), Action::FileSave);

        // 履歴操作（redo は慣例どおり Ctrl+Y）
        bindings.insert(Key::ctrl('z'), Action::Undo);
        bindings.insert(Key::ctrl('y'), Action::Redo);

        // 解析操作
        bindings.insert(Key::ctrl('w'), Action::WordCount);
        bindings.insert(Key::ctrl('f'), Action::Search);

        // アプリケーション制御
        bindings.insert(Key::ctrl('q'), Action::Quit);

        // 編集系
        bindings.insert(Key::plain(KeyCode::Enter), Action::InsertNewline);
        bindings.insert(Key::plain(KeyCode::Backspace), Action::DeleteBackward);
        bindings.insert(Key::plain(KeyCode::Delete), Action::DeleteForward);
        bindings.insert(Key::plain(KeyCode::Tab), Action::InsertTab);

        // 移動系
        bindings.insert(
            Key::plain(KeyCode::Up),
            Action::Navigate(NavigationAction::MoveLineUp),
        );
        bindings.insert(
            Key::plain(KeyCode::Down),
            Action::Navigate(NavigationAction::MoveLineDown),
        );
        bindings.insert(
            Key::plain(KeyCode::Left),
            Action::Navigate(NavigationAction::MoveCharBackward),
        );
        bindings.insert(
            Key::plain(KeyCode::Right),
            Action::Navigate(NavigationAction::MoveCharForward),
        );
        bindings.insert(
            Key::plain(KeyCode::Home),
            Action::Navigate(NavigationAction::MoveLineStart),
        );
        bindings.insert(
            Key::plain(KeyCode::End),
            Action::Navigate(NavigationAction::MoveLineEnd),
        );
    }

    /// キーをアクションに解決
    ///
    /// 登録バインドが最優先。未登録でも修飾なしの印字可能文字は
    /// 挿入アクションになる。
    pub fn resolve(&self, key: &Key) -> Option<Action> {
        if let Some(action) = self.bindings.get(key) {
            return Some(action.clone());
        }

        match (&key.modifiers, &key.code) {
            (KeyModifiers { ctrl: false, alt: false }, KeyCode::Char(ch)) => {
                Some(Action::InsertChar(*ch))
            }
            _ => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
