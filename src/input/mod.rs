//! 入力モジュール
//!
//! キーバインドとアクション解決

pub mod keybinding;

// 公開API
pub use keybinding::{Action, Key, KeyCode, KeyMap, KeyModifiers, NavigationAction};
