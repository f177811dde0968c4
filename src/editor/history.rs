//! 編集履歴管理
//!
//! バッファ全体のスナップショットを積む線形 undo / redo スタック。
//! 記録は open / save 成功時のみ行われるため、undo の粒度は
//! 「最後の open / save 以降」となる（意図した挙動）。

/// スナップショット履歴スタック
///
/// 積まれたスナップショットは所有された複製であり、以後変更されない。
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo: Vec<String>,
    redo: Vec<String>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// スナップショットを記録
    ///
    /// undo スタックに積み、redo スタックを無効化する。
    pub fn record(&mut self, snapshot: String) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// undo 遷移
    ///
    /// 現在内容を redo へ退避し、undo の先頭を新しいバッファ内容として
    /// 返す。履歴が空なら `None`（状態変化なし）。
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.undo.pop()?;
        self.redo.push(current.to_string());
        Some(snapshot)
    }

    /// redo 遷移（undo と対称）
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let snapshot = self.redo.pop()?;
        self.undo.push(current.to_string());
        Some(snapshot)
    }

    /// 積まれている undo スナップショット数
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// 積まれている redo スナップショット数
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
