//! 編集セッション
//!
//! バッファ・編集履歴・現在ファイル参照を所有するセッションオブジェクト。
//! 表示層はこのセッションへの参照を保持し、定義された操作を通じてのみ
//! 状態を変更する。

use crate::buffer::TextBuffer;
use crate::editor::HistoryStack;
use crate::error::Result;
use crate::file::{FileReader, FileSaver};
use crate::{analysis, log_debug_here};
use crate::logging::Logger;
use std::path::{Path, PathBuf};

/// save 操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 指定パスへ保存した
    Saved(PathBuf),
    /// 保存先が未定（呼び出し側がパスの入力を促す）
    PathRequired,
}

/// 編集セッション
pub struct EditorSession {
    /// ドキュメントバッファ
    buffer: TextBuffer,
    /// undo / redo スタック
    history: HistoryStack,
    /// 現在ファイル参照（最後に open / save したパス。単一スロット）
    current_path: Option<PathBuf>,
    /// 最後に open / save した時点の内容（変更判定の基準）
    saved_baseline: String,
    /// 開発用ロガー
    logger: Logger,
}

impl EditorSession {
    /// 空のセッションを作成
    ///
    /// ロガーは環境変数（NOTARE_DEBUG / NOTARE_LOG_FILE）から構築する。
    pub fn new() -> Self {
        Self::with_logger(Logger::from_env())
    }

    /// ロガーを指定してセッションを作成
    pub fn with_logger(logger: Logger) -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: HistoryStack::new(),
            current_path: None,
            saved_baseline: String::new(),
            logger,
        }
    }

    /// 現在のバッファ内容
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// バッファへの参照（表示層の読み取り用）
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// バッファへの可変参照（テキストエリアの編集ヘルパー用）
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// バッファ内容を丸ごと置き換え
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
    }

    /// バッファをクリア
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// 現在ファイル参照
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// 最後の open / save 以降に変更があるか
    pub fn is_modified(&self) -> bool {
        self.buffer.text() != self.saved_baseline
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// ファイルを開く
    ///
    /// 読み込み成功時のみバッファを置き換え、スナップショットを記録し、
    /// 現在ファイル参照を更新する。失敗時は全状態が不変。
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let content = FileReader::new().read_file(path)?;

        self.buffer.set_text(content);
        self.history.record(self.buffer.text().to_string());
        self.current_path = Some(path.to_path_buf());
        self.saved_baseline = self.buffer.text().to_string();

        log_debug_here!(self.logger, &format!("opened {}", path.display()));
        Ok(())
    }

    /// バッファを保存
    ///
    /// 保存先は明示パス、なければ現在ファイル参照。どちらもなければ
    /// `SaveOutcome::PathRequired` を返し、呼び出し側がプロンプトを出す
    /// （ユーザーキャンセルは呼び出し側で無処理にする）。
    pub fn save(&mut self, path: Option<PathBuf>) -> Result<SaveOutcome> {
        let target = match path.or_else(|| self.current_path.clone()) {
            Some(target) => target,
            None => return Ok(SaveOutcome::PathRequired),
        };

        FileSaver::new().save_file(&target, self.buffer.text())?;

        self.history.record(self.buffer.text().to_string());
        self.current_path = Some(target.clone());
        self.saved_baseline = self.buffer.text().to_string();

        log_debug_here!(self.logger, &format!("saved {}", target.display()));
        Ok(SaveOutcome::Saved(target))
    }

    /// undo を実行
    ///
    /// 履歴が空の場合は何もせず false を返す（エラーではない）。
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.buffer.text()) {
            Some(snapshot) => {
                self.buffer.set_text(snapshot);
                true
            }
            None => false,
        }
    }

    /// redo を実行（undo と対称）
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.buffer.text()) {
            Some(snapshot) => {
                self.buffer.set_text(snapshot);
                true
            }
            None => false,
        }
    }

    /// バッファの単語数
    pub fn word_count(&self) -> usize {
        analysis::word_count(self.buffer.text())
    }

    /// バッファに対する単語検索
    pub fn search(&self, query: &str) -> Vec<usize> {
        analysis::search(self.buffer.text(), query)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
