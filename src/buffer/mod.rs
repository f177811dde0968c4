//! バッファストア
//!
//! ドキュメント全体を保持する単一の可変テキスト値。
//! open / undo / redo では差分ではなく全体が丸ごと置き換えられる。

/// テキストバッファ
///
/// セッションからは get / set / clear のみが契約。文字インデックス系の
/// 編集ヘルパーはテキストエリア（表示層）のためのもの。
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
}

impl TextBuffer {
    /// 空のバッファを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期内容付きで作成
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
        }
    }

    /// 現在の内容を取得
    pub fn text(&self) -> &str {
        &self.content
    }

    /// 内容を丸ごと置き換え
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    /// 内容をクリア
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// バッファが空か
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// 文字数（バイト数ではない）
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// 文字インデックスをバイトオフセットに変換
    ///
    /// `char_idx` が文字数を超える場合は末尾に丸める。
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.content.len())
    }

    /// 指定位置に1文字挿入
    pub fn insert_char(&mut self, char_idx: usize, ch: char) {
        let offset = self.byte_offset(char_idx);
        self.content.insert(offset, ch);
    }

    /// 指定位置に文字列を挿入
    pub fn insert_str(&mut self, char_idx: usize, text: &str) {
        let offset = self.byte_offset(char_idx);
        self.content.insert_str(offset, text);
    }

    /// 指定位置の1文字を削除して返す
    ///
    /// 範囲外の場合は何もしない。
    pub fn remove_char(&mut self, char_idx: usize) -> Option<char> {
        let offset = self.byte_offset(char_idx);
        if offset >= self.content.len() {
            return None;
        }
        Some(self.content.remove(offset))
    }

    /// 文字インデックスを（行, 行内文字位置）へ変換
    pub fn char_to_line_col(&self, char_idx: usize) -> (usize, usize) {
        let mut line = 0usize;
        let mut col = 0usize;
        for (i, ch) in self.content.chars().enumerate() {
            if i >= char_idx {
                break;
            }
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// （行, 行内文字位置）を文字インデックスへ変換
    ///
    /// 行内位置が行の長さを超える場合は行末に丸める。
    pub fn line_col_to_char(&self, line: usize, col: usize) -> usize {
        let mut idx = 0usize;
        for (current_line, text) in self.content.split('\n').enumerate() {
            let line_len = text.chars().count();
            if current_line == line {
                return idx + col.min(line_len);
            }
            idx += line_len + 1; // 改行文字の分
        }
        self.char_count()
    }

    /// 行数（空バッファは1行扱い）
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// 指定行の内容（改行を含まない）
    pub fn line(&self, line: usize) -> Option<&str> {
        self.content.split('\n').nth(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_clear() {
        let mut buffer = TextBuffer::new();
        assert!(buffer.is_empty());

        buffer.set_text("hello");
        assert_eq!(buffer.text(), "hello");

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_insert_and_remove_char() {
        let mut buffer = TextBuffer::from_text("hllo");
        buffer.insert_char(1, 'e');
        assert_eq!(buffer.text(), "hello");

        let removed = buffer.remove_char(0);
        assert_eq!(removed, Some('h'));
        assert_eq!(buffer.text(), "ello");

        // 範囲外は無視
        assert_eq!(buffer.remove_char(100), None);
        assert_eq!(buffer.text(), "ello");
    }

    #[test]
    fn test_multibyte_insert() {
        let mut buffer = TextBuffer::from_text("こんにち");
        buffer.insert_char(4, 'は');
        assert_eq!(buffer.text(), "こんにちは");
        assert_eq!(buffer.char_count(), 5);
    }

    #[test]
    fn test_line_col_conversion() {
        let buffer = TextBuffer::from_text("hello\nworld");
        assert_eq!(buffer.char_to_line_col(0), (0, 0));
        assert_eq!(buffer.char_to_line_col(5), (0, 5));
        assert_eq!(buffer.char_to_line_col(6), (1, 0));
        assert_eq!(buffer.char_to_line_col(11), (1, 5));

        assert_eq!(buffer.line_col_to_char(1, 0), 6);
        assert_eq!(buffer.line_col_to_char(0, 100), 5); // 行末に丸め
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(1), Some("world"));
    }
}
