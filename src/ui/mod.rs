//! UIモジュール
//!
//! ratatui ベースの描画。テキストエリア・ステータス行・エコー行の
//! 3段レイアウトを描く。

use crate::buffer::TextBuffer;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

/// ステータス行に表示する情報
#[derive(Debug, Clone, Copy)]
pub struct StatusLineInfo<'a> {
    /// 現在ファイルのラベル（未保存バッファは固定名）
    pub file_label: &'a str,
    /// 未保存の変更があるか
    pub is_modified: bool,
}

/// 1フレーム分の描画入力
pub struct RenderView<'a> {
    pub buffer: &'a TextBuffer,
    /// カーソル位置（行, 行内文字位置）
    pub cursor: (usize, usize),
    pub status: StatusLineInfo<'a>,
    /// エコー行の内容（プロンプト表示が優先される）
    pub echo_line: String,
    /// プロンプト入力中か（エコー行にカーソルを置く）
    pub prompt_active: bool,
}

/// レンダラー
///
/// スクロールオフセットを保持し、カーソルが常に可視になるよう調整する。
#[derive(Debug, Default)]
pub struct Renderer {
    /// 縦スクロール（先頭表示行）
    scroll_top: usize,
    /// 横スクロール（先頭表示桁、表示幅単位）
    scroll_left: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1フレームを描画
    pub fn render(&mut self, frame: &mut Frame<'_>, view: &RenderView<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // テキストエリア
                Constraint::Length(1), // ステータス行
                Constraint::Length(1), // エコー行
            ])
            .split(frame.area());

        self.render_text_area(frame, chunks[0], view);
        self.render_status_line(frame, chunks[1], &view.status);
        self.render_echo_line(frame, chunks[2], view);
    }

    fn render_text_area(&mut self, frame: &mut Frame<'_>, area: Rect, view: &RenderView<'_>) {
        let (cursor_line, cursor_col) = view.cursor;
        let cursor_x = display_width_before(
            view.buffer.line(cursor_line).unwrap_or(""),
            cursor_col,
        );

        self.adjust_scroll(area, cursor_line, cursor_x);

        let lines: Vec<Line<'_>> = view
            .buffer
            .text()
            .split('\n')
            .skip(self.scroll_top)
            .take(area.height as usize)
            .map(Line::from)
            .collect();

        let paragraph = Paragraph::new(lines).scroll((0, self.scroll_left as u16));
        frame.render_widget(paragraph, area);

        if !view.prompt_active {
            let x = area.x + (cursor_x - self.scroll_left) as u16;
            let y = area.y + (cursor_line - self.scroll_top) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    /// カーソルが可視範囲に収まるようスクロールを調整
    fn adjust_scroll(&mut self, area: Rect, cursor_line: usize, cursor_x: usize) {
        let height = area.height.max(1) as usize;
        let width = area.width.max(1) as usize;

        if cursor_line < self.scroll_top {
            self.scroll_top = cursor_line;
        } else if cursor_line >= self.scroll_top + height {
            self.scroll_top = cursor_line + 1 - height;
        }

        if cursor_x < self.scroll_left {
            self.scroll_left = cursor_x;
        } else if cursor_x >= self.scroll_left + width {
            self.scroll_left = cursor_x + 1 - width;
        }
    }

    fn render_status_line(&self, frame: &mut Frame<'_>, area: Rect, status: &StatusLineInfo<'_>) {
        let modified_mark = if status.is_modified { " [+]" } else { "" };
        let text = format!(" {}{}", status.file_label, modified_mark);

        let paragraph = Paragraph::new(text).style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_echo_line(&self, frame: &mut Frame<'_>, area: Rect, view: &RenderView<'_>) {
        let paragraph = Paragraph::new(view.echo_line.as_str());
        frame.render_widget(paragraph, area);

        if view.prompt_active {
            let x = area.x
                + display_width(&view.echo_line).min((area.width as usize).saturating_sub(1))
                    as u16;
            frame.set_cursor_position(Position::new(x, area.y));
        }
    }
}

/// 行頭から `col` 文字分の表示幅
fn display_width_before(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum()
}

/// 文字列全体の表示幅
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width_before("hello", 3), 3);
        assert_eq!(display_width_before("hello", 10), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_fullwidth() {
        // 全角文字は幅2
        assert_eq!(display_width_before("あい", 1), 2);
        assert_eq!(display_width("あい"), 4);
    }

    #[test]
    fn test_scroll_adjustment() {
        let mut renderer = Renderer::new();
        let area = Rect::new(0, 0, 80, 10);

        renderer.adjust_scroll(area, 25, 0);
        assert_eq!(renderer.scroll_top, 16);

        renderer.adjust_scroll(area, 5, 0);
        assert_eq!(renderer.scroll_top, 5);

        renderer.adjust_scroll(area, 5, 100);
        assert_eq!(renderer.scroll_left, 21);
    }
}
