// Title bar component - 상단 제목줄
//
// 프로그램 이름, 검색 폴더, 임계값 표시

use crate::ui::Theme;
use crate::utils::path_display::truncate_middle;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const APP_TITLE: &str = " image-comparer ";

pub struct TitleBar<'a> {
    folders: &'a str,
    threshold: u32,
    bg_color: Color,
    fg_color: Color,
}

impl<'a> TitleBar<'a> {
    pub fn new(folders: &'a str) -> Self {
        Self {
            folders,
            threshold: 0,
            bg_color: Color::Rgb(0, 120, 212),
            fg_color: Color::White,
        }
    }

    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.title_bar_bg.to_color();
        self.fg_color = theme.title_bar_fg.to_color();
        self
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let right = format!("threshold {} ", self.threshold);
        let available = (area.width as usize)
            .saturating_sub(APP_TITLE.width() + right.width() + 2);
        let folders = truncate_middle(self.folders, available);
        let padding = available.saturating_sub(folders.width());

        let line = Line::from(vec![
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(folders, Style::default().fg(self.fg_color)),
            Span::raw(" ".repeat(padding + 2)),
            Span::styled(right, Style::default().fg(self.fg_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bar_render() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        TitleBar::new("/photos").threshold(25).render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.starts_with(" image-comparer /photos"));
        assert!(text.trim_end().ends_with("threshold 25"));
    }
}
