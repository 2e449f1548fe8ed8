// Status bar component - 상태바 컴포넌트
//
// 그룹/이미지 개수, 삭제 예정 개수와 크기, 알림 메시지 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    group_count: usize,
    image_count: usize,
    pending_count: usize,
    /// 삭제 예정 파일 총 크기 (포맷된 문자열)
    pending_size: &'a str,
    /// 알림 메시지 (있으면 개수 정보 대신 표시)
    toast: Option<&'a str>,
    /// 입력 대기 중인 시퀀스 키
    pending_key: Option<char>,
    layout_mode: &'a str,
    bg_color: Color,
    fg_color: Color,
    pending_color: Color,
    muted_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            group_count: 0,
            image_count: 0,
            pending_count: 0,
            pending_size: "0 B",
            toast: None,
            pending_key: None,
            layout_mode: "SPLIT",
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            pending_color: Color::Yellow,
            muted_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_count(mut self, count: usize) -> Self {
        self.group_count = count;
        self
    }

    pub fn image_count(mut self, count: usize) -> Self {
        self.image_count = count;
        self
    }

    pub fn pending_count(mut self, count: usize) -> Self {
        self.pending_count = count;
        self
    }

    pub fn pending_size(mut self, size: &'a str) -> Self {
        self.pending_size = size;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn pending_key(mut self, key: Option<char>) -> Self {
        self.pending_key = key;
        self
    }

    pub fn layout_mode(mut self, mode: &'a str) -> Self {
        self.layout_mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.pending_color = theme.row_pending.to_color();
        self.muted_color = theme.panel_inactive_border.to_color();
        self
    }

    fn left_text(&self) -> (String, String) {
        if let Some(toast) = self.toast {
            return (format!(" {}", toast), String::new());
        }
        let counts = format!(
            " {} groups, {} images",
            self.group_count, self.image_count
        );
        let pending = if self.pending_count > 0 {
            format!(
                " | {} to delete ({})",
                self.pending_count, self.pending_size
            )
        } else {
            String::new()
        };
        (counts, pending)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let (left_info, pending_info) = self.left_text();
        let right_info = match self.pending_key {
            Some(key) => format!("{}- [{}] ", key, self.layout_mode),
            None => format!("[{}] ", self.layout_mode),
        };

        let used = left_info.width() + pending_info.width() + right_info.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(pending_info, Style::default().fg(self.pending_color)),
            Span::raw(padding),
            Span::styled(right_info, Style::default().fg(self.muted_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_counts() {
        let bar = StatusBar::new()
            .group_count(3)
            .image_count(8)
            .pending_count(2)
            .pending_size("1.5 MB");
        let (left, pending) = bar.left_text();
        assert_eq!(left, " 3 groups, 8 images");
        assert_eq!(pending, " | 2 to delete (1.5 MB)");
    }

    #[test]
    fn test_status_bar_hides_pending_when_empty() {
        let (_, pending) = StatusBar::new().group_count(1).left_text();
        assert!(pending.is_empty());
    }

    #[test]
    fn test_toast_replaces_counts() {
        let bar = StatusBar::new().group_count(3).toast(Some("Theme: light"));
        assert_eq!(bar.left_text(), (" Theme: light".to_string(), String::new()));
    }
}
