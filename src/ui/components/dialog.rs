//! 다이얼로그 시스템
//!
//! 도움말, 알림, 에러, 종료 확인 다이얼로그 위젯 정의

use crate::core::actions::generate_help_entries;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;

const HELP_TITLE: &str = " Keyboard Shortcuts ";
const HELP_HINT: &str = "j/k: scroll  Esc/?: close";
const OK_LABEL: &str = "OK";
const QUIT_LABEL: &str = "Quit";
const CANCEL_LABEL: &str = "Cancel";

/// 다이얼로그 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// 단축키 도움말
    Help { scroll_offset: usize },
    /// 메시지 다이얼로그 (정보 표시)
    Message { title: String, message: String },
    /// 에러 다이얼로그
    Error { title: String, message: String },
    /// 스크립트를 쓰지 않고 종료할 때 확인
    ConfirmQuit {
        pending: usize,
        selected_button: usize, // 0: Quit, 1: Cancel
    },
}

impl DialogKind {
    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }

    /// 새 메시지 다이얼로그 생성
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    /// 새 에러 다이얼로그 생성
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    /// 종료 확인 다이얼로그 생성 (기본 선택: Cancel)
    pub fn confirm_quit(pending: usize) -> Self {
        DialogKind::ConfirmQuit {
            pending,
            selected_button: 1,
        }
    }
}

pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    warning_color: Color,
    error_color: Color,
    muted_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            warning_color: Color::Rgb(255, 165, 0),
            error_color: Color::Rgb(244, 71, 71),
            muted_color: Color::Rgb(128, 128, 128),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.panel_active_border.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.command_bar_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.row_selected_bg.to_color();
        self.button_selected_fg = theme.row_selected.to_color();
        self.warning_color = theme.warning.to_color();
        self.error_color = theme.error.to_color();
        self.muted_color = theme.panel_inactive_border.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Help { .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(40);
                let h = sh.saturating_sub(6).max(15);
                (w, h)
            }
            DialogKind::Error { message, .. } | DialogKind::Message { message, .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(30);
                let inner_width = w.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
                // 긴 경로는 줄바꿈되므로 폭 기준으로 줄 수 추정
                let lines: usize = message
                    .lines()
                    .map(|line| line.width().div_ceil(inner_width).max(1))
                    .sum::<usize>()
                    .max(1);
                let h = (5 + lines as u16).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
            DialogKind::ConfirmQuit { .. } => (46u16.min(sw.saturating_sub(4)).max(30), 8u16),
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(4));

        let x = screen.x + (sw.saturating_sub(width)) / 2;
        let y = screen.y + (sh.saturating_sub(height)) / 2;

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn bordered_block(&self, title: &str, color: Color) -> Block<'static> {
        Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(self.bg_color))
    }

    /// 버튼 렌더링 헬퍼
    fn render_button(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        is_selected: bool,
    ) -> u16 {
        let (bg, fg) = if is_selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };

        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;
        buf.set_string(x, y, &padded_label, Style::default().fg(fg).bg(bg));
        width
    }

    /// 에러/메시지 다이얼로그 렌더링
    fn render_message(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        is_error: bool,
    ) {
        let color = if is_error {
            self.error_color
        } else {
            self.title_color
        };
        self.bordered_block(title, color).render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: false })
            .render(inner, buf);

        // OK 버튼
        let button_y = area.y + area.height - 2;
        let button_width = format!(" {} ", OK_LABEL).width() as u16;
        let button_x = area.x + (area.width.saturating_sub(button_width)) / 2;
        self.render_button(buf, button_x, button_y, OK_LABEL, true);
    }

    fn render_confirm_quit(
        &self,
        buf: &mut Buffer,
        area: Rect,
        pending: usize,
        selected_button: usize,
    ) {
        self.bordered_block("Quit", self.warning_color)
            .render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
        };
        let message = format!(
            "{} marked file(s) have not been written to a script. Quit anyway?",
            pending
        );
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        // 버튼 (하단 중앙)
        let button_y = area.y + area.height - 2;
        let buttons_width = (format!(" {} ", QUIT_LABEL).width()
            + 2
            + format!(" {} ", CANCEL_LABEL).width()) as u16;
        let button_x = area.x + (area.width.saturating_sub(buttons_width)) / 2;

        let quit_width =
            self.render_button(buf, button_x, button_y, QUIT_LABEL, selected_button == 0);
        self.render_button(
            buf,
            button_x + quit_width + 2,
            button_y,
            CANCEL_LABEL,
            selected_button == 1,
        );
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        Block::default()
            .title(HELP_TITLE)
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(4), // 하단 힌트 공간 확보
        };

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.title_color);
        let desc_style = Style::default().fg(self.fg_color);

        // (is_header, col1, col2)
        let mut rows: Vec<(bool, &str, &str)> = Vec::new();
        for (category, items) in generate_help_entries() {
            rows.push((true, category, ""));
            rows.extend(items.into_iter().map(|(key, desc)| (false, key, desc)));
            rows.push((false, "", ""));
        }
        rows.pop();

        let visible_height = inner.height as usize;
        let max_scroll = rows.len().saturating_sub(visible_height);
        let effective_scroll = scroll_offset.min(max_scroll);
        let key_col_width = 20u16;

        for (i, (is_header, key, desc)) in rows
            .iter()
            .skip(effective_scroll)
            .take(visible_height)
            .enumerate()
        {
            let y = inner.y + i as u16;
            if *is_header {
                buf.set_string(inner.x, y, key, header_style);
            } else if !key.is_empty() {
                buf.set_string(inner.x + 2, y, key, key_style);
                buf.set_string(inner.x + key_col_width, y, desc, desc_style);
            }
        }

        let hint_x = area.x + (area.width.saturating_sub(HELP_HINT.width() as u16)) / 2;
        let hint_y = area.y + area.height - 2;
        buf.set_string(hint_x, hint_y, HELP_HINT, Style::default().fg(self.muted_color));
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        if dialog_area.width < 4 || dialog_area.height < 4 {
            return;
        }

        // 배경 클리어
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset);
            }
            DialogKind::Message { title, message } => {
                self.render_message(buf, dialog_area, title, message, false);
            }
            DialogKind::Error { title, message } => {
                self.render_message(buf, dialog_area, title, message, true);
            }
            DialogKind::ConfirmQuit {
                pending,
                selected_button,
            } => {
                self.render_confirm_quit(buf, dialog_area, *pending, *selected_button);
            }
        }
    }
}
