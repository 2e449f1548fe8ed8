// Script view component - 삭제 스크립트 미리보기
//
// DeletionPlan의 렌더링 결과를 한 줄씩 표시합니다.
// 활성 상태에서는 커서 줄의 경로를 목록에서 뺄 수 있습니다.

use crate::models::deletion_plan::DeletionPlan;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ScriptView<'a> {
    plan: &'a DeletionPlan,
    scroll_offset: usize,
    /// 커서 위치 (스크립트 패널이 활성일 때만 표시)
    selected: Option<usize>,
    active: bool,
    active_border_color: Color,
    inactive_border_color: Color,
    bg_color: Color,
    fg_color: Color,
    selected_fg_color: Color,
    selected_bg_color: Color,
    muted_color: Color,
}

impl<'a> ScriptView<'a> {
    pub fn new(plan: &'a DeletionPlan) -> Self {
        Self {
            plan,
            scroll_offset: 0,
            selected: None,
            active: false,
            active_border_color: Color::Rgb(0, 120, 212),
            inactive_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(206, 145, 120),
            selected_fg_color: Color::White,
            selected_bg_color: Color::Rgb(0, 120, 212),
            muted_color: Color::Rgb(100, 100, 100),
        }
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_border_color = theme.panel_active_border.to_color();
        self.inactive_border_color = theme.panel_inactive_border.to_color();
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.script_fg.to_color();
        self.selected_fg_color = theme.row_selected.to_color();
        self.selected_bg_color = theme.row_selected_bg.to_color();
        self.muted_color = theme.panel_inactive_border.to_color();
        self
    }
}

impl Widget for ScriptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let border_color = if self.active {
            self.active_border_color
        } else {
            self.inactive_border_color
        };
        let mut title_style = Style::default().fg(border_color);
        if self.active {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" Delete Script ({}) ", self.plan.len()),
                title_style,
            ))
            .style(Style::default().bg(self.bg_color));

        if self.plan.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " (No files marked for deletion)",
                Style::default().fg(self.muted_color),
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        let style = Style::default().fg(self.fg_color);
        let selected_style = Style::default()
            .fg(self.selected_fg_color)
            .bg(self.selected_bg_color);
        let selected = self.selected.filter(|_| self.active);
        let lines: Vec<Line> = self
            .plan
            .lines()
            .enumerate()
            .skip(self.scroll_offset)
            .map(|(index, line)| {
                if selected == Some(index) {
                    Line::from(Span::styled(line, selected_style))
                } else {
                    Line::from(Span::styled(line, style))
                }
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
