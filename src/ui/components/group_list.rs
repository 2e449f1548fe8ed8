// Group list component - 유사 이미지 그룹 목록
//
// 그룹 제목 줄과 파일 줄을 표시하고, 파일마다 삭제 토글 버튼을 그립니다.
// 버튼 레이블은 매 프레임 DeletionPlan 상태에서 파생됩니다.

use crate::models::deletion_plan::{DeletionPlan, MarkState, UNMARK_LABEL};
use crate::models::review_state::{ReviewRow, ReviewState};
use crate::models::similarity_group::{GroupMember, SimilarityGroup};
use crate::ui::Theme;
use crate::utils::formatter::{format_date_full, format_dimensions, pluralize};
use crate::utils::path_display::truncate_path;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// `[Don't Delete]` 기준 버튼 열 너비
const BUTTON_COL_WIDTH: usize = UNMARK_LABEL.len() + 2;
const DIMS_COL_WIDTH: usize = 11;
const DATE_COL_WIDTH: usize = 19;
const SCORE_COL_WIDTH: usize = 8;
const MIN_PATH_WIDTH: usize = 16;

/// 파일 줄 열 배치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    path: usize,
    show_dims: bool,
    show_date: bool,
}

impl ColumnLayout {
    /// 가용 폭에 맞춰 날짜, 크기 순으로 열을 숨김
    fn calculate(width: usize) -> Self {
        // 버튼 + 공백, 점수 앞 공백
        let fixed = BUTTON_COL_WIDTH + 1 + SCORE_COL_WIDTH + 1;
        let all = fixed + DIMS_COL_WIDTH + 1 + DATE_COL_WIDTH + 1;
        let no_date = fixed + DIMS_COL_WIDTH + 1;

        let (show_dims, show_date, used) = if width >= all + MIN_PATH_WIDTH {
            (true, true, all)
        } else if width >= no_date + MIN_PATH_WIDTH {
            (true, false, no_date)
        } else {
            (false, false, fixed)
        };

        Self {
            path: width.saturating_sub(used),
            show_dims,
            show_date,
        }
    }
}

pub struct GroupList<'a> {
    groups: &'a [SimilarityGroup],
    review: &'a ReviewState,
    plan: &'a DeletionPlan,
    active: bool,
    active_border_color: Color,
    inactive_border_color: Color,
    bg_color: Color,
    row_normal_color: Color,
    row_selected_color: Color,
    row_selected_bg_color: Color,
    row_pending_color: Color,
    group_header_color: Color,
    button_mark_color: Color,
    button_unmark_color: Color,
}

impl<'a> GroupList<'a> {
    pub fn new(
        groups: &'a [SimilarityGroup],
        review: &'a ReviewState,
        plan: &'a DeletionPlan,
    ) -> Self {
        Self {
            groups,
            review,
            plan,
            active: true,
            active_border_color: Color::Rgb(0, 120, 212),
            inactive_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            row_normal_color: Color::Rgb(212, 212, 212),
            row_selected_color: Color::White,
            row_selected_bg_color: Color::Rgb(0, 120, 212),
            row_pending_color: Color::Rgb(244, 71, 71),
            group_header_color: Color::Rgb(86, 156, 214),
            button_mark_color: Color::Rgb(244, 71, 71),
            button_unmark_color: Color::Rgb(100, 180, 100),
        }
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
        self.row_normal_color = theme.row_normal.to_color();
        self.row_selected_color = theme.row_selected.to_color();
        self.row_selected_bg_color = theme.row_selected_bg.to_color();
        self.row_pending_color = theme.row_pending.to_color();
        self.group_header_color = theme.group_header.to_color();
        self.button_mark_color = theme.button_mark.to_color();
        self.button_unmark_color = theme.button_unmark.to_color();
        self
    }

    fn border_color(&self) -> Color {
        if self.active {
            self.active_border_color
        } else {
            self.inactive_border_color
        }
    }

    fn header_line(&self, group: usize) -> Line<'static> {
        let count = self.groups.get(group).map(SimilarityGroup::member_count).unwrap_or(0);
        Line::from(Span::styled(
            format!(
                " Group {} · {}",
                group + 1,
                pluralize(count, "image", "images")
            ),
            Style::default()
                .fg(self.group_header_color)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn file_line(
        &self,
        member: &GroupMember<'_>,
        layout: ColumnLayout,
        selected: bool,
    ) -> Line<'static> {
        let path = member.image.path_string();
        let button = self.plan.button(&path);

        let mut text_style = match button.state {
            MarkState::Pending => Style::default()
                .fg(self.row_pending_color)
                .add_modifier(Modifier::CROSSED_OUT),
            MarkState::Kept => Style::default().fg(self.row_normal_color),
        };
        let mut button_style = match button.state {
            MarkState::Kept => Style::default().fg(self.button_mark_color),
            MarkState::Pending => Style::default().fg(self.button_unmark_color),
        }
        .add_modifier(Modifier::BOLD);
        if selected {
            text_style = text_style
                .fg(self.row_selected_color)
                .bg(self.row_selected_bg_color);
            button_style = button_style.bg(self.row_selected_bg_color);
        }

        let button_text = format!("[{}]", button.label());
        let display_path = truncate_path(&path, layout.path);

        let mut spans = vec![
            Span::styled(
                format!(" {:<width$}", button_text, width = BUTTON_COL_WIDTH),
                button_style,
            ),
            Span::styled(
                format!(
                    "{}{}",
                    display_path,
                    " ".repeat(layout.path.saturating_sub(display_path.width()))
                ),
                text_style,
            ),
        ];

        let muted = text_style.remove_modifier(Modifier::CROSSED_OUT);
        if layout.show_dims {
            spans.push(Span::styled(
                format!(
                    " {:>width$}",
                    format_dimensions(member.image.width, member.image.height),
                    width = DIMS_COL_WIDTH
                ),
                muted,
            ));
        }
        if layout.show_date {
            spans.push(Span::styled(
                format!(" {}", format_date_full(member.image.modified)),
                muted,
            ));
        }
        spans.push(Span::styled(
            format!(" {:>width$}", member.score.to_string(), width = SCORE_COL_WIDTH),
            muted,
        ));

        Line::from(spans)
    }

    fn render_scrollbar(&self, inner: Rect, buf: &mut Buffer) {
        let total_items = self.review.rows.len();
        let track_height = inner.height as usize;
        if track_height == 0 || total_items <= track_height {
            return;
        }

        let thumb_height = (track_height * track_height / total_items).max(1);
        let max_scroll = total_items - track_height;
        let thumb_pos =
            self.review.scroll_offset.min(max_scroll) * (track_height - thumb_height) / max_scroll;

        let scrollbar_x = inner.x + inner.width - 1;
        let track_style = Style::default().fg(Color::Rgb(60, 60, 60));
        let thumb_style = Style::default().fg(Color::Rgb(150, 150, 150));

        for i in 0..track_height {
            let (symbol, style) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                ("┃", thumb_style)
            } else {
                ("│", track_style)
            };
            buf.set_string(scrollbar_x, inner.y + i as u16, symbol, style);
        }
    }
}

impl Widget for GroupList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_style = if self.active {
            Style::default()
                .fg(self.active_border_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.inactive_border_color)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(" Similar Images ", title_style))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.review.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                " (No similar images found)",
                Style::default().fg(Color::Rgb(100, 100, 100)),
            );
            return;
        }

        let has_scrollbar = self.review.rows.len() > inner.height as usize;
        let row_width = inner.width as usize - usize::from(has_scrollbar);
        let layout = ColumnLayout::calculate(row_width);

        let visible = self
            .review
            .rows
            .iter()
            .enumerate()
            .skip(self.review.scroll_offset)
            .take(inner.height as usize);

        for (y, (index, row)) in visible.enumerate() {
            let line = match *row {
                ReviewRow::GroupHeader { group } => self.header_line(group),
                ReviewRow::File { group, member } => {
                    let Some(member) = self.groups.get(group).and_then(|g| g.member(member))
                    else {
                        continue;
                    };
                    let selected = self.active && index == self.review.selected_index;
                    self.file_line(&member, layout, selected)
                }
            };
            buf.set_line(inner.x, inner.y + y as u16, &line, row_width as u16);
        }

        if has_scrollbar {
            self.render_scrollbar(inner, buf);
        }
    }
}
