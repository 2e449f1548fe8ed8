use super::*;
use crate::core::actions::{action_id, Action};
use crate::ui::ActivePane;

/// 대기 키 만료 시간 (ms)
const PENDING_KEY_TIMEOUT_MS: u128 = 800;
/// 토스트 표시 시간 (초)
const TOAST_SECONDS: u64 = 3;

impl App {
    /// 액션 실행 (키 바인딩 → 동작 단일 진입점)
    pub fn execute_action(&mut self, action: Action) {
        log::trace!("action: {}", action_id(action));
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::PageUp => self.page_up(),
            Action::PageDown => self.page_down(),
            Action::NextGroup => self.review.next_group(),
            Action::PrevGroup => self.review.prev_group(),
            Action::TogglePane => self.toggle_pane(),
            Action::ToggleMark => self.toggle_selected(),
            Action::UnmarkAll => self.unmark_all(),
            Action::ExportScript => self.export_script(),
            Action::ShowHelp => self.show_help(),
            Action::CycleTheme => self.cycle_theme(),
            Action::Quit => self.request_quit(),
        }
        self.adjust_scroll();
    }

    pub(super) fn script_pane_active(&self) -> bool {
        self.layout.active_pane() == ActivePane::Script
    }

    /// 반 페이지 크기
    fn half_page(&self) -> usize {
        (self.layout.list_visible_rows() / 2).max(1)
    }

    fn move_up(&mut self) {
        if self.script_pane_active() {
            self.script_selected = self.script_selected.saturating_sub(1);
        } else {
            self.review.move_up();
        }
    }

    fn move_down(&mut self) {
        if self.script_pane_active() {
            self.script_selected = (self.script_selected + 1).min(self.script_last_index());
        } else {
            self.review.move_down();
        }
    }

    fn go_to_top(&mut self) {
        if self.script_pane_active() {
            self.script_selected = 0;
        } else {
            self.review.go_to_top();
        }
    }

    fn go_to_bottom(&mut self) {
        if self.script_pane_active() {
            self.script_selected = self.script_last_index();
        } else {
            self.review.go_to_bottom();
        }
    }

    fn page_up(&mut self) {
        let page = self.half_page();
        if self.script_pane_active() {
            self.script_selected = self.script_selected.saturating_sub(page);
        } else {
            self.review.page_up(page);
        }
    }

    fn page_down(&mut self) {
        let page = self.half_page();
        if self.script_pane_active() {
            self.script_selected = (self.script_selected + page).min(self.script_last_index());
        } else {
            self.review.page_down(page);
        }
    }

    pub(super) fn script_last_index(&self) -> usize {
        self.plan.len().saturating_sub(1)
    }

    /// 목록/스크립트 패널 전환
    pub fn toggle_pane(&mut self) {
        self.layout.toggle_pane();
        if !self.layout.is_split() {
            let name = match self.layout.active_pane() {
                ActivePane::List => "Similar images",
                ActivePane::Script => "Delete script",
            };
            self.set_toast(name);
        }
    }

    /// 커서가 보이도록 두 패널의 스크롤 조정
    pub fn adjust_scroll(&mut self) {
        let visible = self.layout.list_visible_rows();
        self.review.adjust_scroll(visible);

        self.script_selected = self.script_selected.min(self.script_last_index());
        if visible == 0 {
            return;
        }
        if self.script_selected < self.script_scroll {
            self.script_scroll = self.script_selected;
        } else if self.script_selected >= self.script_scroll + visible {
            self.script_scroll = self.script_selected + 1 - visible;
        }
        self.script_scroll = self
            .script_scroll
            .min(self.plan.len().saturating_sub(visible));
    }

    /// 다음 테마로 전환
    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        let message = format!("Theme: {}", self.theme_manager.current_name());
        self.set_toast(&message);
    }

    /// 대기 키 설정 (gg 등 시퀀스 시작)
    pub fn set_pending_key(&mut self, key: char) {
        self.pending_key = Some(key);
        self.pending_key_time = Some(Instant::now());
    }

    /// 대기 키 초기화
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
        self.pending_key_time = None;
    }

    /// 대기 키 만료 여부
    pub fn is_pending_key_expired(&self) -> bool {
        self.pending_key_time
            .is_some_and(|t| t.elapsed().as_millis() > PENDING_KEY_TIMEOUT_MS)
    }

    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= TOAST_SECONDS {
                self.toast_message = None;
            }
        }
    }

    /// 현재 토스트 메시지
    pub fn toast(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(message, _)| message.as_str())
    }
}
