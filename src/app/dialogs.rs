use super::*;
use crate::core::actions::help_line_count;

impl App {
    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 다이얼로그 닫기
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 메시지 다이얼로그 표시
    pub fn show_message(&mut self, title: &str, message: &str) {
        self.dialog = Some(DialogKind::message(title, message));
    }

    /// 에러 다이얼로그 표시
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.dialog = Some(DialogKind::error(title, message));
    }

    /// 도움말 다이얼로그 표시
    pub fn show_help(&mut self) {
        self.dialog = Some(DialogKind::help());
    }

    /// 도움말 스크롤 아래로
    pub fn dialog_help_scroll_down(&mut self) {
        let max = help_line_count().saturating_sub(1);
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = (*scroll_offset + 1).min(max);
        }
    }

    /// 도움말 스크롤 위로
    pub fn dialog_help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }

    /// 종료 확인 버튼 전환
    pub fn dialog_confirm_toggle(&mut self) {
        if let Some(DialogKind::ConfirmQuit {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = 1 - (*selected_button).min(1);
        }
    }

    /// 종료 확인 다이얼로그의 선택 확정
    pub fn confirm_quit_dialog(&mut self) {
        let Some(DialogKind::ConfirmQuit {
            selected_button, ..
        }) = self.dialog
        else {
            return;
        };
        if selected_button == 0 {
            self.quit();
        }
        self.close_dialog();
    }
}
