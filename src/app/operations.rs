use super::*;
use crate::utils::formatter::pluralize;
use chrono::Local;

impl App {
    /// 커서 위치의 파일 토글
    ///
    /// 목록 패널에서는 삭제/유지를 전환하고, 스크립트 패널에서는 커서 줄의 경로를 뺍니다.
    pub fn toggle_selected(&mut self) {
        if self.script_pane_active() {
            let Some(path) = self.plan.iter().nth(self.script_selected).map(str::to_string) else {
                return;
            };
            if self.plan.unmark(&path) {
                self.exported = false;
                self.script_selected = self.script_selected.min(self.script_last_index());
            }
            return;
        }

        let Some(path) = self.selected_path() else {
            return;
        };
        if self.plan.toggle(&path).is_pending() && !self.layout.is_split() {
            self.set_toast("Marked for deletion");
        }
        self.exported = false;
    }

    /// 모든 삭제 표시 해제
    pub fn unmark_all(&mut self) {
        let removed = self.plan.clear();
        if removed == 0 {
            self.set_toast("Nothing is marked for deletion");
            return;
        }
        self.exported = false;
        self.script_selected = 0;
        self.script_scroll = 0;
        let message = format!("Keeping {}", pluralize(removed, "file", "files"));
        self.set_toast(&message);
    }

    /// 삭제 스크립트 파일 작성
    ///
    /// 실패해도 세션은 계속되며 에러 다이얼로그로 알립니다.
    pub fn export_script(&mut self) {
        match self.report_writer.write_script(&self.plan, Local::now()) {
            Ok(path) => {
                self.exported = true;
                let message = format!(
                    "{}\n\nRun it to delete {}.",
                    path.display(),
                    pluralize(self.plan.len(), "file", "files")
                );
                self.show_message("Script written", &message);
            }
            Err(err) => {
                log::error!("script export failed: {}", err);
                self.show_error("Export failed", &err.to_string());
            }
        }
    }

    /// 종료 요청 (내보내지 않은 삭제 목록이 있으면 확인)
    pub fn request_quit(&mut self) {
        if self.has_unsaved_plan() {
            self.dialog = Some(DialogKind::confirm_quit(self.plan.len()));
        } else {
            self.quit();
        }
    }
}
