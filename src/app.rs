use crate::config::Config;
use crate::models::{DeletionPlan, ReviewRow, ReviewState, SimilarityGroup};
use crate::system::ReportWriter;
use crate::ui::{DialogKind, LayoutManager, ThemeManager};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

mod dialogs;
mod navigation;
mod operations;

pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 유사 이미지 그룹 (검토 중 변하지 않음)
    pub groups: Vec<SimilarityGroup>,
    /// 그룹 목록 커서/스크롤
    pub review: ReviewState,
    /// 삭제 대기 목록
    pub plan: DeletionPlan,
    /// 스크립트 패널 커서
    pub script_selected: usize,
    /// 스크립트 패널 스크롤 오프셋
    pub script_scroll: usize,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 대기 중인 키 (예: 'g' for 'gg')
    pub pending_key: Option<char>,
    /// 대기 키 입력 시각
    pub pending_key_time: Option<Instant>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 스크립트 출력기
    report_writer: ReportWriter,
    /// 마지막 변경 이후 스크립트를 내보냈는지 여부
    exported: bool,
    /// 경로별 파일 크기 (삭제 예정 용량 계산용)
    file_sizes: HashMap<String, u64>,
    /// 제목줄에 표시할 검색 폴더
    folders_label: String,
    threshold: u32,
}

impl App {
    pub fn new(groups: Vec<SimilarityGroup>, folders: &[PathBuf], config: &Config) -> Self {
        let mut theme_manager = ThemeManager::new();
        if let Err(err) = theme_manager.load_themes_from_config_dir() {
            log::warn!("failed to load custom themes: {}", err);
        }
        if let Err(err) = theme_manager.switch_theme(&config.ui.theme) {
            log::warn!(
                "{} (available: {})",
                err,
                theme_manager.available_themes().join(", ")
            );
        }

        let folders_label = folders
            .iter()
            .map(|folder| folder.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Self::with_parts(
            groups,
            theme_manager,
            ReportWriter::new(config.output.dir.clone()),
            folders_label,
            config.scan.threshold,
        )
    }

    fn with_parts(
        groups: Vec<SimilarityGroup>,
        theme_manager: ThemeManager,
        report_writer: ReportWriter,
        folders_label: String,
        threshold: u32,
    ) -> Self {
        let file_sizes = groups
            .iter()
            .flat_map(|group| group.members())
            .map(|member| (member.image.path_string(), member.image.size))
            .collect();

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager,
            review: ReviewState::new(&groups),
            groups,
            plan: DeletionPlan::new(),
            script_selected: 0,
            script_scroll: 0,
            dialog: None,
            pending_key: None,
            pending_key_time: None,
            toast_message: None,
            report_writer,
            exported: false,
            file_sizes,
            folders_label,
            threshold,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(groups: Vec<SimilarityGroup>, output_dir: PathBuf) -> Self {
        Self::with_parts(
            groups,
            ThemeManager::new(),
            ReportWriter::new(output_dir),
            "/photos".to_string(),
            crate::config::DEFAULT_THRESHOLD,
        )
    }

    /// 종료
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn folders_label(&self) -> &str {
        &self.folders_label
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// 검토 대상 이미지 수 (그룹 간 중복 포함)
    pub fn image_count(&self) -> usize {
        self.groups.iter().map(SimilarityGroup::member_count).sum()
    }

    /// 삭제 예정 파일 총 크기
    pub fn pending_size(&self) -> u64 {
        self.plan
            .iter()
            .filter_map(|path| self.file_sizes.get(path))
            .sum()
    }

    /// 커서가 가리키는 파일 경로
    pub fn selected_path(&self) -> Option<String> {
        let row = self.review.selected_row()?;
        let ReviewRow::File { group, member } = row else {
            return None;
        };
        self.groups
            .get(group)?
            .member(member)
            .map(|member| member.image.path_string())
    }

    /// 스크립트를 쓰지 않은 변경이 있는지
    pub fn has_unsaved_plan(&self) -> bool {
        !self.plan.is_empty() && !self.exported
    }
}

#[cfg(test)]
mod tests;
