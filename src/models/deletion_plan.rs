//! 삭제 대기 목록 (pending set)
//!
//! 사용자가 삭제하기로 표시한 파일 경로를 삽입 순서대로 보관하고,
//! 경로마다 `del "<path>"` 한 줄씩 이어 붙인 스크립트를 렌더링합니다.
//!
//! 토글 버튼은 별도 상태를 갖지 않습니다. 레이블과 동작은 항상
//! `DeletionPlan::contains`로부터 파생됩니다.

/// 버튼 레이블: 아직 삭제 대상이 아닌 경로
pub const MARK_LABEL: &str = "Delete";
/// 버튼 레이블: 삭제 대상으로 표시된 경로
pub const UNMARK_LABEL: &str = "Don't Delete";

/// 경로의 표시 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkState {
    /// 유지 (삭제 목록에 없음)
    Kept,
    /// 삭제 대기
    Pending,
}

/// 버튼이 실행할 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAction {
    Mark,
    Unmark,
}

impl MarkState {
    /// 상태에 따른 버튼 레이블
    pub fn label(self) -> &'static str {
        match self {
            MarkState::Kept => MARK_LABEL,
            MarkState::Pending => UNMARK_LABEL,
        }
    }

    /// 상태에 따른 버튼 동작
    pub fn action(self) -> MarkAction {
        match self {
            MarkState::Kept => MarkAction::Mark,
            MarkState::Pending => MarkAction::Unmark,
        }
    }

    pub fn is_pending(self) -> bool {
        self == MarkState::Pending
    }
}

/// 경로 하나에 묶인 토글 버튼 (렌더링 시점에 파생)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton<'a> {
    pub path: &'a str,
    pub state: MarkState,
}

impl ToggleButton<'_> {
    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    pub fn action(&self) -> MarkAction {
        self.state.action()
    }
}

/// 삭제 대기 목록
///
/// 삽입 순서가 곧 표시 순서이며 중복 경로는 허용하지 않습니다.
/// 잘못된 입력(중복 추가, 없는 경로 제거)은 에러 없이 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    paths: Vec<String>,
}

impl DeletionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// 삭제 대상으로 추가
    ///
    /// 이미 있으면 아무것도 하지 않고 `false`를 반환합니다.
    pub fn mark_for_deletion(&mut self, path: &str) -> bool {
        if self.contains(path) {
            return false;
        }
        self.paths.push(path.to_string());
        log::debug!("marked for deletion: {}", path);
        true
    }

    /// 삭제 대상에서 제거
    ///
    /// 목록에 없으면 아무것도 하지 않고 `false`를 반환합니다.
    pub fn unmark(&mut self, path: &str) -> bool {
        let Some(index) = self.paths.iter().position(|p| p == path) else {
            return false;
        };
        self.paths.remove(index);
        log::debug!("unmarked: {}", path);
        true
    }

    /// 경로에 묶인 버튼의 동작 실행
    pub fn toggle(&mut self, path: &str) -> MarkState {
        match self.button(path).action() {
            MarkAction::Mark => {
                self.mark_for_deletion(path);
            }
            MarkAction::Unmark => {
                self.unmark(path);
            }
        }
        self.state_of(path)
    }

    /// 전체 해제. 제거된 경로 개수를 반환
    pub fn clear(&mut self) -> usize {
        let count = self.paths.len();
        self.paths.clear();
        count
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn state_of(&self, path: &str) -> MarkState {
        if self.contains(path) {
            MarkState::Pending
        } else {
            MarkState::Kept
        }
    }

    /// 경로에 대한 토글 버튼 파생
    pub fn button<'a>(&self, path: &'a str) -> ToggleButton<'a> {
        ToggleButton {
            path,
            state: self.state_of(path),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// 삽입 순서대로 경로 순회
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// 경로별 삭제 명령 (줄바꿈 미포함)
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.paths.iter().map(|path| delete_command(path))
    }

    /// 삭제 스크립트 렌더링
    pub fn render(&self) -> String {
        self.paths.iter().fold(String::new(), |mut script, path| {
            script.push_str(&delete_command(path));
            script.push('\n');
            script
        })
    }
}

/// `del "<path>"` 한 줄 생성
pub fn delete_command(path: &str) -> String {
    format!("del \"{}\"", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_appends_once_and_renders_line() {
        let mut plan = DeletionPlan::new();
        assert!(plan.mark_for_deletion("C:\\photos\\a.jpg"));

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.render(), "del \"C:\\photos\\a.jpg\"\n");
    }

    #[test]
    fn test_mark_duplicate_is_noop() {
        let mut plan = DeletionPlan::new();
        plan.mark_for_deletion("/a.jpg");
        let before = plan.clone();
        let rendered = plan.render();

        assert!(!plan.mark_for_deletion("/a.jpg"));
        assert_eq!(plan, before);
        assert_eq!(plan.render(), rendered);
    }

    #[test]
    fn test_unmark_removes_line() {
        let mut plan = DeletionPlan::new();
        plan.mark_for_deletion("/a.jpg");
        plan.mark_for_deletion("/b.jpg");

        assert!(plan.unmark("/a.jpg"));
        assert!(!plan.contains("/a.jpg"));
        assert_eq!(plan.render(), "del \"/b.jpg\"\n");
    }

    #[test]
    fn test_unmark_absent_is_noop() {
        let mut plan = DeletionPlan::new();
        plan.mark_for_deletion("/a.jpg");

        assert!(!plan.unmark("/missing.jpg"));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.render(), "del \"/a.jpg\"\n");
    }

    #[test]
    fn test_render_preserves_insertion_order() {
        let mut plan = DeletionPlan::new();
        for path in ["/c.jpg", "/a.jpg", "/b.jpg"] {
            plan.mark_for_deletion(path);
        }

        let lines: Vec<String> = plan.lines().collect();
        assert_eq!(
            lines,
            vec!["del \"/c.jpg\"", "del \"/a.jpg\"", "del \"/b.jpg\""]
        );
        assert_eq!(
            plan.render(),
            "del \"/c.jpg\"\ndel \"/a.jpg\"\ndel \"/b.jpg\"\n"
        );
    }

    #[test]
    fn test_mark_then_unmark_restores_previous_state() {
        let mut plan = DeletionPlan::new();
        plan.mark_for_deletion("/keep.jpg");
        let before = plan.clone();
        let rendered = plan.render();

        plan.mark_for_deletion("/tmp.jpg");
        plan.unmark("/tmp.jpg");

        assert_eq!(plan, before);
        assert_eq!(plan.render(), rendered);
    }

    #[test]
    fn test_empty_plan_renders_nothing() {
        let plan = DeletionPlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.render(), "");
    }

    #[test]
    fn test_button_label_follows_state() {
        let mut plan = DeletionPlan::new();
        assert_eq!(plan.button("/a.jpg").label(), MARK_LABEL);
        assert_eq!(plan.button("/a.jpg").action(), MarkAction::Mark);

        assert_eq!(plan.toggle("/a.jpg"), MarkState::Pending);
        assert_eq!(plan.button("/a.jpg").label(), UNMARK_LABEL);
        assert_eq!(plan.button("/a.jpg").action(), MarkAction::Unmark);

        assert_eq!(plan.toggle("/a.jpg"), MarkState::Kept);
        assert_eq!(plan.button("/a.jpg").label(), MARK_LABEL);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_clear_returns_removed_count() {
        let mut plan = DeletionPlan::new();
        plan.mark_for_deletion("/a.jpg");
        plan.mark_for_deletion("/b.jpg");

        assert_eq!(plan.clear(), 2);
        assert!(plan.is_empty());
        assert_eq!(plan.clear(), 0);
    }
}
