use crate::models::similarity_group::SimilarityGroup;

/// 검토 목록의 한 줄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewRow {
    /// 그룹 제목 줄
    GroupHeader { group: usize },
    /// 파일 줄 (member 0 = 기준 이미지)
    File { group: usize, member: usize },
}

impl ReviewRow {
    pub fn group(&self) -> usize {
        match *self {
            ReviewRow::GroupHeader { group } | ReviewRow::File { group, .. } => group,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, ReviewRow::File { .. })
    }
}

/// 검토 목록 상태
///
/// 커서는 파일 줄에만 놓이며, 그룹 제목 줄은 건너뜁니다.
#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    /// 평탄화된 줄 목록
    pub rows: Vec<ReviewRow>,
    /// 커서 위치 (rows 인덱스)
    pub selected_index: usize,
    /// 스크롤 오프셋
    pub scroll_offset: usize,
}

impl ReviewState {
    /// 그룹 목록으로 줄 목록 구성
    pub fn new(groups: &[SimilarityGroup]) -> Self {
        let mut rows = Vec::new();
        for (group_index, group) in groups.iter().enumerate() {
            rows.push(ReviewRow::GroupHeader { group: group_index });
            for member in 0..group.member_count() {
                rows.push(ReviewRow::File {
                    group: group_index,
                    member,
                });
            }
        }

        let mut state = Self {
            rows,
            selected_index: 0,
            scroll_offset: 0,
        };
        state.go_to_top();
        state
    }

    pub fn is_empty(&self) -> bool {
        !self.rows.iter().any(ReviewRow::is_file)
    }

    /// 커서가 가리키는 줄
    pub fn selected_row(&self) -> Option<ReviewRow> {
        self.rows
            .get(self.selected_index)
            .copied()
            .filter(ReviewRow::is_file)
    }

    /// 선택이 속한 그룹
    pub fn selected_group(&self) -> Option<usize> {
        self.selected_row().map(|row| row.group())
    }

    /// 해당 인덱스 이후 첫 파일 줄
    fn next_file_from(&self, start: usize) -> Option<usize> {
        (start..self.rows.len()).find(|&i| self.rows[i].is_file())
    }

    /// 해당 인덱스 이전(포함) 마지막 파일 줄
    fn prev_file_from(&self, start: usize) -> Option<usize> {
        let end = start.min(self.rows.len().checked_sub(1)?);
        (0..=end).rev().find(|&i| self.rows[i].is_file())
    }

    pub fn move_up(&mut self) {
        if self.selected_index == 0 {
            return;
        }
        if let Some(index) = self.prev_file_from(self.selected_index - 1) {
            self.selected_index = index;
        }
    }

    pub fn move_down(&mut self) {
        if let Some(index) = self.next_file_from(self.selected_index + 1) {
            self.selected_index = index;
        }
    }

    pub fn go_to_top(&mut self) {
        self.selected_index = self.next_file_from(0).unwrap_or(0);
        self.scroll_offset = 0;
    }

    pub fn go_to_bottom(&mut self) {
        if let Some(index) = self.prev_file_from(self.rows.len()) {
            self.selected_index = index;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        let target = self.selected_index.saturating_sub(page_size.max(1));
        self.selected_index = self
            .next_file_from(target)
            .filter(|&i| i <= self.selected_index)
            .unwrap_or(self.selected_index);
    }

    pub fn page_down(&mut self, page_size: usize) {
        let target = self.selected_index + page_size.max(1);
        self.selected_index = self
            .prev_file_from(target)
            .filter(|&i| i >= self.selected_index)
            .unwrap_or(self.selected_index);
    }

    /// 다음 그룹의 첫 파일로 이동
    pub fn next_group(&mut self) {
        let Some(current) = self.selected_group() else {
            return;
        };
        let next = self
            .rows
            .iter()
            .position(|row| row.is_file() && row.group() > current);
        if let Some(index) = next {
            self.selected_index = index;
        }
    }

    /// 이전 그룹의 첫 파일로 이동
    pub fn prev_group(&mut self) {
        let Some(current) = self.selected_group() else {
            return;
        };
        if current == 0 {
            return;
        }
        let prev = self
            .rows
            .iter()
            .position(|row| row.is_file() && row.group() == current - 1);
        if let Some(index) = prev {
            self.selected_index = index;
        }
    }

    /// 커서가 보이도록 스크롤 조정
    ///
    /// 그룹의 첫 파일이 선택되면 제목 줄도 함께 보이게 합니다.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        let mut top = self.selected_index;
        if top > 0 && !self.rows[top - 1].is_file() {
            top -= 1;
        }
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if self.selected_index >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected_index + 1 - visible_rows;
        }
    }
}
