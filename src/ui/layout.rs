// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃 모드:
// - 80+ cols: 목록 + 스크립트 분할 모드
// - 40-79 cols: 단일 패널 모드 (Tab으로 전환)
// - <40 cols 또는 <15 rows: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 15;
pub const SPLIT_MIN_WIDTH: u16 = 80;

/// 목록 영역에서 테두리가 차지하는 줄 수
const PANEL_BORDER_ROWS: u16 = 2;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 목록 + 스크립트 (80+ cols)
    Split,
    /// 한 번에 한 패널 (40-79 cols)
    Single,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 포커스 패널
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    List,
    Script,
}

impl ActivePane {
    /// 패널 전환
    pub fn toggle(&mut self) {
        *self = match self {
            ActivePane::List => ActivePane::Script,
            ActivePane::Script => ActivePane::List,
        };
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 제목줄
    pub title_bar: Rect,
    /// 검토 목록
    pub list: Rect,
    /// 삭제 스크립트
    pub script: Rect,
    /// 상태바
    pub status_bar: Rect,
    /// 하단 커맨드 바
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    active_pane: ActivePane,
    /// 목록 패널 비율 (%)
    list_ratio: u16,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Split,
            active_pane: ActivePane::default(),
            list_ratio: 65,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if width < SPLIT_MIN_WIDTH {
            LayoutMode::Single
        } else {
            LayoutMode::Split
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = self.calculate_areas(area);
    }

    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        if self.mode == LayoutMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        // 제목줄 | 패널 | 상태바 | 커맨드바
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let (list, script) = match self.mode {
            LayoutMode::Split => {
                let panels = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(self.list_ratio),
                        Constraint::Percentage(100 - self.list_ratio),
                    ])
                    .split(vertical[1]);
                (panels[0], panels[1])
            }
            _ => match self.active_pane {
                ActivePane::List => (vertical[1], Rect::default()),
                ActivePane::Script => (Rect::default(), vertical[1]),
            },
        };

        LayoutAreas {
            title_bar: vertical[0],
            list,
            script,
            status_bar: vertical[2],
            command_bar: vertical[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    /// 패널 전환 (영역은 다음 update에서 재계산)
    pub fn toggle_pane(&mut self) {
        self.active_pane.toggle();
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn is_split(&self) -> bool {
        self.mode == LayoutMode::Split
    }

    /// 목록 패널 안에 보이는 줄 수
    ///
    /// 단일 패널 모드에서 스크립트가 보이는 중이어도 목록 높이를 기준으로 계산합니다.
    pub fn list_visible_rows(&self) -> usize {
        let (_, height) = self.terminal_size;
        // 제목줄/상태바/커맨드바 제외
        height
            .saturating_sub(3)
            .saturating_sub(PANEL_BORDER_ROWS) as usize
    }

    /// 모드 표시 문자열
    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            LayoutMode::Split => "SPLIT",
            LayoutMode::Single => "SINGLE",
            LayoutMode::TooSmall => "SMALL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Split);
        assert_eq!(LayoutManager::determine_mode(79, 24), LayoutMode::Single);
        assert_eq!(LayoutManager::determine_mode(40, 24), LayoutMode::Single);
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 14), LayoutMode::TooSmall);
    }

    #[test]
    fn test_split_areas() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 100, 30));

        let areas = manager.areas();
        assert_eq!(areas.title_bar.height, 1);
        assert_eq!(areas.list.height, 27);
        assert!(areas.list.width > areas.script.width);
        assert_eq!(areas.list.width + areas.script.width, 100);
        assert_eq!(areas.command_bar.y, 29);
        assert_eq!(manager.list_visible_rows(), 25);
    }

    #[test]
    fn test_single_pane_toggle() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 60, 20));
        assert_eq!(manager.areas().list.width, 60);
        assert_eq!(manager.areas().script.width, 0);

        manager.toggle_pane();
        manager.update(Rect::new(0, 0, 60, 20));
        assert_eq!(manager.areas().list.width, 0);
        assert_eq!(manager.areas().script.width, 60);
    }

    #[test]
    fn test_too_small_uses_warning_area() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 30, 10));
        assert_eq!(manager.mode(), LayoutMode::TooSmall);
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 10));
    }
}
