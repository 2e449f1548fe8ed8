//! 액션 시스템: 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩, 커맨드바 항목, 도움말 내용이
//! 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    NextGroup,
    PrevGroup,
    TogglePane,
    // Review
    ToggleMark,
    UnmarkAll,
    ExportScript,
    // System
    ShowHelp,
    CycleTheme,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Review,
    System,
}

impl ActionCategory {
    fn title(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Review => "Review",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 시퀀스 키 바인딩 정의 (예: `g` + `g`)
pub struct SequenceBinding {
    pub prefix: char,
    pub key: char,
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up / down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / k"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "Top",
        category: ActionCategory::Navigation,
        shortcut_display: Some("gg / Home"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Bottom",
        category: ActionCategory::Navigation,
        shortcut_display: Some("G / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        label: "Half page up / down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("^U / ^D"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        id: "page_down",
        label: "Half page down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::NextGroup,
        id: "next_group",
        label: "Next group",
        category: ActionCategory::Navigation,
        shortcut_display: Some("n"),
        command_bar: Some(CommandBarEntry {
            key: "n/p",
            label: "Group",
            priority: 51,
        }),
    },
    ActionDef {
        action: Action::PrevGroup,
        id: "prev_group",
        label: "Previous group",
        category: ActionCategory::Navigation,
        shortcut_display: Some("p"),
        command_bar: None,
    },
    ActionDef {
        action: Action::TogglePane,
        id: "toggle_pane",
        label: "Switch list / script",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Pane",
            priority: 52,
        }),
    },
    // Review
    ActionDef {
        action: Action::ToggleMark,
        id: "toggle_mark",
        label: "Delete / Don't Delete",
        category: ActionCategory::Review,
        shortcut_display: Some("Space / Enter / d"),
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Toggle",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::UnmarkAll,
        id: "unmark_all",
        label: "Keep everything",
        category: ActionCategory::Review,
        shortcut_display: Some("u"),
        command_bar: Some(CommandBarEntry {
            key: "u",
            label: "Keep all",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::ExportScript,
        id: "export_script",
        label: "Write delete script",
        category: ActionCategory::Review,
        shortcut_display: Some("w"),
        command_bar: Some(CommandBarEntry {
            key: "w",
            label: "Write",
            priority: 12,
        }),
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Help",
        category: ActionCategory::System,
        shortcut_display: Some("?"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 1,
        }),
    },
    ActionDef {
        action: Action::CycleTheme,
        id: "cycle_theme",
        label: "Next theme",
        category: ActionCategory::System,
        shortcut_display: Some("t"),
        command_bar: None,
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q / F10"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 99,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    let plain = |c: char, action: Action| KeyBinding {
        code: KeyCode::Char(c),
        modifiers: Some(KeyModifiers::NONE),
        action,
    };
    let any = |code: KeyCode, action: Action| KeyBinding {
        code,
        modifiers: None,
        action,
    };
    let ctrl = |c: char, action: Action| KeyBinding {
        code: KeyCode::Char(c),
        modifiers: Some(KeyModifiers::CONTROL),
        action,
    };

    vec![
        // 이동
        plain('k', Action::MoveUp),
        any(KeyCode::Up, Action::MoveUp),
        plain('j', Action::MoveDown),
        any(KeyCode::Down, Action::MoveDown),
        any(KeyCode::Home, Action::GoToTop),
        any(KeyCode::Char('G'), Action::GoToBottom),
        any(KeyCode::End, Action::GoToBottom),
        // 페이지
        ctrl('u', Action::PageUp),
        any(KeyCode::PageUp, Action::PageUp),
        ctrl('d', Action::PageDown),
        any(KeyCode::PageDown, Action::PageDown),
        // 그룹
        plain('n', Action::NextGroup),
        plain('p', Action::PrevGroup),
        any(KeyCode::Tab, Action::TogglePane),
        // 검토
        plain(' ', Action::ToggleMark),
        any(KeyCode::Enter, Action::ToggleMark),
        plain('d', Action::ToggleMark),
        plain('u', Action::UnmarkAll),
        plain('w', Action::ExportScript),
        // 시스템
        any(KeyCode::Char('?'), Action::ShowHelp),
        plain('t', Action::CycleTheme),
        plain('q', Action::Quit),
        any(KeyCode::F(10), Action::Quit),
        ctrl('c', Action::Quit),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && binding
                    .modifiers
                    .map_or(true, |required| modifiers == required)
        })
        .map(|binding| binding.action)
}

fn build_sequence_bindings() -> Vec<SequenceBinding> {
    vec![SequenceBinding {
        prefix: 'g',
        key: 'g',
        action: Action::GoToTop,
    }]
}

static SEQUENCE_BINDINGS: LazyLock<Vec<SequenceBinding>> = LazyLock::new(build_sequence_bindings);

/// 시퀀스 키 바인딩 목록 조회
pub fn sequence_bindings() -> &'static [SequenceBinding] {
    SEQUENCE_BINDINGS.as_slice()
}

/// 시퀀스 입력(prefix + key)으로 액션 조회
pub fn find_sequence_action(prefix: char, key: char) -> Option<Action> {
    sequence_bindings()
        .iter()
        .find(|binding| binding.prefix == prefix && binding.key == key)
        .map(|binding| binding.action)
}

/// 시퀀스 시작 prefix 여부
pub fn is_sequence_prefix(c: char) -> bool {
    sequence_bindings().iter().any(|binding| binding.prefix == c)
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}

/// 도움말 다이얼로그용 엔트리 생성 (카테고리 제목, [(단축키, 설명)])
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::Review,
        ActionCategory::System,
    ]
    .iter()
    .map(|category| {
        let items = ACTION_DEFS
            .iter()
            .filter(|def| def.category == *category)
            .filter_map(|def| def.shortcut_display.map(|shortcut| (shortcut, def.label)))
            .collect();
        (category.title(), items)
    })
    .collect()
}

/// 액션 정의 조회
pub fn action_def(action: Action) -> Option<&'static ActionDef> {
    ACTION_DEFS.iter().find(|def| def.action == action)
}

/// 액션 식별자 (로그용)
pub fn action_id(action: Action) -> &'static str {
    action_def(action).map_or("unknown", |def| def.id)
}

/// 도움말 전체 줄 수 (카테고리 제목 + 항목 + 카테고리 사이 빈 줄)
pub fn help_line_count() -> usize {
    let entries = generate_help_entries();
    let items: usize = entries.iter().map(|(_, items)| items.len()).sum();
    entries.len() * 2 + items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action_plain_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char(' ')),
            Some(Action::ToggleMark)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('w')),
            Some(Action::ExportScript)
        );
    }

    #[test]
    fn test_find_action_respects_modifiers() {
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('d')),
            Some(Action::PageDown)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('d')),
            Some(Action::ToggleMark)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Char('G')),
            Some(Action::GoToBottom)
        );
        assert_eq!(find_action(KeyModifiers::ALT, KeyCode::Char('j')), None);
    }

    #[test]
    fn test_sequence_bindings() {
        assert!(is_sequence_prefix('g'));
        assert!(!is_sequence_prefix('x'));
        assert_eq!(find_sequence_action('g', 'g'), Some(Action::GoToTop));
        assert_eq!(find_sequence_action('g', 'x'), None);
    }

    #[test]
    fn test_every_action_has_definition() {
        for binding in key_bindings() {
            assert!(
                action_def(binding.action).is_some(),
                "missing definition for {:?}",
                binding.action
            );
        }
    }

    #[test]
    fn test_action_id_lookup() {
        assert_eq!(action_id(Action::ToggleMark), "toggle_mark");
        assert_eq!(action_id(Action::ExportScript), "export_script");
        assert_eq!(action_def(Action::Quit).map(|def| def.label), Some("Quit"));
    }

    #[test]
    fn test_command_bar_sorted_by_priority() {
        let items = generate_command_bar_items();
        assert_eq!(items.first().map(|i| i.key.as_str()), Some("?"));
        assert_eq!(items.last().map(|i| i.key.as_str()), Some("q"));
    }

    #[test]
    fn test_help_entries_cover_categories() {
        let entries = generate_help_entries();
        assert_eq!(entries.len(), 3);
        assert!(entries
            .iter()
            .any(|(_, items)| items.iter().any(|(key, _)| *key == "w")));
        assert!(help_line_count() > entries.len());
    }
}
