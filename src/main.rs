mod app;
mod cli;
mod config;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use anyhow::Context;
use app::App;
use chrono::Local;
use clap::Parser;
use cli::Args;
use config::Config;
use core::actions::{find_action, find_sequence_action, is_sequence_prefix};
use core::similarity::find_similar_groups_with_progress;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::SimilarityGroup;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use simplelog::WriteLogger;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use system::{ImageHasher, ReportWriter, Scanner};
use ui::{
    ActivePane, CommandBar, Dialog, DialogKind, GroupList, LayoutMode, ScriptView, StatusBar,
    TitleBar, WarningScreen,
};
use utils::formatter::format_file_size;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    config.apply_args(&args)?;
    init_logging(&config);
    log::info!(
        "starting: folders={:?} threshold={} hash_size={}",
        args.folders,
        config.scan.threshold,
        config.scan.hash_size
    );

    Scanner::validate_folders(&args.folders)?;

    println!("Looking for images in these folders:");
    for folder in &args.folders {
        println!("  {}", folder.display());
    }

    let scanner = Scanner::new(ImageHasher::new(config.scan.hash_size));
    print!("Hashing images");
    let outcome = scanner.scan_with_progress(&args.folders, |_| print_tick())?;
    println!();
    println!(
        "Hashed {} of {} files",
        outcome.images.len(),
        outcome.discovered()
    );

    print!("Comparing images");
    let groups =
        find_similar_groups_with_progress(&outcome.images, config.scan.threshold, |_| print_tick());
    println!();
    println!("Found {} groups of similar images", groups.len());

    if args.report {
        let writer = ReportWriter::new(config.output.dir.clone());
        let path = writer.write_report(&groups, Local::now())?;
        println!("Report written to {}", path.display());
    } else if groups.is_empty() {
        println!("Nothing to review.");
    } else {
        run_review(groups, &args.folders, &config)?;
    }

    print_invalid_paths(&outcome.invalid_paths);
    Ok(())
}

/// 파일 로거 초기화 (실패해도 계속 진행)
fn init_logging(config: &Config) {
    let Some(level) = config.log_level() else {
        return;
    };
    let Some(path) = config.log.file.clone().or_else(Config::default_log_path) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let result = File::create(&path)
        .map_err(|err| err.to_string())
        .and_then(|file| {
            WriteLogger::init(level, simplelog::Config::default(), file)
                .map_err(|err| err.to_string())
        });
    if let Err(err) = result {
        eprintln!("warning: logging disabled ({}): {}", path.display(), err);
    }
}

fn print_tick() {
    print!(".");
    let _ = io::stdout().flush();
}

fn print_invalid_paths(invalid_paths: &[PathBuf]) {
    if invalid_paths.is_empty() {
        return;
    }
    println!("These files could not be read as images:");
    for path in invalid_paths {
        println!("  {}", path.display());
    }
}

/// 검토 화면 실행
fn run_review(groups: Vec<SimilarityGroup>, folders: &[PathBuf], config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(groups, folders, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;

    if app.has_unsaved_plan() {
        println!(
            "{} file(s) were marked but no delete script was written.",
            app.plan.len()
        );
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);
            app.adjust_scroll();

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, app.layout.areas().warning);
                }
                LayoutMode::Split | LayoutMode::Single => {
                    render_main_ui(f, app);
                }
            }
        })?;

        let poll_timeout = if app.pending_key.is_some() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.is_dialog_active() {
                        handle_dialog_keys(app, key.modifiers, key.code);
                    } else {
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
            }
        }

        // pending 키 타임아웃 체크
        if app.pending_key.is_some() && app.is_pending_key_expired() {
            app.clear_pending_key();
        }
        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // 1) pending 키 시퀀스 처리
    if let Some(pending) = app.pending_key {
        app.clear_pending_key();
        if let KeyCode::Char(c) = code {
            if let Some(action) = find_sequence_action(pending, c) {
                app.execute_action(action);
                return;
            }
        }
    }

    // 2) 시퀀스 prefix 입력 시 대기 모드 진입
    if let (KeyModifiers::NONE, KeyCode::Char(c)) = (modifiers, code) {
        if is_sequence_prefix(c) {
            app.set_pending_key(c);
            return;
        }
    }

    // 3) 테이블 조회 → 액션 실행
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // 다이얼로그 종류에 따라 분기
    let Some(kind) = app.dialog.clone() else {
        return;
    };

    match kind {
        DialogKind::Help { .. } => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_dialog(),
            KeyCode::Char('j') | KeyCode::Down => app.dialog_help_scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => app.dialog_help_scroll_up(),
            _ => {}
        },
        DialogKind::Message { .. } | DialogKind::Error { .. } => match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.close_dialog(),
            _ => {}
        },
        DialogKind::ConfirmQuit { .. } => match (modifiers, code) {
            (_, KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right) => {
                app.dialog_confirm_toggle();
            }
            (_, KeyCode::Enter) => app.confirm_quit_dialog(),
            (_, KeyCode::Char('y')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                app.close_dialog();
                app.quit();
            }
            (_, KeyCode::Esc | KeyCode::Char('n')) => app.close_dialog(),
            _ => {}
        },
    }
}

fn render_status_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let pending_size = format_file_size(app.pending_size());
    let status_bar = StatusBar::new()
        .group_count(app.groups.len())
        .image_count(app.image_count())
        .pending_count(app.plan.len())
        .pending_size(&pending_size)
        .toast(app.toast())
        .pending_key(app.pending_key)
        .layout_mode(app.layout.mode_label())
        .theme(theme);
    f.render_widget(status_bar, area);
}

fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let active_pane = app.layout.active_pane();
    let theme = app.theme_manager.current();

    let title_bar = TitleBar::new(app.folders_label())
        .threshold(app.threshold())
        .theme(theme);
    f.render_widget(title_bar, areas.title_bar);

    if areas.list.area() > 0 {
        let list = GroupList::new(&app.groups, &app.review, &app.plan)
            .active(active_pane == ActivePane::List)
            .theme(theme);
        f.render_widget(list, areas.list);
    }

    if areas.script.area() > 0 {
        let script = ScriptView::new(&app.plan)
            .scroll_offset(app.script_scroll)
            .selected(Some(app.script_selected))
            .active(active_pane == ActivePane::Script)
            .theme(theme);
        f.render_widget(script, areas.script);
    }

    render_status_bar(f, app, theme, areas.status_bar);

    let command_bar = CommandBar::new().theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
