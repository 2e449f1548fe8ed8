// UI Components
pub mod command_bar;
pub mod dialog;
pub mod group_list;
pub mod script_view;
pub mod status_bar;
pub mod title_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use dialog::{Dialog, DialogKind};
pub use group_list::GroupList;
pub use script_view::ScriptView;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use warning::WarningScreen;
