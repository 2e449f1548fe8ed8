// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{ActivePane, LayoutManager, LayoutMode};

pub use theme::{Theme, ThemeManager};

// Re-export components
pub use components::{
    CommandBar, Dialog, DialogKind, GroupList, ScriptView, StatusBar, TitleBar, WarningScreen,
};
