//! Reusable UI components.

mod app_shell;
mod copy_button;
mod stat_card;
mod status_badge;
mod status_bar;

pub use app_shell::AppShell;
pub use copy_button::CopyButton;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use status_bar::StatusBar;
