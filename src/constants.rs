//! Shared UI constants: the slate/emerald color scheme, layout sizing, and
//! demo defaults.

pub const BG_BASE: &str = "#020617";
pub const BG_ELEVATED: &str = "#0f172a";
pub const BG_CARD: &str = "#0d1627";
pub const BG_INPUT: &str = "#020617";
pub const BG_CHIP: &str = "#1e293b";
pub const BG_HOVER: &str = "#14213b";

pub const BORDER_DEFAULT: &str = "#1e293b";
pub const BORDER_STRONG: &str = "#334155";

pub const TEXT_PRIMARY: &str = "#f1f5f9";
pub const TEXT_SECONDARY: &str = "#cbd5e1";
pub const TEXT_MUTED: &str = "#94a3b8";
pub const TEXT_DIM: &str = "#64748b";

pub const ACCENT: &str = "#10b981";
pub const ACCENT_HOVER: &str = "#34d399";
pub const ACCENT_SOFT: &str = "#6ee7b7";

pub const STATUS_READY_BG: &str = "rgba(16, 185, 129, 0.2)";
pub const STATUS_READY_TEXT: &str = "#6ee7b7";
pub const STATUS_GENERATING_BG: &str = "rgba(234, 179, 8, 0.2)";
pub const STATUS_GENERATING_TEXT: &str = "#fde047";
pub const STATUS_REQUESTED_BG: &str = "rgba(148, 163, 184, 0.2)";
pub const STATUS_REQUESTED_TEXT: &str = "#cbd5e1";
pub const STATUS_FAILED_BG: &str = "rgba(239, 68, 68, 0.2)";
pub const STATUS_FAILED_TEXT: &str = "#fca5a5";

pub const SIDEBAR_WIDTH: f64 = 240.0;
pub const STATUS_BAR_HEIGHT: f64 = 22.0;

/// Default runtime for projects created from the dashboard form.
pub const DEFAULT_PROJECT_MINUTES: u32 = 20;
/// Niche applied when the dashboard form's niche field is left empty.
pub const DEFAULT_NICHE: &str = "Custom niche";
