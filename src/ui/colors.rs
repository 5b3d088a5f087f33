//! Shared color palette for the TUI.

use ratatui::style::Color;

use agent_org::org::{AutonomyLevel, Team};

// ── Row states ──────────────────────────────────────────────────────
pub const DIMMED: Color = Color::Rgb(70, 70, 70);
pub const TEXT: Color = Color::Rgb(220, 220, 220);
pub const PATH: Color = Color::Rgb(255, 255, 255);
pub const EDGE: Color = Color::Rgb(90, 90, 90);
pub const EDGE_FADED: Color = Color::Rgb(45, 45, 45);

// ── Accent / chrome ─────────────────────────────────────────────────
pub const ACCENT_MUTED: Color = Color::Rgb(120, 120, 180);
pub const CHECK: Color = Color::Rgb(34, 197, 94);
pub const HIGHLIGHT_BG: Color = Color::Rgb(30, 45, 75);
pub const HIGHLIGHT_FG: Color = Color::Rgb(150, 190, 255);
pub const FALLBACK: Color = Color::Rgb(102, 102, 102);

/// Parse `#rrggbb`; anything unparseable falls back to a neutral gray.
pub fn hex(s: &str) -> Color {
    s.parse::<Color>().unwrap_or(FALLBACK)
}

pub fn team(team: Team) -> Color {
    hex(team.color())
}

pub fn autonomy(level: AutonomyLevel) -> Color {
    hex(level.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_rgb() {
        assert_eq!(hex("#ef4444"), Color::Rgb(0xef, 0x44, 0x44));
        assert_eq!(hex("#FFFFFF"), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn bad_hex_falls_back() {
        assert_eq!(hex("ef4444"), FALLBACK);
        assert_eq!(hex("#fff"), FALLBACK);
        assert_eq!(hex("#gg0000"), FALLBACK);
        assert_eq!(hex("#ä00000"), FALLBACK);
    }

    #[test]
    fn team_colors_come_from_model() {
        assert_eq!(team(Team::Product), Color::Rgb(0x06, 0xb6, 0xd4));
        assert_eq!(autonomy(AutonomyLevel::L2), Color::Rgb(0xf5, 0x9e, 0x0b));
    }
}
