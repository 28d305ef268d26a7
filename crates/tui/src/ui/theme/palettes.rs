use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Truecolor palette: near-black chrome with the brand green as the accent.
pub const INK: Color = Color::Rgb(0x11, 0x12, 0x14);
pub const PANEL: Color = Color::Rgb(0x1B, 0x1D, 0x21);
pub const PANEL_RAISED: Color = Color::Rgb(0x26, 0x29, 0x2F);
pub const LINE: Color = Color::Rgb(0x3A, 0x3E, 0x46);
pub const SNOW: Color = Color::Rgb(0xF2, 0xF3, 0xF5);
pub const FOG: Color = Color::Rgb(0xA9, 0xAE, 0xB8);
pub const SLATE: Color = Color::Rgb(0x6B, 0x71, 0x7D);
pub const BRAND_GREEN: Color = Color::Rgb(0x22, 0xC5, 0x5E); // green-500
pub const MINT: Color = Color::Rgb(0x86, 0xEF, 0xAC);
pub const AMBER: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
pub const ROSE: Color = Color::Rgb(0xF4, 0x3F, 0x5E);

/// Default theme for truecolor terminals.
#[derive(Debug, Clone)]
pub struct BrandTheme {
    roles: ThemeRoles,
}

impl BrandTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: INK,
                surface: PANEL,
                surface_raised: PANEL_RAISED,
                border: LINE,

                text: SNOW,
                text_secondary: FOG,
                text_muted: SLATE,

                accent: BRAND_GREEN,
                accent_soft: MINT,

                success: BRAND_GREEN,
                warning: AMBER,
                error: ROSE,
                selection_fg: SNOW,

                overlay_bg: INK,
            },
        }
    }
}

impl Default for BrandTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for BrandTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Fallback for terminals limited to the 256-color palette.
#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                surface: Color::Indexed(234),
                surface_raised: Color::Indexed(236),
                border: Color::Indexed(240),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(244),

                accent: Color::Indexed(41),
                accent_soft: Color::Indexed(120),

                success: Color::Indexed(41),
                warning: Color::Indexed(214),
                error: Color::Indexed(203),
                selection_fg: Color::Indexed(255),

                overlay_bg: Color::Indexed(232),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
