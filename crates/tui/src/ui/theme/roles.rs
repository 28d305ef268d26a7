use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles for the dashboard chrome, menu rows and job cards.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    /// Page fill behind every panel.
    pub background: Color,
    /// Panel and card fill.
    pub surface: Color,
    /// Input fields and the selected row.
    pub surface_raised: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Brand color: focus rings, badges, the current page.
    pub accent: Color,
    pub accent_soft: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub selection_fg: Color,
    /// Fill behind the floating sidebar on narrow terminals.
    pub overlay_bg: Color,
}

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

/// Style builders over [`ThemeRoles`]. Palettes only supply the roles.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn page_style(&self) -> Style {
        Style::default().bg(self.roles().background)
    }

    fn text_primary_style(&self) -> Style {
        fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        fg(self.roles().text_muted)
    }

    /// Focused panels take the accent color.
    fn border_style(&self, focused: bool) -> Style {
        fg(if focused { self.roles().accent } else { self.roles().border })
    }

    fn selection_style(&self) -> Style {
        fg(self.roles().selection_fg).bg(self.roles().surface_raised)
    }

    fn overlay_background_style(&self) -> Style {
        Style::default().bg(self.roles().overlay_bg)
    }

    /// Menu entries with `visible == false`: listed, but dimmed.
    fn hidden_item_style(&self) -> Style {
        self.text_muted_style().add_modifier(Modifier::DIM)
    }

    /// Row under the pointer while a menu entry is dragged.
    fn drop_target_style(&self) -> Style {
        fg(self.roles().accent_soft).add_modifier(Modifier::UNDERLINED)
    }

    fn status_success(&self) -> Style {
        fg(self.roles().success)
    }
    fn status_warning(&self) -> Style {
        fg(self.roles().warning)
    }
    fn status_error(&self) -> Style {
        fg(self.roles().error)
    }

    fn accent_primary_style(&self) -> Style {
        fg(self.roles().accent)
    }
    fn accent_emphasis_style(&self) -> Style {
        self.accent_primary_style().add_modifier(Modifier::BOLD)
    }
}
