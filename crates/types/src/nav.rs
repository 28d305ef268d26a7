//! Navigation menu model shared by the data source and the sidebar editor.

use serde::{Deserialize, Serialize};

/// A single entry of the sidebar menu.
///
/// The position of an item is the position in its containing sequence; there
/// is no ordering field. `id` is stable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Stable identity (e.g., "dashboard").
    pub id: String,
    /// Display text; user-editable.
    pub label: String,
    /// Symbolic key resolved through [`NavIcon::from_key`].
    pub icon: String,
    /// Hidden items stay in the list but render dimmed.
    pub visible: bool,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>, visible: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            visible,
        }
    }

    /// Resolved glyph kind for this item's icon key.
    pub fn nav_icon(&self) -> NavIcon {
        NavIcon::from_key(&self.icon)
    }
}

/// Glyph kinds a menu entry can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Briefcase,
    User,
    Award,
    Info,
    Phone,
    Unknown,
}

impl NavIcon {
    /// Total mapping from an icon key to a glyph kind.
    ///
    /// Both the generic glyph names and the menu's domain keys are accepted;
    /// anything else becomes [`NavIcon::Unknown`].
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "home" | "dashboard" => NavIcon::Home,
            "briefcase" | "application" => NavIcon::Briefcase,
            "user" => NavIcon::User,
            "award" | "qualifications" => NavIcon::Award,
            "info" | "about" => NavIcon::Info,
            "phone" | "contact" => NavIcon::Phone,
            _ => NavIcon::Unknown,
        }
    }

    /// Terminal-safe glyph. Unknown keys fall back to the info glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Home => "⌂",
            NavIcon::Briefcase => "▤",
            NavIcon::User => "☺",
            NavIcon::Award => "★",
            NavIcon::Phone => "☎",
            NavIcon::Info | NavIcon::Unknown => "ⓘ",
        }
    }
}

/// A single reorder transition reported to the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavChange {
    pub id: String,
    pub from: usize,
    pub to: usize,
}

/// Payload returned by `fetchNavigation` and sent by `updateNavigation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPayload {
    pub items: Vec<NavItem>,
}

/// Acknowledgement returned by the mutating data-source calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub const OK: Ack = Ack { success: true };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_lookup_is_total() {
        assert_eq!(NavIcon::from_key("home"), NavIcon::Home);
        assert_eq!(NavIcon::from_key("Dashboard"), NavIcon::Home);
        assert_eq!(NavIcon::from_key("application"), NavIcon::Briefcase);
        assert_eq!(NavIcon::from_key("user"), NavIcon::User);
        assert_eq!(NavIcon::from_key("qualifications"), NavIcon::Award);
        assert_eq!(NavIcon::from_key("about"), NavIcon::Info);
        assert_eq!(NavIcon::from_key("contact"), NavIcon::Phone);
        assert_eq!(NavIcon::from_key("settings"), NavIcon::Unknown);
        assert_eq!(NavIcon::from_key(""), NavIcon::Unknown);
        assert_eq!(NavIcon::Unknown.glyph(), NavIcon::Info.glyph());
    }

    #[test]
    fn nav_item_uses_wire_field_names() {
        let json = r#"{"id":"about","label":"About","icon":"about","visible":false}"#;
        let item: NavItem = serde_json::from_str(json).expect("deserialize NavItem");
        assert_eq!(item, NavItem::new("about", "About", "about", false));
        assert_eq!(item.nav_icon(), NavIcon::Info);

        let change = NavChange {
            id: "about".into(),
            from: 6,
            to: 0,
        };
        let value = serde_json::to_value(&change).expect("serialize NavChange");
        assert_eq!(value, serde_json::json!({"id": "about", "from": 6, "to": 0}));
    }
}
