use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};

/// Hit-test areas for the top bar. The bar itself holds no data.
#[derive(Debug, Clone)]
pub struct TopBarState {
    pub focus: FocusFlag,
    pub last_area: Rect,
    pub menu_button_area: Rect,
}

impl Default for TopBarState {
    fn default() -> Self {
        Self {
            focus: FocusFlag::named("top_bar"),
            last_area: Rect::default(),
            menu_button_area: Rect::default(),
        }
    }
}

impl TopBarState {
    pub fn is_menu_button_hit(&self, x: u16, y: u16) -> bool {
        self.menu_button_area.contains(Position::new(x, y))
    }
}

impl HasFocus for TopBarState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
