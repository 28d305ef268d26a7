use std::time::{Duration, Instant};

use jobdeck_types::{NavChange, NavItem};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::{ScrollMetrics, TextInputState};

/// Two clicks on the same row within this window open the label editor.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// A single row in inline-edit presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEdit {
    pub id: String,
    pub buffer: TextInputState,
}

/// Buttons in the sidebar header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Edit,
    Save,
    Cancel,
}

/// Mouse drag in progress: the row being dragged and the row under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub source_id: String,
    pub hover: Option<usize>,
}

/// State for the sidebar navigation editor.
///
/// Holds two copies of the menu: `items` is the working copy every edit
/// applies to, `snapshot` is the last committed list. The copies only
/// converge through [`NavEditorState::commit_succeeded`] (snapshot takes the
/// committed list) and [`NavEditorState::cancel`] (working copy takes the
/// snapshot).
#[derive(Debug, Clone)]
pub struct NavEditorState {
    items: Vec<NavItem>,
    snapshot: Vec<NavItem>,
    edit_mode: bool,
    loaded: bool,
    load_error: Option<String>,
    saving: bool,
    selected: usize,
    label_edit: Option<LabelEdit>,
    grabbed: Option<String>,
    drag: Option<DragState>,
    last_click: Option<(usize, Instant)>,

    /// Focus flag for the sidebar in the global focus ring.
    pub focus: FocusFlag,
    /// Last rendered area; used for mouse hit testing.
    pub last_area: Rect,
    /// Rows drawn by the last render; entry `i` shows item `scroll.offset() + i`.
    pub row_areas: Vec<Rect>,
    /// Window over `items` when the list is taller than the panel.
    pub scroll: ScrollMetrics,
    /// Header buttons from the last render.
    pub header_buttons: Vec<(HeaderAction, Rect)>,
}

impl Default for NavEditorState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            snapshot: Vec::new(),
            edit_mode: false,
            loaded: false,
            load_error: None,
            saving: false,
            selected: 0,
            label_edit: None,
            grabbed: None,
            drag: None,
            last_click: None,
            focus: FocusFlag::named("sidebar"),
            last_area: Rect::default(),
            row_areas: Vec::new(),
            scroll: ScrollMetrics::default(),
            header_buttons: Vec::new(),
        }
    }
}

impl NavEditorState {
    // ========================
    // Lifecycle
    // ========================

    /// Installs a freshly fetched menu as both working copy and snapshot.
    pub fn load(&mut self, items: Vec<NavItem>) {
        self.snapshot = items.clone();
        self.items = items;
        self.loaded = true;
        self.load_error = None;
        self.clamp_selection();
    }

    /// Records a failed fetch. The list stays empty.
    pub fn load_failed(&mut self, error: impl Into<String>) {
        self.loaded = true;
        self.load_error = Some(error.into());
    }

    pub fn enter_edit_mode(&mut self) {
        self.edit_mode = true;
    }

    /// Starts a commit: confirms any inline edit and returns the working copy
    /// to send. Returns `None` outside edit mode or while a commit is in flight.
    pub fn begin_commit(&mut self) -> Option<Vec<NavItem>> {
        if !self.edit_mode || self.saving {
            return None;
        }
        self.confirm_label_edit();
        self.grabbed = None;
        self.drag = None;
        self.saving = true;
        Some(self.items.clone())
    }

    /// The data source accepted `committed`; it becomes the snapshot.
    pub fn commit_succeeded(&mut self, committed: Vec<NavItem>) {
        self.snapshot = committed;
        self.saving = false;
        self.edit_mode = false;
    }

    /// The data source rejected the commit. Edit mode ends; the working copy
    /// keeps the edits and the snapshot is untouched.
    pub fn commit_failed(&mut self) {
        self.saving = false;
        self.edit_mode = false;
    }

    /// Discards the working copy and ends edit mode.
    pub fn cancel(&mut self) {
        self.items = self.snapshot.clone();
        self.edit_mode = false;
        self.label_edit = None;
        self.grabbed = None;
        self.drag = None;
        self.clamp_selection();
    }

    // ========================
    // Edits (working copy only)
    // ========================

    /// Moves `source_id` to the index currently held by `target_id`.
    ///
    /// This is a single-element move, not a swap. Returns the transition to
    /// report, or `None` when either id is unknown or both are the same.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> Option<NavChange> {
        let from = self.index_of(source_id)?;
        let to = self.index_of(target_id)?;
        if from == to {
            return None;
        }
        let selected_id = self.items.get(self.selected).map(|item| item.id.clone());
        let item = self.items.remove(from);
        self.items.insert(to, item);
        if let Some(idx) = selected_id.and_then(|id| self.index_of(&id)) {
            self.selected = idx;
        }
        Some(NavChange {
            id: source_id.to_string(),
            from,
            to,
        })
    }

    /// Flips `visible` on the matching item.
    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.visible = !item.visible;
                true
            }
            None => false,
        }
    }

    /// Writes `label` into the matching item. Empty labels are accepted.
    pub fn set_label(&mut self, id: &str, label: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Moves the selected item one slot up or down.
    pub fn move_selected(&mut self, down: bool) -> Option<NavChange> {
        let id = self.items.get(self.selected)?.id.clone();
        self.move_by_one(&id, down)
    }

    fn move_by_one(&mut self, id: &str, down: bool) -> Option<NavChange> {
        let idx = self.index_of(id)?;
        let neighbor = if down { idx.checked_add(1)? } else { idx.checked_sub(1)? };
        let neighbor_id = self.items.get(neighbor)?.id.clone();
        self.reorder(id, &neighbor_id)
    }

    // ========================
    // Inline label editing
    // ========================

    /// Opens the inline editor for `id`, confirming any other open edit first.
    /// Only available in edit mode.
    pub fn begin_label_edit(&mut self, id: &str) -> bool {
        if !self.edit_mode {
            return false;
        }
        let Some(label) = self.items.iter().find(|item| item.id == id).map(|item| item.label.clone()) else {
            return false;
        };
        self.confirm_label_edit();
        self.label_edit = Some(LabelEdit {
            id: id.to_string(),
            buffer: TextInputState::with_text(label),
        });
        true
    }

    /// Writes the edit buffer into the working copy.
    pub fn confirm_label_edit(&mut self) -> bool {
        match self.label_edit.take() {
            Some(edit) => self.set_label(&edit.id, edit.buffer.into_input()),
            None => false,
        }
    }

    /// Closes the inline editor without writing.
    pub fn abandon_label_edit(&mut self) {
        self.label_edit = None;
    }

    pub fn label_edit(&self) -> Option<&LabelEdit> {
        self.label_edit.as_ref()
    }

    pub fn label_edit_mut(&mut self) -> Option<&mut LabelEdit> {
        self.label_edit.as_mut()
    }

    // ========================
    // Keyboard grab-and-move
    // ========================

    /// Picks up the selected item, or drops the grabbed one.
    pub fn toggle_grab(&mut self) {
        if self.grabbed.take().is_none() {
            self.grabbed = self.items.get(self.selected).map(|item| item.id.clone());
        }
    }

    pub fn drop_grabbed(&mut self) {
        self.grabbed = None;
    }

    pub fn grabbed(&self) -> Option<&str> {
        self.grabbed.as_deref()
    }

    /// Moves the grabbed item one slot; the selection follows it.
    pub fn move_grabbed(&mut self, down: bool) -> Option<NavChange> {
        let id = self.grabbed.clone()?;
        let change = self.move_by_one(&id, down)?;
        self.selected = change.to;
        Some(change)
    }

    // ========================
    // Mouse drag-and-drop
    // ========================

    /// Begins dragging the row at `index`. Only available in edit mode.
    pub fn start_drag(&mut self, index: usize) -> bool {
        if !self.edit_mode {
            return false;
        }
        match self.items.get(index) {
            Some(item) => {
                self.drag = Some(DragState {
                    source_id: item.id.clone(),
                    hover: Some(index),
                });
                true
            }
            None => false,
        }
    }

    pub fn drag_hover(&mut self, index: Option<usize>) {
        if let Some(drag) = self.drag.as_mut() {
            drag.hover = index;
        }
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Ends a drag over `target` (row index), reordering when it differs
    /// from the source.
    pub fn finish_drag(&mut self, target: Option<usize>) -> Option<NavChange> {
        let drag = self.drag.take()?;
        let target_id = self.items.get(target?)?.id.clone();
        self.reorder(&drag.source_id, &target_id)
    }

    /// Records a click on `index` and reports whether it completes a double-click.
    pub fn register_click(&mut self, index: usize, now: Instant) -> bool {
        let is_double = matches!(
            self.last_click,
            Some((last_index, at)) if last_index == index && now.saturating_duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        self.last_click = if is_double { None } else { Some((index, now)) };
        is_double
    }

    // ========================
    // Selection & queries
    // ========================

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn snapshot(&self) -> &[NavItem] {
        &self.snapshot
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether the working copy differs from the snapshot.
    pub fn is_dirty(&self) -> bool {
        self.items != self.snapshot
    }

    /// Rendered area of item `index`, if it was inside the viewport.
    pub fn row_area(&self, index: usize) -> Option<Rect> {
        let row = index.checked_sub(self.scroll.offset())?;
        self.row_areas.get(row).copied()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }
}

impl HasFocus for NavEditorState {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(n: usize) -> Vec<NavItem> {
        (0..n)
            .map(|i| NavItem::new(format!("item-{i}"), format!("Item {i}"), "info", i % 3 != 0))
            .collect()
    }

    fn ids(items: &[NavItem]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    fn editing(n: usize) -> NavEditorState {
        let mut state = NavEditorState::default();
        state.load(menu(n));
        state.enter_edit_mode();
        state
    }

    #[test]
    fn load_fills_both_copies() {
        let mut state = NavEditorState::default();
        assert!(!state.is_loaded());
        state.load(menu(4));
        assert_eq!(state.items(), state.snapshot());
        assert!(state.is_loaded());
        assert!(!state.is_edit_mode());
    }

    #[test]
    fn reorder_is_a_single_element_move() {
        let n = 6;
        for from in 0..n {
            for to in 0..n {
                if from == to {
                    continue;
                }
                let mut state = editing(n);
                let original = ids(state.items());
                let source = original[from].clone();
                let target = original[to].clone();

                let change = state.reorder(&source, &target).expect("distinct ids reorder");
                assert_eq!(change, NavChange { id: source.clone(), from, to });

                let after = ids(state.items());
                assert_eq!(after[to], source);
                let rest_before: Vec<_> = original.iter().filter(|id| **id != source).collect();
                let rest_after: Vec<_> = after.iter().filter(|id| **id != source).collect();
                assert_eq!(rest_before, rest_after);
            }
        }
    }

    #[test]
    fn reorder_ignores_unknown_or_identical_ids() {
        let mut state = editing(3);
        let before = state.items().to_vec();
        assert!(state.reorder("item-1", "item-1").is_none());
        assert!(state.reorder("item-1", "nope").is_none());
        assert!(state.reorder("nope", "item-1").is_none());
        assert_eq!(state.items(), before.as_slice());
    }

    #[test]
    fn reorder_does_not_check_edit_mode() {
        let mut state = NavEditorState::default();
        state.load(menu(3));
        assert!(state.reorder("item-2", "item-0").is_some());
        assert_eq!(ids(state.items()), vec!["item-2", "item-0", "item-1"]);
    }

    #[test]
    fn toggling_twice_is_identity() {
        let mut state = editing(4);
        let before = state.items().to_vec();
        assert!(state.toggle_visibility("item-2"));
        assert_eq!(state.items()[2].visible, !before[2].visible);
        assert_eq!(state.items()[1], before[1]);
        assert!(state.toggle_visibility("item-2"));
        assert_eq!(state.items(), before.as_slice());
        assert!(!state.toggle_visibility("missing"));
    }

    #[test]
    fn label_edit_touches_only_the_label() {
        let mut state = editing(4);
        let before = state.items().to_vec();
        assert!(state.set_label("item-1", ""));
        let after = state.items();
        assert_eq!(after[1].label, "");
        assert_eq!(after[1].id, before[1].id);
        assert_eq!(after[1].icon, before[1].icon);
        assert_eq!(after[1].visible, before[1].visible);
        assert_eq!(&after[..1], &before[..1]);
        assert_eq!(&after[2..], &before[2..]);
    }

    #[test]
    fn inline_editor_requires_edit_mode_and_confirms_into_working_copy() {
        let mut state = NavEditorState::default();
        state.load(menu(3));
        assert!(!state.begin_label_edit("item-0"));

        state.enter_edit_mode();
        assert!(state.begin_label_edit("item-0"));
        let edit = state.label_edit_mut().expect("editor open");
        edit.buffer.insert_char('!');
        // Opening another row confirms the first edit.
        assert!(state.begin_label_edit("item-1"));
        assert_eq!(state.items()[0].label, "Item 0!");
        state.abandon_label_edit();
        assert_eq!(state.items()[1].label, "Item 1");
        assert!(state.label_edit().is_none());
    }

    #[test]
    fn cancel_restores_the_snapshot() {
        let mut state = editing(5);
        let snapshot = state.snapshot().to_vec();
        state.reorder("item-4", "item-0");
        state.toggle_visibility("item-1");
        state.set_label("item-2", "Renamed");
        state.begin_label_edit("item-3");
        assert!(state.is_dirty());

        state.cancel();
        assert_eq!(state.items(), snapshot.as_slice());
        assert!(!state.is_edit_mode());
        assert!(state.label_edit().is_none());
        assert!(!state.is_dirty());
    }

    #[test]
    fn commit_success_replaces_snapshot_with_working_copy() {
        let mut state = editing(4);
        state.reorder("item-0", "item-3");
        state.begin_label_edit("item-1");
        state.label_edit_mut().unwrap().buffer.insert_char('x');

        let sent = state.begin_commit().expect("commit starts in edit mode");
        assert_eq!(sent.as_slice(), state.items());
        assert_eq!(sent[0].label, "Item 1x");
        assert!(state.is_saving());
        assert!(state.begin_commit().is_none());

        state.commit_succeeded(sent.clone());
        assert_eq!(state.snapshot(), sent.as_slice());
        assert_eq!(state.items(), sent.as_slice());
        assert!(!state.is_edit_mode());
        assert!(!state.is_saving());
    }

    #[test]
    fn commit_failure_exits_edit_mode_and_keeps_edits() {
        let mut state = editing(3);
        let snapshot = state.snapshot().to_vec();
        state.toggle_visibility("item-1");
        let sent = state.begin_commit().unwrap();

        state.commit_failed();
        assert!(!state.is_edit_mode());
        assert_eq!(state.items(), sent.as_slice());
        assert_eq!(state.snapshot(), snapshot.as_slice());
        assert!(state.is_dirty());
    }

    #[test]
    fn commit_outside_edit_mode_is_refused() {
        let mut state = NavEditorState::default();
        state.load(menu(2));
        assert!(state.begin_commit().is_none());
    }

    #[test]
    fn grabbed_item_moves_and_selection_follows() {
        let mut state = editing(4);
        state.select(1);
        state.toggle_grab();
        assert_eq!(state.grabbed(), Some("item-1"));

        let change = state.move_grabbed(true).expect("moves down");
        assert_eq!((change.from, change.to), (1, 2));
        assert_eq!(state.selected(), 2);
        state.move_grabbed(true);
        assert!(state.move_grabbed(true).is_none(), "already last");
        assert_eq!(ids(state.items()), vec!["item-0", "item-2", "item-3", "item-1"]);

        state.toggle_grab();
        assert!(state.grabbed().is_none());
    }

    #[test]
    fn drag_and_drop_reorders_onto_target_row() {
        let mut state = NavEditorState::default();
        state.load(menu(4));
        assert!(!state.start_drag(0), "drag needs edit mode");

        state.enter_edit_mode();
        assert!(state.start_drag(3));
        state.drag_hover(Some(1));
        assert_eq!(state.drag().and_then(|d| d.hover), Some(1));
        let change = state.finish_drag(Some(1)).expect("reorders");
        assert_eq!(change, NavChange { id: "item-3".into(), from: 3, to: 1 });
        assert!(state.drag().is_none());

        assert!(state.start_drag(0));
        assert!(state.finish_drag(Some(0)).is_none(), "dropping on itself is a no-op");
        assert!(state.start_drag(0));
        assert!(state.finish_drag(None).is_none());
    }

    #[test]
    fn double_click_detection() {
        let mut state = editing(3);
        let t0 = Instant::now();
        assert!(!state.register_click(1, t0));
        assert!(state.register_click(1, t0 + Duration::from_millis(200)));
        assert!(!state.register_click(1, t0 + Duration::from_millis(300)));
        assert!(!state.register_click(2, t0 + Duration::from_millis(350)));
        assert!(!state.register_click(2, t0 + Duration::from_millis(900)));
    }

    #[test]
    fn failed_load_leaves_list_empty() {
        let mut state = NavEditorState::default();
        state.load_failed("boom");
        assert!(state.is_loaded());
        assert!(state.items().is_empty());
        assert_eq!(state.load_error(), Some("boom"));
        state.select_next();
        assert!(state.move_selected(true).is_none());
    }
}
