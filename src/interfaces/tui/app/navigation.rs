//! Navigation and selection logic
//!
//! The sidebar cursor drives the store selection: moving it selects the node
//! under it, so the detail panel always shows what the cursor points at.

use strum::IntoEnumIterator;

use super::state::{App, DetailTab, Focus};
use crate::flow::{NodeId, cycle};
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;
use crate::services::matching_ids;

impl App {
    /// Node ids currently shown in the sidebar, in flow order
    pub fn visible_ids(&self) -> Vec<NodeId> {
        matching_ids(self.store.nodes(), &self.search_input)
    }

    fn select_at_cursor(&mut self) {
        let ids = self.visible_ids();
        if ids.is_empty() {
            self.list_cursor = 0;
            return;
        }
        self.list_cursor = self.list_cursor.min(ids.len() - 1);
        if self.store.select_node(&ids[self.list_cursor]) {
            self.editor_cursor = 0;
        }
    }

    /// Point the cursor at the selected node, or clamp it if that node is
    /// filtered out
    pub fn sync_list_cursor(&mut self) {
        let ids = self.visible_ids();
        match ids.iter().position(|id| id == self.store.selected_id()) {
            Some(pos) => self.list_cursor = pos,
            None => self.list_cursor = self.list_cursor.min(ids.len().saturating_sub(1)),
        }
    }

    pub fn move_selection_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(1);
        self.select_at_cursor();
    }

    pub fn move_selection_down(&mut self) {
        self.list_cursor = self.list_cursor.saturating_add(1);
        self.select_at_cursor();
    }

    pub fn jump_to_top(&mut self) {
        self.list_cursor = 0;
        self.select_at_cursor();
    }

    pub fn jump_to_bottom(&mut self) {
        self.list_cursor = usize::MAX;
        self.select_at_cursor();
    }

    pub fn page_up(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(PAGE_SCROLL_STEP);
        self.select_at_cursor();
    }

    pub fn page_down(&mut self) {
        self.list_cursor = self.list_cursor.saturating_add(PAGE_SCROLL_STEP);
        self.select_at_cursor();
    }

    /// Re-run the sidebar filter after the search text changed
    pub fn apply_search(&mut self) {
        self.sync_list_cursor();
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.inline_search_mode = false;
        self.sync_list_cursor();
    }

    pub fn next_tab(&mut self) {
        self.tab = cycle(self.tab, true);
        self.editor_cursor = 0;
    }

    pub fn prev_tab(&mut self) {
        self.tab = cycle(self.tab, false);
        self.editor_cursor = 0;
    }

    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = DetailTab::iter().nth(index) {
            self.tab = tab;
            self.editor_cursor = 0;
        }
    }

    pub fn focus_editor(&mut self) {
        if self.selected_node().is_some() {
            self.focus = Focus::Editor;
            self.clamp_editor_cursor();
        }
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    pub fn move_editor_cursor(&mut self, delta: isize) {
        let len = self.editor_rows().len();
        if len == 0 {
            self.editor_cursor = 0;
            return;
        }
        self.editor_cursor = self.editor_cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Keep the editor cursor on an existing row after rows were removed
    pub fn clamp_editor_cursor(&mut self) {
        let len = self.editor_rows().len();
        self.editor_cursor = self.editor_cursor.min(len.saturating_sub(1));
    }
}
