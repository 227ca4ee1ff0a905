//! Store mutations triggered from the editor

use std::path::Path;

use tracing::{info, warn};

use super::state::{App, CurrentScreen, EditTarget, EditorRow};
use crate::errors::FlowError;
use crate::flow::{NodeKind, cycle};
use crate::services::{ConditionEditor, NodeEditor};

impl App {
    fn node_editor(&mut self) -> NodeEditor<'_> {
        NodeEditor::new(&mut self.store).with_max_delay(self.max_delay)
    }

    /// Record the outcome of an edit: mark dirty on change, report otherwise
    fn note_change(&mut self, changed: bool, message: &str) {
        if changed {
            self.dirty = true;
            self.set_status(message);
        }
    }

    pub fn add_node(&mut self, kind: NodeKind) {
        let id = self.store.create_node(kind);
        self.dirty = true;
        self.sync_list_cursor();
        self.editor_cursor = 0;
        self.set_status(format!("Added {} node {}", kind.label(), id.short()));
    }

    pub fn duplicate_selected(&mut self) {
        let source = self.store.selected_id().clone();
        match self.store.duplicate_node(&source) {
            Some(id) => {
                self.dirty = true;
                self.sync_list_cursor();
                self.set_status(format!("Duplicated {} as {}", source.short(), id.short()));
            }
            None => self.set_error("Nothing to duplicate"),
        }
    }

    pub fn delete_selected(&mut self) {
        let id = self.store.selected_id().clone();
        if self.store.delete_node(&id) {
            self.dirty = true;
            self.sync_list_cursor();
            self.clamp_editor_cursor();
            self.set_status(format!("Deleted node {}", id.short()));
        } else {
            self.set_error("The last remaining node cannot be deleted");
        }
    }

    pub fn save_flow(&mut self) -> Result<(), FlowError> {
        self.repository.save(self.store.flow())?;
        self.dirty = false;
        info!("Flow saved to {}", self.repository.describe());
        Ok(())
    }

    /// Save and report the result in the status bar
    pub fn save_with_status(&mut self) {
        match self.save_flow() {
            Ok(()) => {
                let location = self.repository.describe();
                self.set_status(format!("Saved to {}", location));
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                self.set_error(e.format_simple());
            }
        }
    }

    /// Enter on the current editor row: open a field popup or add an item
    pub fn activate_row(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let Some(node) = self.selected_node() else {
            return;
        };

        let edit = match &row {
            EditorRow::Kind => None,
            EditorRow::Message => Some((EditTarget::Message, node.message.clone())),
            EditorRow::MediaUrl => Some((
                EditTarget::MediaUrl,
                node.media.as_ref().map(|m| m.url.clone()).unwrap_or_default(),
            )),
            EditorRow::MediaCaption => Some((
                EditTarget::MediaCaption,
                node.media
                    .as_ref()
                    .map(|m| m.caption.clone())
                    .unwrap_or_default(),
            )),
            EditorRow::Response(id) => node
                .response(id)
                .map(|r| (EditTarget::ResponseText(id.clone()), r.text.clone())),
            EditorRow::Tag(_) => None,
            EditorRow::AddTag => Some((EditTarget::NewTag, String::new())),
            EditorRow::Delay => Some((EditTarget::Delay, node.delay_seconds.to_string())),
            EditorRow::Condition(id) => node
                .condition(id)
                .map(|c| (EditTarget::ConditionValue(id.clone()), c.value.clone())),
            EditorRow::AddResponse | EditorRow::AddCondition => None,
        };

        match (row, edit) {
            (_, Some((target, initial))) => self.open_edit(target, initial),
            (EditorRow::Kind, None) => self.cycle_row(true),
            (EditorRow::AddResponse, None) => {
                let added = self.node_editor().add_response().is_some();
                self.note_change(added, "Reply added");
            }
            (EditorRow::AddCondition, None) => {
                let added = ConditionEditor::new(&mut self.store).add_condition().is_some();
                self.note_change(added, "Condition added");
            }
            _ => {}
        }
    }

    pub fn open_edit(&mut self, target: EditTarget, initial: impl Into<String>) {
        self.form.begin(target, initial);
        self.current_screen = CurrentScreen::EditField;
    }

    /// `u` on a response row edits its link
    pub fn edit_response_url(&mut self) {
        let Some(EditorRow::Response(id)) = self.current_row() else {
            return;
        };
        let current = self
            .selected_node()
            .and_then(|n| n.response(&id))
            .and_then(|r| r.url())
            .unwrap_or_default()
            .to_string();
        self.open_edit(EditTarget::ResponseUrl(id), current);
    }

    /// `m` on a media row uploads a local file
    pub fn begin_media_upload(&mut self) {
        if matches!(
            self.current_row(),
            Some(EditorRow::MediaUrl | EditorRow::MediaCaption)
        ) {
            self.open_edit(EditTarget::AttachMedia, String::new());
        }
    }

    /// Apply the popup input. Returns false when the input was rejected and
    /// the popup should stay open.
    pub fn commit_edit(&mut self) -> bool {
        let Some(target) = self.form.target.clone() else {
            return true;
        };
        let input = self.form.input.clone();

        let changed = match target {
            EditTarget::Message => self.node_editor().set_message(input),
            EditTarget::MediaUrl => self.node_editor().set_media_url(input.trim()),
            EditTarget::MediaCaption => self.node_editor().set_media_caption(input),
            EditTarget::ResponseText(id) => self.node_editor().set_response_text(&id, input),
            EditTarget::ResponseUrl(id) => self.node_editor().set_response_url(&id, input.trim()),
            EditTarget::NewTag => self.node_editor().add_tag(&input).is_some(),
            EditTarget::ConditionValue(id) => {
                ConditionEditor::new(&mut self.store).set_value(&id, input)
            }
            EditTarget::Delay => match NodeEditor::parse_delay(&input, self.max_delay) {
                Ok(seconds) => self.node_editor().set_delay(seconds),
                Err(e) => {
                    self.form.set_error(e.message());
                    return false;
                }
            },
            EditTarget::AttachMedia => {
                let upload = self.uploader.upload(Path::new(input.trim()));
                match upload {
                    Ok(media) => {
                        if !self.node_editor().attach_media(&media) {
                            self.form.set_error(format!(
                                "This node does not accept {} media",
                                media.kind
                            ));
                            return false;
                        }
                        true
                    }
                    Err(e) => {
                        self.form.set_error(e.message());
                        return false;
                    }
                }
            }
        };

        self.note_change(changed, "Updated");
        self.clamp_editor_cursor();
        true
    }

    /// Left/Right on the current row: step through the row's enum field
    pub fn cycle_row(&mut self, forward: bool) {
        let Some(row) = self.current_row() else {
            return;
        };
        let Some(node) = self.selected_node() else {
            return;
        };

        let changed = match row {
            EditorRow::Kind => {
                let kind = cycle(node.kind, forward);
                self.node_editor().set_kind(kind)
            }
            EditorRow::Response(id) => match node.response(&id).map(|r| r.kind) {
                Some(kind) => self.node_editor().set_response_kind(&id, cycle(kind, forward)),
                None => false,
            },
            EditorRow::Condition(id) => match node.condition(&id).map(|c| c.operator) {
                Some(operator) => ConditionEditor::new(&mut self.store)
                    .set_operator(&id, cycle(operator, forward)),
                None => false,
            },
            EditorRow::Delay => {
                let delta = if forward { 1 } else { -1 };
                self.node_editor().nudge_delay(delta)
            }
            _ => false,
        };
        self.note_change(changed, "Updated");
        self.clamp_editor_cursor();
    }

    /// Space on a condition row: step through the subject
    pub fn cycle_condition_subject(&mut self) {
        let Some(EditorRow::Condition(id)) = self.current_row() else {
            return;
        };
        let Some(subject) = self
            .selected_node()
            .and_then(|n| n.condition(&id))
            .map(|c| c.subject)
        else {
            return;
        };
        let changed = ConditionEditor::new(&mut self.store).set_subject(&id, cycle(subject, true));
        self.note_change(changed, "Updated");
    }

    pub fn nudge_delay(&mut self, delta: i64) {
        let changed = self.node_editor().nudge_delay(delta);
        self.note_change(changed, "Delay updated");
    }

    /// `x` on a list row removes that item
    pub fn remove_current_item(&mut self) {
        let (changed, message) = match self.current_row() {
            Some(EditorRow::Response(id)) => (self.node_editor().remove_response(&id), "Reply removed"),
            Some(EditorRow::Tag(id)) => (self.node_editor().remove_tag(&id), "Tag removed"),
            Some(EditorRow::Condition(id)) => (
                ConditionEditor::new(&mut self.store).remove_condition(&id),
                "Condition removed",
            ),
            _ => (false, ""),
        };
        self.note_change(changed, message);
        self.clamp_editor_cursor();
    }

    /// Copy the selected node's message to the system clipboard
    pub fn copy_message(&mut self) {
        let Some(message) = self.selected_node().map(|n| n.message.clone()) else {
            return;
        };
        match arboard::Clipboard::new().and_then(|mut c| c.set_text(message)) {
            Ok(()) => self.set_status("Copied message"),
            Err(e) => self.set_error(format!("Clipboard unavailable: {}", e)),
        }
    }
}
