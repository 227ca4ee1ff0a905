//! App state definition and basic state management

mod form_state;

pub use form_state::{EditTarget, FormState};

use strum::{EnumIter, IntoEnumIterator};

use crate::config::StaticConfig;
use crate::errors::FlowError;
use crate::flow::{FlowNode, FlowStore, ItemId};
use crate::repository::FlowRepository;
use crate::services::{LocalMediaUploader, MAX_DELAY_SECONDS, MediaUploader};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    AddContent,
    EditField,
    DeleteConfirm,
    Help,
    Exiting,
}

/// 键盘焦点所在面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Editor,
}

/// 详情面板标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum DetailTab {
    #[default]
    Message,
    Conditions,
    Analytics,
}

impl DetailTab {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Message => "Message",
            Self::Conditions => "Conditions",
            Self::Analytics => "Analytics",
        }
    }

    pub fn index(&self) -> usize {
        Self::iter().position(|t| t == *self).unwrap_or(0)
    }
}

/// One selectable line of the editor panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorRow {
    Kind,
    Message,
    MediaUrl,
    MediaCaption,
    Response(ItemId),
    AddResponse,
    Tag(ItemId),
    AddTag,
    Delay,
    Condition(ItemId),
    AddCondition,
}

impl EditorRow {
    /// Rows the editor shows for `node` on `tab`
    pub fn for_node(node: &FlowNode, tab: DetailTab) -> Vec<EditorRow> {
        match tab {
            DetailTab::Message => {
                let mut rows = vec![EditorRow::Kind, EditorRow::Message];
                if node.kind.supports_media() {
                    rows.push(EditorRow::MediaUrl);
                    rows.push(EditorRow::MediaCaption);
                }
                rows.extend(
                    node.responses
                        .iter()
                        .map(|r| EditorRow::Response(r.id.clone())),
                );
                rows.push(EditorRow::AddResponse);
                rows.extend(node.tags.iter().map(|t| EditorRow::Tag(t.id.clone())));
                rows.push(EditorRow::AddTag);
                rows.push(EditorRow::Delay);
                rows
            }
            DetailTab::Conditions => {
                let mut rows: Vec<EditorRow> = node
                    .conditions
                    .iter()
                    .map(|c| EditorRow::Condition(c.id.clone()))
                    .collect();
                rows.push(EditorRow::AddCondition);
                rows
            }
            DetailTab::Analytics => Vec::new(),
        }
    }
}

pub struct App {
    pub store: FlowStore,
    pub repository: Box<dyn FlowRepository>,
    pub uploader: Box<dyn MediaUploader>,
    pub max_delay: u32,
    pub current_screen: CurrentScreen,
    pub focus: Focus,
    pub tab: DetailTab,

    // Field edit popup
    pub form: FormState,

    // Search functionality
    pub search_input: String,
    pub inline_search_mode: bool,

    // UI state
    pub list_cursor: usize,
    pub editor_cursor: usize,
    pub add_content_cursor: usize,
    pub status_message: String,
    pub error_message: String,

    /// Unsaved changes since the last load or save
    pub dirty: bool,
}

impl App {
    /// Load the flow from `repository` and configure the editor from `config`
    pub fn new(
        repository: Box<dyn FlowRepository>,
        config: &StaticConfig,
    ) -> Result<App, FlowError> {
        let flow = repository.load()?;
        let store = FlowStore::new(flow, config.store_options());
        let uploader = Box::new(LocalMediaUploader::new(config.media.max_upload_bytes));
        Ok(App::with_store(store, repository, uploader)
            .with_max_delay(config.editor.max_delay_seconds))
    }

    pub fn with_store(
        store: FlowStore,
        repository: Box<dyn FlowRepository>,
        uploader: Box<dyn MediaUploader>,
    ) -> App {
        let mut app = App {
            store,
            repository,
            uploader,
            max_delay: MAX_DELAY_SECONDS,
            current_screen: CurrentScreen::Main,
            focus: Focus::List,
            tab: DetailTab::default(),
            form: FormState::new(),
            search_input: String::new(),
            inline_search_mode: false,
            list_cursor: 0,
            editor_cursor: 0,
            add_content_cursor: 0,
            status_message: String::new(),
            error_message: String::new(),
            dirty: false,
        };
        app.sync_list_cursor();
        app
    }

    pub fn with_max_delay(mut self, max_delay: u32) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn selected_node(&self) -> Option<&FlowNode> {
        self.store.selected()
    }

    pub fn editor_rows(&self) -> Vec<EditorRow> {
        self.selected_node()
            .map(|node| EditorRow::for_node(node, self.tab))
            .unwrap_or_default()
    }

    pub fn current_row(&self) -> Option<EditorRow> {
        self.editor_rows().into_iter().nth(self.editor_cursor)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    pub fn is_searching(&self) -> bool {
        !self.search_input.is_empty()
    }
}
