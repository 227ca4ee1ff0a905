//! 表单状态管理
//!
//! 字段编辑弹窗的输入缓冲、编辑目标和校验错误

use crate::flow::ItemId;

/// 弹窗正在编辑的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Message,
    MediaUrl,
    MediaCaption,
    /// 从本地文件上传媒体
    AttachMedia,
    ResponseText(ItemId),
    ResponseUrl(ItemId),
    NewTag,
    Delay,
    ConditionValue(ItemId),
}

impl EditTarget {
    /// 获取弹窗标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Message => "Message",
            Self::MediaUrl => "Media URL",
            Self::MediaCaption => "Caption",
            Self::AttachMedia => "Upload Media",
            Self::ResponseText(_) => "Button Text",
            Self::ResponseUrl(_) => "Button URL",
            Self::NewTag => "New Tag",
            Self::Delay => "Delay (seconds)",
            Self::ConditionValue(_) => "Condition Value",
        }
    }

    /// 输入为空时的提示
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::MediaUrl => Some("https://..."),
            Self::AttachMedia => Some("path to an image, video or audio file"),
            Self::ResponseUrl(_) => Some("https://..."),
            Self::NewTag => Some("press Enter to add"),
            Self::Delay => Some("0-300"),
            _ => None,
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 当前编辑目标
    pub target: Option<EditTarget>,
    /// 输入缓冲
    pub input: String,
    /// 校验错误
    pub error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开编辑，输入框预填当前值
    pub fn begin(&mut self, target: EditTarget, initial: impl Into<String>) {
        self.target = Some(target);
        self.input = initial.into();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.target = None;
        self.input.clear();
        self.error = None;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn push_char(&mut self, c: char) {
        if self.is_active() {
            self.input.push(c);
            self.error = None;
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_active() {
            self.input.pop();
            self.error = None;
        }
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }
}
