use crate::model::{CategoryId, EnrichedProduct, Sex, UserId};

pub mod controls;
pub mod list;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One entry in the owner filter. `id == 0` is the "All" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserControl {
    pub id: UserId,
    pub label: String,
    pub sex: Option<Sex>,
    pub active: bool,
}

/// One entry in the category filter. `id == None` is the "All" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryControl {
    pub id: Option<CategoryId>,
    pub title: String,
    pub icon: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<EnrichedProduct>,
    pub user_controls: Vec<UserControl>,
    pub category_controls: Vec<CategoryControl>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<EnrichedProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_user_controls(mut self, controls: Vec<UserControl>) -> Self {
        self.user_controls = controls;
        self
    }

    pub fn with_category_controls(mut self, controls: Vec<CategoryControl>) -> Self {
        self.category_controls = controls;
        self
    }
}
