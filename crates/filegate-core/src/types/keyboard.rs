//! Inline keyboard description, independent of the transport's wire format.

use serde::{Deserialize, Serialize};

/// A single inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineButton {
    /// Opens a URL.
    Url {
        /// Button label.
        text: String,
        /// Target URL.
        url: String,
    },
    /// Sends a callback query with the given payload.
    Callback {
        /// Button label.
        text: String,
        /// Callback payload.
        data: String,
    },
}

impl InlineButton {
    /// URL button.
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Url {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Callback button.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Callback {
            text: text.into(),
            data: data.into(),
        }
    }

    /// Button label.
    pub fn text(&self) -> &str {
        match self {
            Self::Url { text, .. } | Self::Callback { text, .. } => text,
        }
    }
}

/// Rows of inline buttons attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    /// Button rows, top to bottom.
    pub rows: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    /// One button per row.
    pub fn single_column(buttons: impl IntoIterator<Item = InlineButton>) -> Self {
        Self {
            rows: buttons.into_iter().map(|b| vec![b]).collect(),
        }
    }

    /// Iterate over every button in row order.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }

    /// Whether the keyboard has no buttons.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }
}
