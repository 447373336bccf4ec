use crate::notification::{strip_tag, Severity, ERROR_TAG};

/// Tagged text reply of one external command, classified on arrival.
///
/// Both variants keep the raw text; the tag is stripped when it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Success(String),
    Error(String),
}

impl CommandReply {
    /// Classifies a reply: error iff it starts with `"Error:"`.
    pub fn from_tagged_text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with(ERROR_TAG) {
            CommandReply::Error(raw)
        } else {
            CommandReply::Success(raw)
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CommandReply::Success(_) => Severity::Success,
            CommandReply::Error(_) => Severity::Error,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            CommandReply::Success(raw) | CommandReply::Error(raw) => raw,
        }
    }

    /// The text as shown to the user, tag removed.
    pub fn message(&self) -> &str {
        strip_tag(self.raw())
    }
}
