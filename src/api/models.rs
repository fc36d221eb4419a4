use serde::{Deserialize, Serialize};

use crate::config::TOKEN_PREFIX;

/// A signed-cookie pair left in storage by the sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub name: String,
    pub value: String,
}

impl AuthToken {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Name as sent in the query string. Names without the prefix pass through.
    ///
    /// Only a leading `CloudFront-` is removed; a name that merely contains it
    /// further in is sent whole. Signed-cookie names always start with it.
    pub fn param_name(&self) -> &str {
        self.name
            .strip_prefix(TOKEN_PREFIX)
            .unwrap_or(self.name.as_str())
    }
}

/// Payload understood by the image handler: which object, and what to do to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub key: String,
    pub edits: ImageEdits,
}

impl ImageRequest {
    /// Square thumbnail of `key`.
    pub fn thumbnail(key: impl Into<String>, size: u32) -> Self {
        Self {
            key: key.into(),
            edits: ImageEdits {
                resize: Resize {
                    width: size,
                    height: size,
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEdits {
    pub resize: Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resize {
    pub width: u32,
    pub height: u32,
}
