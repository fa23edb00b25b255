use serde::Serialize;

/// Liveness payload served from `/health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Fixed payload served from `/`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

impl Default for Greeting {
    fn default() -> Self {
        Self { hello: "World" }
    }
}

/// `{"message": ...}` body shared by the not-found reply and other failures.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    /// Sent in place of a result when an item id is absent.
    pub const ITEM_NOT_FOUND: &'static str = "Item not found";

    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
