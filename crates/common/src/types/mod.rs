use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain `{"message": ...}` body used for greetings and delete confirmations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Confirmation returned after a row has been removed.
    pub fn deleted(entity: &str, id: i32) -> Self {
        Self::new(format!("{entity} with id {id} has been deleted successfully"))
    }
}
