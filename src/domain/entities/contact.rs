use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::resource::Resource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessagePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub status: Option<MessageStatus>,
}

/// Returned to anonymous submitters instead of the stored record.
#[derive(Debug, Serialize)]
pub struct MessageReceipt {
    pub message: String,
    pub id: Uuid,
}

impl Resource for ContactMessage {
    const NAME: &'static str = "contact";

    type Create = NewContactMessage;
    type Patch = ContactMessagePatch;

    fn from_create(input: NewContactMessage) -> Self {
        let now = Utc::now();
        ContactMessage {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            message: input.message,
            status: MessageStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: ContactMessagePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
