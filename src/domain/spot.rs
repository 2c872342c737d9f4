use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub u64);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of the logged-in user as exposed by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

impl SessionUser {
    pub fn new(id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Owner snapshot copied into the payload at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

impl From<&SessionUser> for Owner {
    fn from(user: &SessionUser) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationPayload {
    pub country: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub lat: String,
    pub lng: String,
    pub description: String,
    pub name: String,
    pub price: String,
    #[serde(rename = "Owner")]
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotImage {
    pub url: String,
    #[serde(rename = "preview")]
    pub is_preview: bool,
}

impl SpotImage {
    pub fn preview(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_preview: true,
        }
    }

    pub fn extra(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_preview: false,
        }
    }
}

/// Record returned by the creation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSpot {
    pub id: SpotId,
    #[serde(flatten)]
    pub spot: CreationPayload,
    #[serde(rename = "SpotImages", default)]
    pub images: Vec<SpotImage>,
}

impl CreatedSpot {
    /// Detail route of the created spot.
    pub fn detail_path(&self) -> String {
        format!("/spots/{}", self.id)
    }
}
