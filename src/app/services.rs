use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{CreatedSpot, CreationPayload, SpotImage};

/// Persists a new spot together with its images.
#[async_trait]
pub trait SpotCreator: Send + Sync {
    async fn create(&self, payload: CreationPayload, images: Vec<SpotImage>)
        -> Result<CreatedSpot>;
}

pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

/// Blocking, user-facing alert.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
