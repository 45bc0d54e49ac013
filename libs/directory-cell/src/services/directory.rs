use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_gateway::{endpoints, BookingApiClient};
use shared_models::{AppError, Business, Category, ScheduleItem, Staff};

use crate::models::BusinessFilter;

/// Catalog queries: clinic categories, clinics, and staff. Staff
/// records carry the weekly schedule and existing bookings that feed
/// slot projection.
pub struct DirectoryService {
    client: Arc<BookingApiClient>,
}

impl DirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(BookingApiClient::new(config)),
        }
    }

    pub fn with_client(client: Arc<BookingApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_categories(
        &self,
        parent_id: i64,
        auth_token: Option<&str>,
    ) -> Result<Vec<Category>, AppError> {
        debug!("Fetching categories with parent {}", parent_id);
        self.client
            .post::<Category>(
                endpoints::CATEGORIES,
                json!({ "parent_id": parent_id }),
                auth_token,
            )
            .await?
            .into_result()
    }

    pub async fn list_businesses(
        &self,
        filter: BusinessFilter,
        auth_token: Option<&str>,
    ) -> Result<Vec<Business>, AppError> {
        debug!("Fetching businesses");
        self.client
            .post::<Business>(endpoints::BUSINESSES, filter.to_parameters(), auth_token)
            .await?
            .into_result()
    }

    pub async fn list_category_businesses(
        &self,
        categorie_id: i64,
        auth_token: Option<&str>,
    ) -> Result<Vec<Business>, AppError> {
        debug!("Fetching businesses for category {}", categorie_id);
        self.client
            .post::<Business>(
                endpoints::CATEGORIE_BUSINESS,
                json!({ "categorie_id": categorie_id }),
                auth_token,
            )
            .await?
            .into_result()
    }

    /// Staff for a clinic, optionally narrowed to one category
    /// (category 0 means all staff of the clinic).
    pub async fn list_staff(
        &self,
        business_id: i64,
        categorie_id: i64,
        auth_token: Option<&str>,
    ) -> Result<Vec<Staff>, AppError> {
        debug!(
            "Fetching staff for business {} and category {}",
            business_id, categorie_id
        );
        self.client
            .post::<Staff>(
                endpoints::STAFF_CATEGORIE,
                json!({
                    "business_id": business_id,
                    "categorie_id": categorie_id
                }),
                auth_token,
            )
            .await?
            .into_result()
    }

    /// The signed-in user's own reservation history.
    pub async fn my_schedule(&self, access_token: &str) -> Result<Vec<ScheduleItem>, AppError> {
        debug!("Fetching own reservation history");
        self.client
            .post::<ScheduleItem>(endpoints::GET_SCHEDULE, json!({}), Some(access_token))
            .await?
            .into_result()
    }
}
