use chrono::NaiveDate;
use tracing::debug;

use directory_cell::DirectoryService;
use shared_config::AppConfig;
use shared_models::AppError;

use crate::models::Projection;
use crate::services::projector;

/// Fetches a staff member's current schedule and projects it into
/// bookable slots. Refetching before every projection keeps the slot
/// grid aligned with bookings made by other clients; the server stays
/// the authority on conflicts.
pub struct AvailabilityService {
    directory: DirectoryService,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            directory: DirectoryService::new(config),
        }
    }

    pub fn with_directory(directory: DirectoryService) -> Self {
        Self { directory }
    }

    /// Fresh projection for one staff member of a business category.
    pub async fn staff_projection(
        &self,
        business_id: i64,
        categorie_id: i64,
        staff_id: &str,
        reference_date: NaiveDate,
        auth_token: Option<&str>,
    ) -> Result<Projection, AppError> {
        let staff = self
            .directory
            .list_staff(business_id, categorie_id, auth_token)
            .await?;

        let member = staff
            .iter()
            .find(|s| s.staff_id == staff_id)
            .ok_or_else(|| AppError::Rejected("Специалист не найден.".to_string()))?;

        debug!(
            "Projecting availability for staff {} ({} bookings on record)",
            member.staff_id,
            member.schedule.len()
        );

        Ok(projector::staff_slots(member, reference_date))
    }
}
