//! Day operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::Days,
    error::{PlannerError, Result},
    models::{requests::UpdateDayRequest, Day},
    params::{ByNumber, CreateDay, Id, UpdateDay},
};

impl Planner {
    /// Creates a new day inside a week. The day number must be in 1–7 and
    /// unique within the week.
    pub async fn create_day(&self, params: &CreateDay) -> Result<Day> {
        params.validate()?;
        info!(
            "Creating day {} for week {}",
            params.day_number, params.week_id
        );

        let params = params.clone();
        self.with_db(move |db| db.create_day(&params)).await
    }

    /// Retrieves a day by its ID with exercises and sets loaded.
    pub async fn get_day(&self, params: &Id) -> Result<Option<Day>> {
        let day_id = params.id;
        self.with_db(move |db| db.get_day(day_id)).await
    }

    /// Retrieves a day by its week and day number.
    pub async fn get_day_by_number(&self, params: &ByNumber) -> Result<Option<Day>> {
        let ByNumber { parent_id, number } = *params;
        self.with_db(move |db| db.get_day_by_number(parent_id, number))
            .await
    }

    /// Retrieves all days of a week ordered by day number.
    pub async fn list_days(&self, params: &Id) -> Result<Days> {
        let week_id = params.id;
        let days = self.with_db(move |db| db.days_for_week(week_id)).await?;
        Ok(Days(days))
    }

    /// Updates a day's number, name and/or notes. Changing the number does
    /// not shift siblings.
    pub async fn update_day(&self, params: &UpdateDay) -> Result<Day> {
        info!("Updating day with id: {}", params.id);

        let id = params.id;
        let request: UpdateDayRequest = params.clone().try_into()?;
        self.with_db(move |db| db.update_day(id, request)).await
    }

    /// Deletes a day and everything under it. Remaining sibling days keep
    /// their numbers.
    pub async fn delete_day(&self, params: &Id) -> Result<()> {
        info!("Deleting day with id: {}", params.id);

        let day_id = params.id;
        self.with_db(move |db| db.delete_day(day_id)).await
    }

    /// Suggests the next free day number for a week.
    pub async fn next_day_number(&self, params: &Id) -> Result<u32> {
        let week_id = params.id;
        self.with_db(move |db| db.next_day_number(week_id)).await
    }

    /// Reports whether every exercise of the day is complete. A day with no
    /// exercises is not complete.
    pub async fn day_completed(&self, params: &Id) -> Result<bool> {
        let day_id = params.id;
        let day = self
            .with_db(move |db| db.get_day(day_id))
            .await?
            .ok_or(PlannerError::DayNotFound { id: day_id })?;
        Ok(day.is_complete())
    }
}
