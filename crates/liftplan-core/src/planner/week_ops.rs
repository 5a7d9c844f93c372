//! Week operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::Weeks,
    error::Result,
    models::{requests::UpdateWeekRequest, Week},
    params::{ByNumber, CreateWeek, Id, UpdateWeek},
};

impl Planner {
    /// Creates a new week inside a plan. The week number must be unique
    /// within the plan and within the plan's total week count.
    pub async fn create_week(&self, params: &CreateWeek) -> Result<Week> {
        params.validate()?;
        info!(
            "Creating week {} for plan {}",
            params.week_number, params.plan_id
        );

        let params = params.clone();
        self.with_db(move |db| db.create_week(&params)).await
    }

    /// Retrieves a week by its ID with days loaded.
    pub async fn get_week(&self, params: &Id) -> Result<Option<Week>> {
        let week_id = params.id;
        self.with_db(move |db| db.get_week(week_id)).await
    }

    /// Retrieves a week by its plan and week number.
    pub async fn get_week_by_number(&self, params: &ByNumber) -> Result<Option<Week>> {
        let ByNumber { parent_id, number } = *params;
        self.with_db(move |db| db.get_week_by_number(parent_id, number))
            .await
    }

    /// Retrieves all weeks of a plan ordered by week number.
    pub async fn list_weeks(&self, params: &Id) -> Result<Weeks> {
        let plan_id = params.id;
        let weeks = self.with_db(move |db| db.weeks_for_plan(plan_id)).await?;
        Ok(Weeks(weeks))
    }

    /// Updates a week's number and/or notes. Changing the number does not
    /// shift siblings; it only checks for a clash and the plan's bound.
    pub async fn update_week(&self, params: &UpdateWeek) -> Result<Week> {
        info!("Updating week with id: {}", params.id);

        let id = params.id;
        let request: UpdateWeekRequest = params.clone().into();
        self.with_db(move |db| db.update_week(id, request)).await
    }

    /// Deletes a week and everything under it. Remaining sibling weeks keep
    /// their numbers.
    pub async fn delete_week(&self, params: &Id) -> Result<()> {
        info!("Deleting week with id: {}", params.id);

        let week_id = params.id;
        self.with_db(move |db| db.delete_week(week_id)).await
    }

    /// Suggests the next free week number for a plan.
    pub async fn next_week_number(&self, params: &Id) -> Result<u32> {
        let plan_id = params.id;
        self.with_db(move |db| db.next_week_number(plan_id)).await
    }
}
