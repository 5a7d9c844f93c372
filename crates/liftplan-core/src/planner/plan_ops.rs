//! Plan operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::PlanSummaries,
    error::{PlannerError, Result},
    models::{requests::UpdatePlanRequest, Plan, WorkoutStats},
    params::{AssignLifter, CreatePlan, DeletePlan, Id, UpdatePlan},
};

impl Planner {
    /// Creates a new workout plan. A pre-assigned lifter must not already
    /// hold another active plan.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<Plan> {
        params.validate()?;
        info!("Creating workout plan: {}", params.name);

        let params = params.clone();
        self.with_db(move |db| db.create_plan(&params)).await
    }

    /// Retrieves a plan by its ID with the full week/day/exercise/set tree.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id;
        self.with_db(move |db| db.get_plan(plan_id)).await
    }

    /// Lists summaries of the plans owned by a coach.
    pub async fn list_plans_by_coach(&self, coach_id: u64) -> Result<PlanSummaries> {
        let summaries = self
            .with_db(move |db| db.list_plans_by_coach(coach_id))
            .await?;
        Ok(PlanSummaries(summaries))
    }

    /// Lists summaries of the plans assigned to a lifter.
    pub async fn list_plans_by_lifter(&self, lifter_id: u64) -> Result<PlanSummaries> {
        let summaries = self
            .with_db(move |db| db.list_plans_by_lifter(lifter_id))
            .await?;
        Ok(PlanSummaries(summaries))
    }

    /// Updates plan metadata. This path is not gated on the active flag; it
    /// is how a deactivated plan gets switched back on.
    pub async fn update_plan(&self, params: &UpdatePlan) -> Result<Plan> {
        info!("Updating workout plan with id: {}", params.id);

        let id = params.id;
        let request: UpdatePlanRequest = params.clone().into();
        self.with_db(move |db| db.update_plan(id, request)).await
    }

    /// Assigns a lifter to a plan, enforcing the one-active-plan-per-lifter
    /// rule.
    pub async fn assign_lifter(&self, params: &AssignLifter) -> Result<()> {
        info!(
            "Assigning lifter {} to workout plan {}",
            params.lifter_id, params.plan_id
        );

        let AssignLifter { plan_id, lifter_id } = *params;
        self.with_db(move |db| db.assign_lifter(plan_id, lifter_id))
            .await
    }

    /// Removes the lifter assignment from a plan.
    pub async fn unassign_lifter(&self, params: &Id) -> Result<()> {
        info!("Unassigning lifter from workout plan {}", params.id);

        let plan_id = params.id;
        self.with_db(move |db| db.unassign_lifter(plan_id)).await
    }

    /// Permanently deletes a plan and all its weeks, days, exercises and
    /// sets. Requires explicit confirmation; cannot be undone.
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<()> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input(
                "confirmed",
                "Plan deletion requires explicit confirmation",
            ));
        }

        info!("Deleting workout plan with id: {}", params.id);

        let plan_id = params.id;
        self.with_db(move |db| db.delete_plan(plan_id)).await
    }

    /// Computes flat completion statistics for a plan.
    pub async fn plan_stats(&self, params: &Id) -> Result<WorkoutStats> {
        let plan_id = params.id;
        self.with_db(move |db| db.plan_stats(plan_id)).await
    }
}
