//! Set operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::Sets,
    error::Result,
    models::{requests::UpdateSetRequest, Set},
    params::{CompleteSet, CreateSet, Id, Reorder, UpdateSet},
};

impl Planner {
    /// Creates a new set inside an exercise at a free set number.
    pub async fn create_set(&self, params: &CreateSet) -> Result<Set> {
        params.validate()?;
        info!(
            "Creating set {} for exercise {}",
            params.set_number, params.exercise_id
        );

        let params = params.clone();
        self.with_db(move |db| db.create_set(&params)).await
    }

    /// Retrieves a set by its ID.
    pub async fn get_set(&self, params: &Id) -> Result<Option<Set>> {
        let set_id = params.id;
        self.with_db(move |db| db.get_set(set_id)).await
    }

    /// Retrieves all sets of an exercise ordered by set number.
    pub async fn list_sets(&self, params: &Id) -> Result<Sets> {
        let exercise_id = params.id;
        let sets = self
            .with_db(move |db| db.sets_for_exercise(exercise_id))
            .await?;
        Ok(Sets(sets))
    }

    /// Updates a set's coach-authored targets. Changing the set number does
    /// not shift siblings; use [`Self::reorder_set`] for that.
    pub async fn update_set(&self, params: &UpdateSet) -> Result<Set> {
        info!("Updating set with id: {}", params.id);

        let id = params.id;
        let request: UpdateSetRequest = params.clone().try_into()?;
        self.with_db(move |db| db.update_set(id, request)).await
    }

    /// Records a set as completed: actual reps, weight and RPE are required
    /// together and are written atomically with the completion flag.
    pub async fn complete_set(&self, params: &CompleteSet) -> Result<Set> {
        params.validate()?;
        info!("Completing set with id: {}", params.id);

        let params = params.clone();
        self.with_db(move |db| db.complete_set(&params)).await
    }

    /// Clears a set's completion, resetting the flag and all three actual
    /// values (plus lifter notes) together.
    pub async fn uncomplete_set(&self, params: &Id) -> Result<Set> {
        info!("Uncompleting set with id: {}", params.id);

        let set_id = params.id;
        self.with_db(move |db| db.uncomplete_set(set_id)).await
    }

    /// Deletes a set. Remaining sibling sets keep their numbers.
    pub async fn delete_set(&self, params: &Id) -> Result<()> {
        info!("Deleting set with id: {}", params.id);

        let set_id = params.id;
        self.with_db(move |db| db.delete_set(set_id)).await
    }

    /// Moves a set to a new position within its exercise, shifting the
    /// siblings in between.
    pub async fn reorder_set(&self, params: &Reorder) -> Result<Set> {
        info!(
            "Reordering set {} to position {}",
            params.id, params.new_ordinal
        );

        let Reorder { id, new_ordinal } = *params;
        self.with_db(move |db| db.reorder_set(id, new_ordinal)).await
    }

    /// Suggests the next free set number for an exercise.
    pub async fn next_set_number(&self, params: &Id) -> Result<u32> {
        let exercise_id = params.id;
        self.with_db(move |db| db.next_set_number(exercise_id)).await
    }

    /// Counts the completed sets of an exercise.
    pub async fn completed_set_count(&self, params: &Id) -> Result<u32> {
        let exercise_id = params.id;
        self.with_db(move |db| db.completed_set_count(exercise_id))
            .await
    }
}
