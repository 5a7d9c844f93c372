//! Exercise operations for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::Exercises,
    error::{PlannerError, Result},
    models::{requests::UpdateExerciseRequest, Exercise},
    params::{CreateExercise, Id, Reorder, UpdateExercise},
};

impl Planner {
    /// Creates a new exercise inside a day at a free order position.
    pub async fn create_exercise(&self, params: &CreateExercise) -> Result<Exercise> {
        params.validate()?;
        info!(
            "Creating exercise {} for day {}",
            params.name, params.day_id
        );

        let params = params.clone();
        self.with_db(move |db| db.create_exercise(&params)).await
    }

    /// Retrieves an exercise by its ID with sets loaded.
    pub async fn get_exercise(&self, params: &Id) -> Result<Option<Exercise>> {
        let exercise_id = params.id;
        self.with_db(move |db| db.get_exercise(exercise_id)).await
    }

    /// Retrieves all exercises of a day ordered by exercise order.
    pub async fn list_exercises(&self, params: &Id) -> Result<Exercises> {
        let day_id = params.id;
        let exercises = self
            .with_db(move |db| db.exercises_for_day(day_id))
            .await?;
        Ok(Exercises(exercises))
    }

    /// Updates an exercise's order, name and/or notes. Changing the order
    /// does not shift siblings; use [`Self::reorder_exercise`] for that.
    pub async fn update_exercise(&self, params: &UpdateExercise) -> Result<Exercise> {
        info!("Updating exercise with id: {}", params.id);

        let id = params.id;
        let request: UpdateExerciseRequest = params.clone().try_into()?;
        self.with_db(move |db| db.update_exercise(id, request)).await
    }

    /// Deletes an exercise and its sets. Remaining sibling exercises keep
    /// their order values.
    pub async fn delete_exercise(&self, params: &Id) -> Result<()> {
        info!("Deleting exercise with id: {}", params.id);

        let exercise_id = params.id;
        self.with_db(move |db| db.delete_exercise(exercise_id)).await
    }

    /// Moves an exercise to a new position within its day, shifting the
    /// siblings in between.
    pub async fn reorder_exercise(&self, params: &Reorder) -> Result<Exercise> {
        info!(
            "Reordering exercise {} to position {}",
            params.id, params.new_ordinal
        );

        let Reorder { id, new_ordinal } = *params;
        self.with_db(move |db| db.reorder_exercise(id, new_ordinal))
            .await
    }

    /// Suggests the next free exercise order for a day.
    pub async fn next_exercise_order(&self, params: &Id) -> Result<u32> {
        let day_id = params.id;
        self.with_db(move |db| db.next_exercise_order(day_id)).await
    }

    /// Reports whether every set of the exercise is completed. An exercise
    /// with no sets is not complete.
    pub async fn exercise_completed(&self, params: &Id) -> Result<bool> {
        let exercise_id = params.id;
        let exercise = self
            .with_db(move |db| db.get_exercise(exercise_id))
            .await?
            .ok_or(PlannerError::ExerciseNotFound { id: exercise_id })?;
        Ok(exercise.is_complete())
    }
}
