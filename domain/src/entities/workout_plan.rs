//! Workout plan aggregate

use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::workout::Workout;
use crate::errors::{DomainError, DomainResult};
use crate::guard;

/// A scheduled collection of workouts over a date range.
///
/// Unlike `Workout`, a plan has no terminal state: workouts can be added and
/// removed at any time, and `is_active` is a free toggle rather than a
/// lifecycle gate. Every contained workout must belong to the plan's owner.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    id: Uuid,
    user_id: Uuid,
    name: Option<String>,
    workouts: Vec<Workout>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    notes: Option<String>,
    is_active: bool,
}

impl WorkoutPlan {
    /// Create an inactive, empty plan. The end date, if present, must be
    /// strictly after the start date.
    pub fn new(
        id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        guard::against_nil_id(id, "id")?;
        guard::against_nil_id(user_id, "user_id")?;
        guard::against_invalid_date_range(start_date, end_date, "end_date")?;

        Ok(Self {
            id,
            user_id,
            name,
            workouts: Vec::new(),
            start_date,
            end_date,
            notes: None,
            is_active: false,
        })
    }

    /// Reconstruct a plan from stored fields. For persistence adapters only.
    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: Uuid,
        user_id: Uuid,
        name: Option<String>,
        workouts: Vec<Workout>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        notes: Option<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        guard::against_nil_id(id, "id")?;
        guard::against_nil_id(user_id, "user_id")?;
        guard::against_invalid_date_range(start_date, end_date, "end_date")?;

        Ok(Self {
            id,
            user_id,
            name,
            workouts,
            start_date,
            end_date,
            notes,
            is_active,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Attach a workout. A workout owned by a different user is rejected;
    /// adding a workout id already in the plan is a silent no-op.
    pub fn add_workout(&mut self, workout: Workout) -> DomainResult<()> {
        if workout.user_id() != self.user_id {
            return Err(DomainError::invalid_operation(
                "cannot add a workout that belongs to a different user",
            ));
        }

        if self.workouts.iter().any(|w| w.id() == workout.id()) {
            return Ok(());
        }

        self.workouts.push(workout);
        Ok(())
    }

    /// Detach a workout by id; the workout itself is not destroyed. Removing
    /// an absent id is a silent no-op.
    pub fn remove_workout(&mut self, workout_id: Uuid) -> DomainResult<()> {
        guard::against_nil_id(workout_id, "workout_id")?;
        self.workouts.retain(|w| w.id() != workout_id);
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn update_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workout_for(user_id: Uuid) -> Workout {
        Workout::new(Uuid::new_v4(), user_id, None, date(2024, 3, 4)).unwrap()
    }

    fn plan_for(user_id: Uuid) -> WorkoutPlan {
        WorkoutPlan::new(Uuid::new_v4(), user_id, None, date(2024, 3, 1), None).unwrap()
    }

    #[test]
    fn nil_ids_are_rejected() {
        assert!(WorkoutPlan::new(Uuid::nil(), Uuid::new_v4(), None, date(2024, 3, 1), None).is_err());
        assert!(WorkoutPlan::new(Uuid::new_v4(), Uuid::nil(), None, date(2024, 3, 1), None).is_err());
    }

    #[test]
    fn end_date_must_follow_start_date() {
        let user_id = Uuid::new_v4();
        assert!(WorkoutPlan::new(
            Uuid::new_v4(),
            user_id,
            None,
            date(2024, 3, 1),
            Some(date(2024, 3, 1)),
        )
        .is_err());

        assert!(WorkoutPlan::new(
            Uuid::new_v4(),
            user_id,
            None,
            date(2024, 3, 1),
            Some(date(2024, 4, 1)),
        )
        .is_ok());
    }

    #[test]
    fn foreign_workouts_are_rejected_and_the_list_is_unchanged() {
        let user_id = Uuid::new_v4();
        let mut plan = plan_for(user_id);
        plan.add_workout(workout_for(user_id)).unwrap();

        let result = plan.add_workout(workout_for(Uuid::new_v4()));
        assert!(matches!(result, Err(DomainError::InvalidOperation(_))));
        assert_eq!(plan.workouts().len(), 1);
    }

    #[test]
    fn duplicate_workout_ids_are_a_silent_no_op() {
        let user_id = Uuid::new_v4();
        let mut plan = plan_for(user_id);
        let workout = workout_for(user_id);

        plan.add_workout(workout.clone()).unwrap();
        plan.add_workout(workout).unwrap();

        assert_eq!(plan.workouts().len(), 1);
    }

    #[test]
    fn removal_detaches_without_locking() {
        let user_id = Uuid::new_v4();
        let mut plan = plan_for(user_id);
        let workout = workout_for(user_id);
        let workout_id = workout.id();
        plan.add_workout(workout).unwrap();

        // Absent id: no-op
        plan.remove_workout(Uuid::new_v4()).unwrap();
        assert_eq!(plan.workouts().len(), 1);

        plan.remove_workout(workout_id).unwrap();
        assert!(plan.workouts().is_empty());
    }

    #[test]
    fn activation_is_a_free_toggle() {
        let mut plan = plan_for(Uuid::new_v4());
        assert!(!plan.is_active());
        plan.activate();
        assert!(plan.is_active());
        plan.deactivate();
        assert!(!plan.is_active());
        // Toggling is not gated by contents or dates
        plan.activate();
        assert!(plan.is_active());
    }

    #[test]
    fn workouts_preserve_insertion_order() {
        let user_id = Uuid::new_v4();
        let mut plan = plan_for(user_id);
        let first = workout_for(user_id);
        let second = workout_for(user_id);
        let ids = vec![first.id(), second.id()];

        plan.add_workout(first).unwrap();
        plan.add_workout(second).unwrap();

        let stored: Vec<_> = plan.workouts().iter().map(|w| w.id()).collect();
        assert_eq!(stored, ids);
    }
}
