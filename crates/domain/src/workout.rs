use std::fmt;

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, HistoryEntry, Name, NameError, ProgressPoint, ReadError,
    UpdateError, ValidationError, exercise_names, exercise_progress, history, volume,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<WorkoutRecord>, ReadError>;
    async fn create_workout(
        &self,
        name: Name,
        date: NaiveDate,
        unit: Unit,
        exercises: Vec<ExerciseEntry>,
    ) -> Result<WorkoutRecord, CreateError>;
    async fn replace_workout(&self, workout: WorkoutRecord) -> Result<WorkoutRecord, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;

    async fn get_history(&self) -> Result<Vec<HistoryEntry>, ReadError> {
        Ok(history(&self.get_workouts().await?))
    }

    async fn get_exercise_names(&self) -> Result<Vec<String>, ReadError> {
        Ok(exercise_names(&self.get_workouts().await?))
    }

    async fn get_exercise_progress(&self, name: &str) -> Result<Vec<ProgressPoint>, ReadError> {
        Ok(exercise_progress(&self.get_workouts().await?, name))
    }

    fn validate_set_weight(&self, weight: &str) -> Result<f64, ValidationError> {
        parse_weight(weight).ok_or_else(|| {
            ValidationError::Other("Weight must be a positive decimal number".into())
        })
    }

    fn validate_set_reps(&self, reps: &str) -> Result<u32, ValidationError> {
        parse_reps(reps)
            .ok_or_else(|| ValidationError::Other("Reps must be a positive integer".into()))
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<WorkoutRecord>, ReadError>;
    async fn create_workout(
        &self,
        name: Name,
        date: NaiveDate,
        unit: Unit,
        exercises: Vec<ExerciseEntry>,
    ) -> Result<WorkoutRecord, CreateError>;
    async fn replace_workout(&self, workout: WorkoutRecord) -> Result<WorkoutRecord, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    #[default]
    Kg,
    Lbs,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::Kg => write!(f, "kg"),
            Unit::Lbs => write!(f, "lbs"),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = UnitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "kg" => Ok(Unit::Kg),
            "lbs" => Ok(Unit::Lbs),
            _ => Err(UnitError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UnitError {
    #[error("Unknown unit \"{0}\"")]
    Unknown(String),
}

/// A single logged set. Fields are optional as sets may be partially filled in.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetRecord {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
}

impl SetRecord {
    #[must_use]
    pub fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight: Some(weight),
            reps: Some(reps),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(
            (self.weight, self.reps),
            (Some(weight), Some(reps)) if weight.is_finite() && weight > 0.0 && reps > 0
        )
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        volume::set_volume(self)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: Vec<SetRecord>,
}

impl ExerciseEntry {
    #[must_use]
    pub fn volume(&self) -> f64 {
        volume::exercise_volume(self)
    }

    /// Appends a set repeating the values of the last one.
    pub fn add_set(&mut self) {
        let set = self.sets.last().copied().unwrap_or_default();
        self.sets.push(set);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: WorkoutID,
    pub name: Name,
    pub date: NaiveDate,
    pub unit: Unit,
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutRecord {
    #[must_use]
    pub fn volume(&self) -> f64 {
        volume::workout_volume(self)
    }

    #[must_use]
    pub fn contains_exercise(&self, name: &str) -> bool {
        self.exercises.iter().any(|e| e.name == name)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Unvalidated workout as entered in the logging form.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub name: String,
    pub date: NaiveDate,
    pub unit: Unit,
    pub exercises: Vec<ExerciseDraft>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: Vec<SetDraft>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetDraft {
    pub weight: String,
    pub reps: String,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new(date: NaiveDate, unit: Unit) -> Self {
        Self {
            name: String::new(),
            date,
            unit,
            exercises: vec![ExerciseDraft {
                name: String::new(),
                sets: vec![SetDraft::default()],
            }],
        }
    }

    /// Drops blank exercises and incomplete sets and parses the remaining input.
    ///
    /// The resulting record has a nil ID until it is stored.
    pub fn validate(&self) -> Result<WorkoutRecord, WorkoutError> {
        let exercises = self
            .exercises
            .iter()
            .filter(|e| !e.name.trim().is_empty())
            .map(ExerciseDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;

        if exercises.is_empty() {
            return Err(WorkoutError::NoExercises);
        }

        let name = if self.name.trim().is_empty() {
            Name::new(&format!("Workout on {}", self.date))?
        } else {
            Name::new(&self.name)?
        };

        Ok(WorkoutRecord {
            id: WorkoutID::nil(),
            name,
            date: self.date,
            unit: self.unit,
            exercises,
        })
    }
}

impl ExerciseDraft {
    /// Appends a set repeating the values of the last one.
    pub fn add_set(&mut self) {
        let set = self.sets.last().cloned().unwrap_or_default();
        self.sets.push(set);
    }

    fn validate(&self) -> Result<ExerciseEntry, WorkoutError> {
        let name = self.name.trim().to_string();
        let sets = self
            .sets
            .iter()
            .filter(|s| !s.weight.trim().is_empty() && !s.reps.trim().is_empty())
            .map(|s| -> Result<SetRecord, WorkoutError> {
                Ok(SetRecord {
                    weight: Some(
                        parse_weight(&s.weight)
                            .ok_or_else(|| WorkoutError::InvalidWeight(s.weight.clone()))?,
                    ),
                    reps: Some(
                        parse_reps(&s.reps)
                            .ok_or_else(|| WorkoutError::InvalidReps(s.reps.clone()))?,
                    ),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if sets.is_empty() {
            return Err(WorkoutError::NoSets(name));
        }

        Ok(ExerciseEntry { name, sets })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error("Please add at least one exercise")]
    NoExercises,
    #[error("Please add at least one set for {0}")]
    NoSets(String),
    #[error("Weight must be a positive decimal number ({0})")]
    InvalidWeight(String),
    #[error("Reps must be a positive integer ({0})")]
    InvalidReps(String),
    #[error(transparent)]
    Name(#[from] NameError),
}

pub(crate) fn parse_weight(weight: &str) -> Option<f64> {
    weight
        .replace(',', ".")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
}

pub(crate) fn parse_reps(reps: &str) -> Option<u32> {
    reps.trim().parse::<u32>().ok().filter(|r| *r > 0)
}
