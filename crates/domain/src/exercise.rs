use std::{collections::BTreeSet, fmt};

use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;

    async fn get_filtered_exercises(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ReadError> {
        Ok(filter
            .exercises(self.get_exercises().await?.iter())
            .into_iter()
            .cloned()
            .collect())
    }
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

/// Entry of the exercise library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub primary_muscle_group: String,
    pub secondary_muscle_groups: Vec<String>,
    pub equipment: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
}

impl Exercise {
    #[must_use]
    pub fn targets(&self, muscle_group: &str) -> bool {
        self.primary_muscle_group == muscle_group
            || self.secondary_muscle_groups.iter().any(|m| m == muscle_group)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Beginner" => Ok(Difficulty::Beginner),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Advanced" => Ok(Difficulty::Advanced),
            _ => Err(DifficultyError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("Unknown difficulty \"{0}\"")]
    Unknown(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise
            .name
            .as_str()
            .to_lowercase()
            .contains(self.search.to_lowercase().trim())
            && self
                .muscle_group
                .as_ref()
                .is_none_or(|m| exercise.primary_muscle_group == *m)
            && self
                .equipment
                .as_ref()
                .is_none_or(|e| exercise.equipment == *e)
    }

    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises.filter(|e| self.matches(e)).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.muscle_group.is_none() && self.equipment.is_none()
    }
}

/// Distinct primary muscle groups in alphabetical order.
#[must_use]
pub fn muscle_groups(exercises: &[Exercise]) -> Vec<String> {
    distinct(exercises.iter().map(|e| e.primary_muscle_group.as_str()))
}

/// Distinct equipment in alphabetical order.
#[must_use]
pub fn equipment_types(exercises: &[Exercise]) -> Vec<String> {
    distinct(exercises.iter().map(|e| e.equipment.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
