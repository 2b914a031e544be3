use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, ExerciseDraft, ExerciseEntry, Name, ReadError, SetDraft, Unit,
    UpdateError, ValidationError, WorkoutDraft,
};

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn get_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError>;
    async fn create_template(
        &self,
        name: Name,
        description: String,
        exercises: Vec<ExerciseEntry>,
    ) -> Result<WorkoutTemplate, CreateError>;
    async fn replace_template(
        &self,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, UpdateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;

    /// Prefills a workout form from the template, or returns `None` if it does not exist.
    async fn start_workout(
        &self,
        id: TemplateID,
        date: NaiveDate,
        unit: Unit,
    ) -> Result<Option<WorkoutDraft>, ReadError> {
        Ok(self
            .get_templates()
            .await?
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.to_draft(date, unit)))
    }

    async fn validate_template_name(
        &self,
        name: &str,
        id: TemplateID,
    ) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_templates().await {
                Ok(templates) => {
                    if templates
                        .iter()
                        .all(|t| t.id == id || !t.name.matches(name.as_str()))
                    {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    async fn read_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError>;
    async fn create_template(
        &self,
        name: Name,
        description: String,
        exercises: Vec<ExerciseEntry>,
    ) -> Result<WorkoutTemplate, CreateError>;
    async fn replace_template(
        &self,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, UpdateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

/// Reusable workout plan.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutTemplate {
    pub id: TemplateID,
    pub name: Name,
    pub description: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutTemplate {
    /// Prefills the logging form with the planned exercises and sets.
    #[must_use]
    pub fn to_draft(&self, date: NaiveDate, unit: Unit) -> WorkoutDraft {
        WorkoutDraft {
            name: self.name.to_string(),
            date,
            unit,
            exercises: self
                .exercises
                .iter()
                .map(|e| ExerciseDraft {
                    name: e.name.clone(),
                    sets: e
                        .sets
                        .iter()
                        .map(|s| SetDraft {
                            weight: s.weight.map(|w| w.to_string()).unwrap_or_default(),
                            reps: s.reps.map(|r| r.to_string()).unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateID(Uuid);

impl TemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
