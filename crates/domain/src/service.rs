use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    CreateError, DeleteError, Exercise, ExerciseEntry, ExerciseRepository, ExerciseService, Name,
    ReadError, Settings, SettingsRepository, SettingsService, TemplateID, TemplateRepository,
    TemplateService, Unit, UpdateError, WorkoutID, WorkoutRecord, WorkoutRepository, WorkoutService,
    WorkoutTemplate,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<WorkoutRecord>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn create_workout(
        &self,
        name: Name,
        date: NaiveDate,
        unit: Unit,
        exercises: Vec<ExerciseEntry>,
    ) -> Result<WorkoutRecord, CreateError> {
        log_on_error!(
            self.repository.create_workout(name, date, unit, exercises),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn replace_workout(&self, workout: WorkoutRecord) -> Result<WorkoutRecord, UpdateError> {
        log_on_error!(
            self.repository.replace_workout(workout),
            UpdateError,
            "replace",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    async fn get_templates(&self) -> Result<Vec<WorkoutTemplate>, ReadError> {
        log_on_error!(
            self.repository.read_templates(),
            ReadError,
            "get",
            "templates"
        )
    }

    async fn create_template(
        &self,
        name: Name,
        description: String,
        exercises: Vec<ExerciseEntry>,
    ) -> Result<WorkoutTemplate, CreateError> {
        log_on_error!(
            self.repository.create_template(name, description, exercises),
            CreateError,
            "create",
            "template"
        )
    }

    async fn replace_template(
        &self,
        template: WorkoutTemplate,
    ) -> Result<WorkoutTemplate, UpdateError> {
        log_on_error!(
            self.repository.replace_template(template),
            UpdateError,
            "replace",
            "template"
        )
    }

    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
        log_on_error!(
            self.repository.delete_template(id),
            DeleteError,
            "delete",
            "template"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    async fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "set",
            "settings"
        )
    }
}
