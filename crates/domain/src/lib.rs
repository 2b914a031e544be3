#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod rounding;
pub mod volume;

mod analytics;
mod calculator;
mod error;
mod exercise;
mod intensity;
mod name;
mod one_rep_max;
mod percentage;
mod service;
mod settings;
mod template;
mod workout;

pub use analytics::{
    HistoryEntry, ProgressPoint, ProgressSummary, exercise_names, exercise_progress, history,
};
pub use calculator::OneRepMaxCalculator;
pub use error::{
    CreateError, DeleteError, ReadError, StorageError, UpdateError, ValidationError,
};
pub use exercise::{
    Difficulty, DifficultyError, Exercise, ExerciseFilter, ExerciseID, ExerciseRepository,
    ExerciseService, equipment_types, muscle_groups,
};
pub use intensity::Intensity;
pub use name::{Name, NameError};
pub use one_rep_max::{estimate_one_rep_max, reps_for_weight, weight_for_percentage};
pub use percentage::{DEFAULT_LADDER, PercentageRow, percentage_table};
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService};
pub use template::{TemplateID, TemplateRepository, TemplateService, WorkoutTemplate};
pub use volume::{exercise_volume, history_volume, set_volume, workout_volume};
pub use workout::{
    ExerciseDraft, ExerciseEntry, SetDraft, SetRecord, Unit, UnitError, WorkoutDraft,
    WorkoutError, WorkoutID, WorkoutRecord, WorkoutRepository, WorkoutService,
};
