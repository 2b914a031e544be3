use std::{
    collections::{BTreeMap, VecDeque},
    sync::Mutex,
};

use chrono::NaiveDate;
use liftbook_domain::{self as domain, catalog};
use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use uuid::Uuid;

use crate::log as app_log;

/// String key/value store holding JSON documents.
pub trait Backend {
    fn get_item(&self, key: &str) -> Result<Option<String>, LocalStorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStorageError>;
    fn remove_item(&self, key: &str) -> Result<(), LocalStorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<BTreeMap<String, String>>,
}

impl Backend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, LocalStorageError> {
        let items = self.items.lock().map_err(|_| LocalStorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStorageError> {
        let mut items = self.items.lock().map_err(|_| LocalStorageError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), LocalStorageError> {
        let mut items = self.items.lock().map_err(|_| LocalStorageError::Unavailable)?;
        items.remove(key);
        Ok(())
    }
}

pub struct LocalStorage<B> {
    backend: B,
    // Held across every read-modify-write of a key.
    write_lock: Mutex<()>,
}

impl<B: Backend> LocalStorage<B> {
    /// Opens the store and seeds the exercise library if it has never been written.
    pub fn new(backend: B) -> Result<Self, LocalStorageError> {
        let storage = Self {
            backend,
            write_lock: Mutex::new(()),
        };
        if storage.backend.get_item(Key::Exercises.as_ref())?.is_none() {
            let exercises = catalog::exercises();
            debug!("seeding {} exercises", exercises.len());
            storage.set(
                Key::Exercises,
                &exercises.iter().map(Exercise::from).collect::<Vec<_>>(),
            )?;
        }
        Ok(storage)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clear(&self, key: Key) -> Result<(), LocalStorageError> {
        self.backend.remove_item(key.as_ref())
    }

    fn get<V: DeserializeOwned>(&self, key: Key) -> Result<V, LocalStorageError> {
        let value = self
            .backend
            .get_item(key.as_ref())?
            .ok_or_else(|| LocalStorageError::KeyNotFound(key.as_ref().to_string()))?;
        Ok(serde_json::from_str(&value)?)
    }

    fn get_or_default<V: DeserializeOwned + Default>(
        &self,
        key: Key,
    ) -> Result<V, LocalStorageError> {
        match self.get(key) {
            Err(LocalStorageError::KeyNotFound(_)) => Ok(V::default()),
            result => result,
        }
    }

    fn get_all<R, V>(&self, key: Key) -> Result<Vec<R>, LocalStorageError>
    where
        R: TryFrom<V>,
        V: DeserializeOwned,
        <R as TryFrom<V>>::Error: std::error::Error,
    {
        self.get_or_default::<Vec<V>>(key)?
            .into_iter()
            .map(|v| R::try_from(v).map_err(|err| LocalStorageError::InvalidData(err.to_string())))
            .collect()
    }

    fn set<V: Serialize + ?Sized>(&self, key: Key, value: &V) -> Result<(), LocalStorageError> {
        self.backend
            .set_item(key.as_ref(), &serde_json::to_string(value)?)
    }

    /// Applies `f` to the stored list while no other write can interleave.
    fn update<V>(
        &self,
        key: Key,
        f: impl FnOnce(&mut Vec<V>) -> Result<(), LocalStorageError>,
    ) -> Result<(), LocalStorageError>
    where
        V: Serialize + DeserializeOwned,
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| LocalStorageError::Unavailable)?;
        let mut values = self.get_or_default::<Vec<V>>(key)?;
        f(&mut values)?;
        self.set(key, &values)
    }

    fn add<V>(&self, key: Key, value: V) -> Result<(), LocalStorageError>
    where
        V: Object + Serialize + DeserializeOwned,
    {
        self.update(key, |values: &mut Vec<V>| {
            values.push(value);
            Ok(())
        })
    }

    fn put<V>(&self, key: Key, value: V) -> Result<(), LocalStorageError>
    where
        V: Object + Serialize + DeserializeOwned,
    {
        self.update(key, |values: &mut Vec<V>| {
            let Some(existing) = values.iter_mut().find(|v| v.id() == value.id()) else {
                return Err(LocalStorageError::ObjectNotFound);
            };
            *existing = value;
            Ok(())
        })
    }

    fn delete<V>(&self, key: Key, id: Uuid) -> Result<(), LocalStorageError>
    where
        V: Object + Serialize + DeserializeOwned,
    {
        self.update(key, |values: &mut Vec<V>| {
            let len = values.len();
            values.retain(|v| v.id() != id);
            if values.len() == len {
                return Err(LocalStorageError::ObjectNotFound);
            }
            Ok(())
        })
    }
}

impl<B: Backend> domain::WorkoutRepository for LocalStorage<B> {
    async fn read_workouts(&self) -> Result<Vec<domain::WorkoutRecord>, domain::ReadError> {
        Ok(self.get_all::<domain::WorkoutRecord, Workout>(Key::Workouts)?)
    }

    async fn create_workout(
        &self,
        name: domain::Name,
        date: NaiveDate,
        unit: domain::Unit,
        exercises: Vec<domain::ExerciseEntry>,
    ) -> Result<domain::WorkoutRecord, domain::CreateError> {
        let workout = domain::WorkoutRecord {
            id: Uuid::new_v4().into(),
            name,
            date,
            unit,
            exercises,
        };
        self.add(Key::Workouts, Workout::from(&workout))?;
        Ok(workout)
    }

    async fn replace_workout(
        &self,
        workout: domain::WorkoutRecord,
    ) -> Result<domain::WorkoutRecord, domain::UpdateError> {
        self.put(Key::Workouts, Workout::from(&workout))?;
        Ok(workout)
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        self.delete::<Workout>(Key::Workouts, *id)?;
        Ok(id)
    }
}

impl<B: Backend> domain::TemplateRepository for LocalStorage<B> {
    async fn read_templates(&self) -> Result<Vec<domain::WorkoutTemplate>, domain::ReadError> {
        Ok(self.get_all::<domain::WorkoutTemplate, Template>(Key::Templates)?)
    }

    async fn create_template(
        &self,
        name: domain::Name,
        description: String,
        exercises: Vec<domain::ExerciseEntry>,
    ) -> Result<domain::WorkoutTemplate, domain::CreateError> {
        let template = domain::WorkoutTemplate {
            id: Uuid::new_v4().into(),
            name,
            description,
            exercises,
        };
        self.add(Key::Templates, Template::from(&template))?;
        Ok(template)
    }

    async fn replace_template(
        &self,
        template: domain::WorkoutTemplate,
    ) -> Result<domain::WorkoutTemplate, domain::UpdateError> {
        self.put(Key::Templates, Template::from(&template))?;
        Ok(template)
    }

    async fn delete_template(
        &self,
        id: domain::TemplateID,
    ) -> Result<domain::TemplateID, domain::DeleteError> {
        self.delete::<Template>(Key::Templates, *id)?;
        Ok(id)
    }
}

impl<B: Backend> domain::ExerciseRepository for LocalStorage<B> {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self.get_all::<domain::Exercise, Exercise>(Key::Exercises)?)
    }
}

impl<B: Backend> domain::SettingsRepository for LocalStorage<B> {
    async fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        match self.get::<Settings>(Key::Settings) {
            Ok(settings) => Ok(domain::Settings::try_from(settings)
                .map_err(|err| LocalStorageError::InvalidData(err.to_string()))?),
            Err(LocalStorageError::KeyNotFound(_)) => Ok(domain::Settings::default()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_settings(
        &self,
        settings: domain::Settings,
    ) -> Result<domain::Settings, domain::UpdateError> {
        self.set(Key::Settings, &Settings::from(&settings))?;
        Ok(settings)
    }
}

impl<B: Backend + Send + Sync + 'static> app_log::Repository for LocalStorage<B> {
    fn read_entries(&self) -> Result<VecDeque<app_log::Entry>, app_log::Error> {
        self.get_or_default(Key::Log)
            .map_err(|err| app_log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: app_log::Entry) -> Result<(), app_log::Error> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|err| app_log::Error::Unknown(err.to_string()))?;
        let mut entries = self.read_entries()?;
        app_log::append(&mut entries, entry);
        self.set(Key::Log, &entries)
            .map_err(|err| app_log::Error::Unknown(err.to_string()))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LocalStorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("key not found: {0}")]
    KeyNotFound(String),
    #[error("object not found")]
    ObjectNotFound,
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<LocalStorageError> for domain::StorageError {
    fn from(value: LocalStorageError) -> Self {
        match value {
            LocalStorageError::Unavailable => domain::StorageError::NoConnection,
            err => domain::StorageError::Other(Box::new(err)),
        }
    }
}

impl From<LocalStorageError> for domain::ReadError {
    fn from(value: LocalStorageError) -> Self {
        domain::ReadError::Storage(value.into())
    }
}

impl From<LocalStorageError> for domain::CreateError {
    fn from(value: LocalStorageError) -> Self {
        domain::CreateError::Storage(value.into())
    }
}

impl From<LocalStorageError> for domain::UpdateError {
    fn from(value: LocalStorageError) -> Self {
        match value {
            LocalStorageError::ObjectNotFound => domain::UpdateError::NotFound,
            err => domain::UpdateError::Storage(err.into()),
        }
    }
}

impl From<LocalStorageError> for domain::DeleteError {
    fn from(value: LocalStorageError) -> Self {
        match value {
            LocalStorageError::ObjectNotFound => domain::DeleteError::NotFound,
            err => domain::DeleteError::Storage(err.into()),
        }
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "templates")]
    Templates,
    #[strum(serialize = "exercises")]
    Exercises,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

trait Object {
    fn id(&self) -> Uuid;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub unit: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl Object for Workout {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<&domain::WorkoutRecord> for Workout {
    fn from(value: &domain::WorkoutRecord) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            date: value.date,
            unit: value.unit.to_string(),
            exercises: value.exercises.iter().map(ExerciseEntry::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::WorkoutRecord {
    type Error = DataError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            date: value.date,
            unit: domain::Unit::try_from(value.unit.as_str())?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseEntry::from)
                .collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: Vec<Set>,
}

impl From<&domain::ExerciseEntry> for ExerciseEntry {
    fn from(value: &domain::ExerciseEntry) -> Self {
        Self {
            name: value.name.clone(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl From<ExerciseEntry> for domain::ExerciseEntry {
    fn from(value: ExerciseEntry) -> Self {
        Self {
            name: value.name,
            sets: value.sets.into_iter().map(domain::SetRecord::from).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
}

impl From<&domain::SetRecord> for Set {
    /// Non-finite weights have no JSON representation and are stored as absent.
    fn from(value: &domain::SetRecord) -> Self {
        Self {
            weight: value.weight.filter(|w| w.is_finite()),
            reps: value.reps,
        }
    }
}

impl From<Set> for domain::SetRecord {
    fn from(value: Set) -> Self {
        Self {
            weight: value.weight,
            reps: value.reps,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl Object for Template {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl From<&domain::WorkoutTemplate> for Template {
    fn from(value: &domain::WorkoutTemplate) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description.clone(),
            exercises: value.exercises.iter().map(ExerciseEntry::from).collect(),
        }
    }
}

impl TryFrom<Template> for domain::WorkoutTemplate {
    type Error = DataError;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            description: value.description,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseEntry::from)
                .collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub primary_muscle_group: String,
    pub secondary_muscle_groups: Vec<String>,
    pub equipment: String,
    pub difficulty: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            primary_muscle_group: value.primary_muscle_group.clone(),
            secondary_muscle_groups: value.secondary_muscle_groups.clone(),
            equipment: value.equipment.clone(),
            difficulty: value.difficulty.to_string(),
            description: value.description.clone(),
            instructions: value.instructions.clone(),
            tips: value.tips.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = DataError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            primary_muscle_group: value.primary_muscle_group,
            secondary_muscle_groups: value.secondary_muscle_groups,
            equipment: value.equipment,
            difficulty: domain::Difficulty::try_from(value.difficulty.as_str())?,
            description: value.description,
            instructions: value.instructions,
            tips: value.tips,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub unit: String,
    pub ladder: Vec<u32>,
}

impl From<&domain::Settings> for Settings {
    fn from(value: &domain::Settings) -> Self {
        Self {
            unit: value.unit.to_string(),
            ladder: value.ladder.clone(),
        }
    }
}

impl TryFrom<Settings> for domain::Settings {
    type Error = DataError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        Ok(Self {
            unit: domain::Unit::try_from(value.unit.as_str())?,
            ladder: value.ladder,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DataError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidUnit(#[from] domain::UnitError),
    #[error(transparent)]
    InvalidDifficulty(#[from] domain::DifficultyError),
}
