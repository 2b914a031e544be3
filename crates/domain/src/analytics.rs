use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{Unit, WorkoutRecord, estimate_one_rep_max, volume::set_volume};

/// Per-workout performance of a single exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub total_volume: f64,
    pub estimated_one_rep_max: f64,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub latest_volume: f64,
    pub latest_one_rep_max: f64,
    pub unit: Unit,
    pub sessions: usize,
}

impl ProgressSummary {
    #[must_use]
    pub fn from_points(points: &[ProgressPoint]) -> Option<Self> {
        let latest = points.last()?;
        Some(Self {
            latest_volume: latest.total_volume,
            latest_one_rep_max: latest.estimated_one_rep_max,
            unit: latest.unit,
            sessions: points.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub workout: WorkoutRecord,
    pub volume: f64,
}

#[must_use]
pub fn exercise_names(workouts: &[WorkoutRecord]) -> Vec<String> {
    workouts
        .iter()
        .flat_map(|w| w.exercises.iter())
        .filter(|e| !e.name.trim().is_empty())
        .map(|e| e.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Volume and best estimated one-rep max of an exercise per workout, oldest first.
#[must_use]
pub fn exercise_progress(workouts: &[WorkoutRecord], name: &str) -> Vec<ProgressPoint> {
    let mut points = workouts
        .iter()
        .filter(|w| w.contains_exercise(name))
        .map(|w| {
            let sets = w
                .exercises
                .iter()
                .filter(|e| e.name == name)
                .flat_map(|e| e.sets.iter());
            let (total_volume, estimated_one_rep_max) =
                sets.fold((0.0, 0.0_f64), |(volume, one_rep_max), set| {
                    (
                        volume + set_volume(set),
                        one_rep_max.max(estimate_one_rep_max(
                            set.weight.unwrap_or_default(),
                            set.reps.unwrap_or_default(),
                        )),
                    )
                });
            ProgressPoint {
                date: w.date,
                total_volume,
                estimated_one_rep_max,
                unit: w.unit,
            }
        })
        .collect::<Vec<_>>();
    points.sort_by_key(|p| p.date);
    points
}

/// Workouts with their total volume, newest first.
#[must_use]
pub fn history(workouts: &[WorkoutRecord]) -> Vec<HistoryEntry> {
    let mut entries = workouts
        .iter()
        .map(|w| HistoryEntry {
            workout: w.clone(),
            volume: w.volume(),
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.workout.date.cmp(&a.workout.date));
    entries
}
