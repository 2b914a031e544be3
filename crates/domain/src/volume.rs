//! Training volume (weight × reps) at set, exercise, workout and history level.
//!
//! Missing or non-positive fields contribute nothing. Volumes are not rounded.

use crate::{ExerciseEntry, SetRecord, WorkoutRecord};

#[must_use]
pub fn set_volume(set: &SetRecord) -> f64 {
    let weight = set
        .weight
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or_default();
    weight * f64::from(set.reps.unwrap_or_default())
}

#[must_use]
pub fn exercise_volume(exercise: &ExerciseEntry) -> f64 {
    exercise.sets.iter().map(set_volume).sum()
}

#[must_use]
pub fn workout_volume(workout: &WorkoutRecord) -> f64 {
    workout.exercises.iter().map(exercise_volume).sum()
}

#[must_use]
pub fn history_volume(workouts: &[WorkoutRecord]) -> f64 {
    workouts.iter().map(workout_volume).sum()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Name, Unit};

    use super::*;

    fn workout(date: NaiveDate, exercises: Vec<ExerciseEntry>) -> WorkoutRecord {
        WorkoutRecord {
            id: 1.into(),
            name: Name::new("A").unwrap(),
            date,
            unit: Unit::Kg,
            exercises,
        }
    }

    fn exercise(name: &str, sets: Vec<SetRecord>) -> ExerciseEntry {
        ExerciseEntry {
            name: name.to_string(),
            sets,
        }
    }

    #[rstest]
    #[case(SetRecord::new(100.0, 5), 500.0)]
    #[case(SetRecord::new(62.5, 3), 187.5)]
    #[case(SetRecord { weight: None, reps: Some(5) }, 0.0)]
    #[case(SetRecord { weight: Some(80.0), reps: None }, 0.0)]
    #[case(SetRecord { weight: None, reps: None }, 0.0)]
    #[case(SetRecord::new(-100.0, 5), 0.0)]
    #[case(SetRecord::new(100.0, 0), 0.0)]
    #[case(SetRecord { weight: Some(f64::NAN), reps: Some(5) }, 0.0)]
    fn test_set_volume(#[case] set: SetRecord, #[case] expected: f64) {
        let volume = set_volume(&set);
        assert!(!volume.is_nan());
        assert_eq!(volume, expected);
    }

    #[test]
    fn test_exercise_volume() {
        assert_eq!(
            exercise_volume(&exercise(
                "Bench Press",
                vec![
                    SetRecord::new(100.0, 5),
                    SetRecord {
                        weight: None,
                        reps: Some(5)
                    },
                    SetRecord {
                        weight: Some(80.0),
                        reps: None
                    },
                ]
            )),
            500.0
        );
        assert_eq!(exercise_volume(&exercise("Bench Press", vec![])), 0.0);
    }

    #[test]
    fn test_workout_volume() {
        let workout = workout(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![
                exercise(
                    "Squat",
                    vec![SetRecord::new(100.0, 5), SetRecord::new(90.0, 5)],
                ),
                exercise("Bench Press", vec![SetRecord::new(80.0, 8)]),
            ],
        );
        assert_eq!(workout_volume(&workout), 1590.0);
        assert_eq!(workout.volume(), 1590.0);
        assert_eq!(workout.exercises[0].volume(), 950.0);
        assert_eq!(workout.exercises[1].sets[0].volume(), 640.0);
    }

    #[test]
    fn test_workout_volume_is_not_rounded() {
        let workout = workout(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            vec![exercise(
                "Curl",
                vec![SetRecord::new(12.25, 3), SetRecord::new(0.1, 1)],
            )],
        );
        assert_approx_eq!(workout_volume(&workout), 36.85);
    }

    #[test]
    fn test_history_volume() {
        let workouts = [
            workout(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                vec![exercise("Squat", vec![SetRecord::new(100.0, 5)])],
            ),
            workout(
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                vec![exercise("Squat", vec![SetRecord::new(105.0, 5)])],
            ),
        ];
        assert_eq!(history_volume(&workouts), 1025.0);
        assert_eq!(history_volume(&[]), 0.0);
    }
}
