use chrono::NaiveDate;
use liftbook_domain as domain;

pub static EXERCISE_ENTRIES: std::sync::LazyLock<Vec<domain::ExerciseEntry>> =
    std::sync::LazyLock::new(|| {
        vec![
            domain::ExerciseEntry {
                name: "Barbell Back Squat".to_string(),
                sets: vec![
                    domain::SetRecord::new(100.0, 5),
                    domain::SetRecord::new(102.5, 5),
                ],
            },
            domain::ExerciseEntry {
                name: "Leg Press".to_string(),
                sets: vec![
                    domain::SetRecord::new(180.0, 10),
                    domain::SetRecord {
                        weight: None,
                        reps: Some(12),
                    },
                ],
            },
        ]
    });

pub static WORKOUT: std::sync::LazyLock<domain::WorkoutRecord> =
    std::sync::LazyLock::new(|| domain::WorkoutRecord {
        id: 1.into(),
        name: domain::Name::new("Legs").unwrap(),
        date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        unit: domain::Unit::Kg,
        exercises: EXERCISE_ENTRIES.clone(),
    });

pub static WORKOUT_2: std::sync::LazyLock<domain::WorkoutRecord> =
    std::sync::LazyLock::new(|| domain::WorkoutRecord {
        id: 2.into(),
        name: domain::Name::new("Upper").unwrap(),
        date: NaiveDate::from_ymd_opt(2024, 5, 8).unwrap(),
        unit: domain::Unit::Lbs,
        exercises: vec![domain::ExerciseEntry {
            name: "Barbell Bench Press".to_string(),
            sets: vec![domain::SetRecord::new(185.0, 8)],
        }],
    });

pub static TEMPLATE: std::sync::LazyLock<domain::WorkoutTemplate> =
    std::sync::LazyLock::new(|| domain::WorkoutTemplate {
        id: 1.into(),
        name: domain::Name::new("Leg Day").unwrap(),
        description: "Quads and glutes".to_string(),
        exercises: EXERCISE_ENTRIES.clone(),
    });

pub static SETTINGS: std::sync::LazyLock<domain::Settings> =
    std::sync::LazyLock::new(|| domain::Settings {
        unit: domain::Unit::Lbs,
        ladder: vec![100, 90, 80, 70],
    });
