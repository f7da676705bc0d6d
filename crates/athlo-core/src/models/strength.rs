// ABOUTME: Strength workout records with per-exercise logs and session totals
// ABOUTME: Also defines the exercise history shape used for progression tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Timestamped;

/// One exercise performed during a strength session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Exercise name (e.g., "Bench Press")
    pub exercise_name: String,
    /// Muscle group the exercise targets
    pub muscle_group: String,
    /// Sets planned by the workout division
    pub planned_sets: Option<u32>,
    /// Reps planned by the workout division (e.g., "8-12")
    pub planned_reps: Option<String>,
    /// Sets actually completed
    #[serde(default)]
    pub sets_completed: u32,
    /// Reps actually completed (e.g., "10, 10, 8")
    #[serde(default)]
    pub reps_completed: String,
    /// Load used in kg
    pub weight: Option<f64>,
    /// Rate of perceived exertion (1-10)
    pub rpe: Option<u8>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Load used the previous time this exercise was logged
    pub previous_weight: Option<f64>,
    /// Reps done the previous time this exercise was logged
    pub previous_reps: Option<String>,
}

/// A strength training session as returned by `GET /strength/activities`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthActivity {
    /// Unique identifier
    pub id: String,
    /// Start of the session, ISO-8601
    pub start_time: Option<String>,
    /// Optional title (e.g., "Workout A - Chest and Triceps")
    pub title: Option<String>,
    /// Name of the workout division used
    pub division_name: Option<String>,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Session-level RPE (1-10)
    pub effort: Option<u8>,
    /// Total sets completed across all exercises
    pub total_sets: Option<u32>,
    /// Number of exercises performed
    pub total_exercises: Option<u32>,
    /// Muscle groups worked, one entry per group
    #[serde(default)]
    pub muscle_groups_worked: Vec<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl Timestamped for StrengthActivity {
    fn timestamp(&self) -> Option<&str> {
        self.start_time.as_deref()
    }
}

/// One occurrence of an exercise in the workout log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryRecord {
    /// Start time of the session the exercise was logged in
    pub date: String,
    /// Load used in kg
    pub weight: Option<f64>,
    /// Reps completed
    pub reps: String,
    /// Sets completed
    pub sets: u32,
    /// Rate of perceived exertion (1-10)
    pub rpe: Option<u8>,
}

impl Timestamped for ExerciseHistoryRecord {
    fn timestamp(&self) -> Option<&str> {
        Some(&self.date)
    }
}

/// Progression history for a single exercise, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistory {
    /// Exercise name as requested
    pub exercise_name: String,
    /// Matching records, newest first
    pub records: Vec<ExerciseHistoryRecord>,
}
