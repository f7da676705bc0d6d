// ABOUTME: Text rendering helpers for athlo-cli
// ABOUTME: Prints stats with the shared formatters and chart series as aligned bars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use athlo_core::formatters::{
    format_date, format_distance, format_duration, format_pace, format_pace_per_km,
};
use athlo_core::models::{ChartDataPoint, PeriodType};
use athlo_intelligence::goals::GoalProgress;
use athlo_intelligence::period::parse_calendar_date;

use athlo::client::TokenPair;
use athlo::dashboard::{
    BodySummary, DashboardReport, ExerciseSummary, RunningSummary, StrengthSummary,
};

const BAR_WIDTH: usize = 30;

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(title.len().max(20)));
}

/// One row per point with a bar scaled to the series maximum
fn print_series(title: &str, points: &[ChartDataPoint], unit: &str) {
    println!("\n  {title}");
    if points.is_empty() {
        println!("    (no data)");
        return;
    }

    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    for point in points {
        let filled = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let label = if point.label.is_empty() { "?" } else { point.label.as_str() };
        println!(
            "    {label:>12} {:<width$} {:.1}{unit}",
            "#".repeat(filled),
            point.value,
            width = BAR_WIDTH
        );
    }
}

fn signed(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:+.1}{unit}"))
}

fn reading(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.1}{unit}"))
}

/// Running screen
pub fn display_running(summary: &RunningSummary, period: PeriodType) {
    let stats = &summary.stats;
    heading(&format!("Running ({period})"));
    println!("   Activities:     {}", stats.total_activities);
    println!("   Distance:       {} km", format_distance(stats.total_distance));
    println!("   Time:           {}", format_duration(stats.total_duration));
    println!("   Avg distance:   {} km", format_distance(stats.average_distance));
    println!("   Longest run:    {} km", format_distance(stats.longest_run));
    println!("   Avg pace:       {}/km", format_pace(stats.average_pace));
    println!(
        "   Fastest pace:   {}",
        format_pace_per_km(Some(stats.fastest_pace)).unwrap_or_else(|| format_pace(0.0))
    );

    print_series("Distance per run", &summary.distance_chart, " km");
    print_series("Pace per run", &summary.pace_chart, " min/km");
    print_series("Weekly distance", &summary.weekly_distance, " km");
}

/// Strength screen
pub fn display_strength(summary: &StrengthSummary, period: PeriodType) {
    let stats = &summary.stats;
    heading(&format!("Strength ({period})"));
    println!("   Workouts:       {}", stats.total_workouts);
    println!("   Sets:           {}", stats.total_sets);
    println!("   Exercises:      {}", stats.total_exercises);
    println!(
        "   Avg duration:   {}",
        format_duration(stats.average_workout_duration)
    );
    println!(
        "   Most worked:    {}",
        stats.most_worked_muscle_group.as_deref().unwrap_or("n/a")
    );

    print_series("Muscle groups", &summary.muscle_groups, " sessions");
    print_series("Sets per workout", &summary.volume_chart, " sets");
}

/// Body screen
pub fn display_body(summary: &BodySummary) {
    let stats = &summary.stats;
    heading("Body");
    if let Some(date) = summary
        .latest
        .as_ref()
        .and_then(|m| m.date.as_deref())
        .and_then(parse_calendar_date)
    {
        println!("   Last measured:  {}", format_date(&date));
    }
    println!("   Weight:         {}", reading(stats.current_weight, " kg"));
    println!(
        "   Body fat:       {}",
        reading(stats.current_body_fat, "%")
    );
    println!(
        "   30-day weight:  {}",
        signed(stats.weight_change_30_days, " kg")
    );
    println!(
        "   30-day fat:     {}",
        signed(stats.body_fat_change_30_days, "%")
    );

    print_series("Weight history", &summary.weight_chart, " kg");
}

/// Goal progress lines
pub fn display_goals(goals: &[GoalProgress]) {
    heading("Goals");
    for goal in goals {
        println!(
            "   {:<24} {}/{}  ({:.1}%)",
            goal.display_text, goal.current, goal.target, goal.percentage
        );
    }
}

/// Full report
pub fn display_report(report: &DashboardReport) {
    println!("Athlo dashboard, generated {}", report.generated_at);
    display_goals(&report.goals);
    display_running(&report.running, report.period);
    display_strength(&report.strength, report.period);
    display_body(&report.body);
}

/// One exercise's history
pub fn display_exercise(summary: &ExerciseSummary) {
    heading(&summary.history.exercise_name);
    if summary.history.records.is_empty() {
        println!("   No sessions recorded");
        return;
    }

    for record in &summary.history.records {
        let date = parse_calendar_date(&record.date)
            .map_or_else(|| record.date.clone(), |d| format_date(&d));
        println!(
            "   {date:<12} {:>8}  {} x {}{}",
            reading(record.weight, " kg"),
            record.sets,
            record.reps,
            record.rpe.map(|rpe| format!("  RPE {rpe}")).unwrap_or_default()
        );
    }
    print_series("Weight progression", &summary.progression_chart, " kg");
}

/// Tokens issued by login
pub fn display_tokens(tokens: &TokenPair) {
    println!("\nLogged in. Export the access token to reuse it:");
    println!("  export ATHLO_ACCESS_TOKEN=\"{}\"", tokens.access_token);
    println!("\nRefresh token (keep it private):");
    println!("  {}", tokens.refresh_token);
}
