// ABOUTME: Muscle-group occurrence tally shared by strength stats and the distribution chart
// ABOUTME: Insertion-ordered so ties always resolve to the first group encountered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use indexmap::IndexMap;

use athlo_core::models::StrengthActivity;

/// Count how many times each muscle group appears across all sessions.
///
/// Every entry of an activity's `muscle_groups_worked` list adds one; sets
/// are not weighted. Iteration order of the result is first-seen order.
#[must_use]
pub fn tally_muscle_groups(activities: &[StrengthActivity]) -> IndexMap<String, usize> {
    let mut tally: IndexMap<String, usize> = IndexMap::new();
    for group in activities
        .iter()
        .flat_map(|activity| activity.muscle_groups_worked.iter())
    {
        *tally.entry(group.clone()).or_insert(0) += 1;
    }
    tally
}

/// Tally entries sorted by descending count, ties kept in first-seen order
#[must_use]
pub fn ranked_muscle_groups(activities: &[StrengthActivity]) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = tally_muscle_groups(activities).into_iter().collect();
    // stable: equal counts keep insertion order
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked
}

/// The group with the highest count, or `None` if no groups were recorded
#[must_use]
pub fn most_worked_muscle_group(activities: &[StrengthActivity]) -> Option<String> {
    ranked_muscle_groups(activities)
        .into_iter()
        .next()
        .map(|(group, _)| group)
}
