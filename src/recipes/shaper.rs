// ABOUTME: Pure projections from recipe payloads into equipment, steps and missing ingredients
// ABOUTME: Every projection is total: malformed or missing fields contribute nothing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Recipe Shaper
//!
//! Derived views over Spoonacular payloads. The upstream API is known to return
//! inconsistent shapes, so these functions never fail: a step group without
//! steps, a step without equipment, or an ingredient without its original line
//! is skipped rather than reported.

use crate::models::{InstructionSet, RecipeDetailBatch, RecipeSummary};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Distinct equipment names used anywhere in the instructions
///
/// Names are compared exactly (case-sensitive). The set is returned sorted.
#[must_use]
pub fn equipment_for(instructions: &InstructionSet) -> BTreeSet<String> {
    instructions
        .groups()
        .iter()
        .filter_map(|group| group.steps.as_deref())
        .flatten()
        .filter_map(|step| step.equipment.as_deref())
        .flatten()
        .filter_map(|equipment| equipment.name.clone())
        .collect()
}

/// Instructions rendered as `Step {n}: {text}` lines
///
/// Numbering restarts at 1 in every step group and counts each step's position
/// in its group, including steps skipped for having no text. Trailing
/// whitespace is trimmed.
#[must_use]
pub fn steps_text(instructions: &InstructionSet) -> String {
    let mut text = String::new();

    for steps in instructions
        .groups()
        .iter()
        .filter_map(|group| group.steps.as_deref())
    {
        for (position, step) in steps.iter().enumerate() {
            if let Some(step_text) = &step.text {
                // Writing to a String cannot fail
                let _ = writeln!(text, "Step {}: {step_text}", position + 1);
            }
        }
    }

    text.trim_end().to_owned()
}

/// Original ingredient lines the recipe needs but the search did not include
#[must_use]
pub fn missing_ingredients_for(summary: &RecipeSummary) -> Vec<String> {
    summary
        .missed_ingredients
        .iter()
        .flatten()
        .filter_map(|ingredient| ingredient.original.clone())
        .collect()
}

/// Equipment for every recipe in a batch, in batch order
#[must_use]
pub fn batch_equipment(batch: &RecipeDetailBatch) -> Vec<BTreeSet<String>> {
    batch.instructions.iter().map(equipment_for).collect()
}

/// Step text for every recipe in a batch, in batch order
#[must_use]
pub fn batch_steps(batch: &RecipeDetailBatch) -> Vec<String> {
    batch.instructions.iter().map(steps_text).collect()
}

/// Missing ingredients for every summary, in search order
#[must_use]
pub fn batch_missing_ingredients(summaries: &[RecipeSummary]) -> Vec<Vec<String>> {
    summaries.iter().map(missing_ingredients_for).collect()
}
