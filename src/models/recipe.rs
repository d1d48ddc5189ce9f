// ABOUTME: Recipe summary and analyzed-instruction models from the Spoonacular API
// ABOUTME: Includes the detail batch that keeps instructions aligned with summaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{lenient, lenient_seq};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One recipe returned by the find-by-ingredients search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Spoonacular recipe id, the key for instruction lookups
    pub id: u64,
    /// Recipe title
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Ingredients the recipe needs that were not in the search
    #[serde(
        rename = "missedIngredients",
        default,
        deserialize_with = "lenient_seq",
        skip_serializing_if = "Option::is_none"
    )]
    pub missed_ingredients: Option<Vec<MissedIngredient>>,
    /// Remaining upstream fields (image, likes, usedIngredients, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ingredient missing from the user's pantry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissedIngredient {
    /// Original ingredient line, e.g. "2 cups flour"
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Remaining upstream fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Analyzed instructions for one recipe: an ordered list of step groups
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InstructionSet(pub Vec<StepGroup>);

impl<'de> Deserialize<'de> for InstructionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(lenient_seq(deserializer)?.unwrap_or_default()))
    }
}

impl InstructionSet {
    /// Step groups in order
    #[must_use]
    pub fn groups(&self) -> &[StepGroup] {
        &self.0
    }
}

/// One instruction phase of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepGroup {
    /// Phase name (often empty)
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered steps
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    /// Remaining upstream fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single instruction step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step number as reported upstream
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Instruction text
    #[serde(
        rename = "step",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    /// Equipment used by this step
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<Equipment>>,
    /// Remaining upstream fields (ingredients, length, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A piece of kitchen equipment referenced by a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    /// Equipment name, e.g. "frying pan"
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining upstream fields (id, localizedName, image)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Instruction sets fetched for one search, in summary order
///
/// The recipe id each set was fetched for is recorded next to it so a read
/// can tell whether position `i` still belongs to summary `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetailBatch {
    /// Recipe ids, same order and length as `instructions`
    pub recipe_ids: Vec<u64>,
    /// Instruction sets, one per recipe
    pub instructions: Vec<InstructionSet>,
}

impl RecipeDetailBatch {
    /// Build a batch from `(recipe id, instructions)` pairs in order
    #[must_use]
    pub fn from_fetched(fetched: Vec<(u64, InstructionSet)>) -> Self {
        let (recipe_ids, instructions) = fetched.into_iter().unzip();
        Self {
            recipe_ids,
            instructions,
        }
    }

    /// Whether the batch was fetched for exactly these summaries, in order
    #[must_use]
    pub fn fetched_for(&self, summaries: &[RecipeSummary]) -> bool {
        self.recipe_ids.len() == summaries.len()
            && self
                .recipe_ids
                .iter()
                .zip(summaries)
                .all(|(&id, summary)| id == summary.id)
    }

    /// Instructions at `index`, provided they were fetched for `recipe_id`
    #[must_use]
    pub fn aligned_at(&self, index: usize, recipe_id: u64) -> Option<&InstructionSet> {
        match self.recipe_ids.get(index) {
            Some(&id) if id == recipe_id => self.instructions.get(index),
            _ => None,
        }
    }
}
