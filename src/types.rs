//! Type-safe profile and routine types for SkinTUI
//!
//! This module replaces stringly-typed user input with proper Rust enums
//! that provide compile-time validation and exhaustive matching. The serde
//! representations match the catalog JSON exactly ("SPF", "oily", "20-29").

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A fixed stage in a skincare regimen.
///
/// Declaration order is the routine order: a built routine always lists
/// its products Cleanser first, SPF last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum RoutineStep {
    Cleanser,
    Toner,
    Serum,
    Moisturizer,
    #[serde(rename = "SPF")]
    #[strum(serialize = "SPF")]
    Spf,
}

/// User-selectable skin type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    #[default]
    Normal,
    Oily,
    Dry,
    Combination,
    Sensitive,
}

/// User-selectable age range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum AgeRange {
    #[strum(serialize = "13-19")]
    #[serde(rename = "13-19")]
    Teens,
    #[default]
    #[strum(serialize = "20-29")]
    #[serde(rename = "20-29")]
    Twenties,
    #[strum(serialize = "30-39")]
    #[serde(rename = "30-39")]
    Thirties,
    #[strum(serialize = "40-49")]
    #[serde(rename = "40-49")]
    Forties,
    #[strum(serialize = "50+")]
    #[serde(rename = "50+")]
    FiftyPlus,
}
