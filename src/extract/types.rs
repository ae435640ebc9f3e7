//! Heuristic primitive-type inference for documented variables.
//!
//! The rules are tried in a fixed order and the first hit wins, so an earlier
//! rule masks later ones when keywords overlap. Anything left over is tagged
//! [`VarType::Missing`] rather than guessed.

use crate::model::{ParameterSpec, VarType, VariableDescriptions, VariableTypes};
use std::collections::HashMap;
use tracing::warn;

/// Variable names that are always numbers.
const NUMBER_NAMES: &[&str] = &[
    "id", "track", "tempo", "speed", "duration", "note", "value", "val32", "radius", "scale",
    "w", "h", "sx", "sy", "period", "hold", "code", "length", "timestamp", "scrollx", "scrolly",
];

/// Substrings of a variable name that mark it as a number.
const NUMBER_NAME_PARTS: &[&str] = &["width", "height", "color"];

/// Description keywords that mark a number.
const NUMBER_KEYWORDS: &[&str] = &["index", "number", "coordinate", "integer", "address", "radius"];

const BOOLEAN_NAMES: &[&str] = &["pressed", "bool"];

const BOOLEAN_KEYWORDS: &[&str] = &["true", "false"];

/// Infer a type for every described variable.
pub fn infer(descriptions: &VariableDescriptions, params: &[ParameterSpec]) -> VariableTypes {
    let from_defaults: HashMap<&str, VarType> = params
        .iter()
        .filter_map(|p| {
            let default = p.default.as_deref()?;
            default_type(default).map(|t| (p.name.as_str(), t))
        })
        .collect();

    descriptions
        .iter()
        .map(|(name, desc)| {
            let ty = from_defaults
                .get(name.as_str())
                .copied()
                .unwrap_or_else(|| classify(name, desc));
            if ty == VarType::Missing {
                warn!(variable = %name, description = %desc, "could not infer type");
            }
            (name.clone(), ty)
        })
        .collect()
}

/// Type implied by a literal default value, if any.
fn default_type(default: &str) -> Option<VarType> {
    match default {
        "true" | "false" => Some(VarType::Boolean),
        d if is_numeric_literal(d) => Some(VarType::Number),
        _ => None,
    }
}

fn is_numeric_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut parts = digits.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let frac = parts.next();
    !int.is_empty()
        && int.bytes().all(|b| b.is_ascii_digit())
        && frac.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
}

/// Name and description heuristics, in precedence order.
pub fn classify(name: &str, description: &str) -> VarType {
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| description.contains(k));

    if NUMBER_NAMES.contains(&name)
        || NUMBER_NAME_PARTS.iter().any(|part| name.contains(part))
        || mentions(NUMBER_KEYWORDS)
    {
        VarType::Number
    } else if BOOLEAN_NAMES.contains(&name) || mentions(BOOLEAN_KEYWORDS) {
        VarType::Boolean
    } else if name == "text" || description.contains("message") {
        VarType::String
    } else if description.contains("function") {
        VarType::Function
    } else {
        VarType::Missing
    }
}
