//! Data model for extracted function documentation — format-agnostic.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// A heading-delimited span of a document with its nested subsections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text, trimmed
    pub name: String,
    /// Own text between the heading line and the first subsection heading
    pub body: String,
    /// Subsections in document order, names unique
    pub subsections: Vec<Section>,
    /// Byte range from the heading line to the end of the section's extent
    pub span: Range<usize>,
}

impl Section {
    /// Look up a direct subsection by exact name.
    pub fn subsection(&self, name: &str) -> Option<&Section> {
        self.subsections.iter().find(|s| s.name == name)
    }

    /// Body with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.body.trim()
    }
}

/// One declared parameter: name and optional default literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub name: String,
    /// `None` when required, `Some("nil")` when optional without a default
    pub default: Option<String>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, default: Option<&str>) -> Self {
        Self {
            name: name.into(),
            default: default.map(str::to_string),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub params: Vec<ParameterSpec>,
    pub returns: Vec<String>,
}

/// Primitive type tag inferred for a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VarType {
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "function")]
    Function,
    /// Could not be classified from the documentation
    #[serde(rename = "MISSING_TYPE")]
    Missing,
}

impl VarType {
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Number => "number",
            VarType::Boolean => "boolean",
            VarType::String => "string",
            VarType::Function => "function",
            VarType::Missing => "MISSING_TYPE",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type VariableDescriptions = BTreeMap<String, String>;
pub type VariableTypes = BTreeMap<String, VarType>;

/// Everything known about one documented function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    pub signature: FunctionSignature,
    pub descriptions: VariableDescriptions,
    pub types: VariableTypes,
    pub description: String,
}

/// A group of function names from the API inventory page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Lower-cased heading, e.g. "drawing"
    pub name: String,
    pub functions: Vec<String>,
}
