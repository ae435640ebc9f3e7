//! ticdoc — turn the TIC-80 wiki API pages into typed function records.
//!
//! Pipeline per function: fetch the page, build its [`Section`] tree, then run
//! the signature, description and type extractors (with the hand-written
//! overrides for known irregular pages) to assemble a [`FunctionRecord`].

pub mod assemble;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod overrides;
pub mod render;
pub mod section;

pub use assemble::{assemble, assemble_section, resolve_section};
pub use catalog::list_function_names;
pub use error::{Error, Result};
pub use fetch::{DirFetcher, Fetch, HttpFetcher};
pub use model::{
    Category, FunctionRecord, FunctionSignature, ParameterSpec, Section, VarType,
    VariableDescriptions, VariableTypes,
};
pub use section::group_by_sections;
