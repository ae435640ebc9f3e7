//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the function records of a category directly.

use crate::error::Result;
use crate::model::FunctionRecord;
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct CategoryDoc<'a> {
    category: &'a str,
    functions: &'a [FunctionRecord],
}

impl Renderer for JsonRenderer {
    fn render(&self, category: &str, records: &[FunctionRecord]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&CategoryDoc {
            category,
            functions: records,
        })?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FunctionSignature, ParameterSpec, VarType};
    use serde_json::Value;

    #[test]
    fn serializes_records() {
        let record = FunctionRecord {
            name: "pix".into(),
            signature: FunctionSignature {
                params: vec![
                    ParameterSpec::new("x", None),
                    ParameterSpec::new("color", Some("nil")),
                ],
                returns: vec!["color".into()],
            },
            descriptions: [("x".to_string(), "a coordinate".to_string())].into_iter().collect(),
            types: [
                ("x".to_string(), VarType::Number),
                ("color".to_string(), VarType::Missing),
            ]
            .into_iter()
            .collect(),
            description: "Reads or writes a pixel.".into(),
        };

        let out = JsonRenderer.render("drawing", &[record]).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["category"], "drawing");
        let func = &value["functions"][0];
        assert_eq!(func["name"], "pix");
        assert_eq!(func["signature"]["params"][0]["default"], Value::Null);
        assert_eq!(func["signature"]["params"][1]["default"], "nil");
        assert_eq!(func["types"]["x"], "number");
        assert_eq!(func["types"]["color"], "MISSING_TYPE");
    }
}
