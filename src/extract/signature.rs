//! Call-pattern signature extraction.
//!
//! Pages illustrate a function with one or more inline calls such as
//! `` `mouse() -> x, y, left, middle, right, scrollx, scrolly` ``. Every
//! occurrence is merged into one signature.

use crate::error::{Error, Result};
use crate::model::{FunctionSignature, ParameterSpec};
use regex::Regex;
use tracing::debug;

/// Build the pattern matching inline calls of `function`.
fn call_pattern(function: &str) -> Result<Regex> {
    let pattern = format!(
        r"`{}\s*\(([^`]*)\)(?:\s*->\s*([\w, ]+))?`",
        regex::escape(function)
    );
    Regex::new(&pattern).map_err(|e| Error::structure("call pattern", e.to_string()))
}

/// Extract the merged signature of `function` from `text`.
pub fn extract(function: &str, text: &str) -> Result<FunctionSignature> {
    let re = call_pattern(function)?;
    let mut signature = FunctionSignature::default();
    for caps in re.captures_iter(text) {
        let args = caps.get(1).map_or("", |m| m.as_str());
        let returns = caps.get(2).map(|m| m.as_str());
        debug!(function, call = &caps[0], "merging call pattern");
        merge_call(&mut signature, args, returns);
    }
    Ok(signature)
}

/// Merge one call's argument list and optional return list into `signature`.
///
/// A parameter is only appended at the position it occupies in the call, so a
/// later call can add trailing parameters but never reorder or duplicate. The
/// return list is set by the first call that declares one.
pub fn merge_call(signature: &mut FunctionSignature, args: &str, returns: Option<&str>) {
    if signature.returns.is_empty() {
        if let Some(returns) = returns {
            signature.returns = returns
                .split(',')
                .map(join_words)
                .filter(|r| !r.is_empty())
                .collect();
        }
    }

    let params = args.split(',').filter_map(parse_param);
    for (i, param) in params.enumerate() {
        if i == signature.params.len() {
            signature.params.push(param);
        }
    }
}

/// Parse one argument token.
///
/// `[name]` is optional with the `nil` sentinel as default; `[name=value]`
/// (brackets may be misplaced, as in `btnp`) carries `value` as default.
fn parse_param(token: &str) -> Option<ParameterSpec> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let bracketed = token.starts_with('[') || token.ends_with(']');

    let (name, default) = match token.find('=') {
        Some(eq) => (&token[..eq], Some(strip_brackets(&token[eq + 1..]))),
        None if bracketed => (token, Some("nil")),
        None => (token, None),
    };

    let name = join_words(strip_brackets(name));
    if name.is_empty() {
        return None;
    }
    Some(ParameterSpec {
        name,
        default: default.map(str::to_string),
    })
}

fn strip_brackets(s: &str) -> &str {
    s.trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace())
}

/// "sprite id" → "sprite_id"
fn join_words(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}
