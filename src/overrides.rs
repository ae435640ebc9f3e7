//! Hand-written corrections for wiki pages that break the usual layout.
//!
//! Each entry is keyed by an exact function or section name. The extractors
//! consult these tables before (or after) running their generic pass; adding an
//! entry never requires touching the extractors themselves.

use crate::model::{FunctionSignature, ParameterSpec};

/// Replacement signature for a function whose call pattern is malformed.
pub struct SignatureOverride {
    pub function: &'static str,
    pub params: &'static [(&'static str, Option<&'static str>)],
    pub returns: &'static [&'static str],
}

/// Descriptions for variables a page uses but never documents.
pub struct ExtraDescription {
    /// Section names the entry applies to; empty applies to every section
    pub sections: &'static [&'static str],
    pub name: &'static str,
    pub text: &'static str,
}

/// A bold name in a description bullet that stands for several variables.
pub struct NameSplit {
    pub name: &'static str,
    pub into: &'static [&'static str],
}

/// Full description text for a section without a usable "Description".
pub struct DescriptionOverride {
    pub section: &'static str,
    pub text: &'static str,
}

pub static SIGNATURES: &[SignatureOverride] = &[
    // the `keyp` call pattern has unbalanced brackets
    SignatureOverride {
        function: "keyp",
        params: &[("code", Some("nil")), ("hold", Some("nil")), ("period", Some("nil"))],
        returns: &["pressed"],
    },
    // `vbank` has no inline call pattern at all
    SignatureOverride {
        function: "vbank",
        params: &[("id", None)],
        returns: &[],
    },
];

pub static NAME_SPLITS: &[NameSplit] = &[
    // `mouse` documents its coordinates as "**x y**"
    NameSplit {
        name: "x_y",
        into: &["x", "y"],
    },
];

const PEEK_POKE: &[&str] = &["peek*", "poke*"];

pub static EXTRA_DESCRIPTIONS: &[ExtraDescription] = &[
    ExtraDescription {
        sections: &["peek*"],
        name: "value",
        text: "a number that depends on how many bits were read",
    },
    ExtraDescription {
        sections: PEEK_POKE,
        name: "bitaddr",
        text: "the address of `RAM` you desire to write",
    },
    ExtraDescription {
        sections: PEEK_POKE,
        name: "bitval",
        text: "the integer value write to RAM",
    },
    ExtraDescription {
        sections: PEEK_POKE,
        name: "addr2",
        text: "the address of `RAM` you desire to write (segmented on 2)",
    },
    ExtraDescription {
        sections: PEEK_POKE,
        name: "val2",
        text: "the integer value write to RAM (segmented on 2)",
    },
    ExtraDescription {
        sections: PEEK_POKE,
        name: "addr4",
        text: "the address of `RAM` you desire to write (segmented on 4)",
    },
    ExtraDescription {
        sections: PEEK_POKE,
        name: "val4",
        text: "the integer value write to RAM (segmented on 4)",
    },
    // return variable of `fget`
    ExtraDescription {
        sections: &[],
        name: "bool",
        text: "a boolean",
    },
];

pub static DESCRIPTIONS: &[DescriptionOverride] = &[
    DescriptionOverride {
        section: "exit",
        text: "This function causes program execution to be terminated **after** the current `TIC` function ends. The entire function is executed, including any code that follows `exit()`. When the program ends you are returned to the [console](console).

See the example below for a demonstration of this behavior.",
    },
    DescriptionOverride {
        section: "reset",
        text: "Resets the TIC virtual \"hardware\" and immediately restarts the cartridge.

To simply return to the console, please use `exit`.

See also:

- `exit`",
    },
];

/// Hand-specified signature for `function`, if one is registered.
pub fn signature_for(function: &str) -> Option<FunctionSignature> {
    SIGNATURES
        .iter()
        .find(|o| o.function == function)
        .map(|o| FunctionSignature {
            params: o
                .params
                .iter()
                .map(|&(name, default)| ParameterSpec::new(name, default))
                .collect(),
            returns: o.returns.iter().map(|r| r.to_string()).collect(),
        })
}

/// Variables a bold name expands into, if it is a known merged name.
pub fn split_name(name: &str) -> Option<&'static [&'static str]> {
    NAME_SPLITS.iter().find(|s| s.name == name).map(|s| s.into)
}

/// Extra `(name, description)` pairs to inject for `section`.
pub fn extra_descriptions_for(
    section: &str,
) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
    EXTRA_DESCRIPTIONS
        .iter()
        .filter(move |e| e.sections.is_empty() || e.sections.iter().any(|s| *s == section))
        .map(|e| (e.name, e.text))
}

/// Replacement description text for `section`, if one is registered.
pub fn description_for(section: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|o| o.section == section)
        .map(|o| o.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyp_signature() {
        let sig = signature_for("keyp").unwrap();
        assert_eq!(
            sig.params,
            vec![
                ParameterSpec::new("code", Some("nil")),
                ParameterSpec::new("hold", Some("nil")),
                ParameterSpec::new("period", Some("nil")),
            ]
        );
        assert_eq!(sig.returns, vec!["pressed"]);
    }

    #[test]
    fn vbank_signature_is_required_id() {
        let sig = signature_for("vbank").unwrap();
        assert_eq!(sig.params, vec![ParameterSpec::new("id", None)]);
        assert!(sig.returns.is_empty());
    }

    #[test]
    fn unknown_function_has_no_override() {
        assert!(signature_for("circ").is_none());
        assert!(description_for("circ").is_none());
    }

    #[test]
    fn extras_are_scoped_by_section() {
        let peek: Vec<_> = extra_descriptions_for("peek*").map(|(n, _)| n).collect();
        assert!(peek.contains(&"value"));
        assert!(peek.contains(&"bitaddr"));
        assert!(peek.contains(&"bool"));

        let poke: Vec<_> = extra_descriptions_for("poke*").map(|(n, _)| n).collect();
        assert!(!poke.contains(&"value"));
        assert!(poke.contains(&"val4"));

        let circ: Vec<_> = extra_descriptions_for("circ").map(|(n, _)| n).collect();
        assert_eq!(circ, vec!["bool"]);
    }

    #[test]
    fn mouse_coordinates_split() {
        assert_eq!(split_name("x_y"), Some(&["x", "y"][..]));
        assert_eq!(split_name("x"), None);
    }

    #[test]
    fn exit_and_reset_descriptions() {
        assert!(description_for("exit").unwrap().contains("**after**"));
        assert!(description_for("reset").unwrap().starts_with("Resets the TIC"));
    }
}
