//! Heading-driven section tree builder.
//!
//! Wiki pages are not uniformly leveled: some start their top section at `##`
//! instead of `#`. The builder therefore discovers the shallowest heading level
//! present in a span and splits on that, recursing one level deeper for each
//! section's extent.

use crate::model::Section;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Deepest heading level searched for.
pub const MAX_LEVEL: usize = 7;

// One pattern per level; index 0 is level 1.
static RE_HEADINGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    (1..=MAX_LEVEL)
        .map(|level| {
            Regex::new(&format!(r"(?m)^#{{{level}}}[ \t]+(\S.*?)[ \t]*\r?$")).unwrap()
        })
        .collect()
});

/// Split `text` into top-level sections at the shallowest heading level that is
/// at least `min_level`. Returns an empty list when no heading is found.
pub fn group_by_sections(text: &str, min_level: usize) -> Vec<Section> {
    build(text, 0..text.len(), min_level.max(1))
}

fn build(doc: &str, range: Range<usize>, min_level: usize) -> Vec<Section> {
    let extent = &doc[range.clone()];

    let Some(level) = (min_level..=MAX_LEVEL).find(|&level| RE_HEADINGS[level - 1].is_match(extent))
    else {
        return Vec::new();
    };
    let re = &RE_HEADINGS[level - 1];

    // (heading start, content start, name), offsets relative to `extent`
    let headings: Vec<(usize, usize, String)> = re
        .captures_iter(extent)
        .map(|caps| {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let content_start = if extent[whole.end..].starts_with('\n') {
                whole.end + 1
            } else {
                whole.end
            };
            (whole.start, content_start, caps[1].to_string())
        })
        .collect();

    let mut sections: Vec<Section> = Vec::with_capacity(headings.len());
    for (i, (start, content_start, name)) in headings.iter().enumerate() {
        let end = headings.get(i + 1).map_or(extent.len(), |next| next.0);
        let content = range.start + content_start..range.start + end;

        let mut subsections: Vec<Section> = Vec::new();
        for sub in build(doc, content.clone(), level + 1) {
            insert_unique(&mut subsections, sub);
        }

        let body_end = content.start + deeper_heading_start(&doc[content.clone()], level);

        sections.push(Section {
            name: name.clone(),
            body: doc[content.start..body_end].to_string(),
            subsections,
            span: range.start + start..range.start + end,
        });
    }
    sections
}

/// Offset of the first heading deeper than `level` in `text`, or its length.
fn deeper_heading_start(text: &str, level: usize) -> usize {
    RE_HEADINGS[level..]
        .iter()
        .filter_map(|re| re.find(text).map(|m| m.start()))
        .min()
        .unwrap_or(text.len())
}

/// Insert keeping names unique; a later section replaces an earlier namesake.
fn insert_unique(sections: &mut Vec<Section>, section: Section) {
    match sections.iter_mut().find(|s| s.name == section.name) {
        Some(existing) => *existing = section,
        None => sections.push(section),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Heading line + body + subsections' spans must rebuild the section span.
    fn reconstruct(doc: &str, section: &Section) -> String {
        let extent = &doc[section.span.clone()];
        let heading_end = extent.find('\n').map_or(extent.len(), |i| i + 1);
        let mut out = extent[..heading_end].to_string();
        out.push_str(&section.body);
        for sub in &section.subsections {
            out.push_str(&reconstruct(doc, sub));
        }
        out
    }

    #[test]
    fn splits_uniform_level() {
        let doc = "# one\nfirst\n# two\nsecond\n# three\nthird\n";
        let sections = group_by_sections(doc, 1);
        assert_eq!(names(&sections), vec!["one", "two", "three"]);
        assert_eq!(sections[0].text(), "first");
        assert_eq!(sections[2].body, "third\n");
    }

    #[test]
    fn discovers_shallowest_present_level() {
        let doc = "intro\n## rectb\nbody\n### Parameters\n* **x** : a coordinate\n";
        let sections = group_by_sections(doc, 1);
        assert_eq!(names(&sections), vec!["rectb"]);
        assert_eq!(names(&sections[0].subsections), vec!["Parameters"]);
    }

    #[test]
    fn no_headings_is_empty() {
        assert!(group_by_sections("Please see: [btn](btn)\n", 1).is_empty());
        assert!(group_by_sections("", 1).is_empty());
        assert!(group_by_sections("######## too deep\n", 1).is_empty());
    }

    #[test]
    fn deeper_heading_is_not_a_top_level_section() {
        let doc = "# top\n## sub\ntext\n";
        let sections = group_by_sections(doc, 1);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].text(), "");
        assert_eq!(sections[0].subsection("sub").map(Section::text), Some("text"));
    }

    #[test]
    fn body_excludes_subsections() {
        let doc =
            "# circ\n`circ(x, y)`\n## Parameters\n* **x** : coordinate\n## Description\nDraws.\n";
        let sections = group_by_sections(doc, 1);
        let circ = &sections[0];
        assert_eq!(circ.text(), "`circ(x, y)`");
        assert!(!circ.body.contains("Draws"));
        assert!(!circ.body.contains("coordinate"));
        assert_eq!(circ.subsection("Description").map(Section::text), Some("Draws."));
    }

    #[test]
    fn skipped_levels_are_found_recursively() {
        let doc = "# top\nlead\n### deep\ninner\n";
        let sections = group_by_sections(doc, 1);
        assert_eq!(names(&sections[0].subsections), vec!["deep"]);
        assert_eq!(sections[0].text(), "lead");
    }

    #[test]
    fn last_character_is_kept() {
        let doc = "# a\nend";
        let sections = group_by_sections(doc, 1);
        assert_eq!(sections[0].body, "end");
    }

    #[test]
    fn heading_at_end_without_newline() {
        let doc = "# a\ntext\n# b";
        let sections = group_by_sections(doc, 1);
        assert_eq!(names(&sections), vec!["a", "b"]);
        assert_eq!(sections[1].body, "");
    }

    #[test]
    fn heading_name_is_trimmed() {
        let sections = group_by_sections("#   spaced out   \r\nx\n", 1);
        assert_eq!(sections[0].name, "spaced out");
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        let sections = group_by_sections("# a\n#include\n", 1);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].body.contains("#include"));
    }

    #[test]
    fn min_level_skips_shallower_headings() {
        let doc = "# top\n## a\n## b\n";
        assert_eq!(names(&group_by_sections(doc, 2)), vec!["a", "b"]);
    }

    #[test]
    fn duplicate_subsection_names_keep_last() {
        let doc = "# f\n## Notes\nfirst\n## Notes\nsecond\n";
        let sections = group_by_sections(doc, 1);
        assert_eq!(sections[0].subsections.len(), 1);
        assert_eq!(sections[0].subsections[0].text(), "second");
    }

    #[test]
    fn body_stops_at_skipped_level_heading() {
        let doc = "# f\nlead\n### Example\n`f(1, 2, 3)`\n## Parameters\n* **a** : a number\n";
        let sections = group_by_sections(doc, 1);
        assert_eq!(sections[0].body, "lead\n");
        assert_eq!(names(&sections[0].subsections), vec!["Parameters"]);
    }

    #[test]
    fn body_stops_at_replaced_duplicate() {
        let doc = "# f\nlead\n## Notes\nfirst\n## Notes\nsecond\n";
        let sections = group_by_sections(doc, 1);
        assert_eq!(sections[0].body, "lead\n");
        assert_eq!(sections[0].subsections[0].text(), "second");
    }

    #[test]
    fn body_never_holds_deeper_headings() {
        let doc = "# a\nx\n#### deep\ny\n## b\n### c\nz\n# d\nw\n";
        for section in group_by_sections(doc, 1) {
            assert!(!section.body.contains("##"), "body: {:?}", section.body);
        }
    }

    #[test]
    fn round_trip_reconstructs_extent() {
        let doc = "# api\nintro\n\n## Functions\n### Drawing\n* [circ](circ)\n### Input\n* [btn](btn)\n## Other\ntail\n# second\nlast line";
        for section in group_by_sections(doc, 1) {
            assert_eq!(reconstruct(doc, &section), &doc[section.span.clone()]);
        }
    }
}
