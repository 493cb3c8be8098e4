//! Response formatter: classifies free-text AI responses into renderable
//! blocks, with a structured variant that groups content under the fixed
//! heading vocabulary the coach backend is expected (but not guaranteed) to
//! emit. Degrades gracefully either way: something always renders.

use std::sync::LazyLock;

use regex::Regex;

/// Shown when the backend hands us nothing renderable.
pub const PLACEHOLDER: &str = "No response available";

/// The heading vocabulary recognized in structured responses.
pub const KNOWN_HEADERS: &[&str] = &[
    "Summary",
    "Key Insights",
    "Current Trends",
    "Market Intelligence",
    "Next Steps",
    "Sources",
];

/// A single classified unit of renderable text. Purely a rendering
/// instruction; no identity beyond position in the produced sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedBlock {
    Header(String),
    Subheader(String),
    Bullet(String),
    Numbered { ordinal: u32, text: String },
    Paragraph(String),
    Spacer,
}

/// A named group of content lines recognized under a known heading.
/// Section order follows first occurrence in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredSection {
    pub name: String,
    pub lines: Vec<String>,
}

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.*)$").expect("numbered item regex"));

/// Returns true if the raw text carries at least one of the bold header
/// markers that activate structured mode. Each marker is tested
/// independently, case-insensitively, as a substring.
pub fn has_known_header(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    [
        "**summary**",
        "**key insights**",
        "**current trends**",
        "**market intelligence**",
        "**next steps**",
    ]
    .iter()
    .any(|marker| lower.contains(marker))
}

/// Classifies a single non-blank trimmed line.
fn classify_line(line: &str) -> FormattedBlock {
    if let Some(rest) = line.strip_prefix("### ") {
        return FormattedBlock::Subheader(rest.trim().to_string());
    }
    if let Some(rest) = line.strip_prefix("## ").or_else(|| line.strip_prefix("# ")) {
        return FormattedBlock::Header(rest.trim().to_string());
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("\u{2022} ")) {
        return FormattedBlock::Bullet(rest.trim().to_string());
    }
    if let Some(caps) = NUMBERED.captures(line) {
        // The ordinal always parses: the capture is \d+.
        let ordinal = caps[1].parse().unwrap_or(0);
        return FormattedBlock::Numbered {
            ordinal,
            text: caps[2].trim().to_string(),
        };
    }
    FormattedBlock::Paragraph(line.to_string())
}

/// Simple-mode formatting: line-oriented, order-preserving classification.
///
/// Blank lines become spacers. If nothing substantive was produced, a
/// single fallback paragraph is emitted instead, the raw text verbatim,
/// or [`PLACEHOLDER`] when the input was absent or blank.
pub fn format_blocks(raw: Option<&str>) -> Vec<FormattedBlock> {
    let Some(raw) = raw else {
        return vec![FormattedBlock::Paragraph(PLACEHOLDER.to_string())];
    };

    let mut blocks = Vec::new();
    for line in raw.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blocks.push(FormattedBlock::Spacer);
        } else {
            blocks.push(classify_line(trimmed));
        }
    }

    if blocks.iter().all(|b| matches!(b, FormattedBlock::Spacer)) {
        let fallback = if raw.trim().is_empty() {
            PLACEHOLDER.to_string()
        } else {
            raw.to_string()
        };
        return vec![FormattedBlock::Paragraph(fallback)];
    }
    blocks
}

/// Strips the `**` and `### ` markers a header line may carry, leaving the
/// bare heading text for exact-match comparison.
fn strip_header_markers(line: &str) -> String {
    line.trim()
        .strip_prefix("### ")
        .unwrap_or_else(|| line.trim())
        .replace("**", "")
        .trim()
        .to_string()
}

/// Structured-mode formatting: groups content lines under recognized
/// headings. A line is a header only if, after marker stripping, it equals
/// one of [`KNOWN_HEADERS`] exactly (case-sensitive). Unrecognized headers
/// are ordinary content. Falls back to a single unnamed section carrying
/// the raw text when no section was ever recognized.
pub fn format_sections(raw: &str) -> Vec<StructuredSection> {
    let mut sections: Vec<StructuredSection> = Vec::new();
    let mut current_name = String::new();
    let mut content: Vec<String> = Vec::new();

    for line in raw.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let stripped = strip_header_markers(trimmed);
        if KNOWN_HEADERS.contains(&stripped.as_str()) {
            if !content.is_empty() {
                sections.push(StructuredSection {
                    name: std::mem::take(&mut current_name),
                    lines: std::mem::take(&mut content),
                });
            }
            current_name = stripped;
            content.clear();
        } else {
            content.push(trimmed.to_string());
        }
    }

    if !content.is_empty() {
        sections.push(StructuredSection {
            name: current_name,
            lines: content,
        });
    }

    if sections.is_empty() {
        return vec![StructuredSection {
            name: String::new(),
            lines: vec![raw.to_string()],
        }];
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_preserve_order_and_strip_markers() {
        let blocks = format_blocks(Some("- item one\n- item two"));
        assert_eq!(
            blocks,
            vec![
                FormattedBlock::Bullet("item one".to_string()),
                FormattedBlock::Bullet("item two".to_string()),
            ]
        );
    }

    #[test]
    fn test_bullet_glyph_lines() {
        let blocks = format_blocks(Some("\u{2022} glyph item"));
        assert_eq!(blocks, vec![FormattedBlock::Bullet("glyph item".to_string())]);
    }

    #[test]
    fn test_numbered_items_carry_ordinals() {
        let blocks = format_blocks(Some("1. First\n2. Second"));
        assert_eq!(
            blocks,
            vec![
                FormattedBlock::Numbered {
                    ordinal: 1,
                    text: "First".to_string()
                },
                FormattedBlock::Numbered {
                    ordinal: 2,
                    text: "Second".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_blank_lines_become_spacers() {
        let blocks = format_blocks(Some("para one\n\npara two"));
        assert_eq!(
            blocks,
            vec![
                FormattedBlock::Paragraph("para one".to_string()),
                FormattedBlock::Spacer,
                FormattedBlock::Paragraph("para two".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_lines_classify_as_headers() {
        let blocks = format_blocks(Some("## Big\n### Small"));
        assert_eq!(
            blocks,
            vec![
                FormattedBlock::Header("Big".to_string()),
                FormattedBlock::Subheader("Small".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_placeholder_paragraph() {
        let blocks = format_blocks(Some(""));
        assert_eq!(
            blocks,
            vec![FormattedBlock::Paragraph(PLACEHOLDER.to_string())]
        );
    }

    #[test]
    fn test_absent_input_yields_placeholder_paragraph() {
        let blocks = format_blocks(None);
        assert_eq!(
            blocks,
            vec![FormattedBlock::Paragraph(PLACEHOLDER.to_string())]
        );
    }

    #[test]
    fn test_structured_mode_detection() {
        let with_header = "Intro text\n**Summary**\nAll good.";
        assert!(has_known_header(with_header));

        let without = "Intro text\nAll good.";
        assert!(!has_known_header(without));
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert!(has_known_header("**SUMMARY**\ntext"));
        assert!(has_known_header("see **key insights** below"));
    }

    #[test]
    fn test_sections_follow_first_occurrence_order() {
        let raw = "**Next Steps**\n- apply\n**Summary**\nShort version.";
        let sections = format_sections(raw);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Next Steps");
        assert_eq!(sections[0].lines, vec!["- apply"]);
        assert_eq!(sections[1].name, "Summary");
        assert_eq!(sections[1].lines, vec!["Short version."]);
    }

    #[test]
    fn test_unrecognized_headers_are_content() {
        let raw = "**Summary**\ntext\n**Random Heading**\nmore";
        let sections = format_sections(raw);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "Summary");
        assert_eq!(sections[0].lines, vec!["text", "**Random Heading**", "more"]);
    }

    #[test]
    fn test_header_match_is_exact_after_stripping() {
        // Substring is not enough for section parsing, only for detection.
        let raw = "**Summary of findings**\ntext";
        let sections = format_sections(raw);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "");
    }

    #[test]
    fn test_hash_marked_headers_recognized() {
        let raw = "### Sources\nhttps://example.com";
        let sections = format_sections(raw);
        assert_eq!(sections[0].name, "Sources");
        assert_eq!(sections[0].lines, vec!["https://example.com"]);
    }

    #[test]
    fn test_no_sections_falls_back_to_raw() {
        let raw = "just a plain reply";
        let sections = format_sections(raw);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "");
        assert_eq!(sections[0].lines, vec![raw]);
    }

    #[test]
    fn test_content_before_first_header_kept_unnamed() {
        let raw = "lead-in line\n**Summary**\nbody";
        let sections = format_sections(raw);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "");
        assert_eq!(sections[0].lines, vec!["lead-in line"]);
        assert_eq!(sections[1].name, "Summary");
    }
}
