//! Task-driven resume augmentation.
//!
//! When the user marks an improvement task as done, the tailored resume is
//! updated in place, with no server round-trip, by synthesizing a
//! "Job-Specific Highlights" section that records the skills extracted
//! from every completed task so far. Recomputing from the same task set
//! yields byte-identical output, and at most one highlights section ever
//! exists.

use std::sync::LazyLock;

use regex::Regex;

/// Skill-list capture patterns, tried in precedence order; the first match
/// wins even if a later pattern would capture a different substring.
static SKILL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:add|include|mention|highlight).*?(?:skills?|technologies?|tools?)[:\s]+([^.]+)",
        r"(?i)experience with ([^.]+)",
        r"(?i)knowledge of ([^.]+)",
        r"(?i)proficiency in ([^.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("skill pattern regex"))
    .collect()
});

/// Splits a captured skill list on `,`, the word `and`, `|`, or `&`.
static SKILL_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|\band\b|\||&").expect("skill separator regex"));

static HIGHLIGHTS_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#{1,3}\s*Job-Specific Highlights").expect("highlights heading regex")
});
static EXPERIENCE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#{1,3}\s*(?:Experience|Work Experience|Professional Experience|Relevant Skills)")
        .expect("experience heading regex")
});
static ANY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,3}\s").expect("heading regex"));

/// Fallback insertion point when no experience-like heading exists:
/// right after the name/contact block at the top of the document.
const FALLBACK_INSERT_INDEX: usize = 3;

/// Extracts candidate skill phrases from a natural-language improvement
/// task. Heuristic: only the first matching pattern's capture is used.
/// Pieces outside (2, 30) characters are discarded.
pub fn extract_skills(task: &str) -> Vec<String> {
    for pattern in SKILL_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(task) {
            return SKILL_SEPARATORS
                .split(&caps[1])
                .map(str::trim)
                .filter(|s| s.len() > 2 && s.len() < 30)
                .map(String::from)
                .collect();
        }
    }
    Vec::new()
}

/// Union of skills across all completed tasks, deduplicated, order
/// reflecting first occurrence.
fn collect_skills(completed_tasks: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for task in completed_tasks {
        for skill in extract_skills(task) {
            if !seen.contains(&skill) {
                seen.push(skill);
            }
        }
    }
    seen
}

/// The section body: blank line, optional skills line, completed-count
/// line, trailing blank line.
fn highlights_body(completed_tasks: &[String]) -> Vec<String> {
    let mut body = vec![String::new()];
    let skills = collect_skills(completed_tasks);
    if !skills.is_empty() {
        body.push(format!("\u{2713} Additional Skills: {}", skills.join(" \u{2022} ")));
    }
    let plural = if completed_tasks.len() > 1 { "s" } else { "" };
    body.push(format!(
        "\u{2713} Completed {} improvement{} to strengthen this application",
        completed_tasks.len(),
        plural
    ));
    body.push(String::new());
    body
}

/// Rewrites the resume so its "Job-Specific Highlights" section reflects
/// the given set of completed improvement tasks.
///
/// If the section exists its body is replaced up to the next heading;
/// otherwise a new section is inserted before the first experience-like
/// heading, or at a fixed offset near the top when none exists. Malformed
/// resumes degrade to an imperfect anchor point, never an error.
pub fn augment(resume: &str, completed_tasks: &[String]) -> String {
    let mut lines: Vec<String> = resume.split('\n').map(String::from).collect();
    let body = highlights_body(completed_tasks);

    let existing = lines.iter().position(|l| HIGHLIGHTS_HEADING.is_match(l));
    match existing {
        Some(heading_idx) => {
            let mut section_end = heading_idx + 1;
            while section_end < lines.len() && !ANY_HEADING.is_match(&lines[section_end]) {
                section_end += 1;
            }
            lines.splice(heading_idx + 1..section_end, body);
        }
        None => {
            let insert_idx = lines
                .iter()
                .position(|l| EXPERIENCE_HEADING.is_match(l))
                .unwrap_or(FALLBACK_INSERT_INDEX)
                .min(lines.len());
            let mut section = vec![String::new(), "### Job-Specific Highlights".to_string()];
            section.extend(body);
            lines.splice(insert_idx..insert_idx, section);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_skills_experience_with() {
        assert_eq!(
            extract_skills("Add experience with Python, SQL and Docker"),
            vec!["Python", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_extract_skills_trailing_list_after_colon() {
        assert_eq!(
            extract_skills("Include these skills: Rust, Terraform"),
            vec!["Rust", "Terraform"]
        );
    }

    #[test]
    fn test_extract_skills_knowledge_of() {
        assert_eq!(
            extract_skills("Demonstrate knowledge of Kubernetes | Helm"),
            vec!["Kubernetes", "Helm"]
        );
    }

    #[test]
    fn test_extract_skills_proficiency_in() {
        assert_eq!(
            extract_skills("Show proficiency in GraphQL & PostgreSQL"),
            vec!["GraphQL", "PostgreSQL"]
        );
    }

    #[test]
    fn test_extract_skills_no_pattern_match() {
        assert!(extract_skills("Tighten up the summary paragraph").is_empty());
    }

    #[test]
    fn test_extract_skills_length_bounds() {
        // "Go" is 2 chars, excluded by the exclusive lower bound.
        assert_eq!(
            extract_skills("Add experience with Go, Rust"),
            vec!["Rust"]
        );
    }

    #[test]
    fn test_augment_inserts_before_experience_heading() {
        let resume = "# Jane Doe\n\n## Experience\n- Did things";
        let updated = augment(resume, &tasks(&["Add experience with Kubernetes"]));

        let highlights_pos = updated.find("### Job-Specific Highlights").unwrap();
        let experience_pos = updated.find("## Experience").unwrap();
        assert!(highlights_pos < experience_pos);
        assert!(updated.contains("\u{2713} Additional Skills: Kubernetes"));
        assert!(updated.contains("Completed 1 improvement to strengthen this application"));
    }

    #[test]
    fn test_augment_fallback_offset_without_experience_heading() {
        let resume = "# Jane Doe\njane@example.com\nSan Francisco\nSummary text\nMore text";
        let updated = augment(resume, &tasks(&["Add experience with Rust"]));

        let lines: Vec<&str> = updated.split('\n').collect();
        // Inserted at index 3: blank line then the heading.
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "### Job-Specific Highlights");

        let count = updated.matches("Job-Specific Highlights").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_augment_short_document_clamps_insert() {
        let updated = augment("# Jane Doe", &tasks(&["Add experience with Rust"]));
        assert!(updated.contains("### Job-Specific Highlights"));
    }

    #[test]
    fn test_augment_is_idempotent() {
        let resume = "# Jane Doe\n\n## Experience\n- Did things";
        let completed = tasks(&["Add experience with Python, SQL"]);

        let once = augment(resume, &completed);
        let twice = augment(&once, &completed);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_augment_new_task_updates_without_duplicates() {
        let resume = "# Jane Doe\n\n## Experience\n- Did things";
        let first = tasks(&["Add experience with Python"]);
        let second = tasks(&[
            "Add experience with Python",
            "Show proficiency in Python & Docker",
        ]);

        let after_first = augment(resume, &first);
        let after_second = augment(&after_first, &second);

        assert!(after_second.contains("Python \u{2022} Docker"));
        assert_eq!(after_second.matches("Python").count(), 1);
        assert!(after_second.contains("Completed 2 improvements"));
        assert_eq!(after_second.matches("Job-Specific Highlights").count(), 1);
    }

    #[test]
    fn test_exactly_one_section_after_repeated_augments() {
        let mut resume = "# Jane Doe\n\n## Work Experience\n- Did things".to_string();
        let completed = tasks(&["Add experience with Python", "Highlight your tools: Git, Bash"]);
        for _ in 0..3 {
            resume = augment(&resume, &completed);
        }
        assert_eq!(resume.matches("Job-Specific Highlights").count(), 1);
    }

    #[test]
    fn test_skill_order_is_first_seen() {
        let completed = tasks(&[
            "Add experience with Docker, Python",
            "Show proficiency in Python & Kafka",
        ]);
        let updated = augment("# Jane Doe\n\n## Experience\nx", &completed);
        assert!(updated.contains("Docker \u{2022} Python \u{2022} Kafka"));
    }
}
