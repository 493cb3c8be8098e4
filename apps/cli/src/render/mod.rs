//! Terminal rendering of formatted blocks and domain objects.
//!
//! The web UI rendered classified blocks as styled DOM nodes; here each
//! block kind maps to a styled terminal line. Also owns the loading
//! spinner that stands in for the web UI's boolean loading flag.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::analytics::CareerAnalysis;
use crate::models::job::Job;
use crate::models::tailor::Insights;
use crate::models::tools::AiTool;
use crate::text::format::{format_blocks, FormattedBlock, StructuredSection};

/// Spinner shown while a request is in flight. The caller holds it for
/// the duration of the awaited call and finishes it on either outcome.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Prints one classified block.
pub fn print_block(block: &FormattedBlock) {
    match block {
        FormattedBlock::Header(text) => println!("{}", text.cyan().bold()),
        FormattedBlock::Subheader(text) => println!("{}", text.bold()),
        FormattedBlock::Bullet(text) => println!("  \u{2022} {text}"),
        FormattedBlock::Numbered { ordinal, text } => println!("  {ordinal}. {text}"),
        FormattedBlock::Paragraph(text) => println!("{text}"),
        FormattedBlock::Spacer => println!(),
    }
}

/// Prints a block sequence in order.
pub fn print_blocks(blocks: &[FormattedBlock]) {
    for block in blocks {
        print_block(block);
    }
}

/// Prints structured sections: each name as a header, content lines run
/// through the simple-mode classifier.
pub fn print_sections(sections: &[StructuredSection]) {
    for section in sections {
        if !section.name.is_empty() {
            println!("{}", section.name.cyan().bold());
        }
        let content = section.lines.join("\n");
        print_blocks(&format_blocks(Some(&content)));
        println!();
    }
}

/// The colored-banner equivalent for failures: one short sentence.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

pub fn print_job_card(index: usize, job: &Job) {
    let score = job
        .match_score
        .map(|s| format!(" [{s}% match]").green().to_string())
        .unwrap_or_default();
    println!(
        "{} {}{}",
        format!("{index}.").bold(),
        job.title.cyan().bold(),
        score
    );
    println!("   {} \u{2014} {} ({})", job.company, job.location, job.job_type);
    if !job.requirements.is_empty() {
        println!("   {} {}", "Requires:".bold(), job.requirements.join(", "));
    }
    if let (Some(min), Some(max)) = (job.salary_min, job.salary_max) {
        println!("   {} ${:.0}\u{2013}${:.0}", "Salary:".bold(), min, max);
    }
    if let Some(url) = &job.url {
        println!("   {url}");
    }
    println!();
}

pub fn print_insights(insights: &Insights) {
    println!("{} {}", "Match score:".bold(), insights.match_score);
    if !insights.present_keywords.is_empty() {
        println!(
            "{} {}",
            "Present keywords:".green().bold(),
            insights.present_keywords.join(", ")
        );
    }
    if !insights.missing_keywords.is_empty() {
        println!(
            "{} {}",
            "Missing keywords:".yellow().bold(),
            insights.missing_keywords.join(", ")
        );
    }
    if !insights.ats_flags.is_empty() {
        println!("{} {}", "ATS flags:".red().bold(), insights.ats_flags.join("; "));
    }
    if !insights.do_now.is_empty() {
        println!("\n{}", "Do now:".cyan().bold());
        for (i, task) in insights.do_now.iter().enumerate() {
            println!("  {}. {task}", i + 1);
        }
    }
    if !insights.do_long.is_empty() {
        println!("\n{}", "Longer term:".cyan().bold());
        for (i, task) in insights.do_long.iter().enumerate() {
            println!("  {}. {task}", i + 1);
        }
    }
}

pub fn print_tool_card(tool: &AiTool) {
    let rating = tool
        .rating
        .map(|r| format!(" ({r:.1})"))
        .unwrap_or_default();
    println!("{}{}", tool.name.cyan().bold(), rating);
    if !tool.category.is_empty() || !tool.pricing.is_empty() {
        println!("   {} / {}", tool.category, tool.pricing);
    }
    println!("   {}", tool.description);
    if !tool.features.is_empty() {
        println!("   {} {}", "Features:".bold(), tool.features.join(", "));
    }
    if !tool.website.is_empty() {
        println!("   {}", tool.website);
    }
    println!();
}

pub fn print_analysis(analysis: &CareerAnalysis) {
    println!("{}", "Career Analysis".cyan().bold());
    println!();
    if !analysis.current_role.is_empty() {
        println!("{} {}", "Current role:".bold(), analysis.current_role);
    }
    if !analysis.career_level.is_empty() {
        println!("{} {}", "Career level:".bold(), analysis.career_level);
    }
    println!("{} {}", "Experience:".bold(), format_years(analysis.experience_years));
    if !analysis.skills.is_empty() {
        println!("{} {}", "Skills:".bold(), analysis.skills.join(", "));
    }
    if !analysis.skill_gaps.is_empty() {
        println!("{} {}", "Skill gaps:".yellow().bold(), analysis.skill_gaps.join(", "));
    }
    print_json_panel("Market value", &analysis.market_value);
    print_json_panel("Salary insights", &analysis.salary_insights);
    print_json_panel("Industry insights", &analysis.industry_insights);
    if !analysis.recommendations.is_empty() {
        println!("\n{}", "Recommendations:".cyan().bold());
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            println!("  {}. {rec}", i + 1);
        }
    }
}

fn format_years(years: i64) -> String {
    if years == 1 {
        "1 year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Renders a free-form backend object as an indented key/value panel.
/// Non-object payloads print as-is; null prints nothing.
fn print_json_panel(label: &str, value: &serde_json::Value) {
    match value {
        serde_json::Value::Null => {}
        serde_json::Value::Object(map) if map.is_empty() => {}
        serde_json::Value::Object(map) => {
            println!("\n{}", format!("{label}:").bold());
            for (key, val) in map {
                let shown = match val {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                println!("  {key}: {shown}");
            }
        }
        other => println!("{} {}", format!("{label}:").bold(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_years_singular() {
        assert_eq!(format_years(1), "1 year");
        assert_eq!(format_years(4), "4 years");
        assert_eq!(format_years(0), "0 years");
    }
}
