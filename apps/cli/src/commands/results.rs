//! Results flow: views over the last tailoring run. The web UI's tabs
//! become a `--show` flag; marking an improvement task done re-runs the
//! augmenter over the stored resume and persists the update; `export`
//! downloads a DOCX rendition.

use std::path::PathBuf;

use colored::Colorize;
use tracing::info;

use crate::errors::AppError;
use crate::models::tailor::{ExportRequest, TailoredResults};
use crate::render;
use crate::session;
use crate::state::AppState;
use crate::text::augment::augment;
use crate::text::format::format_blocks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Resume,
    Cover,
    Changes,
    Tasks,
}

fn load_results(state: &AppState) -> Result<TailoredResults, AppError> {
    state
        .session
        .get::<TailoredResults>(session::TAILORED_RESULTS)
        .ok_or_else(|| {
            AppError::MissingInput(
                "No tailored results yet. Run `pathio apply` first.".to_string(),
            )
        })
}

pub fn show(state: &AppState, tab: Tab) -> Result<(), AppError> {
    let results = load_results(state)?;
    match tab {
        Tab::Resume => {
            println!("{}\n", "Tailored Resume".cyan().bold());
            render::print_blocks(&format_blocks(Some(&results.tailored_resume_md)));
        }
        Tab::Cover => {
            println!("{}\n", "Cover Letter".cyan().bold());
            render::print_blocks(&format_blocks(Some(&results.cover_letter_md)));
        }
        Tab::Changes => {
            println!("{}\n", "What Changed".cyan().bold());
            render::print_blocks(&format_blocks(Some(&results.what_changed_md)));
        }
        Tab::Tasks => {
            println!("{}\n", "Improvement Tasks".cyan().bold());
            print_tasks(&results);
        }
    }
    Ok(())
}

fn print_tasks(results: &TailoredResults) {
    let all: Vec<&String> = results
        .insights
        .do_now
        .iter()
        .chain(results.insights.do_long.iter())
        .collect();
    if all.is_empty() {
        println!("No improvement tasks were suggested for this run.");
        return;
    }
    for (i, task) in all.iter().enumerate() {
        let mark = if results.completed_tasks.contains(task) {
            "\u{2713}".green().bold().to_string()
        } else {
            " ".to_string()
        };
        println!("  [{mark}] {}. {task}", i + 1);
    }
    println!(
        "\nMark one done with {}.",
        "`pathio results done <number>`".bold()
    );
}

/// Marks the Nth suggested task complete (or uncomplete, toggling) and
/// updates the stored resume through the augmenter.
pub fn complete_task(state: &AppState, number: usize) -> Result<(), AppError> {
    let mut results = load_results(state)?;

    let all: Vec<String> = results
        .insights
        .do_now
        .iter()
        .chain(results.insights.do_long.iter())
        .cloned()
        .collect();
    let task = number
        .checked_sub(1)
        .and_then(|i| all.get(i))
        .ok_or_else(|| {
            AppError::MissingInput(format!("Task {number} is out of range (1-{}).", all.len()))
        })?;

    // Unmarking only clears the checkbox; the highlights section is
    // recomputed the next time a task is marked done.
    if let Some(pos) = results.completed_tasks.iter().position(|t| t == task) {
        results.completed_tasks.remove(pos);
        println!("Unmarked: {task}");
    } else {
        results.completed_tasks.push(task.clone());
        println!("{} {task}", "Done:".green().bold());

        results.tailored_resume_md =
            augment(&results.tailored_resume_md, &results.completed_tasks);
        info!(
            "Resume highlights updated for {} completed task(s)",
            results.completed_tasks.len()
        );
        println!("Resume updated. View it with {}.", "`pathio results`".bold());
    }

    state.session.put(session::TAILORED_RESULTS, &results)?;
    Ok(())
}

/// Exports the tailored resume or cover letter as a DOCX file, written as
/// `pathio_<which>.docx` unless an output path is given.
pub async fn export(
    state: &AppState,
    which: &str,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let results = load_results(state)?;

    let request = ExportRequest {
        which: which.to_string(),
        tailored_resume_md: results.tailored_resume_md.clone(),
        cover_letter_md: results.cover_letter_md.clone(),
    };

    let pb = render::spinner("Exporting document...");
    let result = state.api.export(&request).await;
    pb.finish_and_clear();
    let bytes = result?;

    let path = output.unwrap_or_else(|| PathBuf::from(format!("pathio_{which}.docx")));
    std::fs::write(&path, bytes)?;
    println!("{} {}", "Saved to".green().bold(), path.display());
    Ok(())
}
