//! Apply flow: tailors a resume to a job. The job comes from the session
//! store (saved by `search`), a file, or an inline string; the resume from
//! a file or stdin. Results are rendered and persisted for `results`.

use std::path::PathBuf;

use colored::Colorize;

use crate::commands::read_resume_text;
use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::tailor::QuickTailorRequest;
use crate::render;
use crate::session;
use crate::state::AppState;

pub struct ApplyArgs {
    pub resume: Option<PathBuf>,
    pub job_file: Option<PathBuf>,
    pub job_text: Option<String>,
}

/// Resolves the job description in precedence order: inline text, file,
/// saved job, pasted job. Missing everywhere is a prompt state, not a
/// crash.
fn resolve_job_text(state: &AppState, args: &ApplyArgs) -> Result<String, AppError> {
    if let Some(text) = &args.job_text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.job_file {
        return Ok(std::fs::read_to_string(path)?);
    }
    if let Some(job) = state.session.get::<Job>(session::JOB_TO_APPLY) {
        println!(
            "Tailoring for saved job: {} at {}\n",
            job.title.bold(),
            job.company
        );
        let mut text = format!("{}\n{}\n{}\n\n{}", job.title, job.company, job.location, job.description);
        if !job.requirements.is_empty() {
            text.push_str(&format!("\n\nRequirements: {}", job.requirements.join(", ")));
        }
        return Ok(text);
    }
    if let Some(pasted) = state.session.get::<String>(session::PASTED_JOB) {
        return Ok(pasted);
    }
    Err(AppError::MissingInput(
        "No job to apply to. Run `pathio search --select N`, or pass --job-file/--job-text."
            .to_string(),
    ))
}

pub async fn run(state: &AppState, args: ApplyArgs) -> Result<(), AppError> {
    let job_text = resolve_job_text(state, &args)?;
    let resume_text = read_resume_text(args.resume.as_deref())?;

    // Keep the pasted job around so a re-run doesn't need the flag again.
    if args.job_text.is_some() || args.job_file.is_some() {
        state.session.put(session::PASTED_JOB, &job_text)?;
    }

    let request = QuickTailorRequest {
        resume_text,
        job_text,
    };

    let pb = render::spinner("Tailoring your resume...");
    let result = state.api.quick_tailor(&request).await;
    pb.finish_and_clear();
    let results = result?;

    if let Some(error) = &results.error {
        println!("{} {}", "Note:".yellow().bold(), error);
    }

    render::print_insights(&results.insights);
    state.session.put(session::TAILORED_RESULTS, &results)?;

    println!(
        "\n{} Run {} to view the tailored resume, cover letter, and tasks.",
        "Saved.".green().bold(),
        "`pathio results`".bold()
    );
    Ok(())
}
