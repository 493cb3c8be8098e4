//! Job-search flow: criteria in, job cards out. Picking a result writes it
//! to the session store for the apply flow.

use colored::Colorize;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobSearchRequest;
use crate::render;
use crate::session;
use crate::state::AppState;

pub struct SearchArgs {
    pub query: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub skills: Option<String>,
    pub resume: Option<std::path::PathBuf>,
    /// 1-based index of a result to save for the apply flow.
    pub select: Option<usize>,
}

pub async fn run(state: &AppState, args: SearchArgs) -> Result<(), AppError> {
    let user_resume = match &args.resume {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    let request = JobSearchRequest {
        job_title: args.query,
        location: args.location,
        company: args.company,
        skills: args.skills,
        user_resume,
    };

    let pb = render::spinner("Searching jobs...");
    let result = state.api.search_jobs(&request).await;
    pb.finish_and_clear();
    let response = result?;

    if response.jobs.is_empty() {
        println!("No jobs found. Try broader criteria.");
        return Ok(());
    }

    info!("Search returned {} jobs", response.jobs.len());
    println!(
        "{}\n",
        format!(
            "Showing {} of {} jobs",
            response.jobs.len(),
            response.total_found.max(response.jobs.len())
        )
        .bold()
    );
    for (i, job) in response.jobs.iter().enumerate() {
        render::print_job_card(i + 1, job);
    }

    if let Some(pick) = args.select {
        let job = pick
            .checked_sub(1)
            .and_then(|i| response.jobs.get(i))
            .ok_or_else(|| {
                AppError::MissingInput(format!(
                    "--select {pick} is out of range (1-{}).",
                    response.jobs.len()
                ))
            })?;
        state.session.put(session::SELECTED_JOB, job)?;
        state.session.put(session::JOB_TO_APPLY, job)?;
        println!(
            "{} {} at {}. Run {} to tailor your resume.",
            "Saved:".green().bold(),
            job.title,
            job.company,
            "`pathio apply`".bold()
        );
    }

    Ok(())
}
