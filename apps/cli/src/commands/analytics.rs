//! Career-analytics flow: resume text or file in, structured analysis
//! report out. File uploads are forwarded as multipart; the backend does
//! the text extraction.

use std::path::PathBuf;

use crate::commands::read_resume_text;
use crate::errors::AppError;
use crate::render;
use crate::state::AppState;

pub struct AnalyticsArgs {
    pub file: Option<PathBuf>,
    pub text_from: Option<PathBuf>,
}

pub async fn run(state: &AppState, args: AnalyticsArgs) -> Result<(), AppError> {
    let result = if let Some(path) = &args.file {
        let pb = render::spinner("Analyzing your resume...");
        let result = state.api.analyze_resume_file(path).await;
        pb.finish_and_clear();
        result
    } else {
        // Gather input before the spinner starts; stdin may block on the user.
        let text = read_resume_text(args.text_from.as_deref())?;
        let pb = render::spinner("Analyzing your resume...");
        let result = state.api.analyze_resume(text).await;
        pb.finish_and_clear();
        result
    };

    let analysis = result?;
    render::print_analysis(&analysis);
    Ok(())
}
