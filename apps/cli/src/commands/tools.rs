//! AI-tool discovery flow: query plus optional category filter against
//! the backend's curated database.

use colored::Colorize;

use crate::errors::AppError;
use crate::models::tools::AiToolSearchRequest;
use crate::render;
use crate::state::AppState;

pub struct ToolsArgs {
    pub query: String,
    pub category: Option<String>,
}

pub async fn run(state: &AppState, args: ToolsArgs) -> Result<(), AppError> {
    let request = AiToolSearchRequest {
        query: args.query,
        category: args.category,
    };

    let pb = render::spinner("Searching AI tools...");
    let result = state.api.search_ai_tools(&request).await;
    pb.finish_and_clear();
    let response = result?;

    if response.tools.is_empty() {
        println!("No tools matched. Try a different query or category.");
        return Ok(());
    }

    println!(
        "{}\n",
        format!(
            "{} tools for \"{}\" in {}",
            response.total,
            response.search_query,
            response.category
        )
        .bold()
    );
    for tool in &response.tools {
        render::print_tool_card(tool);
    }
    Ok(())
}
