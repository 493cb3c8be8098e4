//! Career-coach flow: a conversational loop. History lives in-process for
//! the life of the session, as it did in the web page's component state.
//! Replies go through the formatter: structured mode when the backend
//! honors the heading contract, simple mode otherwise.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::errors::AppError;
use crate::models::coach::{ChatMessage, CoachRequest, CoachResponse};
use crate::render;
use crate::state::AppState;
use crate::text::format::{format_blocks, format_sections, has_known_header};

pub struct CoachArgs {
    /// One-shot question; omitting it starts the interactive loop.
    pub message: Option<String>,
}

pub async fn run(state: &AppState, args: CoachArgs) -> Result<(), AppError> {
    let mut history: Vec<ChatMessage> = Vec::new();

    if let Some(message) = args.message {
        return ask(state, &mut history, message).await;
    }

    println!(
        "{} Ask about roles, salaries, or career moves. Type {} to leave.\n",
        "Pathio career coach.".cyan().bold(),
        "quit".bold()
    );

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "you:".bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let message = line.trim().to_string();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("quit") || message.eq_ignore_ascii_case("exit") {
            break;
        }

        // A failed turn is reported inline and the loop continues; the
        // conversation so far is untouched.
        if let Err(e) = ask(state, &mut history, message).await {
            render::print_error(&e.user_message());
            tracing::error!("Coach turn failed: {e}");
        }
    }
    Ok(())
}

async fn ask(
    state: &AppState,
    history: &mut Vec<ChatMessage>,
    message: String,
) -> Result<(), AppError> {
    let mut messages = history.clone();
    messages.push(ChatMessage::user(message.clone()));
    let request = CoachRequest { messages };

    let pb = render::spinner("Thinking...");
    let result = state.api.coach(&request).await;
    pb.finish_and_clear();
    let response = result?;

    print_reply(&response);

    history.push(ChatMessage::user(message));
    history.push(ChatMessage::assistant(response.reply));
    Ok(())
}

fn print_reply(response: &CoachResponse) {
    println!();
    if has_known_header(&response.reply) {
        render::print_sections(&format_sections(&response.reply));
    } else {
        render::print_blocks(&format_blocks(Some(&response.reply)));
        println!();
    }

    if !response.next_steps.is_empty() {
        println!("{}", "Next steps:".cyan().bold());
        for (i, step) in response.next_steps.iter().enumerate() {
            println!("  {}. {step}", i + 1);
        }
        println!();
    }

    let labels: Vec<String> = response
        .sources
        .iter()
        .filter_map(CoachResponse::source_label)
        .collect();
    if !labels.is_empty() {
        println!("{}", "Sources:".bold());
        for label in labels {
            println!("  {label}");
        }
        println!();
    }
}
