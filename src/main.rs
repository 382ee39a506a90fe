// src/main.rs
//
// ChicPick command line driver.
// Composition root: configuration -> AppState -> one command (or a shell
// session) -> flush.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

use chicpick::application::commands::*;
use chicpick::application::dto::{GarmentDto, MutationResponseDto, SuggestionStatus};
use chicpick::application::AppState;
use chicpick::{init_app, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "chicpick")]
#[command(about = "Your closet, and what to wear today", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List garments, newest first
    List {
        /// Only garments for this occasion (e.g. Casual, Work, Party)
        occasion: Option<String>,
    },
    /// Photograph-to-closet: classify an image file and save it
    Add {
        /// Path to the garment photo
        path: String,
        /// Save without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Mark a garment as worn today
    Wear { id: String },
    /// Remove a garment
    Delete { id: String },
    /// Suggest something to wear today
    Suggest,
    /// Wardrobe counts
    Summary,
    /// Run several commands in one session (suggestion is kept between them)
    Shell,
}

/// One line typed into the shell
#[derive(Parser, Debug)]
#[command(name = "chicpick", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let state = init_app(&config).context("Failed to start ChicPick")?;

    let result = match cli.command {
        Command::Shell => run_shell(&state).await,
        command => run(command, &state).await,
    };

    if let Err(e) = state.wardrobe_service.flush() {
        log::error!("Final save failed: {}", e);
    }
    result
}

async fn run(command: Command, state: &AppState) -> Result<()> {
    match command {
        Command::List { occasion } => {
            let garments = list_inventory(occasion, state).await.map_err(anyhow::Error::msg)?;
            if garments.is_empty() {
                println!("Closet is empty.");
            }
            for garment in &garments {
                print_garment(garment);
            }
        }

        Command::Add { path, yes } => {
            let begun = begin_add_from_file(path, state).await.map_err(anyhow::Error::msg)?;
            let Some(staged) = begun.staged else {
                println!("Add cancelled.");
                return Ok(());
            };

            println!(
                "Looks like: {} {} for {}",
                staged.color, staged.category, staged.occasion
            );
            print_notices(state);

            if yes || confirm("Save to wardrobe? [Y/n] ")? {
                let committed = commit_add(state).await.map_err(anyhow::Error::msg)?;
                if let Some(garment) = &committed.value {
                    print_garment(garment);
                }
                print_warning(&committed);
            } else {
                discard_add(state).await.map_err(anyhow::Error::msg)?;
                println!("Discarded.");
            }
        }

        Command::Wear { id } => {
            let change = wear_garment(id.clone(), state).await.map_err(anyhow::Error::msg)?;
            if !change.applied {
                println!("No garment with id {}", id);
            }
            print_warning(&change);
        }

        Command::Delete { id } => {
            let change = delete_garment(id.clone(), state).await.map_err(anyhow::Error::msg)?;
            if !change.applied {
                println!("No garment with id {}", id);
            }
            print_warning(&change);
        }

        Command::Suggest => {
            let suggestion = request_suggestion(state).await.map_err(anyhow::Error::msg)?;
            match (suggestion.status, &suggestion.garment) {
                (SuggestionStatus::Suggested, Some(garment)) => {
                    println!("Today's pick:");
                    print_garment(garment);
                }
                _ => println!("{}", suggestion.message.unwrap_or_default()),
            }
        }

        Command::Summary => {
            let summary = wardrobe_summary(state).await.map_err(anyhow::Error::msg)?;
            println!(
                "{} garments: {} ready to wear, {} worn recently, {} never worn",
                summary.total, summary.eligible_today, summary.recently_worn, summary.never_worn
            );
            for (occasion, count) in &summary.by_occasion {
                println!("  {:<12} {}", occasion, count);
            }
        }

        Command::Shell => println!("Already in a shell."),
    }

    print_notices(state);
    Ok(())
}

async fn run_shell(state: &AppState) -> Result<()> {
    println!("ChicPick shell. Type 'help' for commands, 'quit' to leave.");
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => {
                if let Err(e) = run(parsed.command, state).await {
                    eprintln!("Error: {:#}", e);
                }
            }
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    Ok(())
}

fn print_garment(garment: &GarmentDto) {
    println!(
        "  {}  {} {} ({})  {}",
        garment.id, garment.color, garment.category, garment.occasion, garment.recency_label
    );
}

fn print_warning<T>(change: &MutationResponseDto<T>) {
    if let Some(warning) = &change.persist_warning {
        eprintln!("Warning: {}", warning);
    }
}

fn print_notices(state: &AppState) {
    for notice in state.notices.drain() {
        println!("* {}", notice.message);
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer.is_empty() || answer == "y" || answer == "yes")
}
