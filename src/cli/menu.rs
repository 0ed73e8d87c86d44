// src/cli/menu.rs
use inquire::{InquireError, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::{Config, GeneratorSession};
use crate::models::CharacterClass;
use crate::utils::{checkbox_label, format_classes, styled_strength};

const REGENERATE: &str = "🔄  Regenerate password";
const TOGGLE_CLASS: &str = "🔠  Toggle character classes";
const CHANGE_LENGTH: &str = "📏  Change length";
const TOGGLE_VISIBILITY: &str = "👁️  Show/hide password";
const EXIT: &str = "❌  Exit";

pub async fn run_cli_menu(config: Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");
    println!("Create strong and secure passwords to keep your accounts safe online.");

    let mut session = GeneratorSession::new(config.default_policy(), config.max_password_length)?;

    // Main application loop
    while !should_exit.load(Ordering::SeqCst) {
        print_state(&session);

        let options = vec![REGENERATE, TOGGLE_CLASS, CHANGE_LENGTH, TOGGLE_VISIBILITY, EXIT];

        let selection_result = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .prompt_skippable()
        }).await?;

        // Check if we should exit
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection_result {
            Ok(Some(REGENERATE)) => session.regenerate(),
            Ok(Some(TOGGLE_CLASS)) => toggle_class(&mut session)?,
            Ok(Some(CHANGE_LENGTH)) => change_length(&mut session)?,
            Ok(Some(TOGGLE_VISIBILITY)) => {
                session.toggle_visibility();
            }
            Ok(Some(EXIT)) | Ok(None) => break,
            Ok(Some(_)) => {}
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn print_state<R: rand::Rng>(session: &GeneratorSession<R>) {
    let policy = session.policy();
    println!();
    println!("Password: {}", session.display());
    println!("Strength: {}", styled_strength(session.strength()));
    println!("Length:   {} (max {})", policy.length, session.max_length());
    println!("Classes:  {}", format_classes(&policy.classes));
}

fn toggle_class<R: rand::Rng>(session: &mut GeneratorSession<R>) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = CharacterClass::ALL
        .iter()
        .map(|&class| checkbox_label(class, session.policy().is_enabled(class)))
        .collect();

    let Some(choice) = Select::new("Toggle which character class?", labels.clone()).prompt_skippable()? else {
        return Ok(());
    };

    let Some(index) = labels.iter().position(|label| *label == choice) else {
        return Ok(());
    };

    if let Err(e) = session.toggle(CharacterClass::ALL[index]) {
        println!("❌ {}", e);
    }

    Ok(())
}

fn change_length<R: rand::Rng>(session: &mut GeneratorSession<R>) -> Result<(), Box<dyn Error>> {
    let current = session.policy().length.to_string();
    let help = format!("0 to {}", session.max_length());

    let Some(input) = Text::new("Password length:")
        .with_default(&current)
        .with_help_message(&help)
        .prompt_skippable()?
    else {
        return Ok(());
    };

    match input.trim().parse::<usize>() {
        Ok(length) => {
            let applied = session.set_length(length);
            if applied != length {
                println!("⚠️ Maximum length is {}, using {}", session.max_length(), applied);
            }
        }
        Err(_) => println!("❌ Invalid number: {}", input.trim()),
    }

    Ok(())
}
