//! Interactive play mode
//!
//! The player keeps a secret code and scores each suggested guess by hand.

use crate::core::{ALL_CODES, Code, Score};
use crate::output::formatters::score_to_pegs;
use crate::solver::{SolveError, Solver, narrow};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive mode where the user acts as the code keeper
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(solver: &Solver) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-peg code using the colors R G B Y O P (repeats allowed).");
    println!("After each guess, enter the score:\n");
    println!("  - Digits: '21' or '2,1' for 2 black and 1 white");
    println!("  - Pegs:   'BBW' for the same score, '-' for nothing");
    println!("  - Or type 'win' if the guess is your code!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last score\n");

    // Candidate sets at the start of each round; the last one is current
    let mut rounds: Vec<Vec<Code>> = vec![ALL_CODES.to_vec()];
    let mut history: Vec<(Code, Score)> = Vec::new();

    loop {
        let candidates = rounds.last().cloned().unwrap_or_default();
        let turn = rounds.len();

        let guess = match solver.next_guess(&candidates) {
            Ok(guess) => guess,
            Err(SolveError::NoCandidates) => {
                println!(
                    "\n{}",
                    "❌ No code matches those scores! One of them must be wrong.".red()
                );
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match get_user_input("Command")?.to_lowercase().as_str() {
                    "undo" | "u" => {
                        undo(&mut rounds, &mut history);
                    }
                    "new" | "n" => restart(&mut rounds, &mut history),
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => {}
                }
                continue;
            }
            Err(e) => return Err(e.to_string()),
        };

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", candidates.len());
        println!("────────────────────────────────────────────────────────────");
        println!(
            "\n🎯 Suggested guess: {}\n",
            guess.to_string().bright_yellow().bold()
        );

        // Show the candidates if only a few are left
        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in &candidates {
                println!("  • {candidate}");
            }
            println!();
        }

        let score = loop {
            let input = get_user_input("Enter score (e.g. 21, BBW, 'win', or command)")?
                .to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    restart(&mut rounds, &mut history);
                    break None;
                }
                "undo" | "u" => {
                    if undo(&mut rounds, &mut history) {
                        break None;
                    }
                }
                _ => match Score::parse(&input) {
                    Ok(score) => break Some(score),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(score) = score else { continue };
        history.push((guess, score));

        if score.is_win() {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "        🎉  C O D E   B R O K E N !  🎉        "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());
            println!(
                "\n  Solution found in {} {}",
                turn.to_string().bright_cyan().bold(),
                if turn == 1 { "guess" } else { "guesses" }
            );

            println!("\n  Guess history:");
            for (i, (code, s)) in history.iter().enumerate() {
                println!(
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    code.to_string().bright_white().bold(),
                    score_to_pegs(*s)
                );
            }
            println!();

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => restart(&mut rounds, &mut history),
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        let remaining = narrow(&candidates, &guess, score);
        rounds.push(remaining);
    }
}

/// Drop the last scored round; returns false if there is nothing to undo
fn undo(rounds: &mut Vec<Vec<Code>>, history: &mut Vec<(Code, Score)>) -> bool {
    if history.pop().is_some() {
        rounds.pop();
        println!("✓ Undone! Back to turn {}\n", rounds.len());
        true
    } else {
        println!("Nothing to undo!\n");
        false
    }
}

fn restart(rounds: &mut Vec<Vec<Code>>, history: &mut Vec<(Code, Score)>) {
    rounds.truncate(1);
    history.clear();
    println!("\n🔄 New game started!\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Input closed".to_string());
    }

    Ok(input.trim().to_string())
}
