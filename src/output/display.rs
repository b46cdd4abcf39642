//! Display functions for command results

use super::formatters::{colored_row, colored_tile};
use crate::commands::{CalendarReport, ChallengeLink, CheckResult, TodayResult};
use crate::core::Word;
use colored::Colorize;

/// Print which daily puzzle is live
pub fn print_today_result(result: &TodayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TODAY'S WORDLE:".bright_cyan().bold(),
        result.description.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Seed:        {}", result.seed);
    println!("   Length:      {} letters", result.length);
    println!("   Game:        {}", result.game_number);
    match &result.target {
        Some(target) => println!("   Answer:      {}", spell(target)),
        None => println!("   Answer:      {}", "hidden (use --reveal)".bright_black()),
    }
    println!();
}

/// Print challenge links, one per line
pub fn print_challenge_links(links: &[ChallengeLink]) {
    if links.is_empty() {
        println!("{}", "No words of that length to choose from.".yellow());
        return;
    }

    println!("\n🔗 {}", "Challenge links:".bright_cyan().bold());
    for (i, link) in links.iter().enumerate() {
        println!(
            "   {}. {:<12} {}",
            (i + 1).to_string().bright_black(),
            link.word.text().to_uppercase().bright_white().bold(),
            link.query().green()
        );
    }
    println!();
}

/// Print the word hidden in a challenge token
pub fn print_decoded(token: &str, word: &Word) {
    println!("{} → {}", token.bright_black(), spell(word));
}

/// Print the feedback history and the validator's verdict
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\nTarget {} ({} mode)",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.difficulty
    );
    for (i, (_, feedback)) in result.history.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bright_black(), colored_row(feedback));
    }

    let candidate = result.candidate.text().to_uppercase();
    match &result.verdict {
        Ok(()) => println!("\n✅ {} is allowed", candidate.green().bold()),
        Err(violation) => println!(
            "\n❌ {} is rejected: {}",
            candidate.red().bold(),
            violation.to_string().yellow()
        ),
    }
}

/// Print a calendar of daily answers
pub fn print_calendar(report: &CalendarReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DAILY CALENDAR".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for entry in &report.entries {
        let marker = if entry.stable {
            "✓".green()
        } else {
            "✗".red().bold()
        };
        println!(
            "   {}  {}  {}  {}",
            entry.date.format("%a %Y-%m-%d"),
            entry.seed.to_string().bright_black(),
            spell(&entry.target),
            marker
        );
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Dates:          {}", report.entries.len());
    println!("   Starts per day: {}", report.repeat);
    println!("   Time taken:     {:.2}s", report.duration.as_secs_f64());
    if report.all_stable() {
        println!("   Determinism:    {}", "every start agreed".green());
    } else {
        println!("   Determinism:    {}", "targets differed between starts".red().bold());
    }

    let repeats = report.repeats();
    if !repeats.is_empty() {
        let dates: Vec<String> = repeats.iter().map(|d| d.to_string()).collect();
        println!("   Back-to-back:   {}", dates.join(", ").yellow());
    }
    println!();
}

/// A word as a run of plain tiles
fn spell(word: &Word) -> String {
    word.chars()
        .iter()
        .map(|&letter| colored_tile(letter, None).to_string())
        .collect()
}
