use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Placeholder rendered when the manifest carries no version.
const MISSING_VERSION: &str = "unknown";

/// Formats the confirmation question shown to the operator.
#[must_use]
pub fn question_for(version: Option<&str>) -> String {
    format!(
        "Do you want to publish version {} to crates.io [y/N] ",
        version.unwrap_or(MISSING_VERSION)
    )
}

/// Writes the question to the terminal and reads one line of operator input.
///
/// Blocks until a line arrives; end of input counts as an empty answer.
///
/// # Result
/// Returns the raw response line.
///
/// # Errors
/// Returns an error if the prompt cannot be written or stdin cannot be read.
pub fn ask(question: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{question}").context("Failed to write prompt")?;
    stdout.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer).context("Failed to read operator input")?;

    Ok(answer)
}

/// Whether an answer confirms the publish. Only a lone `y` (any casing,
/// surrounding whitespace ignored) counts; everything else is a refusal.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[test]
fn question_embeds_the_version() {
    let question = question_for(Some("1.2.3"));
    assert!(question.contains("1.2.3"), "version missing from: {question}");
}

#[test]
fn question_falls_back_to_placeholder() {
    let question = question_for(None);
    assert!(question.contains("unknown"), "placeholder missing from: {question}");
}

#[test]
fn only_a_lone_y_is_affirmative() {
    assert!(is_affirmative("y"));
    assert!(is_affirmative("Y"));
    assert!(is_affirmative("  y \n"));

    assert!(!is_affirmative(""));
    assert!(!is_affirmative("\n"));
    assert!(!is_affirmative("   "));
    assert!(!is_affirmative("n"));
    assert!(!is_affirmative("yes"));
    assert!(!is_affirmative("ye"));
}
