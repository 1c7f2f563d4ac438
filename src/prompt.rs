use anyhow::Result;
use std::io::{BufRead, Write};

const MAX_MESSAGE_CHARS: usize = 600;
const TRUNCATED_CHARS: usize = 550;

pub fn confirmation_message(names: &[String]) -> String {
    let mut message = String::from(
        "Are you sure you want to permanently delete the following folders and all their contents?\n\n",
    );
    let lines: Vec<String> = names.iter().map(|n| format!("- {}", n)).collect();
    message.push_str(&lines.join("\n"));

    if message.chars().count() > MAX_MESSAGE_CHARS {
        let mut cut: String = message.chars().take(TRUNCATED_CHARS).collect();
        cut.push_str("\n\n...and possibly more.");
        return cut;
    }
    message
}

/// Asks a yes/no question; only an explicit "y" or "yes" counts as consent.
pub fn confirm_on<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<bool> {
    write!(output, "{}\n\nProceed? [y/N] ", message)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
