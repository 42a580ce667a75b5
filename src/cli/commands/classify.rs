//! Status code classification command.

use crate::remote::classify;

/// Print the outcome a status code maps to
pub fn cmd_classify(code: i32) -> anyhow::Result<()> {
    for line in classification_lines(code) {
        println!("{}", line);
    }
    Ok(())
}

/// Variant, message and the status the variant stands for.
fn classification_lines(code: i32) -> Vec<String> {
    let outcome = classify(code);
    let kind = if outcome.is_success() { "success" } else { "failure" };
    let status = match outcome.status_code() {
        Some(status) => format!("HTTP {}", status),
        None => "no HTTP status".to_string(),
    };

    vec![
        format!("{:?} ({}, {})", outcome, kind, status),
        format!("  {}", outcome.message()),
    ]
}
