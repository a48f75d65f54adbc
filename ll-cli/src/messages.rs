//! User-friendly message formatting helpers
//!
//! Success and error messages with actionable next steps and copy-pasteable
//! commands.

use ll_client::LinkError;

/// Print success message with next steps
pub fn print_success(message: &str, next_steps: &[&str]) {
    println!("✓ {message}");
    if !next_steps.is_empty() {
        println!("\nNext steps:");
        for step in next_steps {
            println!("  {step}");
        }
    }
}

/// Print error message with suggestions
pub fn print_error(message: &str, suggestions: &[&str]) {
    eprintln!("✗ {message}");
    if !suggestions.is_empty() {
        eprintln!();
        for suggestion in suggestions {
            eprintln!("  {suggestion}");
        }
    }
}

/// Suggestions for a failed command, based on the underlying link error
pub fn suggestions_for(error: &anyhow::Error) -> Vec<&'static str> {
    match error.downcast_ref::<LinkError>() {
        Some(LinkError::Serial(_)) => vec![
            "List devices with: ledlink ports",
            "Pick one with: ledlink stream --device <path>",
        ],
        Some(LinkError::NotReady { .. }) => vec![
            "Check that the firmware prints its ready line on boot",
            "Skip the handshake with: --no-wait",
        ],
        Some(LinkError::Config(_)) => vec!["Config files are JSON, e.g. {\"device\": \"/dev/ttyACM0\"}"],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_follow_link_error() {
        let err = anyhow::Error::new(LinkError::NotReady {
            token: "READY".into(),
            waited_ms: 5000,
        })
        .context("Waiting for device");
        assert_eq!(suggestions_for(&err).len(), 2);

        let other = anyhow::anyhow!("something else");
        assert!(suggestions_for(&other).is_empty());
    }
}
