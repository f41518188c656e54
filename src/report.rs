//! Terminal rendering of a parse outcome.
//!
//! One line per diagnostic with a severity marker, followed by a summary
//! line. Colours come from `colored`, which honours `NO_COLOR`.

use crate::errors::SpdxParsingError;
use crate::models_spdx::Document;
use colored::*;

/// Every diagnostic, in the order the parser reported them.
pub fn format_diagnostics(source: &str, error: &SpdxParsingError) -> String {
    let mut output = format!("\n{} {}\n\n", "Parsing:".bold(), source.bright_blue());

    for message in error.messages() {
        output.push_str(&format!("{} {}\n", "✗".red().bold(), message));
    }

    let count = error.messages().len();
    output.push_str(&format!(
        "\n{} {}\n",
        "Summary:".bold(),
        format!("{} {}", count, if count == 1 { "error" } else { "errors" })
            .red()
            .bold()
    ));
    output
}

/// One-line summary of a successfully parsed document.
pub fn format_success(source: &str, document: &Document) -> String {
    format!(
        "{} {} ({} packages, {} files, {} snippets, {} relationships)",
        "✓".green().bold(),
        source.bright_blue(),
        document.packages.len(),
        document.files.len(),
        document.snippets.len(),
        document.relationships.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error() -> SpdxParsingError {
        SpdxParsingError::new(vec![
            "Required property SPDXID not specified!".to_string(),
            "Required property name not specified!".to_string(),
        ])
    }

    #[test]
    fn test_format_diagnostics_lists_every_message() {
        colored::control::set_override(false);

        let output = format_diagnostics("sbom.json", &error());

        assert!(output.contains("Parsing: sbom.json"));
        assert!(output.contains("✗ Required property SPDXID not specified!\n"));
        assert!(output.contains("✗ Required property name not specified!\n"));
        assert!(output.contains("Summary: 2 errors"));
    }
}
