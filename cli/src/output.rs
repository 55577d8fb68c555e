//! Console output for resolved presets and validation reports

use colored::Colorize;
use presets_application::ValidationReport;
use presets_domain::{ResolvedPreset, Severity};

/// Formats resolution results for console display
pub struct PresetFormatter;

impl PresetFormatter {
    /// Format presets as a pretty-printed JSON array
    pub fn format_json(presets: &[ResolvedPreset]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(presets)
    }

    /// Format presets as a human-readable listing
    pub fn format_text(presets: &[ResolvedPreset]) -> String {
        let mut output = String::new();

        for preset in presets {
            let badge = if preset.dispatchable {
                "dispatchable".green()
            } else {
                "manual".dimmed()
            };
            output.push_str(&format!(
                "{} [{}] {}\n",
                preset.id.cyan().bold(),
                badge,
                preset.description
            ));
            output.push_str(&format!("  {} {}\n", "model:".yellow(), preset.model));
            output.push_str(&format!(
                "  {} {}\n",
                "groups:".yellow(),
                preset.tool_groups.join(", ")
            ));
            output.push_str(&format!(
                "  {} ({}) {}\n",
                "tools:".yellow(),
                preset.tools.len(),
                preset.tools.join(", ")
            ));
        }

        output
    }

    /// Format a validation report
    pub fn format_report(report: &ValidationReport) -> String {
        let mut output = format!(
            "{} {} ({} groups, {} presets)\n",
            "Checked".cyan().bold(),
            report.location,
            report.group_count,
            report.preset_count
        );

        if report.issues.is_empty() {
            output.push_str(&format!("{}\n", "No issues found".green()));
            return output;
        }

        for issue in &report.issues {
            let label = match issue.severity {
                Severity::Error => issue.severity.to_string().as_str().red().bold(),
                Severity::Warning => issue.severity.to_string().as_str().yellow().bold(),
            };
            output.push_str(&format!("  {}: {}\n", label, issue.message));
        }

        output.push_str(&format!(
            "{} errors, {} warnings\n",
            report.error_count(),
            report.warning_count()
        ));
        output
    }
}
