//! Validate presets use case
//!
//! Runs the domain validation pass over a freshly loaded document. This is
//! purely a report: it never changes what [`ResolvePresetsUseCase`]
//! returns.
//!
//! [`ResolvePresetsUseCase`]: super::resolve_presets::ResolvePresetsUseCase

use crate::ports::preset_source::{PresetSourceError, PresetSourcePort};
use presets_domain::{PresetIssue, Severity, validate_document};
use std::sync::Arc;
use tracing::info;

/// Outcome of validating a preset document.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Where the document was loaded from
    pub location: String,
    pub group_count: usize,
    pub preset_count: usize,
    pub issues: Vec<PresetIssue>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        presets_domain::has_errors(&self.issues)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Use case for checking a preset document for dangling names and cycles.
#[derive(Clone)]
pub struct ValidatePresetsUseCase {
    source: Arc<dyn PresetSourcePort>,
}

impl ValidatePresetsUseCase {
    pub fn new(source: Arc<dyn PresetSourcePort>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> Result<ValidationReport, PresetSourceError> {
        let document = self.source.load()?;
        let issues = validate_document(&document);
        let report = ValidationReport {
            location: self.source.location(),
            group_count: document.tool_groups.len(),
            preset_count: document.presets.len(),
            issues,
        };
        info!(
            "Validated {}: {} errors, {} warnings",
            report.location,
            report.error_count(),
            report.warning_count()
        );
        Ok(report)
    }
}
