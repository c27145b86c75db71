use indexmap::IndexSet;

use crate::findings::{Finding, FindingKind};

/// One checker diagnostic, as reported by the type-checking collaborator.
/// `line` and `column` are zero-based; `None` for file-level diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub file: String,
	pub line: Option<u32>,
	pub column: Option<u32>,
	pub code: u32,
	pub message: String,
}

/// TS6133 / TS6196: declared but never used or read. Always noise here.
const SUPPRESSED_CODES: [u32; 2] = [6133, 6196];

/// Intersects the checker's diagnostics with the `$ExpectError` line set:
/// diagnostics on unmarked lines are unexpected compile errors, and marked
/// lines with no diagnostic are missing expected errors.
pub fn reconcile(file: &str, diagnostics: &[Diagnostic], error_lines: &IndexSet<u32>) -> Vec<Finding> {
	let mut findings = Vec::new();
	let mut satisfied = IndexSet::new();

	for diagnostic in diagnostics {
		if SUPPRESSED_CODES.contains(&diagnostic.code) {
			continue;
		}
		if diagnostic.file != file {
			// Diagnostics belonging to another file get a generic location.
			findings.push(Finding::new(
				FindingKind::CompileError(format!(
					"compile error in {}: {}",
					diagnostic.file, diagnostic.message
				)),
				1,
				1,
			));
			continue;
		}
		match diagnostic.line {
			Some(line) if error_lines.contains(&line) => {
				satisfied.insert(line);
			}
			Some(line) => {
				findings.push(Finding::new(
					FindingKind::CompileError(diagnostic.message.clone()),
					line + 1,
					diagnostic.column.unwrap_or(0) + 1,
				));
			}
			None => {
				findings.push(Finding::new(
					FindingKind::CompileError(diagnostic.message.clone()),
					1,
					1,
				));
			}
		}
	}

	for &line in error_lines {
		if !satisfied.contains(&line) {
			findings.push(Finding::new(FindingKind::MissingExpectedError, line + 1, 1));
		}
	}

	findings
}
