use indexmap::IndexSet;
use tracing::debug;

use crate::{
	associate::associate,
	directive::{parse_directives, Assertion},
	findings::{Finding, FindingKind},
	host::TypeHost,
	matcher::matches,
	reconcile::reconcile,
	snapshot::{SnapshotCorrection, SnapshotStore},
};

/// Checker configuration. `disable_snapshot_fix` turns snapshot
/// auto-correction off; writes are permitted by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
	pub disable_snapshot_fix: bool,
}

/// Everything one file-check produced: the findings to report and the
/// snapshot corrections the host may apply, each at most once.
#[derive(Debug, Default)]
pub struct CheckOutcome {
	pub findings: Vec<Finding>,
	pub corrections: Vec<SnapshotCorrection>,
}

pub struct AssertionChecker<'a, H, S: ?Sized> {
	host: &'a H,
	snapshots: &'a S,
	options: Options,
}

impl<'a, H: TypeHost, S: SnapshotStore + ?Sized> AssertionChecker<'a, H, S> {
	pub fn new(host: &'a H, snapshots: &'a S, options: Options) -> Self {
		Self {
			host,
			snapshots,
			options,
		}
	}

	pub fn check_file(&self, file: &str) -> CheckOutcome {
		let mut outcome = CheckOutcome::default();

		let Some(parsed) = self.host.parsed(file) else {
			outcome.findings.push(Finding::new(
				FindingKind::FileNotIncluded(file.to_owned()),
				1,
				1,
			));
			return outcome;
		};

		let diagnostics = self.host.diagnostics(file);
		debug!(file, diagnostics = diagnostics.len(), "checking assertions");

		// A file with no directive anywhere does not opt in to assertion
		// checking; every diagnostic is then a plain compile error.
		let source = &*parsed.source_file.src;
		let opted_in = source.contains("$ExpectType") || source.contains("$ExpectError");
		if !opted_in && !parsed.is_declaration {
			outcome.findings = reconcile(file, &diagnostics, &IndexSet::new());
			return outcome;
		}

		let mut directives = parse_directives(&parsed.source_file, &parsed.comments);
		debug!(
			file,
			assertions = directives.assertions.len(),
			error_lines = directives.error_lines.len(),
			"parsed directives"
		);

		for &line in &directives.duplicates {
			outcome
				.findings
				.push(Finding::new(FindingKind::DuplicateAssertion, line + 1, 1));
		}
		for error in &directives.syntax_errors {
			outcome.findings.push(Finding::new(
				FindingKind::SyntaxError(error.kind),
				error.line + 1,
				1,
			));
		}

		outcome
			.findings
			.extend(reconcile(file, &diagnostics, &directives.error_lines));

		for assertion in directives.assertions.values_mut() {
			if let Assertion::Snapshot { name, expected } = assertion {
				*expected = self.snapshots.read(file, name);
			}
		}

		let consumed = associate(&parsed.source_file, &parsed.program, &mut directives.assertions);

		for matched in consumed {
			let actual = self.host.type_at(file, matched.span).unwrap_or_default();
			let (line, column) = parsed.line_col(matched.span.lo);

			match matched.assertion {
				Assertion::Manual { expected } => {
					if !matches(&actual, &expected) {
						outcome.findings.push(Finding::new(
							FindingKind::TypeMismatch { expected, actual },
							line,
							column,
						));
					}
				}
				Assertion::Snapshot { name, expected } => match expected {
					Some(expected) if matches(&actual, &expected) => {}
					Some(expected) => {
						outcome.findings.push(Finding::new(
							FindingKind::SnapshotMismatch {
								name: name.clone(),
								expected,
								actual: actual.clone(),
							},
							line,
							column,
						));
						self.correct(&mut outcome, file, name, actual);
					}
					None => {
						outcome.findings.push(Finding::new(
							FindingKind::SnapshotNotFound { name: name.clone() },
							line,
							column,
						));
						self.correct(&mut outcome, file, name, actual);
					}
				},
			}
		}

		for &line in directives.assertions.keys() {
			outcome
				.findings
				.push(Finding::new(FindingKind::OrphanAssertion, line + 1, 1));
		}

		outcome
	}

	fn correct(&self, outcome: &mut CheckOutcome, file: &str, name: String, value: String) {
		if self.options.disable_snapshot_fix {
			return;
		}
		debug!(file, name = name.as_str(), "scheduling snapshot correction");
		outcome.corrections.push(SnapshotCorrection {
			file: file.to_owned(),
			name,
			value,
		});
	}
}
