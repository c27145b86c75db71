use std::fmt::Display;

use crate::directive::SyntaxErrorKind;

/// One reported problem: what went wrong and where. Line and column are
/// 1-based; the human message comes from `Display` on the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
	pub kind: FindingKind,
	pub line: u32,
	pub column: u32,
}

impl Finding {
	pub fn new(kind: FindingKind, line: u32, column: u32) -> Self {
		Self { kind, line, column }
	}

	pub fn message(&self) -> String {
		self.kind.to_string()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
	/// A checker diagnostic on a line with no `$ExpectError`.
	CompileError(String),
	/// The file is not part of the checked program; nothing else runs.
	FileNotIncluded(String),
	/// `$ExpectType` disagreed with the checker.
	TypeMismatch { expected: String, actual: String },
	/// `$ExpectTypeSnapshot` named a snapshot that was never recorded.
	SnapshotNotFound { name: String },
	/// `$ExpectTypeSnapshot` disagreed with the stored snapshot.
	SnapshotMismatch {
		name: String,
		expected: String,
		actual: String,
	},
	/// An assertion whose line matched no syntax node.
	OrphanAssertion,
	/// Two or more assertions landed on one line; none survive.
	DuplicateAssertion,
	/// `$ExpectError` with no diagnostic reported on its line.
	MissingExpectedError,
	/// A directive missing its required argument.
	SyntaxError(SyntaxErrorKind),
}

impl Display for FindingKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use FindingKind::*;

		match self {
			CompileError(message) => {
				write!(f, "Compile error: {message}")
			}
			FileNotIncluded(file) => {
				write!(f, "File '{file}' is not included in the checked program.")
			}
			TypeMismatch { expected, actual } => {
				write!(f, "Expected type to be:\n  {expected}\ngot:\n  {actual}")
			}
			SnapshotNotFound { name } => {
				write!(
					f,
					"Type snapshot '{name}' not found; enable snapshot updates to record it."
				)
			}
			SnapshotMismatch {
				name,
				expected,
				actual,
			} => {
				write!(
					f,
					"Expected type from snapshot '{name}' to be:\n  {expected}\ngot:\n  {actual}"
				)
			}
			OrphanAssertion => {
				write!(
					f,
					"Can not match a node to this assertion. If this is a multiline function call, ensure the assertion is on the line above."
				)
			}
			DuplicateAssertion => {
				write!(f, "This line has more than one assertion; only one is allowed.")
			}
			MissingExpectedError => {
				write!(f, "Expected an error on this line, but found none.")
			}
			SyntaxError(SyntaxErrorKind::MissingTypeArgument) => {
				write!(f, "Expected type argument is missing after $ExpectType.")
			}
			SyntaxError(SyntaxErrorKind::MissingSnapshotName) => {
				write!(f, "Snapshot name is missing after $ExpectTypeSnapshot.")
			}
		}
	}
}
