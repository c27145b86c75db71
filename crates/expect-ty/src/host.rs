use swc_common::Span;

use crate::{parse::ParsedFile, reconcile::Diagnostic};

/// The type-checking collaborator. The engine treats it as a black box that
/// can hand over a parsed file, list its pre-emit diagnostics, and render
/// the type of an arbitrary node.
pub trait TypeHost {
	/// Parsed representation of `file`, or `None` when the file is not part
	/// of the checked program.
	fn parsed(&self, file: &str) -> Option<&ParsedFile>;

	/// All pre-emit diagnostics for `file`, in source order.
	fn diagnostics(&self, file: &str) -> Vec<Diagnostic>;

	/// The checker's rendered type for the node at `span`, with no
	/// truncation, or `None` when no type applies there.
	fn type_at(&self, file: &str, span: Span) -> Option<String>;
}
