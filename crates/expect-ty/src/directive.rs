use indexmap::{IndexMap, IndexSet};
use swc_common::{
	comments::{Comment, CommentKind},
	BytePos, SourceFile,
};

/// A parsed expectation, keyed by the zero-based line it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
	/// `$ExpectType`: expected type text taken verbatim from the directive.
	Manual { expected: String },
	/// `$ExpectTypeSnapshot`: expected text is filled in from the snapshot
	/// store, and stays `None` when the snapshot was never recorded.
	Snapshot {
		name: String,
		expected: Option<String>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
	MissingTypeArgument,
	MissingSnapshotName,
}

/// A directive that parsed structurally but omitted its required argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
	pub line: u32,
	pub kind: SyntaxErrorKind,
}

/// Everything the directive scan produces for one file. Lines are zero-based.
#[derive(Debug, Default)]
pub struct Directives {
	/// Lines on which a compile error is expected.
	pub error_lines: IndexSet<u32>,
	/// At most one assertion per line.
	pub assertions: IndexMap<u32, Assertion>,
	/// One entry per directive that collided with an earlier one on its line.
	pub duplicates: Vec<u32>,
	pub syntax_errors: Vec<SyntaxError>,
}

enum Directive {
	Error,
	Type(Option<String>),
	TypeSnapshot(Option<String>),
}

impl Directive {
	/// Matches a comment body against
	/// `$Expect(TypeSnapshot|Type|Error)( <argument>)?`. Anchoring at the
	/// body keeps directives inside another comment's text inert, e.g.
	/// `// foo; // $ExpectType number`.
	fn parse(text: &str) -> Option<Directive> {
		let rest = text.trim().strip_prefix("$Expect")?;
		// TypeSnapshot must be tried before its prefix Type.
		if let Some(arg) = keyword_argument(rest, "TypeSnapshot") {
			return Some(Directive::TypeSnapshot(arg));
		}
		if let Some(arg) = keyword_argument(rest, "Type") {
			return Some(Directive::Type(arg));
		}
		if keyword_argument(rest, "Error").is_some() {
			return Some(Directive::Error);
		}
		None
	}
}

/// `None` when `rest` does not start with `keyword` at a word boundary,
/// otherwise the trimmed argument, if any.
fn keyword_argument(rest: &str, keyword: &str) -> Option<Option<String>> {
	let arg = rest.strip_prefix(keyword)?;
	if arg.is_empty() {
		return Some(None);
	}
	if !arg.starts_with(char::is_whitespace) {
		return None;
	}
	let arg = arg.trim();
	Some((!arg.is_empty()).then(|| arg.to_owned()))
}

/// Scans all line comments for directives.
pub fn parse_directives(file: &SourceFile, comments: &[Comment]) -> Directives {
	let mut directives = Directives::default();

	for comment in comments {
		if comment.kind != CommentKind::Line {
			continue;
		}
		let Some(directive) = Directive::parse(&comment.text) else {
			continue;
		};
		// A comment whose span maps to no line cannot be attributed.
		let Some(line) = attributed_line(file, comment.span.lo) else {
			continue;
		};

		match directive {
			Directive::Error => {
				if !directives.error_lines.insert(line) {
					directives.duplicates.push(line);
				}
			}
			Directive::Type(Some(expected)) => {
				record(&mut directives, line, Assertion::Manual { expected });
			}
			Directive::TypeSnapshot(Some(name)) => {
				record(
					&mut directives,
					line,
					Assertion::Snapshot {
						name,
						expected: None,
					},
				);
			}
			Directive::Type(None) => {
				directives.syntax_errors.push(SyntaxError {
					line,
					kind: SyntaxErrorKind::MissingTypeArgument,
				});
			}
			Directive::TypeSnapshot(None) => {
				directives.syntax_errors.push(SyntaxError {
					line,
					kind: SyntaxErrorKind::MissingSnapshotName,
				});
			}
		}
	}

	directives
}

// A second type assertion on a line discards the first; neither survives.
fn record(directives: &mut Directives, line: u32, assertion: Assertion) {
	if directives.assertions.shift_remove(&line).is_some() {
		directives.duplicates.push(line);
	} else {
		directives.assertions.insert(line, assertion);
	}
}

/// Zero-based line a directive comment applies to: the comment's own line,
/// or the next one when the comment is the first token on its line. This
/// lets a directive trail the code it checks or sit alone directly above it.
fn attributed_line(file: &SourceFile, pos: BytePos) -> Option<u32> {
	let line = file.lookup_line(pos)?;
	let begin = file.line_begin_pos(pos);
	let offset = (pos - begin).0 as usize;
	let first_on_line = match file.get_line(line) {
		Some(text) => text[..offset].trim().is_empty(),
		None => false,
	};
	Some(if first_on_line {
		line as u32 + 1
	} else {
		line as u32
	})
}
