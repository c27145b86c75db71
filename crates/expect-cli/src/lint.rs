use expect_ty::{
	associate::associate,
	directive::parse_directives,
	findings::{Finding, FindingKind},
	parse::parse,
};

pub struct LintResult {
	pub findings: Vec<Finding>,
}

/// Directive hygiene check: duplicates, malformed directives, and orphan
/// assertions, with no type checker in the loop.
pub fn lint(name: &str, source: &str) -> LintResult {
	let parsed = match parse(name, source) {
		Ok(parsed) => parsed,
		Err(err) => {
			return LintResult {
				findings: vec![Finding::new(
					FindingKind::CompileError(format!("Parse error: {:?}", err)),
					1,
					1,
				)],
			};
		}
	};

	let mut directives = parse_directives(&parsed.source_file, &parsed.comments);

	let mut findings = Vec::new();
	for &line in &directives.duplicates {
		findings.push(Finding::new(FindingKind::DuplicateAssertion, line + 1, 1));
	}
	for error in &directives.syntax_errors {
		findings.push(Finding::new(
			FindingKind::SyntaxError(error.kind),
			error.line + 1,
			1,
		));
	}

	associate(&parsed.source_file, &parsed.program, &mut directives.assertions);

	for &line in directives.assertions.keys() {
		findings.push(Finding::new(FindingKind::OrphanAssertion, line + 1, 1));
	}

	LintResult { findings }
}
