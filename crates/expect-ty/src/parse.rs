use swc_common::{
	comments::{Comment, SingleThreadedComments},
	input::SourceFileInput,
	sync::Lrc,
	BytePos, FileName, SourceFile, SourceMap,
};
use swc_ecma_ast::Program;
use swc_ecma_parser::{error::Error, Parser, Syntax, TsSyntax};

/// A parsed source file together with everything assertion checking needs:
/// the tree, the position table, and the collected comments.
pub struct ParsedFile {
	pub name: String,
	pub program: Program,
	pub source_file: Lrc<SourceFile>,
	/// All comments, in source order.
	pub comments: Vec<Comment>,
	pub is_declaration: bool,
}

impl ParsedFile {
	/// 1-based line and column of a position, for reporting.
	pub fn line_col(&self, pos: BytePos) -> (u32, u32) {
		match self.source_file.lookup_line(pos) {
			Some(line) => {
				let begin = self.source_file.line_begin_pos(pos);
				(line as u32 + 1, (pos - begin).0 + 1)
			}
			None => (1, 1),
		}
	}
}

pub fn parse(name: &str, code: &str) -> Result<ParsedFile, Error> {
	let is_declaration = name.ends_with(".d.ts");
	let syntax = Syntax::Typescript(TsSyntax {
		dts: is_declaration,
		..Default::default()
	});
	let source_map = SourceMap::new(Default::default());
	let source_file =
		source_map.new_source_file(FileName::Custom(name.to_owned()).into(), code.into());

	let comments = SingleThreadedComments::default();
	let input = SourceFileInput::from(&*source_file);

	let mut parser = Parser::new(syntax, input, Some(&comments));

	let program = parser.parse_program()?;

	let (leading, trailing) = comments.take_all();
	let mut comments = Vec::new();
	for list in leading.borrow().values() {
		comments.extend(list.iter().cloned());
	}
	for list in trailing.borrow().values() {
		comments.extend(list.iter().cloned());
	}
	comments.sort_by_key(|comment| comment.span.lo);

	Ok(ParsedFile {
		name: name.to_owned(),
		program,
		source_file,
		comments,
		is_declaration,
	})
}

#[cfg(test)]
mod tests {
	use swc_common::comments::CommentKind;

	use super::parse;

	#[test]
	fn parse_typescript() {
		let code = r#"
            const n: number = 1;
        "#;

		parse("main.ts", code).unwrap();
	}

	#[test]
	fn declaration_files_are_flagged() {
		assert!(parse("lib.d.ts", "declare const n: number;").unwrap().is_declaration);
		assert!(!parse("lib.ts", "const n = 1;").unwrap().is_declaration);
	}

	#[test]
	fn comments_are_collected_in_source_order() {
		let code = "const a = 1; // one\n// two\nconst b = 2; /* three */\n";
		let parsed = parse("main.ts", code).unwrap();

		let texts: Vec<_> = parsed
			.comments
			.iter()
			.map(|comment| comment.text.trim().to_owned())
			.collect();
		assert_eq!(texts, ["one", "two", "three"]);
		assert_eq!(parsed.comments[0].kind, CommentKind::Line);
		assert_eq!(parsed.comments[2].kind, CommentKind::Block);
	}

	#[test]
	fn line_col_is_one_based() {
		let code = "const a = 1;\nconst b = 2;\n";
		let parsed = parse("main.ts", code).unwrap();

		let second_line_pos = parsed.source_file.start_pos + swc_common::BytePos(13);
		assert_eq!(parsed.line_col(second_line_pos), (2, 1));
	}
}
