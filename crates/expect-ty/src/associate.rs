use indexmap::IndexMap;
use swc_common::{SourceFile, Span, Spanned};
use swc_ecma_ast::{
	ClassMember, Decl, Expr, ModuleDecl, Param, Pat, Program, Prop, Stmt, TsType, VarDecl,
	VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::directive::Assertion;

/// An assertion matched to the syntax node on its line.
#[derive(Debug)]
pub struct Consumed {
	pub line: u32,
	pub assertion: Assertion,
	/// Span of the node whose type the assertion is checked against.
	pub span: Span,
}

/// Walks the tree once, pre-order, consuming each pending assertion at the
/// first node that starts on its line. Assertions left in `assertions`
/// afterwards matched no construct; they are orphans.
pub fn associate(
	file: &SourceFile,
	program: &Program,
	assertions: &mut IndexMap<u32, Assertion>,
) -> Vec<Consumed> {
	let mut associator = NodeAssociator {
		file,
		assertions,
		consumed: Vec::new(),
	};
	program.visit_with(&mut associator);
	associator.consumed
}

struct NodeAssociator<'a> {
	file: &'a SourceFile,
	assertions: &'a mut IndexMap<u32, Assertion>,
	consumed: Vec<Consumed>,
}

impl NodeAssociator<'_> {
	fn try_consume(&mut self, node: Span, resolved: Span) {
		if node.is_dummy() {
			return;
		}
		let Some(line) = self.file.lookup_line(node.lo) else {
			return;
		};
		let line = line as u32;
		if let Some(assertion) = self.assertions.shift_remove(&line) {
			self.consumed.push(Consumed {
				line,
				assertion,
				span: resolved,
			});
		}
	}
}

impl Visit for NodeAssociator<'_> {
	fn visit_stmt(&mut self, stmt: &Stmt) {
		self.try_consume(stmt.span(), resolve_stmt(stmt));
		stmt.visit_children_with(self);
	}

	fn visit_module_decl(&mut self, decl: &ModuleDecl) {
		let resolved = match decl {
			ModuleDecl::ExportDecl(export) => resolve_decl(&export.decl),
			_ => decl.span(),
		};
		self.try_consume(decl.span(), resolved);
		decl.visit_children_with(self);
	}

	fn visit_expr(&mut self, expr: &Expr) {
		self.try_consume(expr.span(), expr.span());
		expr.visit_children_with(self);
	}

	fn visit_var_declarator(&mut self, declarator: &VarDeclarator) {
		self.try_consume(declarator.span(), declarator.span());
		declarator.visit_children_with(self);
	}

	fn visit_param(&mut self, param: &Param) {
		self.try_consume(param.span(), param.span());
		param.visit_children_with(self);
	}

	fn visit_pat(&mut self, pat: &Pat) {
		self.try_consume(pat.span(), pat.span());
		pat.visit_children_with(self);
	}

	fn visit_prop(&mut self, prop: &Prop) {
		self.try_consume(prop.span(), prop.span());
		prop.visit_children_with(self);
	}

	fn visit_class_member(&mut self, member: &ClassMember) {
		self.try_consume(member.span(), member.span());
		member.visit_children_with(self);
	}

	fn visit_ts_type(&mut self, ty: &TsType) {
		self.try_consume(ty.span(), ty.span());
		ty.visit_children_with(self);
	}
}

/// An expression statement checks its expression, and a variable statement
/// declaring a single initialized binding checks the initializer, so
/// `const x: Foo = expr; // $ExpectType Bar` tests the inferred type of
/// `expr` rather than the statement.
fn resolve_stmt(stmt: &Stmt) -> Span {
	match stmt {
		Stmt::Expr(expr_stmt) => expr_stmt.expr.span(),
		Stmt::Decl(decl) => resolve_decl(decl),
		_ => stmt.span(),
	}
}

fn resolve_decl(decl: &Decl) -> Span {
	match decl {
		Decl::Var(var) => resolve_var_decl(var),
		_ => decl.span(),
	}
}

fn resolve_var_decl(var: &VarDecl) -> Span {
	match &var.decls[..] {
		[declarator] => declarator
			.init
			.as_deref()
			.map_or(var.span(), |init| init.span()),
		_ => var.span(),
	}
}
