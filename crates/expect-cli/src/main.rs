use clap::{Parser, Subcommand};
use expect_cli::lint::lint;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "expect")]
#[command(about = "Inline type-assertion directive linter")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Lint {
		#[arg(help = "TypeScript file to lint")]
		file: PathBuf,
	},
}

fn main() {
	let cli = Cli::parse();

	match cli.command {
		Commands::Lint { file } => {
			if let Err(e) = lint_file(file) {
				eprintln!("Error: {}", e);
				std::process::exit(1);
			}
		}
	}
}

fn lint_file(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
	let source = std::fs::read_to_string(&file)?;
	let name = file.to_string_lossy();

	let result = lint(&name, &source);

	if result.findings.is_empty() {
		println!("✓ Directives OK in {}", file.display());
		Ok(())
	} else {
		eprintln!("Directive lint failed for {}:", file.display());
		for finding in &result.findings {
			eprintln!(
				"  Line {}:{}: {}",
				finding.line,
				finding.column,
				finding.message()
			);
		}
		Err("Directive lint failed".into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn test_lint_file_valid() {
		let mut test_file = NamedTempFile::new().unwrap();
		writeln!(test_file, "const x = bar(); // $ExpectType number").unwrap();

		let result = lint_file(test_file.path().to_path_buf());
		assert!(result.is_ok());
	}

	#[test]
	fn test_lint_file_duplicate_directives() {
		let mut test_file = NamedTempFile::new().unwrap();
		writeln!(test_file, "// $ExpectType number").unwrap();
		writeln!(test_file, "bar(); // $ExpectType string").unwrap();

		let result = lint_file(test_file.path().to_path_buf());
		assert!(result.is_err());
	}

	#[test]
	fn test_lint_file_nonexistent() {
		let result = lint_file("/nonexistent/file.ts".into());
		assert!(result.is_err());
	}

	#[test]
	fn test_lint_file_missing_argument() {
		let mut test_file = NamedTempFile::new().unwrap();
		writeln!(test_file, "bar(); // $ExpectType").unwrap();

		let result = lint_file(test_file.path().to_path_buf());
		assert!(result.is_err());
	}
}
