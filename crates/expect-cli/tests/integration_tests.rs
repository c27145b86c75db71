use std::fs;
use std::process::Command;

fn create_test_file(name: &str, content: &str) -> String {
	let test_file = format!("/tmp/{}", name);
	fs::write(&test_file, content).unwrap();
	test_file
}

#[test]
fn test_lint_clean_directives() {
	let test_file = create_test_file(
		"clean_directives.ts",
		"const x = bar(); // $ExpectType number\n",
	);

	let output = Command::new("cargo")
		.args(["run", "--bin", "expect", "lint", &test_file])
		.output()
		.expect("Failed to execute command");

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Directives OK"));

	fs::remove_file(test_file).ok();
}

#[test]
fn test_lint_orphan_directive() {
	let test_file = create_test_file("orphan_directive.ts", "const x = 1;\n// $ExpectType number\n");

	let output = Command::new("cargo")
		.args(["run", "--bin", "expect", "lint", &test_file])
		.output()
		.expect("Failed to execute command");

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Directive lint failed"));

	fs::remove_file(test_file).ok();
}

#[test]
fn test_lint_nonexistent_file() {
	let output = Command::new("cargo")
		.args(["run", "--bin", "expect", "lint", "/nonexistent/file.ts"])
		.output()
		.expect("Failed to execute command");

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Error:"));
}
