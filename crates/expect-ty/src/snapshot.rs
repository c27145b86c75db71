use std::collections::HashMap;

/// Store of named expected-type strings, keyed by file and snapshot name.
/// The engine only reads; writes go through [`SnapshotCorrection`]s applied
/// by the host.
pub trait SnapshotStore {
	fn read(&self, file: &str, name: &str) -> Option<String>;

	fn write(&mut self, file: &str, name: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemorySnapshots {
	entries: HashMap<(String, String), String>,
}

impl MemorySnapshots {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SnapshotStore for MemorySnapshots {
	fn read(&self, file: &str, name: &str) -> Option<String> {
		self.entries
			.get(&(file.to_owned(), name.to_owned()))
			.cloned()
	}

	fn write(&mut self, file: &str, name: &str, value: &str) {
		self.entries
			.insert((file.to_owned(), name.to_owned()), value.to_owned());
	}
}

/// A pending snapshot update. The engine emits each correction exactly once
/// per mismatched snapshot assertion; the host decides when to apply the
/// list, so a given correction writes at most once no matter how often the
/// outcome is inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotCorrection {
	pub file: String,
	pub name: String,
	pub value: String,
}

pub fn apply_corrections(store: &mut dyn SnapshotStore, corrections: &[SnapshotCorrection]) {
	for correction in corrections {
		store.write(&correction.file, &correction.name, &correction.value);
	}
}
