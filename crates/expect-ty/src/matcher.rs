/// Compares the checker's rendered type against the expected text. Exact
/// equality wins; otherwise the two read-only array spellings are tried.
pub fn matches(actual: &str, expected: &str) -> bool {
	actual == expected || match_readonly_array(actual, expected)
}

/// The checker renders a read-only array as either `readonly T[]` or
/// `ReadonlyArray<T>` depending on context. The two spellings are equal when
/// the strings agree character-for-character except where `expected` opens
/// `ReadonlyArray<` as `actual` opens `readonly `, with each closing `>`
/// paired against `[]`. Works at any nesting depth, e.g.
/// `A<ReadonlyArray<B<ReadonlyArray<C>>>>` vs `A<readonly B<readonly C[]>[]>`.
fn match_readonly_array(actual: &str, expected: &str) -> bool {
	// Cheap pre-check before walking both strings.
	if !(contains_word(actual, "readonly") && contains_word(expected, "ReadonlyArray")) {
		return false;
	}

	let actual = actual.as_bytes();
	let expected = expected.as_bytes();
	let (mut a, mut e) = (0, 0);
	let mut depth = 0u32;

	while e < expected.len() && a < actual.len() {
		if expected[e] == actual[a] {
			e += 1;
			a += 1;
			continue;
		}
		// End of a read-only array: `>` pairs with `[]`.
		if depth > 0
			&& expected[e] == b'>'
			&& actual[a] == b'['
			&& a + 1 < actual.len()
			&& actual[a + 1] == b']'
		{
			depth -= 1;
			e += 1;
			a += 2;
			continue;
		}
		// Start of a read-only array, at a word boundary on both sides.
		if expected[e..].starts_with(b"ReadonlyArray<")
			&& actual[a..].starts_with(b"readonly ")
			&& (e == 0 || !is_word_byte(expected[e - 1]))
			&& (a == 0 || !is_word_byte(actual[a - 1]))
		{
			depth += 1;
			e += "ReadonlyArray<".len();
			a += "readonly ".len();
			continue;
		}
		return false;
	}

	// Both strings must be consumed in full; a partial match is not a match.
	e == expected.len() && a == actual.len()
}

fn contains_word(haystack: &str, word: &str) -> bool {
	let bytes = haystack.as_bytes();
	let mut from = 0;
	while let Some(at) = haystack[from..].find(word).map(|found| from + found) {
		let end = at + word.len();
		if (at == 0 || !is_word_byte(bytes[at - 1])) && (end == bytes.len() || !is_word_byte(bytes[end]))
		{
			return true;
		}
		from = at + 1;
	}
	false
}

fn is_word_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}
