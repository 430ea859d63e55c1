/// Lowercase, trim and collapse inner whitespace.
pub fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Turn a catalog key such as `olive_oil` into `olive oil`.
pub fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

/// Capitalize every word, treating `_` as a space.
///
/// `"olive_oil"` becomes `"Olive Oil"`, `"BELL pepper"` becomes `"Bell Pepper"`.
pub fn title_case(value: &str) -> String {
    humanize(value)
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Partial match used by every static table: either side contains the other.
///
/// Both values are expected to be normalized already.
pub fn overlaps(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}
