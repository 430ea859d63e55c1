//! Edit-distance similarity used for fuzzy ingredient matching.
//!
//! The score is the indel ratio `2 * LCS / (len(a) + len(b))` expressed as a
//! rounded percentage, so a single dropped or added character on a six letter
//! word still scores above 90.

/// Similarity between two strings in the range `0..=100`.
///
/// Comparison is on `char`s and case-sensitive; callers normalize first.
/// An empty input never matches anything.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let common = longest_common_subsequence(&a, &b);
    let total = (a.len() + b.len()) as f64;
    let score = (2.0 * common as f64 / total * 100.0).round();

    score.clamp(0.0, 100.0) as u8
}

/// Best scoring choice at or above `cutoff`.
///
/// Ties keep the earliest choice so the result only depends on the order of
/// `choices`.
pub fn best_match<'a, I>(query: &str, choices: I, cutoff: u8) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u8)> = None;

    for choice in choices {
        let score = ratio(query, choice);
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, current)) if current >= score => {}
            _ => best = Some((choice, score)),
        }
    }

    best
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
