use foodcoach_shared::IngredientToken;
use regex::Regex;
use std::sync::LazyLock;

use super::intent::{IMPACT, MEAL_PLAN};

pub const MAX_INGREDIENTS: usize = 10;

/// Request phrasing around the ingredient list. Replaced by a separator so
/// the words on either side never merge into one token.
static LEAD_IN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)\b(?:
            what\s+can\s+i\s+(?:make|cook)(?:\s+with)?
          | how\s+(?:do\s+i|can\s+i|to)\s+use
          | (?:a\s+)?(?:weekly\s+)?meal\s+plan(?:\s+(?:for|with|using))?
          | (?:weekly|week)\s+plan(?:\s+(?:for|with|using))?
          | plan\s+(?:my\s+)?meals(?:\s+(?:for|with|using))?
          | (?:the\s+)?(?:environmental\s+)?impact\s+(?:of|for)
          | (?:the\s+)?carbon\s+footprint\s+(?:of|for)
          | recipes?\s+(?:for|with|using)
          | cook\s+with
          | i\s+have(?:\s+got)?
          | i've\s+got
          | leftovers?
        )\b",
    )
    .unwrap()
});

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;&/\n]|\b(?:and|plus)\b").unwrap());

/// Skipped at the start of a token: "the rice", "ideas for rice".
const LEADING_FILLER: &[&str] = &[
    "a", "an", "the", "some", "my", "for", "with", "using", "of", "about", "ideas", "idea",
    "suggestions",
];

const CONVERSATIONAL: &[&str] = &[
    "please", "help", "how", "what", "can", "make", "hello", "hi", "thanks", "show", "tell",
    "give", "me", "week",
];

/// Pull ingredient names out of a free-text message.
///
/// Tokens are lowercase, deduplicated in first-seen order and capped at
/// [`MAX_INGREDIENTS`]. A message with no recognisable ingredient yields an
/// empty list.
pub fn extract_ingredients(message: &str) -> Vec<IngredientToken> {
    let lowered = message.to_lowercase();
    let stripped = LEAD_IN.replace_all(&lowered, ",");
    // Leftover intent keywords split the same way
    let stripped = MEAL_PLAN.replace_all(&stripped, ",");
    let stripped = IMPACT.replace_all(&stripped, ",");

    let mut tokens: Vec<IngredientToken> = Vec::new();
    for part in SEPARATOR.split(&stripped) {
        if tokens.len() == MAX_INGREDIENTS {
            break;
        }
        if let Some(token) = clean(part)
            && !tokens.contains(&token)
        {
            tokens.push(token);
        }
    }
    tokens
}

fn clean(part: &str) -> Option<IngredientToken> {
    let words: Vec<&str> = part
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .collect();

    let leading_filler = words
        .iter()
        .take_while(|word| LEADING_FILLER.contains(*word))
        .count();
    let words = &words[leading_filler..];

    if words.iter().any(|word| CONVERSATIONAL.contains(word)) {
        return None;
    }

    let name = words.join(" ");
    if name.chars().count() < 2 {
        return None;
    }

    IngredientToken::new(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(message: &str) -> Vec<String> {
        extract_ingredients(message)
            .into_iter()
            .map(|token| token.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(names("tomato, bread, cheese"), vec!["tomato", "bread", "cheese"]);
    }

    #[test]
    fn test_lowercases_and_dedupes_in_order() {
        assert_eq!(
            names("Tomato, BREAD, tomato, Bread"),
            vec!["tomato", "bread"]
        );
    }

    #[test]
    fn test_conjunctions_and_symbols_split() {
        assert_eq!(
            names("rice and beans; onion & garlic / carrot plus milk"),
            vec!["rice", "beans", "onion", "garlic", "carrot", "milk"]
        );
    }

    #[test]
    fn test_strips_request_phrasing() {
        assert_eq!(
            names("What can I make with leftover chicken and the rice?"),
            vec!["chicken", "rice"]
        );
        assert_eq!(names("I have some eggs, my spinach"), vec!["eggs", "spinach"]);
        assert_eq!(
            names("weekly meal plan for pasta, tomatoes"),
            vec!["pasta", "tomatoes"]
        );
    }

    #[test]
    fn test_intent_keywords_are_not_ingredients() {
        assert_eq!(names("Weekly ideas for rice"), vec!["rice"]);
        assert_eq!(names("beef and milk impact"), vec!["beef", "milk"]);
        assert_eq!(names("planning with carrots, co2 of lentils"), vec!["carrots", "lentils"]);
        assert!(names("plan my week and show the impact").is_empty());
    }

    #[test]
    fn test_keeps_multi_word_names() {
        assert_eq!(
            names("bell pepper, olive oil"),
            vec!["bell pepper", "olive oil"]
        );
    }

    #[test]
    fn test_conversation_yields_nothing() {
        assert!(names("hello").is_empty());
        assert!(names("can you help me please?").is_empty());
        assert!(names("").is_empty());
        assert!(names("  ,, ; ").is_empty());
    }

    #[test]
    fn test_whole_words_only_for_conjunctions() {
        // "and" inside a word is not a separator
        assert_eq!(names("candy, brandy"), vec!["candy", "brandy"]);
    }

    #[test]
    fn test_caps_at_ten() {
        let message = "a1, b2, c3, d4, e5, f6, g7, h8, i9, j10, k11, l12";
        assert_eq!(extract_ingredients(message).len(), MAX_INGREDIENTS);
    }

    #[test]
    fn test_single_letters_dropped() {
        assert_eq!(names("x, kale"), vec!["kale"]);
    }
}
