//! Word-frequency digest over product descriptions.
//!
//! The digest deliberately skips the most common words (articles, the
//! catalog's dominant nouns) and reports the next band.

use std::collections::HashMap;

/// Number of top-ranked words left out of the digest.
pub const COMMON_WORDS_SKIP: usize = 5;
/// Maximum number of words in the digest.
pub const COMMON_WORDS_TAKE: usize = 10;

const SEPARATORS: [char; 5] = [' ', ',', '.', '!', '?'];

/// One row of the frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Split on space and `, . ! ?`, drop empty tokens, lowercase the rest.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(SEPARATORS)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Rank every token by descending count.
///
/// Equal counts keep first-encounter order across the whole input.
pub fn rank_words<'a, I>(descriptions: I) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<WordCount> = Vec::new();

    for description in descriptions {
        for word in tokenize(description) {
            match index.get(&word) {
                Some(&i) => ranked[i].count += 1,
                None => {
                    index.insert(word.clone(), ranked.len());
                    ranked.push(WordCount { word, count: 1 });
                }
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The `[COMMON_WORDS_SKIP, COMMON_WORDS_SKIP + COMMON_WORDS_TAKE)` window of
/// the ranking. Short or empty when there are few distinct words.
pub fn common_words<'a, I>(descriptions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    rank_words(descriptions)
        .into_iter()
        .skip(COMMON_WORDS_SKIP)
        .take(COMMON_WORDS_TAKE)
        .map(|wc| wc.word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_splits_on_punctuation_and_lowercases() {
        let tokens: Vec<String> = tokenize("Hello, World! Is it... GREAT?yes").collect();
        assert_eq!(tokens, vec!["hello", "world", "is", "it", "great", "yes"]);
    }

    #[test]
    fn tokenizer_keeps_other_punctuation() {
        let tokens: Vec<String> = tokenize("T-shirt; it's").collect();
        assert_eq!(tokens, vec!["t-shirt;", "it's"]);
    }

    #[test]
    fn ranking_counts_across_descriptions_case_insensitively() {
        let ranked = rank_words(["Red shirt", "red TROUSER", "blue shirt. RED!"]);
        assert_eq!(
            ranked,
            vec![
                WordCount { word: "red".into(), count: 3 },
                WordCount { word: "shirt".into(), count: 2 },
                WordCount { word: "trouser".into(), count: 1 },
                WordCount { word: "blue".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = rank_words(["d c b a", "a b c d"]);
        let words: Vec<&str> = ranked.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn few_distinct_words_give_empty_digest() {
        assert!(common_words(["one two three", "one two"]).is_empty());
        assert!(common_words(["a b c d e"]).is_empty());
        assert!(common_words(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn short_window_is_returned_as_is() {
        assert_eq!(common_words(["a b c d e f g"]), vec!["f", "g"]);
    }

    #[test]
    fn window_skips_five_and_takes_ten() {
        // w0 appears 20 times, w1 19 times, ... w19 once.
        let descriptions: Vec<String> = (0..20)
            .map(|i| {
                (0..20 - i)
                    .map(|_| format!("w{i}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        let out = common_words(descriptions.iter().map(String::as_str));
        let expected: Vec<String> = (5..15).map(|i| format!("w{i}")).collect();
        assert_eq!(out, expected);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: ranking is deterministic and counts are non-increasing.
            #[test]
            fn ranking_is_deterministic_and_sorted(
                descriptions in proptest::collection::vec("[a-eA-E ,.!?]{0,40}", 0..10)
            ) {
                let a = rank_words(descriptions.iter().map(String::as_str));
                let b = rank_words(descriptions.iter().map(String::as_str));
                prop_assert_eq!(&a, &b);
                for pair in a.windows(2) {
                    prop_assert!(pair[0].count >= pair[1].count);
                }
            }

            /// Property: the digest never exceeds its window.
            #[test]
            fn digest_is_bounded(
                descriptions in proptest::collection::vec("[a-z ]{0,60}", 0..10)
            ) {
                let ranked = rank_words(descriptions.iter().map(String::as_str));
                let digest = common_words(descriptions.iter().map(String::as_str));
                prop_assert!(digest.len() <= COMMON_WORDS_TAKE);
                prop_assert_eq!(digest.len(), ranked.len().saturating_sub(COMMON_WORDS_SKIP).min(COMMON_WORDS_TAKE));
            }
        }
    }
}
