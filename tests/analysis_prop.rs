//! Analysis property tests
//!
//! word_count / search の仕様上の性質を公開API経由で検証する

use notare::analysis::{search, word_count};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn text_strategy() -> impl Strategy<Value = String> {
    // 空白・改行・タブを含む小さめのテキスト
    proptest::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            Just(' '),
            Just('\n'),
            Just('\t'),
        ],
        0..200,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn word_count_matches_whitespace_runs(text in text_strategy()) {
        prop_assert_eq!(word_count(&text), text.split_whitespace().count());
    }

    #[test]
    fn search_indices_are_valid_and_increasing(
        text in text_strategy(),
        query in "[a-zA-Z]{0,4}",
    ) {
        let indices = search(&text, &query);
        let words: Vec<&str> = text.split_whitespace().collect();
        let needle = query.to_lowercase();

        for window in indices.windows(2) {
            prop_assert!(window[0] < window[1]);
        }

        for &index in &indices {
            prop_assert!(index < words.len());
            prop_assert!(words[index].to_lowercase().contains(&needle));
        }

        // 返らなかったインデックスはマッチしない
        for (index, word) in words.iter().enumerate() {
            if !indices.contains(&index) {
                prop_assert!(!word.to_lowercase().contains(&needle));
            }
        }
    }

    #[test]
    fn empty_query_matches_all_tokens(text in text_strategy()) {
        let indices = search(&text, "");
        let expected: Vec<usize> = (0..word_count(&text)).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn search_is_case_insensitive(text in text_strategy(), query in "[a-z]{1,3}") {
        prop_assert_eq!(
            search(&text, &query),
            search(&text, &query.to_uppercase())
        );
    }
}

#[test]
fn word_count_of_empty_is_zero() {
    assert_eq!(word_count(""), 0);
}
