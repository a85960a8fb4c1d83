mod prop_tests {
    use crate::html::wrap_tokens;
    use crate::stage::{classify, split_particles};
    use crate::{HtmlOptions, ParticleTrie, default_segmenter, tokenize};
    use proptest::prelude::*;

    /// Japanese-heavy alphabet: every script the classifier distinguishes.
    const JA: &str = "[ぁ-ゖァ-ヺー一-龯々〆0-9０-９a-zA-Z。、！？「」（）%　 \n]{0,64}";

    proptest! {
        #[test]
        fn round_trip(s in ".{0,256}") {
            prop_assert_eq!(tokenize(&s).concat(), s);
        }

        #[test]
        fn no_empty_tokens_any_text(s in ".{1,256}") {
            let tokens = tokenize(&s);
            prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        }

        #[test]
        fn round_trip_japanese(s in JA) {
            prop_assert_eq!(tokenize(&s).concat(), s);
        }

        #[test]
        fn no_empty_tokens(s in JA) {
            prop_assume!(!s.is_empty());
            let tokens = tokenize(&s);
            prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        }

        #[test]
        fn tokens_are_contiguous_slices(s in JA) {
            let tokens = tokenize(&s);
            let mut at = s.as_ptr() as usize;
            for token in tokens {
                prop_assert_eq!(token.as_ptr() as usize, at);
                at += token.len();
            }
        }

        #[test]
        fn passes_partition_their_input(s in JA) {
            let trie = default_segmenter().trie();
            let raw = classify(&s);
            prop_assert_eq!(raw.concat(), s.clone());
            for run in raw {
                let pieces = split_particles(run, trie);
                prop_assert_eq!(pieces.concat(), run);
                prop_assert!(pieces.iter().all(|p| !p.is_empty()));
            }
        }

        #[test]
        fn particle_consistency(s in "[ぁ-ゖ*]{0,6}") {
            let trie = default_segmenter().trie();
            let registered = trie.patterns();
            let literal = !s.contains('*') && registered.iter().any(|p| *p == s);
            prop_assert_eq!(trie.is_particle(&s), literal);
        }

        #[test]
        fn longest_match_is_stable_under_truncation(s in "[ぁ-ゖ一-龯]{0,12}", start in 0usize..12) {
            let trie = default_segmenter().trie();
            let found = trie.find_longest_particle(&s, start);
            let tail: String = s.chars().skip(start).collect();
            if let Some(found) = found {
                prop_assert!(tail.starts_with(found));
            }
            // cutting the text anywhere past the match never yields a longer one
            let floor = found.map_or(0, str::len);
            let cuts = tail.char_indices().map(|(i, _)| i).chain([tail.len()]);
            for cut in cuts.filter(|&cut| cut >= floor) {
                prop_assert_eq!(trie.find_longest_particle(&tail[..cut], 0), found);
            }
        }

        #[test]
        fn inserted_literals_are_particles(words in prop::collection::vec("[ぁ-ゖ]{1,5}", 1..16)) {
            let trie = ParticleTrie::from_patterns(&words).unwrap();
            for w in &words {
                prop_assert!(trie.is_particle(w));
            }
            prop_assert!(trie.len() <= words.len());
        }

        #[test]
        fn html_keeps_token_text(s in "[ぁ-ゖァ-ヺ一-龯、。 ]{0,48}") {
            let tokens = tokenize(&s);
            let html = wrap_tokens(&tokens, &HtmlOptions::default().aria(false));
            let inner: Vec<&str> = html
                .split_terminator("</span>")
                .map(|part| part.strip_prefix("<span style=\"display:inline-block\">").unwrap())
                .collect();
            prop_assert_eq!(inner, tokens);
        }
    }
}
