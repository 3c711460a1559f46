// Property tests for the typewriter cycle. Host only (proptest does not
// target wasm32).
#![cfg(not(target_arch = "wasm32"))]

use portfolio_fx::{PhraseList, TypewriterConfig, TypingState, advance};
use proptest::prelude::*;

fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 éü猫/]{1,12}", 1..6)
}

proptest! {
    #[test]
    fn typing_ticks_show_the_full_phrase(raw in phrases_strategy(), start in 0usize..6) {
        let phrases = PhraseList::new(raw.clone()).unwrap();
        let cfg = TypewriterConfig::default();
        let i = start % phrases.len();
        let mut state = TypingState { index: i, ..TypingState::new() };

        for _ in 0..phrases.char_len(i) {
            state = advance(&phrases, &cfg, state);
        }

        prop_assert_eq!(state.text(&phrases), raw[i].as_str());
        prop_assert!(state.deleting);
        prop_assert_eq!(state.delay_ms, cfg.pause_ms);
    }

    #[test]
    fn deleting_ends_empty_on_next_phrase(raw in phrases_strategy(), start in 0usize..6) {
        let phrases = PhraseList::new(raw).unwrap();
        let cfg = TypewriterConfig::default();
        let i = start % phrases.len();
        let mut state = TypingState { index: i, ..TypingState::new() };

        for _ in 0..2 * phrases.char_len(i) {
            state = advance(&phrases, &cfg, state);
        }

        prop_assert_eq!(state.text(&phrases), "");
        prop_assert_eq!(state.index, (i + 1) % phrases.len());
        prop_assert!(!state.deleting);
        prop_assert_eq!(state.delay_ms, cfg.next_delay_ms);
    }

    #[test]
    fn full_cycle_returns_to_start(raw in phrases_strategy()) {
        let phrases = PhraseList::new(raw).unwrap();
        let cfg = TypewriterConfig::default();
        let total: usize = (0..phrases.len()).map(|k| 2 * phrases.char_len(k)).sum();
        let mut state = TypingState::new();

        for _ in 0..total {
            state = advance(&phrases, &cfg, state);
            prop_assert!(state.index < phrases.len());
            prop_assert!(state.count <= phrases.char_len(state.index));
        }

        prop_assert_eq!(state.index, 0);
        prop_assert_eq!(state.count, 0);
        prop_assert_eq!(state.text(&phrases), "");
    }
}
