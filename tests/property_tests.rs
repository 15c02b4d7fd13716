use proptest::prelude::*;
use proptest::sample::subsequence;
use hangman::{DefeatReason, GameConfig, GameEngine, GameStatus, GuessOutcome};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn alphabet() -> Vec<char> {
    ALPHABET.chars().collect()
}

fn word() -> impl Strategy<Value = String> {
    "[A-Z]{1,12}"
}

fn engine(word: &str, limit: u32) -> GameEngine {
    GameEngine::new(&GameConfig::new(word, limit).unwrap())
}

proptest! {
    /// Property: Guessing only letters in the word always wins with no wrong guesses
    #[test]
    fn present_letters_always_win(word in word(), seed in any::<u64>()) {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        // Deterministic shuffle so order varies across cases
        let n = letters.len();
        letters.rotate_left((seed as usize) % n);

        let mut e = engine(&word, 5);
        for c in &letters {
            prop_assert!(!e.status().is_over());
            e.guess(&c.to_string());
        }

        prop_assert_eq!(e.status().clone(), GameStatus::Won);
        prop_assert_eq!(e.state().revealed_pattern(), word);
        prop_assert_eq!(e.state().wrong_guess_count(), 0);
    }

    /// Property: Pattern length always equals word length
    #[test]
    fn pattern_length_invariant(
        word in word(),
        guesses in prop::collection::vec("[A-Za-z0-9]{0,2}", 0..40)
    ) {
        let mut e = engine(&word, 26);
        for g in &guesses {
            e.guess(g);
            prop_assert_eq!(e.state().revealed_pattern().len(), word.len());
        }
    }

    /// Property: Wrong count rises only on accepted absent letters
    #[test]
    fn wrong_count_only_rises_on_misses(
        word in word(),
        guesses in prop::collection::vec("[A-Z]", 0..60)
    ) {
        let mut e = engine(&word, 26);
        for g in &guesses {
            let before = e.state().wrong_guess_count();
            let outcome = e.guess(g);
            let after = e.state().wrong_guess_count();
            match outcome {
                GuessOutcome::Miss => {
                    prop_assert!(!word.contains(g.as_str()));
                    prop_assert_eq!(after, before + 1);
                }
                _ => prop_assert_eq!(after, before),
            }
        }
    }

    /// Property: Anything outside the remaining letters changes nothing
    #[test]
    fn rejected_guesses_leave_state_untouched(
        word in word(),
        first in subsequence(alphabet(), 0..10),
        junk in "[0-9 !?]{0,3}|[A-Z]{2,4}"
    ) {
        let mut e = engine(&word, 26);
        for c in &first {
            e.guess(&c.to_string());
        }
        prop_assume!(!e.status().is_over());

        let pattern = e.state().revealed_pattern();
        let wrong = e.state().wrong_guess_count();
        let remaining = e.state().remaining_letters().to_vec();

        let mut attempts = vec![junk];
        attempts.extend(first.iter().map(|c| c.to_string()));
        for a in &attempts {
            prop_assert_eq!(e.guess(a), GuessOutcome::Rejected);
        }

        prop_assert_eq!(e.state().revealed_pattern(), pattern);
        prop_assert_eq!(e.state().wrong_guess_count(), wrong);
        prop_assert_eq!(e.state().remaining_letters(), &remaining[..]);
    }

    /// Property: Hitting the limit before the reveal always loses on wrong guesses
    #[test]
    fn limit_before_reveal_loses(word in "[A-M]{1,8}", limit in 1u32..=5) {
        let mut e = engine(&word, limit);
        for c in "NOPQRSTUVWXYZ".chars().take(limit as usize) {
            e.guess(&c.to_string());
        }
        prop_assert_eq!(
            e.status().clone(),
            GameStatus::Lost { reason: DefeatReason::WrongGuessLimit }
        );
        prop_assert_eq!(e.state().wrong_guess_count(), limit);
    }

    /// Property: Guessing the whole alphabet with room to spare ends in a win
    #[test]
    fn whole_alphabet_wins_over_exhaustion(word in word(), seed in any::<u64>()) {
        let mut letters = alphabet();
        letters.rotate_left((seed % 26) as usize);

        let mut e = engine(&word, 26);
        for c in &letters {
            e.guess(&c.to_string());
        }
        prop_assert_eq!(e.status().clone(), GameStatus::Won);
    }

    /// Property: Accepted guesses plus remaining letters always cover the alphabet
    #[test]
    fn guess_count_matches_removed_letters(
        word in word(),
        guesses in prop::collection::vec("[a-zA-Z]", 0..40)
    ) {
        let mut e = engine(&word, 26);
        for g in &guesses {
            e.guess(g);
        }
        prop_assert_eq!(
            e.state().guess_count() as usize + e.state().remaining_letters().len(),
            26
        );
    }
}
