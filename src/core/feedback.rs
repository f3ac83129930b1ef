//! Guess evaluation
//!
//! Scores a guess against the secret word by distinct letter value:
//! - Exact = letter in the correct position
//! - Present = letter value in the secret, not matched exactly anywhere
//! - Absent = everything else
//!
//! A repeated guess letter is classified by its value, not by how many times
//! it occurs in the secret. A letter that is exact at one position is absent at
//! its other, non-exact positions.

use super::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterOutcome {
    Absent,
    Present,
    Exact,
}

impl LetterOutcome {
    /// Emoji square for this outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Letter values of `guess` that sit in the same position in `secret`
fn exact_letters(guess: &Word, secret: &Word) -> FxHashSet<u8> {
    guess
        .letters()
        .iter()
        .zip(secret.letters())
        .filter(|(g, s)| g == s)
        .map(|(&g, _)| g)
        .collect()
}

fn distinct_letters(word: &Word) -> FxHashSet<u8> {
    word.letters().iter().copied().collect()
}

/// Calculate the per-position outcomes of `guess` against `secret`
///
/// Both words must have the same length.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterOutcome, Word, evaluate};
///
/// let guess = Word::new("crane", 5).unwrap();
/// let secret = Word::new("snake", 5).unwrap();
///
/// use LetterOutcome::{Absent, Exact, Present};
/// assert_eq!(evaluate(&guess, &secret), vec![Absent, Absent, Exact, Present, Exact]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> Vec<LetterOutcome> {
    debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

    let exact = exact_letters(guess, secret);
    let secret_letters = distinct_letters(secret);

    guess
        .letters()
        .iter()
        .zip(secret.letters())
        .map(|(&g, &s)| {
            if g == s {
                LetterOutcome::Exact
            } else if secret_letters.contains(&g) && !exact.contains(&g) {
                LetterOutcome::Present
            } else {
                LetterOutcome::Absent
            }
        })
        .collect()
}

/// The three letter-value sets behind an evaluation, sorted alphabetically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSets {
    pub exact: BTreeSet<char>,
    pub present: BTreeSet<char>,
    pub absent: BTreeSet<char>,
}

impl LetterSets {
    /// Compute the exact, present and absent letter values of `guess`
    #[must_use]
    pub fn compute(guess: &Word, secret: &Word) -> Self {
        let exact = exact_letters(guess, secret);
        let guess_letters = distinct_letters(guess);
        let secret_letters = distinct_letters(secret);

        let to_chars = |set: FxHashSet<u8>| set.into_iter().map(char::from).collect();

        Self {
            present: to_chars(
                guess_letters
                    .intersection(&secret_letters)
                    .filter(|l| !exact.contains(l))
                    .copied()
                    .collect(),
            ),
            absent: to_chars(guess_letters.difference(&secret_letters).copied().collect()),
            exact: to_chars(exact),
        }
    }
}

/// One accepted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub outcomes: Vec<LetterOutcome>,
}

impl GuessRecord {
    /// Evaluate `guess` against `secret` and keep the result
    #[must_use]
    pub fn new(guess: Word, secret: &Word) -> Self {
        let outcomes = evaluate(&guess, secret);
        Self { guess, outcomes }
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.outcomes.iter().all(|&o| o == LetterOutcome::Exact)
    }

    /// Iterate over (letter, outcome) pairs
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterOutcome)> + '_ {
        self.guess
            .letters()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.outcomes.iter().copied())
    }

    /// Convert the outcomes to an emoji string like "⬜⬜🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.outcomes.iter().map(|o| o.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterOutcome::{Absent, Exact, Present};

    fn word(text: &str) -> Word {
        Word::new(text, text.len()).unwrap()
    }

    #[test]
    fn crane_against_snake() {
        let outcomes = evaluate(&word("crane"), &word("snake"));
        assert_eq!(outcomes, vec![Absent, Absent, Exact, Present, Exact]);

        let sets = LetterSets::compute(&word("crane"), &word("snake"));
        assert_eq!(sets.exact, BTreeSet::from(['A', 'E']));
        assert_eq!(sets.present, BTreeSet::from(['N']));
        assert_eq!(sets.absent, BTreeSet::from(['C', 'R']));
    }

    #[test]
    fn all_absent() {
        let outcomes = evaluate(&word("abcde"), &word("fghij"));
        assert!(outcomes.iter().all(|&o| o == Absent));
    }

    #[test]
    fn all_exact() {
        let record = GuessRecord::new(word("crane"), &word("crane"));
        assert!(record.is_perfect());
        assert_eq!(record.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn distinct_letter_repeat_marks_every_occurrence_present() {
        // ENTRY has a single E, yet all three E's in GEESE are present
        let outcomes = evaluate(&word("geese"), &word("entry"));
        assert_eq!(outcomes, vec![Absent, Present, Present, Absent, Present]);
    }

    #[test]
    fn distinct_letter_exact_elsewhere_is_absent() {
        // E is exact at the end, so the other E's are not reported as present
        let outcomes = evaluate(&word("eerie"), &word("snake"));
        assert_eq!(outcomes, vec![Absent, Absent, Absent, Absent, Exact]);

        let sets = LetterSets::compute(&word("eerie"), &word("snake"));
        assert_eq!(sets.exact, BTreeSet::from(['E']));
        assert!(sets.present.is_empty());
        assert_eq!(sets.absent, BTreeSet::from(['I', 'R']));
    }

    #[test]
    fn exact_implies_same_letter() {
        let secrets = ["snake", "black", "grape", "eerie", "aaaaa"];
        let guesses = ["crane", "bloke", "gaper", "ready", "abaca"];

        for s in secrets {
            for g in guesses {
                let (g, s) = (word(g), word(s));
                for (i, outcome) in evaluate(&g, &s).into_iter().enumerate() {
                    if outcome == Exact {
                        assert_eq!(g.letter_at(i), s.letter_at(i));
                    }
                }
                for letter in LetterSets::compute(&g, &s).absent {
                    assert!(!s.has_letter(letter as u8), "{letter} is in {s}");
                }
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let (g, s) = (word("robot"), word("floor"));
        assert_eq!(evaluate(&g, &s), evaluate(&g, &s));
    }

    #[test]
    fn record_letters_pairs_outcomes() {
        let record = GuessRecord::new(word("crane"), &word("snake"));
        let pairs: Vec<_> = record.letters().collect();
        assert_eq!(pairs[0], ('C', Absent));
        assert_eq!(pairs[3], ('N', Present));
        assert_eq!(record.to_emoji(), "⬜⬜🟩🟨🟩");
    }
}
