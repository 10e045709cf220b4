//! Property-based tests comparing the hint engines on random rounds.

use codebreak_core::{Alphabet, Code, Element, Feedback, History};
use codebreak_solver::{DeductionEngine, ExhaustiveSolver, HintSource as _, rule};
use proptest::prelude::*;

/// Strategy: an alphabet size, a secret and a list of guesses over it.
fn round_strategy() -> impl Strategy<Value = (usize, Code, Vec<Code>)> {
    (1usize..=5, 1usize..=4).prop_flat_map(|(alphabet, length)| {
        let code = prop::collection::vec(0..alphabet, length)
            .prop_map(|v| v.into_iter().map(Element::new).collect::<Code>());
        (
            Just(alphabet),
            code.clone(),
            prop::collection::vec(code, 0..=6),
        )
    })
}

/// Scores `guesses` against `secret`, skipping repeated guesses.
fn history_for(secret: &Code, guesses: &[Code]) -> History {
    let mut history = History::new(secret.len());
    for guess in guesses {
        if history.contains_guess(guess) {
            continue;
        }
        let feedback = Feedback::evaluate(guess, secret);
        history.push(guess.clone(), feedback).unwrap();
    }
    history
}

fn contains_code(candidates: &codebreak_core::PositionCandidates, code: &Code) -> bool {
    candidates
        .iter()
        .zip(code.iter())
        .all(|(set, element)| set.contains(element))
}

proptest! {
    // 1. The secret always survives its own history
    #[test]
    fn solver_keeps_secret((alphabet, secret, guesses) in round_strategy()) {
        let history = history_for(&secret, &guesses);
        let mut solver = ExhaustiveSolver::new(&Alphabet::letters(alphabet), secret.len());
        let survivors = solver.survivors(&history).unwrap();
        prop_assert!(survivors.contains(&secret));
        let choices = solver.valid_choices(&history).unwrap();
        prop_assert!(contains_code(&choices, &secret));
    }

    // 2. Every survivor reproduces every recorded feedback
    #[test]
    fn solver_survivors_match_history((alphabet, secret, guesses) in round_strategy()) {
        let history = history_for(&secret, &guesses);
        let mut solver = ExhaustiveSolver::new(&Alphabet::letters(alphabet), secret.len());
        for code in solver.survivors(&history).unwrap() {
            for record in &history {
                prop_assert_eq!(Feedback::evaluate(record.guess(), &code), record.feedback());
            }
        }
    }

    // 3. The engine never drops a candidate the solver keeps
    #[test]
    fn engine_contains_solver((alphabet, secret, guesses) in round_strategy()) {
        let alphabet = Alphabet::letters(alphabet);
        let history = history_for(&secret, &guesses);
        let mut solver = ExhaustiveSolver::new(&alphabet, secret.len());
        let mut engine = DeductionEngine::new(&alphabet, secret.len());
        let exact = solver.valid_choices(&history).unwrap();
        let deduced = engine.valid_choices(&history);
        prop_assert!(deduced.is_ok(), "spurious error {:?} for {:?}", deduced, history);
        let deduced = deduced.unwrap();
        prop_assert!(deduced.is_superset(&exact), "{:?} vs {:?}", deduced, exact);
        prop_assert!(contains_code(&deduced, &secret));
    }

    // 4. The core rule set alone is sound too
    #[test]
    fn core_rules_contain_solver((alphabet, secret, guesses) in round_strategy()) {
        let alphabet = Alphabet::letters(alphabet);
        let history = history_for(&secret, &guesses);
        let mut solver = ExhaustiveSolver::new(&alphabet, secret.len());
        let mut engine = DeductionEngine::with_rules(&alphabet, secret.len(), rule::core_rules());
        let exact = solver.valid_choices(&history).unwrap();
        let deduced = engine.valid_choices(&history).unwrap();
        prop_assert!(deduced.is_superset(&exact));
    }

    // 5. Incremental analysis agrees with analyzing the whole history at once
    #[test]
    fn engine_incremental_matches_replay((alphabet, secret, guesses) in round_strategy()) {
        let alphabet = Alphabet::letters(alphabet);
        let history = history_for(&secret, &guesses);
        let mut incremental = DeductionEngine::new(&alphabet, secret.len());
        let mut partial = History::new(secret.len());
        for record in &history {
            partial.push(record.guess().clone(), record.feedback()).unwrap();
            incremental.valid_choices(&partial).unwrap();
        }
        let mut replay = DeductionEngine::new(&alphabet, secret.len());
        prop_assert_eq!(
            incremental.valid_choices(&history).unwrap(),
            replay.valid_choices(&history).unwrap()
        );
    }

    // 6. Known counts and eliminations agree with the secret
    #[test]
    fn engine_knowledge_matches_secret((alphabet, secret, guesses) in round_strategy()) {
        let alphabet = Alphabet::letters(alphabet);
        let history = history_for(&secret, &guesses);
        let mut engine = DeductionEngine::new(&alphabet, secret.len());
        engine.valid_choices(&history).unwrap();
        for element in alphabet.elements() {
            let occurrences = secret.count(element);
            if let Some(count) = engine.exact_count(element) {
                prop_assert_eq!(usize::from(count), occurrences);
            }
            if engine.is_confirmed(element) {
                prop_assert!(occurrences > 0);
            }
            if engine.is_eliminated(element) {
                prop_assert_eq!(occurrences, 0);
            }
        }
    }
}
