//! Checks the deduction engine against the exhaustive solver on every secret.
//!
//! For each secret of the candidate space a round is played with a
//! deterministic strategy: always guess the first code the exhaustive solver
//! still considers possible. After every guess the deduction engine's
//! candidates must contain the solver's. The example reports how often the
//! engine proved the secret before it was guessed, and exits with a non-zero
//! status on any disagreement.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example engine_agreement
//! ```
//!
//! Other alphabet sizes, code lengths and rule sets:
//!
//! ```sh
//! cargo run --release --example engine_agreement -- --alphabet 8 --length 5 --rules core
//! ```
//!
//! Set `RUST_LOG=debug` to see per-guess engine logs.

use std::process;

use clap::{Parser, ValueEnum};
use codebreak_core::{Alphabet, Code, Feedback, History};
use codebreak_solver::{
    CandidateSpaceCache, DeductionEngine, ExhaustiveSolver, HintSource as _, SolverError, rule,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RuleSet {
    All,
    Core,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of elements in the alphabet.
    #[arg(short, long, value_name = "SIZE", default_value_t = 6)]
    alphabet: usize,

    /// Number of positions in a code.
    #[arg(short, long, value_name = "LENGTH", default_value_t = 4)]
    length: usize,

    /// Deduction rule set to check.
    #[arg(long, value_name = "SET", default_value = "all")]
    rules: RuleSet,

    /// Stop a round after this many guesses.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    max_guesses: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct Outcome {
    guesses: usize,
    proven_early: bool,
    disagreements: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if args.alphabet == 0 || args.alphabet > 26 {
        eprintln!("--alphabet must be between 1 and 26.");
        process::exit(2);
    }

    let alphabet = Alphabet::letters(args.alphabet);
    let cache = CandidateSpaceCache::new();
    let space = match cache.get_or_generate(args.alphabet, args.length) {
        Ok(space) => space,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let outcomes: Result<Vec<Outcome>, SolverError> = space
        .codes()
        .par_iter()
        .map(|secret| play(&args, &alphabet, &cache, secret))
        .collect();
    let outcomes = match outcomes {
        Ok(outcomes) => outcomes,
        Err(err) => {
            eprintln!("engine failed on a consistent history: {err}");
            process::exit(1);
        }
    };

    let rounds = outcomes.len();
    let total_guesses: usize = outcomes.iter().map(|o| o.guesses).sum();
    let proven_early = outcomes.iter().filter(|o| o.proven_early).count();
    let disagreements: usize = outcomes.iter().map(|o| o.disagreements).sum();

    #[expect(clippy::cast_precision_loss)]
    let average = total_guesses as f64 / rounds as f64;
    println!("Rounds:           {rounds}");
    println!("Average guesses:  {average:.3}");
    println!("Proven early:     {proven_early}");
    println!("Disagreements:    {disagreements}");

    if disagreements > 0 {
        process::exit(1);
    }
}

fn play(
    args: &Args,
    alphabet: &Alphabet,
    cache: &CandidateSpaceCache,
    secret: &Code,
) -> Result<Outcome, SolverError> {
    let rules = match args.rules {
        RuleSet::All => rule::all_rules(),
        RuleSet::Core => rule::core_rules(),
    };
    let mut engine = DeductionEngine::with_rules(alphabet, args.length, rules);
    let mut solver = ExhaustiveSolver::with_cache(alphabet, args.length, cache)?;
    let mut history = History::new(args.length);
    let mut outcome = Outcome::default();

    while outcome.guesses < args.max_guesses {
        let Some(guess) = solver.survivors(&history)?.into_iter().next() else {
            break;
        };
        let feedback = Feedback::evaluate(&guess, secret);
        history.push(guess.clone(), feedback)?;
        outcome.guesses += 1;

        let hints = engine.valid_choices(&history)?;
        let exact = solver.valid_choices(&history)?;
        if !hints.is_superset(&exact) {
            eprintln!("secret {secret}: engine dropped a candidate after {guess} {feedback}");
            outcome.disagreements += 1;
        }
        if feedback.is_solved(args.length) {
            break;
        }
        if hints.proven_code().is_some() {
            outcome.proven_early = true;
        }
    }
    Ok(outcome)
}
