use crate::{
    DeductionState, SolverError,
    rule::{self, BoxedRule},
};

/// Statistics collected while running a [`RuleBattery`].
///
/// Tracks how many times each rule made progress, as well as the total
/// number of steps taken.
///
/// # Examples
///
/// ```
/// use codebreak_solver::{DeductionState, RuleBattery};
///
/// let battery = RuleBattery::with_all_rules();
/// let mut state = DeductionState::new(6, 4);
/// let mut stats = battery.new_stats();
///
/// battery.run(&mut state, &mut stats)?;
/// assert!(!stats.has_progress());
/// # Ok::<(), codebreak_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStats {
    applications: Vec<usize>,
    total_steps: usize,
}

impl RuleStats {
    /// Returns rule application counts in battery order.
    ///
    /// Includes rules that never made progress with a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of steps taken.
    ///
    /// This is the sum of all rule applications.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns `true` if any rule made progress at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// An ordered list of rules applied to a fixpoint.
///
/// Each [`step`](Self::step) applies the first rule that makes progress and
/// returns, so the next step starts again from the first rule. Cheap rules
/// placed early therefore run to exhaustion before later rules are tried.
///
/// # Examples
///
/// ```
/// use codebreak_solver::{
///     RuleBattery,
///     rule::{BoxedRule, ZeroExact, ZeroFeedback},
/// };
///
/// let rules: Vec<BoxedRule> = vec![Box::new(ZeroFeedback::new()), Box::new(ZeroExact::new())];
/// let battery = RuleBattery::new(rules);
/// assert_eq!(battery.rules().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RuleBattery {
    rules: Vec<BoxedRule>,
}

impl RuleBattery {
    /// Creates a battery applying `rules` in the given order.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a battery with all available rules, as ordered by
    /// [`rule::all_rules`].
    #[must_use]
    pub fn with_all_rules() -> Self {
        Self::new(rule::all_rules())
    }

    /// Creates a statistics object aligned with this battery's rule order.
    #[must_use]
    pub fn new_stats(&self) -> RuleStats {
        RuleStats {
            applications: vec![0; self.rules.len()],
            total_steps: 0,
        }
    }

    /// Returns the configured rules in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`RuleStats::applications`].
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Applies the first rule that makes progress.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A rule made progress
    /// * `Ok(false)` - No rule could make progress
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if the state is inconsistent
    /// before or after the step, or a rule proves a contradiction.
    pub fn step(
        &self,
        state: &mut DeductionState,
        stats: &mut RuleStats,
    ) -> Result<bool, SolverError> {
        debug_assert_eq!(self.rules.len(), stats.applications.len());
        state.check_consistency()?;

        for (i, rule) in self.rules.iter().enumerate() {
            if rule.apply(state)? {
                log::debug!("rule {} made progress", rule.name());
                stats.applications[i] += 1;
                stats.total_steps += 1;
                state.check_consistency()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Applies steps until no rule makes progress.
    ///
    /// # Errors
    ///
    /// Same as [`step`](Self::step).
    pub fn run(
        &self,
        state: &mut DeductionState,
        stats: &mut RuleStats,
    ) -> Result<(), SolverError> {
        while self.step(state, stats)? {}
        Ok(())
    }
}
