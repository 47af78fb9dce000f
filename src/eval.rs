//! The seam to the external dice-rolling evaluator, and scripted results for tests and replay.
//!
//! This crate never rolls dice. It renders notation, and an [`Evaluator`] - a d20-style engine, a remote
//! service, a replay of recorded results - turns that notation into totals with per-term breakdowns. The
//! shapes here are the whole contract: the evaluator's grammar is its own concern beyond accepting the
//! notation this crate produces.

use alloc::{collections::VecDeque, string::String, vec::Vec};
use core::convert::Infallible;

/// Consumes rendered notation and produces a total with per-term breakdowns.
pub trait Evaluator {
	/// Error the evaluator can produce
	type Error;

	/// Evaluates a rendered composite expression, returning the overall total and one part per positional
	/// sub-expression, in rendering order.
	///
	/// # Errors
	/// Whatever the evaluator considers an error; this crate's notation is syntactically valid for a
	/// d20-style grammar, so failures are the evaluator's own (I/O, resource limits, and the like).
	fn evaluate(&mut self, expression: &str) -> Result<RollResult, Self::Error>;
}

/// Result of evaluating one composite expression
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The two fields are the whole contract")]
pub struct RollResult {
	/// Overall total of the whole expression
	pub total: i32,

	/// Per-term results, in the order the terms were rendered
	pub parts: Vec<PartRoll>,
}

impl RollResult {
	/// Creates a result from a total and its parts.
	#[must_use]
	pub const fn new(total: i32, parts: Vec<PartRoll>) -> Self {
		Self { total, parts }
	}
}

/// Result of one positional sub-expression of a composite roll
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The two fields are the whole contract")]
pub struct PartRoll {
	/// Total of this part
	pub total: i32,

	/// Human-readable per-die breakdown, e.g. `4d6kh3 (4, 2, 6, 5)`
	pub breakdown: String,
}

impl PartRoll {
	/// Creates a part result from a total and a breakdown string.
	#[must_use]
	pub fn new(total: i32, breakdown: impl Into<String>) -> Self {
		Self {
			total,
			breakdown: breakdown.into(),
		}
	}
}

/// Hands out pre-queued results in order, ignoring the expressions it is given. Mainly useful for testing
/// and for replaying recorded rolls.
///
/// # Examples
/// ```
/// use kismet::eval::{Evaluator, PartRoll, RollResult, Scripted};
///
/// let mut evaluator = Scripted::new([RollResult::new(18, vec![PartRoll::new(18, "1d20 (13) + 5")])]);
/// let result = evaluator.evaluate("(1d20 + 5)")?;
/// assert_eq!(result.total, 18);
/// assert!(evaluator.is_exhausted());
/// # Ok::<(), core::convert::Infallible>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scripted {
	/// Results yet to be handed out
	queue: VecDeque<RollResult>,
}

impl Scripted {
	/// Creates a scripted evaluator from results in hand-out order.
	#[must_use]
	pub fn new(results: impl IntoIterator<Item = RollResult>) -> Self {
		Self {
			queue: results.into_iter().collect(),
		}
	}

	/// Checks whether all queued results have been handed out.
	#[must_use]
	pub fn is_exhausted(&self) -> bool {
		self.queue.is_empty()
	}
}

impl Evaluator for Scripted {
	type Error = Infallible;

	/// Hands out the next queued result.
	///
	/// # Panics
	/// If no queued results remain.
	#[expect(
		clippy::expect_used,
		reason = "Scripted evaluation is for tests, where running dry is a bug in the test"
	)]
	fn evaluate(&mut self, _expression: &str) -> Result<RollResult, Self::Error> {
		Ok(self.queue.pop_front().expect("no scripted results left"))
	}
}
