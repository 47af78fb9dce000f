//! The non-interactive shortcut: one plain roll, bounds-checked and rendered in a single step, with its
//! externally-evaluated total judged against an optional goal.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{
	term::Term,
	validate::{check_range, validate, Limits, ValidationError},
};

/// A single plain roll - count, sides, flat modifier - with an optional goal to meet or beat.
///
/// The quick path bypasses the session entirely: no keep, reroll, scale, or clamp rules, just the same
/// bounds validation and the same canonical notation. The roll itself still belongs to the external
/// evaluator; [`outcome`](Self::outcome) classifies whatever total it reports.
///
/// # Examples
/// ```
/// use kismet::{
/// 	quick::{Outcome, QuickRoll},
/// 	validate::Limits,
/// };
///
/// let quick = QuickRoll::new(1, 20).modifier(5).goal(15);
/// assert_eq!(quick.notation(&Limits::default())?, "(1d20 + 5)");
/// assert_eq!(quick.outcome(18), Some(Outcome::Success));
/// assert_eq!(quick.outcome(12), Some(Outcome::Failure));
/// # Ok::<(), kismet::validate::ValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The four fields are the whole request")]
pub struct QuickRoll {
	/// Number of dice to roll
	pub count: u32,

	/// Number of sides for each die
	pub sides: u32,

	/// Flat value added to the total
	pub modifier: i32,

	/// Total to meet or beat; `0` disables classification
	pub goal: i32,
}

impl QuickRoll {
	/// Creates a quick roll with no modifier and no goal.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		Self {
			count,
			sides,
			modifier: 0,
			goal: 0,
		}
	}

	/// Sets the flat modifier.
	#[must_use]
	pub const fn modifier(mut self, modifier: i32) -> Self {
		self.modifier = modifier;
		self
	}

	/// Sets the goal to meet or beat.
	#[must_use]
	pub const fn goal(mut self, goal: i32) -> Self {
		self.goal = goal;
		self
	}

	/// Bounds-checks the roll and renders its notation for the external evaluator.
	///
	/// # Errors
	/// If count, sides, modifier, or goal are out of bounds, an error variant naming the offending field
	/// is returned.
	pub fn notation(&self, limits: &Limits) -> Result<String, ValidationError> {
		let flat = i64::from(limits.max_flat);
		check_range("goal", self.goal.into(), -flat, flat)?;

		let term = Term {
			modifier: self.modifier,
			..Term::new(self.count, self.sides)
		};
		validate(&term, limits)?;
		Ok(term.to_string())
	}

	/// Classifies an externally-evaluated total against the goal. `None` when no goal was set.
	#[must_use]
	pub const fn outcome(&self, total: i32) -> Option<Outcome> {
		Outcome::classify(total, self.goal)
	}
}

/// Whether a goal-checked roll met its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "A roll either meets its goal or it doesn't")]
pub enum Outcome {
	/// The total met or beat the goal
	Success,

	/// The total fell short of the goal
	Failure,
}

impl Outcome {
	/// Classifies a total against a goal: success when `total >= goal`, failure otherwise. A goal of `0`
	/// means no check was requested, so there is nothing to classify.
	#[must_use]
	pub const fn classify(total: i32, goal: i32) -> Option<Self> {
		if goal == 0 {
			None
		} else if total >= goal {
			Some(Self::Success)
		} else {
			Some(Self::Failure)
		}
	}
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Success => "success",
			Self::Failure => "failure",
		})
	}
}
