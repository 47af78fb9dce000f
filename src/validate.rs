//! Semantic validation of terms against evaluator-compatibility limits.
//!
//! Validation is pure and runs *before* a mutation is committed to a term held by an
//! [`ExpressionSet`](crate::expr::ExpressionSet): a rejected candidate leaves the stored term untouched.
//! Rendering itself never fails, so anything that would crash or hang the external evaluator has to be
//! caught here.

use alloc::string::String;

use crate::term::{RerollRule, Term};

/// Bounds a term must stay within to remain compatible with the external evaluator.
///
/// The defaults cover the reference evaluator's limits; callers talking to a stricter or looser one
/// construct their own.
///
/// # Examples
/// ```
/// use kismet::validate::{validate, Limits, ValidationError};
/// use kismet::term::Term;
///
/// let strict = Limits::new(10, 100, 500);
/// let term = Term::new(12, 6);
/// assert!(matches!(
/// 	validate(&term, &strict),
/// 	Err(ValidationError::OutOfBounds { field: "count", .. })
/// ));
/// assert!(validate(&term, &Limits::default()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The bounds are the whole configuration")]
pub struct Limits {
	/// Maximum number of dice in one term
	pub max_dice: u32,

	/// Maximum number of sides per die
	pub max_sides: u32,

	/// Magnitude bound for flat values: modifiers, scale values, and goals
	pub max_flat: i32,
}

impl Limits {
	/// Creates custom limits.
	#[must_use]
	pub const fn new(max_dice: u32, max_sides: u32, max_flat: i32) -> Self {
		Self {
			max_dice,
			max_sides,
			max_flat,
		}
	}

	/// Upper bound for keep/reroll rule values, which are a dice count for lowest/highest selectors and a
	/// face value for the others.
	const fn rule_value_cap(&self) -> u32 {
		if self.max_sides > self.max_dice {
			self.max_sides
		} else {
			self.max_dice
		}
	}
}

impl Default for Limits {
	/// Creates the reference limits: at most 100 dice of up to 100 sides, flat values within plus or minus
	/// 500.
	fn default() -> Self {
		Self::new(100, 100, 500)
	}
}

/// An error from validating a term or parsing one of its option fields
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
	/// The reroll rule can never finish: rerolling the lowest or highest die until none are left always
	/// produces a new lowest or highest die to reroll.
	#[error("{0} would reroll forever")]
	InfiniteReroll(RerollRule),

	/// A numeric field is outside the allowed range.
	#[error("{field} of {value} is outside the allowed range {min}..={max}")]
	OutOfBounds {
		/// Name of the offending field
		field: &'static str,
		/// Value that was given
		value: i64,
		/// Smallest allowed value
		min: i64,
		/// Largest allowed value
		max: i64,
	},

	/// A textual option doesn't match any known choice for its field.
	#[error("{value:?} is not a recognized option for {field}")]
	UnknownOption {
		/// Name of the offending field
		field: &'static str,
		/// Value that was given
		value: String,
	},
}

/// Checks a term for semantic soundness: every numeric field within the given limits, and no reroll rule
/// that would run forever.
///
/// Pure; the term is not modified. Callers mutating a stored term validate a candidate copy first and
/// commit only on success.
///
/// # Errors
/// The first violation found is returned, naming the offending field.
///
/// # Examples
/// ```
/// use kismet::term::{RerollMode, RerollRule, Selector, Term};
/// use kismet::validate::{validate, Limits, ValidationError};
///
/// let term = Term::builder()
/// 	.count(4)
/// 	.sides(6)
/// 	.reroll(RerollRule {
/// 		selector: Selector::Lowest,
/// 		value: 1,
/// 		mode: RerollMode::UntilNoneLeft,
/// 	})
/// 	.build();
/// assert!(matches!(
/// 	validate(&term, &Limits::default()),
/// 	Err(ValidationError::InfiniteReroll(..))
/// ));
/// ```
pub fn validate(term: &Term, limits: &Limits) -> Result<(), ValidationError> {
	let flat = i64::from(limits.max_flat);
	let cap = i64::from(limits.rule_value_cap());

	check_range("count", term.count.into(), 1, limits.max_dice.into())?;
	check_range("sides", term.sides.into(), 1, limits.max_sides.into())?;
	check_range("modifier", term.modifier.into(), -flat, flat)?;
	if let Some(min) = term.min {
		check_range("min", min.into(), 1, limits.max_sides.into())?;
	}
	if let Some(max) = term.max {
		check_range("max", max.into(), 1, limits.max_sides.into())?;
	}
	if let Some(reroll) = term.reroll {
		check_range("reroll", reroll.value.into(), 1, cap)?;
		if reroll.is_endless() {
			return Err(ValidationError::InfiniteReroll(reroll));
		}
	}
	if let Some(keep) = term.keep {
		check_range("keep", keep.value.into(), 1, cap)?;
	}
	if let Some(scale) = term.scale {
		check_range("scale", scale.value.into(), 1, flat)?;
	}

	Ok(())
}

/// Checks a single numeric field against an inclusive range.
pub(crate) fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
	if value < min || value > max {
		return Err(ValidationError::OutOfBounds { field, value, min, max });
	}
	Ok(())
}
