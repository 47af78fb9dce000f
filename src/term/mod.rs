//! The term data model: one configurable set of dice within a composite roll, and its canonical
//! notation rendering.
//!
//! A [`Term`] is pure data. Rendering ([`fmt::Display`]) is total and never fails; semantic soundness is
//! the separate concern of [`validate`](crate::validate::validate), which interactive callers run before
//! committing any change to a stored term.

pub mod rule;

use alloc::string::{String, ToString};
use core::fmt;

pub use self::rule::{
	parse_toggle, KeepMode, KeepRule, RerollMode, RerollRule, ScaleOp, ScaleRule, Selector,
};

/// One configurable set of dice within a composite roll.
///
/// Fields are stored independently and in any order, but the rendered notation always follows the fixed
/// grammar order: negation marker, opening paren, `{count}d{sides}`, min clamp, max clamp, reroll rule,
/// keep rule, flat modifier, closing paren, scale rule, damage-type tag.
///
/// # Examples
/// ```
/// use kismet::term::{KeepMode, KeepRule, Selector, Term};
///
/// let term = Term::builder()
/// 	.count(4)
/// 	.sides(6)
/// 	.keep(KeepRule {
/// 		selector: Selector::Highest,
/// 		value: 3,
/// 		mode: KeepMode::Keep,
/// 	})
/// 	.modifier(2)
/// 	.build();
/// assert_eq!(term.to_string(), "(4d6kh3 + 2)");
/// assert_eq!(term.label(), "4d6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The field set is the grammar itself")]
pub struct Term {
	/// Number of dice to roll
	pub count: u32,

	/// Number of sides for each die
	pub sides: u32,

	/// Damage-type tag rendered outermost, stored without brackets
	pub damage_type: Option<String>,

	/// Keep/drop rule for the rolled dice
	pub keep: Option<KeepRule>,

	/// Flat value added to (or, when negative, subtracted from) the term total
	pub modifier: i32,

	/// Whether the whole parenthesized term is negated
	pub negate: bool,

	/// Multiply/divide applied to the term total, outside the parentheses
	pub scale: Option<ScaleRule>,

	/// Lower clamp on individual die faces
	pub min: Option<u32>,

	/// Upper clamp on individual die faces
	pub max: Option<u32>,

	/// Reroll rule for the rolled dice
	pub reroll: Option<RerollRule>,
}

impl Term {
	/// Creates a new plain term with a given count and number of sides and everything else off.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		Self {
			count,
			sides,
			damage_type: None,
			keep: None,
			modifier: 0,
			negate: false,
			scale: None,
			min: None,
			max: None,
			reroll: None,
		}
	}

	/// Gets the term's derived label, `"{count}d{sides}"`.
	///
	/// The label is the term's identity within an [`ExpressionSet`](crate::expr::ExpressionSet): two terms
	/// with equal count and sides collide no matter how their other fields differ.
	#[must_use]
	pub fn label(&self) -> String {
		alloc::format!("{}d{}", self.count, self.sides)
	}

	/// Renders the term's canonical notation. Equivalent to `to_string()`.
	#[must_use]
	pub fn notation(&self) -> String {
		self.to_string()
	}

	/// Creates a new term builder.
	#[must_use]
	#[inline]
	pub fn builder() -> Builder {
		Builder::default()
	}
}

impl Default for Term {
	/// Creates the default term (1d20).
	#[inline]
	fn default() -> Self {
		Self::new(1, 20)
	}
}

impl fmt::Display for Term {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is the canonical notation for the term, with its parts in the fixed grammar order.
	/// Negative modifiers render their magnitude after ` - `, since the downstream grammar would
	/// re-negate a raw negative value.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.negate {
			f.write_str("-")?;
		}
		write!(f, "({}d{}", self.count, self.sides)?;
		if let Some(min) = self.min {
			write!(f, "mi{min}")?;
		}
		if let Some(max) = self.max {
			write!(f, "ma{max}")?;
		}
		if let Some(reroll) = &self.reroll {
			write!(f, "{reroll}")?;
		}
		if let Some(keep) = &self.keep {
			write!(f, "{keep}")?;
		}
		if self.modifier > 0 {
			write!(f, " + {}", self.modifier)?;
		} else if self.modifier < 0 {
			write!(f, " - {}", self.modifier.unsigned_abs())?;
		}
		f.write_str(")")?;
		if let Some(scale) = &self.scale {
			write!(f, "{scale}")?;
		}
		if let Some(damage_type) = &self.damage_type {
			write!(f, "[{damage_type}]")?;
		}
		Ok(())
	}
}

/// Strips the bracket characters that would corrupt a rendered damage-type tag.
pub(crate) fn sanitize_damage_type(raw: &str) -> String {
	raw.chars().filter(|c| !matches!(c, '[' | ']')).collect()
}

/// Builds a [`Term`] with a fluent interface.
///
/// # Examples
/// ```
/// use kismet::term::Term;
///
/// let term = Term::builder().count(2).sides(8).build();
/// assert_eq!(term, Term::new(2, 8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder(Term);

impl Builder {
	/// Sets the number of dice to roll.
	#[must_use]
	pub const fn count(mut self, count: u32) -> Self {
		self.0.count = count;
		self
	}

	/// Sets the number of sides per die.
	#[must_use]
	pub const fn sides(mut self, sides: u32) -> Self {
		self.0.sides = sides;
		self
	}

	/// Sets the damage-type tag, stripping any brackets from it.
	#[must_use]
	pub fn damage_type(mut self, damage_type: &str) -> Self {
		self.0.damage_type = Some(sanitize_damage_type(damage_type));
		self
	}

	/// Sets the keep/drop rule.
	#[must_use]
	pub const fn keep(mut self, keep: KeepRule) -> Self {
		self.0.keep = Some(keep);
		self
	}

	/// Sets the flat modifier.
	#[must_use]
	pub const fn modifier(mut self, modifier: i32) -> Self {
		self.0.modifier = modifier;
		self
	}

	/// Sets whether the term is negated.
	#[must_use]
	pub const fn negate(mut self, negate: bool) -> Self {
		self.0.negate = negate;
		self
	}

	/// Sets the scale rule.
	#[must_use]
	pub const fn scale(mut self, scale: ScaleRule) -> Self {
		self.0.scale = Some(scale);
		self
	}

	/// Sets the lower face clamp.
	#[must_use]
	pub const fn min(mut self, min: u32) -> Self {
		self.0.min = Some(min);
		self
	}

	/// Sets the upper face clamp.
	#[must_use]
	pub const fn max(mut self, max: u32) -> Self {
		self.0.max = Some(max);
		self
	}

	/// Sets the reroll rule.
	#[must_use]
	pub const fn reroll(mut self, reroll: RerollRule) -> Self {
		self.0.reroll = Some(reroll);
		self
	}

	/// Finalizes the term.
	#[must_use]
	pub fn build(self) -> Term {
		self.0
	}
}
