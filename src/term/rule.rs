//! Keep/drop, reroll, and scaling rules that can be attached to a [`Term`](super::Term), along with the
//! selector vocabulary they share.

use alloc::borrow::ToOwned;
use core::{fmt, str::FromStr};

use crate::validate::ValidationError;

/// Picks which subset of rolled values a [`KeepRule`] or [`RerollRule`] targets.
///
/// Each selector has a notation suffix that follows the rule's prefix in the rendered expression, and a
/// lowercase word accepted by its [`FromStr`] implementation (the vocabulary interactive callers collect
/// from text input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "Fixed vocabulary of the target grammar")]
pub enum Selector {
	/// The lowest-valued dice. Suffix: `l`
	Lowest,

	/// The highest-valued dice. Suffix: `h`
	Highest,

	/// Dice whose value equals the rule's number. No suffix.
	Exact,

	/// Dice whose value is greater than the rule's number. Suffix: `>`
	Greater,

	/// Dice whose value is less than the rule's number. Suffix: `<`
	Less,
}

impl Selector {
	/// Gets the notation suffix for the selector.
	#[must_use]
	pub const fn suffix(&self) -> &'static str {
		match self {
			Self::Lowest => "l",
			Self::Highest => "h",
			Self::Exact => "",
			Self::Greater => ">",
			Self::Less => "<",
		}
	}

	/// Gets the lowercase word for the selector, as accepted by its [`FromStr`] implementation.
	#[must_use]
	pub const fn word(&self) -> &'static str {
		match self {
			Self::Lowest => "lowest",
			Self::Highest => "highest",
			Self::Exact => "exact",
			Self::Greater => "greater",
			Self::Less => "less",
		}
	}
}

impl FromStr for Selector {
	type Err = ValidationError;

	/// Parses a selector from its word, case-insensitively.
	///
	/// # Errors
	/// If the input doesn't match any selector word, an [`UnknownOption`](ValidationError::UnknownOption)
	/// naming the `selector` field is returned.
	///
	/// # Examples
	/// ```
	/// use kismet::term::Selector;
	///
	/// assert_eq!("Highest".parse::<Selector>()?, Selector::Highest);
	/// # Ok::<(), kismet::validate::ValidationError>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"lowest" => Ok(Self::Lowest),
			"highest" => Ok(Self::Highest),
			"exact" => Ok(Self::Exact),
			"greater" => Ok(Self::Greater),
			"less" => Ok(Self::Less),
			_ => Err(ValidationError::UnknownOption {
				field: "selector",
				value: s.to_owned(),
			}),
		}
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.word())
	}
}

/// Whether a [`KeepRule`] keeps the selected dice (dropping the rest) or drops them (keeping the rest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "Fixed vocabulary of the target grammar")]
pub enum KeepMode {
	/// Keep the selected dice. Prefix: `k`
	Keep,

	/// Drop the selected dice. Prefix: `p`
	Drop,
}

impl KeepMode {
	/// Gets the notation prefix for the mode.
	#[must_use]
	pub const fn prefix(&self) -> &'static str {
		match self {
			Self::Keep => "k",
			Self::Drop => "p",
		}
	}
}

impl FromStr for KeepMode {
	type Err = ValidationError;

	/// Parses a keep mode from `keep` or `drop`, case-insensitively.
	///
	/// # Errors
	/// If the input matches neither word, an [`UnknownOption`](ValidationError::UnknownOption) naming the
	/// `keep` field is returned.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"keep" => Ok(Self::Keep),
			"drop" => Ok(Self::Drop),
			_ => Err(ValidationError::UnknownOption {
				field: "keep",
				value: s.to_owned(),
			}),
		}
	}
}

/// Keeps or drops a selected subset of a term's rolled dice.
///
/// # Examples
/// ```
/// use kismet::term::{KeepMode, KeepRule, Selector};
///
/// let keep_highest = KeepRule {
/// 	selector: Selector::Highest,
/// 	value: 1,
/// 	mode: KeepMode::Keep,
/// };
/// assert_eq!(keep_highest.to_string(), "kh1");
///
/// let drop_lowest = KeepRule {
/// 	selector: Selector::Lowest,
/// 	value: 2,
/// 	mode: KeepMode::Drop,
/// };
/// assert_eq!(drop_lowest.to_string(), "pl2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The three fields are the whole rule")]
pub struct KeepRule {
	/// Which dice the rule targets
	pub selector: Selector,

	/// Number the selector applies to - a dice count for lowest/highest, a face value otherwise
	pub value: u32,

	/// Whether the selected dice are kept or dropped
	pub mode: KeepMode,
}

impl fmt::Display for KeepRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.mode.prefix(), self.selector.suffix(), self.value)
	}
}

/// When and how often a [`RerollRule`] rerolls the dice it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "Fixed vocabulary of the target grammar")]
pub enum RerollMode {
	/// Reroll matching dice a single time. Prefix: `ro`
	Once,

	/// Reroll matching dice until none match anymore. Prefix: `rr`
	UntilNoneLeft,

	/// Reroll matching dice once and keep the original rolls as well. Prefix: `ra`
	KeepOriginal,
}

impl RerollMode {
	/// Gets the notation prefix for the mode.
	#[must_use]
	pub const fn prefix(&self) -> &'static str {
		match self {
			Self::Once => "ro",
			Self::UntilNoneLeft => "rr",
			Self::KeepOriginal => "ra",
		}
	}
}

impl FromStr for RerollMode {
	type Err = ValidationError;

	/// Parses a reroll mode from its notation prefix (`ro`, `rr`, or `ra`), case-insensitively.
	///
	/// # Errors
	/// If the input matches no prefix, an [`UnknownOption`](ValidationError::UnknownOption) naming the
	/// `reroll` field is returned.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"ro" => Ok(Self::Once),
			"rr" => Ok(Self::UntilNoneLeft),
			"ra" => Ok(Self::KeepOriginal),
			_ => Err(ValidationError::UnknownOption {
				field: "reroll",
				value: s.to_owned(),
			}),
		}
	}
}

/// Rerolls a selected subset of a term's rolled dice.
///
/// # Examples
/// ```
/// use kismet::term::{RerollMode, RerollRule, Selector};
///
/// let reroll_ones = RerollRule {
/// 	selector: Selector::Exact,
/// 	value: 1,
/// 	mode: RerollMode::Once,
/// };
/// assert_eq!(reroll_ones.to_string(), "ro1");
///
/// let reroll_above = RerollRule {
/// 	selector: Selector::Greater,
/// 	value: 5,
/// 	mode: RerollMode::UntilNoneLeft,
/// };
/// assert_eq!(reroll_above.to_string(), "rr>5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The three fields are the whole rule")]
pub struct RerollRule {
	/// Which dice the rule targets
	pub selector: Selector,

	/// Number the selector applies to - a dice count for lowest/highest, a face value otherwise
	pub value: u32,

	/// When and how often the selected dice are rerolled
	pub mode: RerollMode,
}

impl RerollRule {
	/// Checks whether the rule can never finish rerolling: rerolling the lowest or highest die until none
	/// are left always produces a new lowest or highest die to reroll.
	///
	/// Such a rule is rejected by [`validate`](crate::validate::validate) before it can ever be rendered
	/// for an evaluator.
	#[must_use]
	pub const fn is_endless(&self) -> bool {
		matches!(self.mode, RerollMode::UntilNoneLeft) && matches!(self.selector, Selector::Lowest | Selector::Highest)
	}
}

impl fmt::Display for RerollRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.mode.prefix(), self.selector.suffix(), self.value)
	}
}

/// Whether a [`ScaleRule`] multiplies or divides the term total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "Fixed vocabulary of the target grammar")]
pub enum ScaleOp {
	/// Multiply the total. Symbol: `*`
	Multiply,

	/// Divide the total. Symbol: `/`
	Divide,
}

impl ScaleOp {
	/// Gets the notation symbol for the operator.
	#[must_use]
	pub const fn symbol(&self) -> &'static str {
		match self {
			Self::Multiply => "*",
			Self::Divide => "/",
		}
	}
}

impl FromStr for ScaleOp {
	type Err = ValidationError;

	/// Parses a scale operator from `multiply` or `divide`, case-insensitively.
	///
	/// # Errors
	/// If the input matches neither word, an [`UnknownOption`](ValidationError::UnknownOption) naming the
	/// `scale` field is returned.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"multiply" => Ok(Self::Multiply),
			"divide" => Ok(Self::Divide),
			_ => Err(ValidationError::UnknownOption {
				field: "scale",
				value: s.to_owned(),
			}),
		}
	}
}

/// Multiplies or divides a term's total, outside the term's parentheses.
///
/// # Examples
/// ```
/// use kismet::term::{ScaleOp, ScaleRule};
///
/// let double = ScaleRule {
/// 	op: ScaleOp::Multiply,
/// 	value: 2,
/// };
/// assert_eq!(double.to_string(), " * 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_structs, reason = "The two fields are the whole rule")]
pub struct ScaleRule {
	/// Whether the total is multiplied or divided
	pub op: ScaleOp,

	/// Value the total is multiplied or divided by
	pub value: u32,
}

impl fmt::Display for ScaleRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, " {} {}", self.op.symbol(), self.value)
	}
}

/// Parses the yes/no vocabulary used for boolean fields such as negation: `yes`, `y`, `true`, `t`, `1`,
/// `enable`, and `on` are true; `no`, `n`, `false`, `f`, `0`, `disable`, and `off` are false.
/// Matching is case-insensitive.
///
/// # Errors
/// If the input matches neither set of words, an [`UnknownOption`](ValidationError::UnknownOption) naming
/// the given field is returned.
///
/// # Examples
/// ```
/// use kismet::term::parse_toggle;
///
/// assert!(parse_toggle("negate", "Yes")?);
/// assert!(!parse_toggle("negate", "off")?);
/// assert!(parse_toggle("negate", "maybe").is_err());
/// # Ok::<(), kismet::validate::ValidationError>(())
/// ```
pub fn parse_toggle(field: &'static str, value: &str) -> Result<bool, ValidationError> {
	match value.to_lowercase().as_str() {
		"yes" | "y" | "true" | "t" | "1" | "enable" | "on" => Ok(true),
		"no" | "n" | "false" | "f" | "0" | "disable" | "off" => Ok(false),
		_ => Err(ValidationError::UnknownOption {
			field,
			value: value.to_owned(),
		}),
	}
}
