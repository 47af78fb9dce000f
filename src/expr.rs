//! The ordered collection of terms that makes up one composite roll expression.

use alloc::{
	string::{String, ToString},
	vec::Vec,
};
use core::{fmt, slice};

use crate::{session::SessionError, term::Term};

/// An insertion-ordered, label-keyed collection of [`Term`]s representing one composite roll.
///
/// Insertion order is load-bearing: it defines left-to-right order in the rendered composite expression,
/// and thereby which position in the external evaluator's result maps back to which term. Labels are the
/// terms' derived `"{count}d{sides}"` identities, so the set can never hold two terms with equal count and
/// sides.
///
/// # Examples
/// ```
/// use kismet::{term::Term, ExpressionSet};
///
/// let mut set = ExpressionSet::new();
/// set.add(Term::new(2, 6))?;
/// set.add(Term::new(1, 20))?;
/// assert_eq!(set.to_string(), "((2d6), (1d20))");
/// assert!(set.add(Term::new(2, 6)).is_err());
/// # Ok::<(), kismet::session::SessionError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionSet {
	/// Terms in insertion order
	terms: Vec<Term>,
}

impl ExpressionSet {
	/// Creates an empty set.
	#[must_use]
	pub const fn new() -> Self {
		Self { terms: Vec::new() }
	}

	/// Adds a term to the end of the set.
	///
	/// # Errors
	/// If a term with the same derived label already exists, a
	/// [`DuplicateLabel`](SessionError::DuplicateLabel) is returned and the existing term is left
	/// untouched.
	pub fn add(&mut self, term: Term) -> Result<(), SessionError> {
		let label = term.label();
		if self.get(&label).is_some() {
			return Err(SessionError::DuplicateLabel(label));
		}
		self.terms.push(term);
		Ok(())
	}

	/// Gets the term with the given label.
	#[must_use]
	pub fn get(&self, label: &str) -> Option<&Term> {
		self.terms.iter().find(|term| term.label() == label)
	}

	/// Gets the term with the given label, mutably.
	#[must_use]
	pub fn get_mut(&mut self, label: &str) -> Option<&mut Term> {
		self.terms.iter_mut().find(|term| term.label() == label)
	}

	/// Removes and returns the term with the given label, preserving the order of the rest.
	pub fn remove(&mut self, label: &str) -> Option<Term> {
		let index = self.terms.iter().position(|term| term.label() == label)?;
		Some(self.terms.remove(index))
	}

	/// Checks whether the set contains no terms.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Gets the number of terms in the set.
	#[must_use]
	pub fn len(&self) -> usize {
		self.terms.len()
	}

	/// Iterates over the terms in insertion order.
	pub fn iter(&self) -> slice::Iter<'_, Term> {
		self.terms.iter()
	}

	/// Iterates over the terms' labels in insertion order.
	pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
		self.terms.iter().map(Term::label)
	}

	/// Renders the composite notation. Equivalent to `to_string()`.
	#[must_use]
	pub fn notation(&self) -> String {
		self.to_string()
	}
}

impl<'a> IntoIterator for &'a ExpressionSet {
	type Item = &'a Term;
	type IntoIter = slice::Iter<'a, Term>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for ExpressionSet {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// Each term's notation is joined with `", "` and the whole sequence is wrapped in one outer pair of
	/// parentheses, making the composite a single expression whose sub-results the evaluator can attribute
	/// back to terms by position.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (index, term) in self.terms.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{term}")?;
		}
		f.write_str(")")
	}
}
