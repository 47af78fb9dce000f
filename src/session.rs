//! The interactive building session: a selection cursor over an [`ExpressionSet`] with guarded mutation.
//!
//! A session is owned by exactly one in-flight interaction; nothing here locks or blocks. Every field
//! mutation is applied to a candidate copy of the selected term and validated before it is committed, so
//! the stored expression is always sound. Abandoning a session is cancellation - no mutation has any
//! effect outside the session until [`finalize`](BuilderSession::finalize) succeeds.

use alloc::{
	borrow::ToOwned,
	string::{String, ToString},
};

use crate::{
	expr::ExpressionSet,
	term::{sanitize_damage_type, KeepRule, RerollRule, ScaleRule, Term},
	validate::{validate, Limits, ValidationError},
};

/// An error from a building-session operation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
	/// A term with the same derived label already exists in the set.
	#[error("{0} already exists")]
	DuplicateLabel(String),

	/// No term with the given label exists in the set.
	#[error("no term labeled {0}")]
	NotFound(String),

	/// A field mutation was attempted with no term selected.
	#[error("no term is selected for editing")]
	NoSelection,

	/// Finalizing was attempted with no terms in the set.
	#[error("no dice to roll")]
	EmptySet,

	/// The candidate mutation failed validation; the stored term is unchanged.
	#[error(transparent)]
	Invalid(#[from] ValidationError),
}

/// Stateful assembly of a composite roll, one term at a time.
///
/// Terms are added with [`new_term`](Self::new_term), which also selects the new term for editing; the
/// typed `set_*` operations mutate the selected term, and [`select`](Self::select) moves the cursor
/// between terms. Count and sides have no setters because the label is derived from them - replacing them
/// means [`remove`](Self::remove) plus [`new_term`](Self::new_term).
///
/// [`finalize`](Self::finalize) consumes the session, so no operation can follow it by construction.
///
/// # Examples
/// ```
/// use kismet::BuilderSession;
///
/// let mut session = BuilderSession::new();
/// session.new_term(2, 6)?;
/// session.set_modifier(3)?;
/// assert_eq!(session.finalize()?, "((2d6 + 3))");
/// # Ok::<(), kismet::session::SessionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuilderSession {
	/// Terms assembled so far
	terms: ExpressionSet,

	/// Label of the term currently open for editing
	selected: Option<String>,

	/// Bounds applied to every accepted mutation
	limits: Limits,
}

impl BuilderSession {
	/// Creates an empty session with the default limits.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty session with custom limits.
	#[must_use]
	pub fn with_limits(limits: Limits) -> Self {
		Self {
			limits,
			..Self::default()
		}
	}

	/// Adds a new plain term with the given count and sides, selects it for editing, and returns its
	/// label.
	///
	/// # Errors
	/// If count or sides are out of bounds, or a term with the same label already exists, an error variant
	/// is returned and the session - including the cursor - is left exactly as it was.
	pub fn new_term(&mut self, count: u32, sides: u32) -> Result<String, SessionError> {
		let term = Term::new(count, sides);
		validate(&term, &self.limits)?;
		let label = term.label();
		self.terms.add(term)?;
		self.selected = Some(label.clone());
		Ok(label)
	}

	/// Moves the editing cursor to the term with the given label.
	///
	/// # Errors
	/// If no term has the label, a [`NotFound`](SessionError::NotFound) is returned and the cursor is
	/// unchanged.
	pub fn select(&mut self, label: &str) -> Result<(), SessionError> {
		if self.terms.get(label).is_none() {
			return Err(SessionError::NotFound(label.to_owned()));
		}
		self.selected = Some(label.to_owned());
		Ok(())
	}

	/// Gets the label of the term currently selected for editing.
	#[must_use]
	pub fn selected_label(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Gets the term currently selected for editing.
	#[must_use]
	pub fn selected(&self) -> Option<&Term> {
		self.selected.as_deref().and_then(|label| self.terms.get(label))
	}

	/// Applies a change to a candidate copy of the selected term, committing it only if the result
	/// validates.
	fn edit(&mut self, change: impl FnOnce(&mut Term)) -> Result<(), SessionError> {
		let label = self.selected.as_deref().ok_or(SessionError::NoSelection)?;
		let slot = self
			.terms
			.get_mut(label)
			.ok_or_else(|| SessionError::NotFound(label.to_owned()))?;

		let mut candidate = slot.clone();
		change(&mut candidate);
		validate(&candidate, &self.limits)?;
		*slot = candidate;
		Ok(())
	}

	/// Sets the flat modifier of the selected term.
	///
	/// # Errors
	/// If no term is selected or the result fails validation, an error variant is returned and nothing
	/// changes.
	pub fn set_modifier(&mut self, modifier: i32) -> Result<(), SessionError> {
		self.edit(|term| term.modifier = modifier)
	}

	/// Sets the keep/drop rule of the selected term.
	///
	/// # Errors
	/// If no term is selected or the result fails validation, an error variant is returned and nothing
	/// changes.
	pub fn set_keep(&mut self, keep: KeepRule) -> Result<(), SessionError> {
		self.edit(|term| term.keep = Some(keep))
	}

	/// Sets the reroll rule of the selected term.
	///
	/// # Errors
	/// If no term is selected or the result fails validation (including a rule that would reroll
	/// forever), an error variant is returned and nothing changes.
	pub fn set_reroll(&mut self, reroll: RerollRule) -> Result<(), SessionError> {
		self.edit(|term| term.reroll = Some(reroll))
	}

	/// Sets the scale rule of the selected term.
	///
	/// # Errors
	/// If no term is selected or the result fails validation, an error variant is returned and nothing
	/// changes.
	pub fn set_scale(&mut self, scale: ScaleRule) -> Result<(), SessionError> {
		self.edit(|term| term.scale = Some(scale))
	}

	/// Sets the lower face clamp of the selected term.
	///
	/// # Errors
	/// If no term is selected or the result fails validation, an error variant is returned and nothing
	/// changes.
	pub fn set_min(&mut self, min: u32) -> Result<(), SessionError> {
		self.edit(|term| term.min = Some(min))
	}

	/// Sets the upper face clamp of the selected term.
	///
	/// # Errors
	/// If no term is selected or the result fails validation, an error variant is returned and nothing
	/// changes.
	pub fn set_max(&mut self, max: u32) -> Result<(), SessionError> {
		self.edit(|term| term.max = Some(max))
	}

	/// Sets whether the selected term is negated.
	///
	/// # Errors
	/// If no term is selected, an error variant is returned.
	pub fn set_negate(&mut self, negate: bool) -> Result<(), SessionError> {
		self.edit(|term| term.negate = negate)
	}

	/// Sets the damage-type tag of the selected term, stripping any brackets from it.
	///
	/// # Errors
	/// If no term is selected, an error variant is returned.
	pub fn set_damage_type(&mut self, damage_type: &str) -> Result<(), SessionError> {
		let cleaned = sanitize_damage_type(damage_type);
		self.edit(|term| term.damage_type = Some(cleaned))
	}

	/// Removes and returns the term with the given label, if present. If it was the selected term, the
	/// cursor is cleared and a new [`select`](Self::select) is required before further edits.
	pub fn remove(&mut self, label: &str) -> Option<Term> {
		let removed = self.terms.remove(label)?;
		if self.selected.as_deref() == Some(label) {
			self.selected = None;
		}
		Some(removed)
	}

	/// Iterates over the labels of the assembled terms in insertion order.
	pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
		self.terms.labels()
	}

	/// Checks whether the session holds no terms.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	/// Gets the number of assembled terms.
	#[must_use]
	pub fn len(&self) -> usize {
		self.terms.len()
	}

	/// Renders the composite notation so far without consuming the session.
	#[must_use]
	pub fn notation(&self) -> String {
		self.terms.to_string()
	}

	/// Renders the composite expression for the external evaluator, consuming the session. Starting
	/// another roll means starting a new session.
	///
	/// # Errors
	/// If the session holds no terms, an [`EmptySet`](SessionError::EmptySet) is returned and nothing is
	/// rendered.
	pub fn finalize(self) -> Result<String, SessionError> {
		if self.terms.is_empty() {
			return Err(SessionError::EmptySet);
		}
		Ok(self.terms.to_string())
	}
}
