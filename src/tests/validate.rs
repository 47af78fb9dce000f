use crate::{
	term::{KeepMode, KeepRule, RerollMode, RerollRule, ScaleOp, ScaleRule, Selector, Term},
	validate::{validate, Limits, ValidationError},
};

fn with_reroll(selector: Selector, mode: RerollMode) -> Term {
	Term::builder()
		.count(4)
		.sides(6)
		.reroll(RerollRule {
			selector,
			value: 1,
			mode,
		})
		.build()
}

#[test]
fn endless_reroll_rejected() {
	for selector in [Selector::Lowest, Selector::Highest] {
		let term = with_reroll(selector, RerollMode::UntilNoneLeft);
		assert!(matches!(
			validate(&term, &Limits::default()),
			Err(ValidationError::InfiniteReroll(..))
		));
	}
}

#[test]
fn bounded_rerolls_accepted() {
	for selector in [Selector::Lowest, Selector::Highest] {
		for mode in [RerollMode::Once, RerollMode::KeepOriginal] {
			let term = with_reroll(selector, mode);
			assert!(validate(&term, &Limits::default()).is_ok());
		}
	}
	for selector in [Selector::Exact, Selector::Greater, Selector::Less] {
		let term = with_reroll(selector, RerollMode::UntilNoneLeft);
		assert!(validate(&term, &Limits::default()).is_ok());
	}
}

#[test]
fn count_bounds() {
	let limits = Limits::default();
	assert!(matches!(
		validate(&Term::new(0, 6), &limits),
		Err(ValidationError::OutOfBounds { field: "count", .. })
	));
	assert!(matches!(
		validate(&Term::new(101, 6), &limits),
		Err(ValidationError::OutOfBounds { field: "count", .. })
	));
	assert!(validate(&Term::new(100, 6), &limits).is_ok());
}

#[test]
fn sides_bounds() {
	let limits = Limits::default();
	assert!(matches!(
		validate(&Term::new(1, 0), &limits),
		Err(ValidationError::OutOfBounds { field: "sides", .. })
	));
	assert!(matches!(
		validate(&Term::new(1, 101), &limits),
		Err(ValidationError::OutOfBounds { field: "sides", .. })
	));
	assert!(validate(&Term::new(1, 100), &limits).is_ok());
}

#[test]
fn modifier_bounds_are_symmetric() {
	let limits = Limits::default();
	let with_modifier = |modifier| Term::builder().count(1).sides(20).modifier(modifier).build();
	assert!(validate(&with_modifier(500), &limits).is_ok());
	assert!(validate(&with_modifier(-500), &limits).is_ok());
	assert!(matches!(
		validate(&with_modifier(501), &limits),
		Err(ValidationError::OutOfBounds { field: "modifier", .. })
	));
	assert!(matches!(
		validate(&with_modifier(-501), &limits),
		Err(ValidationError::OutOfBounds { field: "modifier", .. })
	));
}

#[test]
fn clamp_bounds_follow_sides_limit() {
	let limits = Limits::default();
	assert!(matches!(
		validate(&Term::builder().count(1).sides(20).min(0).build(), &limits),
		Err(ValidationError::OutOfBounds { field: "min", .. })
	));
	assert!(matches!(
		validate(&Term::builder().count(1).sides(20).max(101).build(), &limits),
		Err(ValidationError::OutOfBounds { field: "max", .. })
	));
	assert!(validate(&Term::builder().count(1).sides(20).min(2).max(19).build(), &limits).is_ok());
}

#[test]
fn rule_value_bounds() {
	let limits = Limits::default();
	let keep = |value| {
		Term::builder()
			.count(4)
			.sides(6)
			.keep(KeepRule {
				selector: Selector::Highest,
				value,
				mode: KeepMode::Keep,
			})
			.build()
	};
	assert!(matches!(
		validate(&keep(0), &limits),
		Err(ValidationError::OutOfBounds { field: "keep", .. })
	));
	assert!(validate(&keep(3), &limits).is_ok());

	let reroll = |value| {
		Term::builder()
			.count(4)
			.sides(6)
			.reroll(RerollRule {
				selector: Selector::Exact,
				value,
				mode: RerollMode::Once,
			})
			.build()
	};
	assert!(matches!(
		validate(&reroll(0), &limits),
		Err(ValidationError::OutOfBounds { field: "reroll", .. })
	));
	assert!(validate(&reroll(1), &limits).is_ok());
}

#[test]
fn scale_bounds() {
	let limits = Limits::default();
	let scaled = |value| {
		Term::builder()
			.count(2)
			.sides(6)
			.scale(ScaleRule {
				op: ScaleOp::Multiply,
				value,
			})
			.build()
	};
	assert!(matches!(
		validate(&scaled(0), &limits),
		Err(ValidationError::OutOfBounds { field: "scale", .. })
	));
	assert!(matches!(
		validate(&scaled(501), &limits),
		Err(ValidationError::OutOfBounds { field: "scale", .. })
	));
	assert!(validate(&scaled(2), &limits).is_ok());
}

#[test]
fn custom_limits_tighten_the_check() {
	let strict = Limits::new(10, 100, 500);
	assert!(matches!(
		validate(&Term::new(11, 6), &strict),
		Err(ValidationError::OutOfBounds { field: "count", .. })
	));
	assert!(validate(&Term::new(10, 6), &strict).is_ok());
}

#[test]
fn out_of_bounds_reports_the_range() {
	let err = validate(&Term::new(0, 6), &Limits::default()).unwrap_err();
	assert_eq!(
		err,
		ValidationError::OutOfBounds {
			field: "count",
			value: 0,
			min: 1,
			max: 100,
		}
	);
}

#[test]
fn validation_is_pure() {
	let term = with_reroll(Selector::Lowest, RerollMode::UntilNoneLeft);
	let before = term.clone();
	let _ = validate(&term, &Limits::default());
	assert_eq!(term, before);
}
