use crate::term::{KeepMode, KeepRule, RerollMode, RerollRule, ScaleOp, ScaleRule, Selector, Term};

#[test]
fn plain_term() {
	assert_eq!(Term::new(2, 6).to_string(), "(2d6)");
}

#[test]
fn default_term_is_1d20() {
	let term = Term::default();
	assert_eq!(term.to_string(), "(1d20)");
	assert_eq!(term.label(), "1d20");
}

#[test]
fn positive_modifier() {
	let term = Term::builder().count(2).sides(6).modifier(3).build();
	assert_eq!(term.to_string(), "(2d6 + 3)");
}

#[test]
fn negative_modifier_renders_magnitude() {
	let term = Term::builder().count(2).sides(6).modifier(-3).build();
	assert_eq!(term.to_string(), "(2d6 - 3)");
}

#[test]
fn zero_modifier_omitted() {
	let term = Term::builder().count(2).sides(6).modifier(0).build();
	assert_eq!(term.to_string(), "(2d6)");
}

#[test]
fn clamps_follow_the_die() {
	let term = Term::builder().count(4).sides(6).min(2).max(5).build();
	assert_eq!(term.to_string(), "(4d6mi2ma5)");
}

#[test]
fn negation_precedes_parens() {
	let term = Term::builder().count(2).sides(6).negate(true).build();
	assert_eq!(term.to_string(), "-(2d6)");
}

#[test]
fn scale_sits_outside_parens() {
	let doubled = Term::builder()
		.count(2)
		.sides(6)
		.scale(ScaleRule {
			op: ScaleOp::Multiply,
			value: 2,
		})
		.build();
	assert_eq!(doubled.to_string(), "(2d6) * 2");

	let halved = Term::builder()
		.count(2)
		.sides(6)
		.scale(ScaleRule {
			op: ScaleOp::Divide,
			value: 2,
		})
		.build();
	assert_eq!(halved.to_string(), "(2d6) / 2");
}

#[test]
fn damage_type_renders_outermost() {
	let term = Term::builder()
		.count(2)
		.sides(6)
		.modifier(1)
		.damage_type("fire")
		.build();
	assert_eq!(term.to_string(), "(2d6 + 1)[fire]");
}

#[test]
fn damage_type_brackets_stripped() {
	let term = Term::builder().count(2).sides(6).damage_type("[fire]").build();
	assert_eq!(term.damage_type.as_deref(), Some("fire"));
	assert_eq!(term.to_string(), "(2d6)[fire]");
}

#[test]
fn reroll_precedes_keep() {
	let term = Term::builder()
		.count(4)
		.sides(6)
		.keep(KeepRule {
			selector: Selector::Highest,
			value: 3,
			mode: KeepMode::Keep,
		})
		.reroll(RerollRule {
			selector: Selector::Exact,
			value: 1,
			mode: RerollMode::Once,
		})
		.build();
	assert_eq!(term.to_string(), "(4d6ro1kh3)");
}

#[test]
fn every_field_in_canonical_order() {
	let term = Term::builder()
		.count(4)
		.sides(6)
		.min(2)
		.max(5)
		.reroll(RerollRule {
			selector: Selector::Greater,
			value: 5,
			mode: RerollMode::UntilNoneLeft,
		})
		.keep(KeepRule {
			selector: Selector::Highest,
			value: 3,
			mode: KeepMode::Keep,
		})
		.modifier(3)
		.negate(true)
		.scale(ScaleRule {
			op: ScaleOp::Multiply,
			value: 2,
		})
		.damage_type("fire")
		.build();
	assert_eq!(term.to_string(), "-(4d6mi2ma5rr>5kh3 + 3) * 2[fire]");
}

#[test]
fn label_ignores_everything_but_count_and_sides() {
	let plain = Term::new(4, 6);
	let decorated = Term::builder().count(4).sides(6).modifier(2).negate(true).build();
	assert_eq!(plain.label(), "4d6");
	assert_eq!(decorated.label(), "4d6");
}

#[test]
fn builder_of_plain_term_equals_new() {
	assert_eq!(Term::builder().count(2).sides(8).build(), Term::new(2, 8));
}
