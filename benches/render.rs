use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use kismet::{
	term::{KeepMode, KeepRule, RerollMode, RerollRule, ScaleOp, ScaleRule, Selector, Term},
	ExpressionSet,
};

fn full_term() -> Term {
	Term::builder()
		.count(4)
		.sides(6)
		.min(2)
		.max(5)
		.reroll(RerollRule {
			selector: Selector::Exact,
			value: 1,
			mode: RerollMode::Once,
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
		.build()
}

fn bench_render(c: &mut Criterion) {
	let term = full_term();
	c.bench_function("render_full_term", |b| b.iter(|| black_box(&term).to_string()));

	let mut set = ExpressionSet::new();
	set.add(full_term()).unwrap();
	set.add(Term::new(1, 20)).unwrap();
	set.add(Term::builder().count(2).sides(8).modifier(-1).build()).unwrap();
	c.bench_function("render_composite", |b| b.iter(|| black_box(&set).to_string()));
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
