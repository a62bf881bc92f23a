use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hel_css_alphabetizer::{alphabetize, Options};

use utils::{get_test_cases, Case};

fn stylesheet() -> String {
	let Case { before, .. } = get_test_cases()
		.max_by_key(|case| case.before.len())
		.expect("No test cases found");

	before.repeat(1000)
}

fn bench(c: &mut Criterion) {
	let before = stylesheet();
	let options = Options::default();

	eprintln!("Running benches on {} bytes", before.len());

	c.bench_function("alphabetize", |b| {
		b.iter(|| alphabetize(black_box(&before), &options))
	});
}

criterion_group!(benches, bench);
criterion_main!(benches);

#[allow(dead_code)]
#[path = "../tests/utils.rs"]
mod utils;
