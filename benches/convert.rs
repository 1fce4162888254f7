use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recase::{to_camel_case, to_dot_case, to_kebab_case};

const INPUT: &str = "  the_quick brown-fox JUMPS over\tthe lazy_dog  ";

fn bench_conversions(c: &mut Criterion) {
    c.bench_function("kebab", |b| b.iter(|| to_kebab_case(black_box(INPUT))));
    c.bench_function("camel", |b| b.iter(|| to_camel_case(black_box(INPUT))));
    c.bench_function("dot", |b| b.iter(|| to_dot_case(black_box(INPUT))));
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
