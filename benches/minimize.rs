use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mindfa::{prelude::*, random::generate_random_dfa_with};

const SIZES: [usize; 4] = [8, 32, 64, 128];
const SYMBOLS: usize = 3;

lazy_static::lazy_static! {
    static ref DATA: Vec<(usize, Dfa)> = data();
}

fn data() -> Vec<(usize, Dfa)> {
    let mut rng = fastrand::Rng::with_seed(1337);
    SIZES
        .iter()
        .map(|&size| (size, generate_random_dfa_with(&mut rng, SYMBOLS, size)))
        .collect()
}

fn minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for (size, dfa) in DATA.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), dfa, |b, dfa| {
            b.iter(|| black_box(dfa.clone()).minimize().unwrap())
        });
    }
    group.finish();
}

fn equivalence_classes(c: &mut Criterion) {
    let mut group = c.benchmark_group("equivalence_classes");
    for (size, dfa) in DATA.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), dfa, |b, dfa| {
            b.iter(|| black_box(dfa).equivalence_classes().unwrap())
        });
    }
    group.finish();
}

fn definition_roundtrip(c: &mut Criterion) {
    let (_, largest) = DATA.last().expect("there is benchmark data");
    let definition = largest.to_definition();
    c.bench_function("parse_definition", |b| {
        b.iter(|| parse_definition(black_box(&definition)).unwrap())
    });
    c.bench_function("definition_roundtrip", |b| {
        b.iter(|| {
            parse_definition(black_box(&definition))
                .unwrap()
                .to_definition()
        })
    });
}

criterion_group!(benches, minimize, equivalence_classes, definition_roundtrip);
criterion_main!(benches);
