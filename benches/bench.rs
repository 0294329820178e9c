use criterion::{criterion_group, criterion_main};

mod validation_benchmark {
    use criterion::{black_box, Criterion};
    use tw_id::{validate, TaiwanIdChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let inputs = ["A123456789", "a123456780", "L123456789", "not an id"];

        c.bench_function("validate report", |b| {
            b.iter(|| {
                for input in inputs {
                    black_box(validate(black_box(input)));
                }
            })
        });

        c.bench_function("checksum match", |b| {
            b.iter(|| {
                for input in inputs {
                    black_box(TaiwanIdChecksum.is_valid_match(black_box(input)));
                }
            })
        });
    }
}

mod generation_benchmark {
    use criterion::{black_box, Criterion};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tw_id::{Gender, Generator, RegionTable};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let mut generator = Generator::new(RegionTable::standard(), StdRng::seed_from_u64(0));

        c.bench_function("generate", |b| {
            b.iter(|| black_box(generator.generate(black_box('A'), Gender::Female)))
        });
    }
}

criterion_group!(
    benches,
    validation_benchmark::criterion_benchmark,
    generation_benchmark::criterion_benchmark
);
criterion_main!(benches);
