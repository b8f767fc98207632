use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use polyring::math::other::random_elements;
use polyring::prelude::*;

type F = PrimeFieldElement<2_147_483_647>;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = evaluation<10>,
              evaluation<14>,
);

fn evaluation<const LOG2_DEGREE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("Evaluation of Polynomial of Degree 2^{LOG2_DEGREE}"));

    let poly = Polynomial::<F>::new(random_elements((1 << LOG2_DEGREE) + 1));
    let point = random_elements::<F>(1)[0];

    let id = BenchmarkId::new("Running power", LOG2_DEGREE);
    group.bench_function(id, |b| b.iter(|| poly.evaluate(&point)));

    group.finish();
}
