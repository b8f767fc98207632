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
    targets = poly_div<6, 3>,
              poly_div<9, 5>,
              poly_gcd<6>,
              poly_gcd<8>,
);

fn poly_div<const LOG2_NUM_DEG: usize, const LOG2_DEN_DEG: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "Long Division of Degree 2^{LOG2_NUM_DEG} by Degree 2^{LOG2_DEN_DEG}"
    ));

    let numerator = Polynomial::<F>::new(random_elements((1 << LOG2_NUM_DEG) + 1));
    let denominator = Polynomial::<F>::new(random_elements((1 << LOG2_DEN_DEG) + 1));

    let id = BenchmarkId::new("div_rem", LOG2_NUM_DEG);
    group.bench_function(id, |b| b.iter(|| numerator.div_rem(&denominator)));

    group.finish();
}

fn poly_gcd<const LOG2_DEGREE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("GCD of Polynomials of Degree 2^{LOG2_DEGREE}"));

    let a = Polynomial::<F>::new(random_elements((1 << LOG2_DEGREE) + 1));
    let b = Polynomial::<F>::new(random_elements((1 << LOG2_DEGREE) + 1));

    let id = BenchmarkId::new("Euclidean", LOG2_DEGREE);
    group.bench_function(id, |bencher| {
        bencher.iter(|| Polynomial::gcd(a.clone(), b.clone()))
    });

    group.finish();
}
