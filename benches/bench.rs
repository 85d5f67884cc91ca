use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use secrec::{
    _test_util::{gen_integer, gen_pts},
    rec::{lagrange::LagrangeRec, vandermonde::VandermondeRec, Point},
    traits::Rec,
    Poly, Rat,
};

const NPOLYS: usize = 10;

fn gen_samples(npts: usize, bits: u32) -> Vec<Vec<Point>> {
    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
    (0..NPOLYS)
        .map(|_| {
            let coeff = (0..npts)
                .map(|_| Rat::from(gen_integer(rng.gen_range(1..=bits), &mut rng)))
                .collect();
            gen_pts(&Poly::from_coeff(coeff), npts, &mut rng)
        })
        .collect()
}

fn vandermonde(samples: &[Vec<Point>]) -> Vec<Poly> {
    samples
        .iter()
        .map(|pts| pts.rec(VandermondeRec::new()).unwrap())
        .collect()
}

fn lagrange(samples: &[Vec<Point>]) -> Vec<Rat> {
    samples
        .iter()
        .map(|pts| pts.rec(LagrangeRec::at_zero()).unwrap())
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("secret");
    for npts in [3, 6, 10, 20] {
        let samples = gen_samples(npts, 256);
        group.bench_with_input(
            BenchmarkId::new("vandermonde", npts),
            &samples,
            |b, samples| b.iter(|| vandermonde(samples)),
        );
        group.bench_with_input(
            BenchmarkId::new("lagrange", npts),
            &samples,
            |b, samples| b.iter(|| lagrange(samples)),
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
