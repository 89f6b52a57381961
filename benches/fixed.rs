use fixbn::{U64, U256};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_multiply(c: &mut Criterion) {
    let a = U64::try_from(0xFEED_FACEu64).unwrap();
    let b = U64::try_from(0xBEEF_CAFEu64).unwrap();

    c.bench_function("multiply u64 (4x16)", |bench| {
        bench.iter(|| {
            let mut out = U64::ZERO;
            U64::multiply(black_box(&a), black_box(&b), &mut out).unwrap();
            out
        })
    });
}

pub fn bench_divide(c: &mut Criterion) {
    let n = U256::MAX;
    let d = U256::try_from(0xDEAD_BEEF_0123_4567u64).unwrap();

    c.bench_function("divide u256 (8x32)", |bench| {
        bench.iter(|| black_box(n).div_rem(black_box(d)).unwrap())
    });
}

pub fn bench_pow_mod(c: &mut Criterion) {
    let base = U64::try_from(0xDEAD_BEEFu64).unwrap();
    let exponent = U64::try_from(0x1_0001u64).unwrap();
    let modulus = U64::try_from(0xFFFF_FFFBu64).unwrap();

    c.bench_function("pow_mod u64 65537", |bench| {
        bench.iter(|| {
            black_box(base)
                .checked_pow_mod(black_box(exponent), black_box(modulus))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_multiply, bench_divide, bench_pow_mod);
criterion_main!(benches);
