#![feature(test)]

extern crate test;

use bigint_core::BigInt;
use test::Bencher;

fn input(chunks: usize) -> BigInt {
    let digits: Vec<u32> = (0..chunks as u32)
        .map(|i| i.wrapping_mul(0x9e37_79b9) | 1)
        .collect();
    BigInt::from_u32_digits(false, &digits)
}

#[bench]
fn bench_add(b: &mut Bencher) {
    let x = input(256);
    let y = -input(200);
    b.iter(|| &x + &y);
}

#[bench]
fn bench_sub(b: &mut Bencher) {
    let x = input(256);
    let y = input(200);
    b.iter(|| &x - &y);
}

#[bench]
fn bench_mul(b: &mut Bencher) {
    let x = input(64);
    let y = input(64);
    b.iter(|| &x * &y);
}

#[bench]
fn bench_to_str_radix_16(b: &mut Bencher) {
    let x = input(256);
    b.iter(|| x.to_str_radix(16).unwrap());
}

#[bench]
fn bench_to_str_radix_8(b: &mut Bencher) {
    let x = input(256);
    b.iter(|| x.to_str_radix(8).unwrap());
}
