use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rijndael_core::{
    encrypt_traced, encrypt_with_schedule, generate_table, sub_byte, KeySchedule, State,
};

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");
    group.bench_function("sub_byte", |b| {
        let mut byte = 0u8;
        b.iter(|| {
            byte = byte.wrapping_add(1);
            sub_byte(black_box(byte))
        });
    });
    group.sample_size(20);
    group.bench_function("generate_table", |b| b.iter(generate_table));
    group.finish();
}

fn bench_cipher(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = State::from_bytes(key_bytes);
    let schedule = KeySchedule::expand(&key);

    let mut group = c.benchmark_group("cipher");
    group.sample_size(20);
    group.bench_function("expand_key", |b| {
        b.iter(|| KeySchedule::expand(black_box(&key)));
    });
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let block = State::from_bytes(block);
        b.iter(|| encrypt_with_schedule(black_box(&block), &schedule));
    });
    group.bench_function("encrypt_traced", |b| {
        let block = State::from_bytes([0xff; 16]);
        b.iter(|| encrypt_traced(black_box(&block), &key));
    });
    group.finish();
}

criterion_group!(benches, bench_field, bench_cipher);
criterion_main!(benches);
