use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand::rngs::StdRng;

use xcrypto_core::{encrypt, encrypt_block, expand_cipher_key, hash, CipherKey};

fn bench_cipher(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let round_keys = expand_cipher_key(&CipherKey::from(key_bytes));

    let mut group = c.benchmark_group("xae");
    group.bench_function("key_schedule", |b| {
        let key = CipherKey::from(key_bytes);
        b.iter(|| expand_cipher_key(&key));
    });
    group.bench_function("encrypt_block", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    for size in [64usize, 1024, 16 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encrypt", size), &data, |b, data| {
            b.iter(|| encrypt(data, &key_bytes));
        });
    }
    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut group = c.benchmark_group("xwh");
    for size in [16usize, 1024, 16 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("hash", size), &data, |b, data| {
            b.iter(|| hash(data));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cipher, bench_hash);
criterion_main!(benches);
