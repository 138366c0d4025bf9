// Benchmarks for the principal derivation pipeline.
//
// Covers the fingerprint encoder alone (hash + checksum + base32 + grouping),
// the codec + fingerprint path from a raw point, and full batch derivation
// from an xpub at several sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use keyprint::derive::bip32::XpubKeySource;
use keyprint::derive::{derive_principals, principal_for_point, KeySource};
use keyprint::{encode_public_key, Principal};

const TEST_XPUB: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";

fn leaf_point() -> keyprint::CurvePoint {
    let root: XpubKeySource = TEST_XPUB.parse().unwrap();
    root.derive_child(0)
        .unwrap()
        .derive_child(0)
        .unwrap()
        .public_key_point()
}

fn bench_fingerprint(c: &mut Criterion) {
    let der = encode_public_key(&leaf_point());
    c.bench_function("fingerprint/encode_text", |b| {
        b.iter(|| Principal::self_authenticating(&der).to_text());
    });
}

fn bench_point_to_principal(c: &mut Criterion) {
    let point = leaf_point();
    c.bench_function("pipeline/point_to_principal", |b| {
        b.iter(|| principal_for_point(&point).to_text());
    });
}

fn bench_batch_derivation(c: &mut Criterion) {
    let root: XpubKeySource = TEST_XPUB.parse().unwrap();
    let mut group = c.benchmark_group("pipeline/derive_batch");
    for count in [1u32, 8, 64] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| derive_principals(&root, count).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fingerprint,
    bench_point_to_principal,
    bench_batch_derivation
);
criterion_main!(benches);
