use charybdis::cipher::{BlockEncrypt, KeyInit, generic_array::GenericArray};
use charybdis::{Backend, BatchContext, Charybdis, encrypt_block_in_place, key_schedule};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [usize; 4] = [1024, 4096, 16384, 65536];

// One block at a time through the scalar engine.
fn bench_scalar(c: &mut Criterion) {
    let keys = key_schedule(&[0x42; 32]);
    let mut group = c.benchmark_group("Charybdis-scalar");

    for size in SIZES {
        let mut buffer = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let (blocks, _) = buffer.as_chunks_mut::<64>();
                for block in blocks {
                    encrypt_block_in_place(block, &keys);
                }
            });
        });
    }
    group.finish();
}

// The batch engine on every backend this host supports.
fn bench_batch(c: &mut Criterion) {
    let keys = key_schedule(&[0x42; 32]);

    for backend in [Backend::Portable, Backend::Avx2] {
        let Ok(ctx) = BatchContext::with_backend(&keys, backend) else {
            continue;
        };
        let mut group = c.benchmark_group(format!("Charybdis-batch-{backend}"));

        for size in SIZES {
            let mut buffer = vec![0u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| ctx.encrypt_in_place(&mut buffer).unwrap());
            });
        }
        group.finish();
    }
}

// The `cipher` trait path, as downstream crates would use it.
fn bench_cipher_traits(c: &mut Criterion) {
    let cipher = Charybdis::new(&GenericArray::from([0x42; 32]));
    let mut group = c.benchmark_group("Charybdis-cipher");

    for size in SIZES {
        let mut blocks = vec![GenericArray::default(); size / 64];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| cipher.encrypt_blocks(&mut blocks));
        });
    }
    group.finish();
}

fn benchmarks(c: &mut Criterion) {
    bench_scalar(c);
    bench_batch(c);
    bench_cipher_traits(c);
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
