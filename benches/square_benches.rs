use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use data_square::{Blake3Hasher, DataSquare, MerkleHasher, Sha256Hasher, SquareConfig};

const CHUNK_SIZE: usize = 512;

fn make_chunks(width: usize) -> Vec<Vec<u8>> {
    (0..width * width)
        .map(|i| {
            let tag = (i as u32).to_le_bytes();
            (0..CHUNK_SIZE).map(|j| tag[j % 4] ^ j as u8).collect()
        })
        .collect()
}

fn build<H: MerkleHasher>(width: usize) -> DataSquare<H> {
    DataSquare::with_config(make_chunks(width), SquareConfig::for_hasher::<H>()).unwrap()
}

fn bench_roots_for<H: MerkleHasher>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group(format!("row_and_column_roots_{label}"));
    for &width in &[16usize, 64, 128] {
        group.throughput(Throughput::Bytes((width * width * CHUNK_SIZE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter_batched(
                || build::<H>(width),
                |square| {
                    square.row_roots().unwrap();
                    square.column_roots().unwrap();
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_roots(c: &mut Criterion) {
    bench_roots_for::<Sha256Hasher>(c, "sha256");
    bench_roots_for::<Blake3Hasher>(c, "blake3");
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend_double");
    for &width in &[16usize, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter_batched(
                || build::<Sha256Hasher>(width),
                |mut square| {
                    square.extend(width, &[0u8; CHUNK_SIZE]).unwrap();
                    square
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_proofs(c: &mut Criterion) {
    let square = build::<Sha256Hasher>(128);
    let roots = square.column_roots().unwrap().to_vec();
    c.bench_function("column_proof_and_verify_128", |b| {
        b.iter(|| {
            let proof = square.column_proof(77, 31).unwrap();
            proof
                .verify::<Sha256Hasher>(&roots[31], square.cell(77, 31).unwrap())
                .unwrap();
        });
    });
}

fn square_benches(c: &mut Criterion) {
    bench_roots(c);
    bench_extend(c);
    bench_proofs(c);
}

criterion_group!(benches, square_benches);
criterion_main!(benches);
