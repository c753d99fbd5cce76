#![allow(dead_code)]

use data_square::{Chunk, DataSquare, MerkleHasher, SquareConfig};
use once_cell::sync::Lazy;

/// Chunk size used by the worked example below.
pub const EXAMPLE_CHUNK_SIZE: usize = 8;

/// Chunks `A, B, C, D` laid out as the 2×2 square `[[A, B], [C, D]]`.
pub static ABCD: Lazy<Vec<Chunk>> = Lazy::new(|| {
    (0..4u8)
        .map(|i| vec![0x0a + i; EXAMPLE_CHUNK_SIZE])
        .collect()
});

pub static FILLER: Lazy<Chunk> = Lazy::new(|| vec![0xff; EXAMPLE_CHUNK_SIZE]);

pub fn a() -> Chunk {
    ABCD[0].clone()
}

pub fn b() -> Chunk {
    ABCD[1].clone()
}

pub fn c() -> Chunk {
    ABCD[2].clone()
}

pub fn d() -> Chunk {
    ABCD[3].clone()
}

/// `count` chunks of `size` bytes whose bytes encode their row-major index.
pub fn indexed_chunks(count: usize, size: usize) -> Vec<Chunk> {
    (0..count)
        .map(|i| {
            let tag = (i as u32).to_le_bytes();
            (0..size).map(|j| tag[j % 4] ^ (j as u8)).collect()
        })
        .collect()
}

pub fn square_of_width(width: usize, size: usize) -> DataSquare {
    DataSquare::new(indexed_chunks(width * width, size)).expect("perfect square")
}

pub fn square_with_hasher<H: MerkleHasher>(width: usize, size: usize) -> DataSquare<H> {
    DataSquare::with_config(
        indexed_chunks(width * width, size),
        SquareConfig::for_hasher::<H>(),
    )
    .expect("perfect square")
}

pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
