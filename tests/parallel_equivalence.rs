#![cfg(feature = "parallel")]

mod _fixtures;

use _fixtures::indexed_chunks;
use data_square::{DataSquare, Sha256Hasher, SquareConfig};

fn build(parallel_roots: bool) -> DataSquare<Sha256Hasher> {
    let config = SquareConfig::builder()
        .parallel_roots(parallel_roots)
        .build()
        .expect("config");
    DataSquare::with_config(indexed_chunks(32 * 32, 64), config).expect("square")
}

#[test]
fn roots_parallel_match_sequential() {
    let sequential = build(false);
    let parallel = build(true);
    assert_eq!(
        sequential.row_roots().unwrap(),
        parallel.row_roots().unwrap()
    );
    assert_eq!(
        sequential.column_roots().unwrap(),
        parallel.column_roots().unwrap()
    );
}

#[test]
fn parallel_roots_track_extension() {
    let mut sequential = build(false);
    let mut parallel = build(true);
    for square in [&mut sequential, &mut parallel] {
        square.column_roots().unwrap();
        square.extend(32, &[0u8; 64]).unwrap();
        square.set_row_slice(40, 10, vec![vec![9u8; 64]; 5]).unwrap();
    }
    assert_eq!(
        sequential.column_roots().unwrap(),
        parallel.column_roots().unwrap()
    );
}
