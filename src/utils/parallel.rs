const DEFAULT_CHUNK_SIZE: usize = 4;

#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) fn preferred_chunk_size(total_items: usize) -> usize {
    if total_items == 0 {
        1
    } else {
        DEFAULT_CHUNK_SIZE.min(total_items.max(1))
    }
}

/// Evaluates `f` for every index in `0..count`, preserving index order.
///
/// Runs on the rayon pool when `parallel` is set and the crate was built with
/// the `parallel` feature.
#[cfg(feature = "parallel")]
pub(crate) fn map_indices<T, F>(count: usize, parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if parallel && count > 1 {
        use rayon::prelude::*;
        let chunk = preferred_chunk_size(count);
        return (0..count)
            .into_par_iter()
            .with_min_len(chunk)
            .map(f)
            .collect();
    }
    (0..count).map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_indices<T, F>(count: usize, _parallel: bool, f: F) -> Vec<T>
where
    F: Fn(usize) -> T,
{
    (0..count).map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_never_zero() {
        assert_eq!(preferred_chunk_size(0), 1);
        assert_eq!(preferred_chunk_size(2), 2);
        assert_eq!(preferred_chunk_size(100), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn parallel_and_sequential_keep_order() {
        let sequential = map_indices(33, false, |i| i * i);
        let parallel = map_indices(33, true, |i| i * i);
        assert_eq!(sequential, parallel);
        assert_eq!(sequential[32], 1024);
    }
}
