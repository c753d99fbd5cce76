//! Internal helpers shared by the square and the commitment cache.

pub(crate) mod parallel;
