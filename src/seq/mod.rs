//! Sequence utilities that make no k-mer assumptions.

pub mod composition;
pub mod translate;
