pub mod kheapsort;

pub use kheapsort::{k_sorted_sequence, kheapsort, kheapsort_checked};
