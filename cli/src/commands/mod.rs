pub mod apportion;
pub mod stats;
