//! Host service implementations.

pub mod local;

pub use local::LocalHost;
