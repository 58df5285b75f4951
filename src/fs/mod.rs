//! Filesystem helpers for devstd.

mod atomic;

pub use atomic::atomic_write_file;
