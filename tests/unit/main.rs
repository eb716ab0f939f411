//! Unit test suite mirroring the crate module layout
