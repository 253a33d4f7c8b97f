//! Pure cryptographic logic used by in-process adapters

pub mod ecies;
