//! Client-side caches.

pub mod profile;

pub use profile::ProfileCache;
