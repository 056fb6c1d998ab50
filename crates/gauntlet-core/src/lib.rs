//! Core types and traits for the Gauntlet kernel suite.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! data model shared by kernels and harness: benchmark identifiers, owned
//! numeric buffers (matrices, images, particle systems), error types, the
//! [`Clock`] abstraction and per-run [`SampleResult`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod fingerprint;
pub mod id;
pub mod particles;
pub mod result;
pub mod traits;

pub use buffer::{Image, Matrix};
pub use error::KernelError;
pub use fingerprint::{f64_hash, i32_hash};
pub use id::BenchmarkId;
pub use particles::{ParticleSystem, StateMut};
pub use result::{SampleResult, SampleValue, Verdict};
pub use traits::{Clock, SystemClock};
