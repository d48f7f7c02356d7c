//! GPU visibility diagnostic.
//!
//! Answers whether this host can hand a GPU to a training job. The
//! diagnostic is a single synchronous query against a [`DeviceRegistry`]
//! followed by a plain-text report; a host without a GPU is a normal
//! outcome and produces a remediation hint instead of an error.
//!
//! # Example
//!
//! ```rust
//! use sparsefeed_gpu::{run_diagnostic, GpuBackendType, PhysicalDevice, StaticRegistry};
//!
//! let registry = StaticRegistry::new("mock", "1.0")
//!     .with_device(PhysicalDevice::gpu(0, GpuBackendType::Cuda));
//!
//! let mut out = Vec::new();
//! let report = run_diagnostic(&registry, &mut out).unwrap();
//! assert!(report.gpu_found());
//! ```
//!
//! Enable the `cuda` feature to probe CUDA devices through cudarc.

pub mod device;
pub mod error;
pub mod registry;
pub mod report;
pub mod selector;

// Re-export key types
pub use device::{DeviceKind, GpuBackendType, PhysicalDevice};
pub use error::{GpuError, Result};
pub use registry::{DeviceRegistry, StaticRegistry, SystemRegistry};
pub use report::{run_diagnostic, DiagnosticReport};
pub use selector::GpuSelector;
