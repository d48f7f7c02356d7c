//! Physical device descriptors.

use std::fmt;

/// Kinds of physical devices a registry can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Host processor
    Cpu,
    /// Graphics accelerator
    Gpu,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Gpu => write!(f, "GPU"),
        }
    }
}

/// Types of GPU backends supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpuBackendType {
    /// NVIDIA CUDA
    Cuda,
    /// AMD ROCm
    Rocm,
    /// Apple Metal
    Metal,
}

impl fmt::Display for GpuBackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cuda => write!(f, "CUDA"),
            Self::Rocm => write!(f, "ROCm"),
            Self::Metal => write!(f, "Metal"),
        }
    }
}

/// A device visible to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalDevice {
    /// Registry path, e.g. `/physical_device:GPU:0`
    pub name: String,
    /// Device kind
    pub kind: DeviceKind,
    /// Backend that exposed the device, `None` for host devices
    pub backend: Option<GpuBackendType>,
    /// Vendor model name, when the driver reports one
    pub model: Option<String>,
    /// Compute capability (for CUDA) or equivalent
    pub compute_capability: Option<(u32, u32)>,
}

impl PhysicalDevice {
    /// Creates a descriptor named `/physical_device:<KIND>:<ordinal>`.
    pub fn new(kind: DeviceKind, ordinal: usize) -> Self {
        Self {
            name: format!("/physical_device:{kind}:{ordinal}"),
            kind,
            backend: None,
            model: None,
            compute_capability: None,
        }
    }

    /// Creates a GPU descriptor exposed by `backend`.
    pub fn gpu(ordinal: usize, backend: GpuBackendType) -> Self {
        Self::new(DeviceKind::Gpu, ordinal).with_backend(backend)
    }

    /// Sets the backend.
    pub fn with_backend(mut self, backend: GpuBackendType) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Sets the vendor model name.
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the compute capability.
    pub fn with_compute_capability(mut self, major: u32, minor: u32) -> Self {
        self.compute_capability = Some((major, minor));
        self
    }
}

impl fmt::Display for PhysicalDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PhysicalDevice(name='{}', device_type='{}'",
            self.name, self.kind
        )?;
        if let Some(backend) = self.backend {
            write!(f, ", backend='{backend}'")?;
        }
        if let Some(model) = &self.model {
            write!(f, ", model='{model}'")?;
        }
        if let Some((major, minor)) = self.compute_capability {
            write!(f, ", compute_capability={major}.{minor}")?;
        }
        write!(f, ")")
    }
}
