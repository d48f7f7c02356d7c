//! Device registries.
//!
//! A [`DeviceRegistry`] answers one question: which physical devices of a
//! given kind can this process see. [`SystemRegistry`] asks the installed
//! drivers; [`StaticRegistry`] returns a fixed list.

use crate::{
    device::{DeviceKind, GpuBackendType, PhysicalDevice},
    error::Result,
};

/// Hint used when a registry has nothing more specific to say.
pub const DEFAULT_REMEDIATION_HINT: &str =
    "Make sure a GPU driver and its acceleration backend are installed.";

/// Source of physical device listings.
pub trait DeviceRegistry {
    /// Name of the stack doing the probing, shown in the report header.
    fn framework_name(&self) -> &str;

    /// Version string of that stack.
    fn framework_version(&self) -> String;

    /// Lists every visible device of `kind`.
    fn list_physical_devices(&self, kind: DeviceKind) -> Result<Vec<PhysicalDevice>>;

    /// What to tell the user when no GPU is visible.
    fn remediation_hint(&self) -> String {
        DEFAULT_REMEDIATION_HINT.to_string()
    }
}

/// Registry backed by the drivers compiled into this binary.
///
/// CUDA devices are probed through cudarc when the `cuda` feature is
/// enabled. Without it the registry never reports a GPU. On macOS the
/// remediation hint points at Metal instead of CUDA.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRegistry;

impl SystemRegistry {
    /// Creates a registry for the current process.
    pub fn new() -> Self {
        Self
    }

    /// Backends this build can probe.
    pub fn compiled_backends() -> Vec<GpuBackendType> {
        #[allow(unused_mut)]
        let mut backends = Vec::new();
        #[cfg(feature = "cuda")]
        backends.push(GpuBackendType::Cuda);
        backends
    }

    fn detect_gpus() -> Result<Vec<PhysicalDevice>> {
        #[allow(unused_mut)]
        let mut devices = Vec::new();

        #[cfg(feature = "cuda")]
        devices.extend(Self::detect_cuda_devices()?);

        #[cfg(not(feature = "cuda"))]
        log::debug!("built without the `cuda` feature, skipping CUDA probe");

        Ok(devices)
    }

    #[cfg(feature = "cuda")]
    fn detect_cuda_devices() -> Result<Vec<PhysicalDevice>> {
        use crate::error::GpuError;
        use cudarc::driver::{sys::CUdevice_attribute, CudaDevice};

        let count = CudaDevice::count().map_err(GpuError::driver)?;
        log::debug!("CUDA driver reports {count} device(s)");

        let mut devices = Vec::with_capacity(count.max(0) as usize);
        for ordinal in 0..count.max(0) as usize {
            let device = CudaDevice::new(ordinal).map_err(GpuError::driver)?;
            let mut descriptor = PhysicalDevice::gpu(ordinal, GpuBackendType::Cuda);

            match device.name() {
                Ok(name) => descriptor = descriptor.with_model(name),
                Err(e) => log::warn!("could not read name of CUDA device {ordinal}: {e}"),
            }

            let major = device
                .attribute(CUdevice_attribute::CU_DEVICE_ATTRIBUTE_COMPUTE_CAPABILITY_MAJOR);
            let minor = device
                .attribute(CUdevice_attribute::CU_DEVICE_ATTRIBUTE_COMPUTE_CAPABILITY_MINOR);
            if let (Ok(major), Ok(minor)) = (major, minor) {
                descriptor = descriptor.with_compute_capability(major as u32, minor as u32);
            }

            devices.push(descriptor);
        }
        Ok(devices)
    }
}

impl DeviceRegistry for SystemRegistry {
    fn framework_name(&self) -> &str {
        env!("CARGO_PKG_NAME")
    }

    fn framework_version(&self) -> String {
        let backends = Self::compiled_backends();
        if backends.is_empty() {
            format!("{} (no GPU backends compiled in)", env!("CARGO_PKG_VERSION"))
        } else {
            let names: Vec<String> = backends.iter().map(ToString::to_string).collect();
            format!("{} (backends: {})", env!("CARGO_PKG_VERSION"), names.join(", "))
        }
    }

    fn list_physical_devices(&self, kind: DeviceKind) -> Result<Vec<PhysicalDevice>> {
        match kind {
            DeviceKind::Cpu => Ok(vec![PhysicalDevice::new(DeviceKind::Cpu, 0)]),
            DeviceKind::Gpu => Self::detect_gpus(),
        }
    }

    fn remediation_hint(&self) -> String {
        if cfg!(target_os = "macos") {
            "GPUs on macOS are reached through Metal. Install a Metal-enabled backend for your \
             training framework and make sure the device supports Metal."
                .to_string()
        } else if cfg!(feature = "cuda") {
            "Make sure the NVIDIA driver is installed and CUDA_VISIBLE_DEVICES does not hide the GPU."
                .to_string()
        } else {
            "Rebuild with `--features cuda` to enable CUDA device probing.".to_string()
        }
    }
}

/// Registry returning a fixed device list.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    name: String,
    version: String,
    devices: Vec<PhysicalDevice>,
    hint: Option<String>,
}

impl StaticRegistry {
    /// Creates an empty registry reporting the given framework identity.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, version: S2) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            devices: Vec::new(),
            hint: None,
        }
    }

    /// Adds a device.
    pub fn with_device(mut self, device: PhysicalDevice) -> Self {
        self.devices.push(device);
        self
    }

    /// Overrides the remediation hint.
    pub fn with_hint<S: Into<String>>(mut self, hint: S) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl DeviceRegistry for StaticRegistry {
    fn framework_name(&self) -> &str {
        &self.name
    }

    fn framework_version(&self) -> String {
        self.version.clone()
    }

    fn list_physical_devices(&self, kind: DeviceKind) -> Result<Vec<PhysicalDevice>> {
        Ok(self
            .devices
            .iter()
            .filter(|d| d.kind == kind)
            .cloned()
            .collect())
    }

    fn remediation_hint(&self) -> String {
        self.hint
            .clone()
            .unwrap_or_else(|| DEFAULT_REMEDIATION_HINT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_registry_filters_by_kind() {
        let registry = StaticRegistry::new("mock", "1.0")
            .with_device(PhysicalDevice::new(DeviceKind::Cpu, 0))
            .with_device(PhysicalDevice::gpu(0, GpuBackendType::Metal));

        let gpus = registry.list_physical_devices(DeviceKind::Gpu).unwrap();
        assert_eq!(gpus.len(), 1);
        assert_eq!(gpus[0].backend, Some(GpuBackendType::Metal));

        let cpus = registry.list_physical_devices(DeviceKind::Cpu).unwrap();
        assert_eq!(cpus.len(), 1);
    }

    #[test]
    fn test_system_registry_always_has_cpu() {
        let registry = SystemRegistry::new();
        let cpus = registry.list_physical_devices(DeviceKind::Cpu).unwrap();
        assert_eq!(cpus, vec![PhysicalDevice::new(DeviceKind::Cpu, 0)]);
        assert_eq!(registry.framework_name(), "sparsefeed-gpu");
    }

    #[cfg(not(feature = "cuda"))]
    #[test]
    fn test_system_registry_without_backends() {
        let registry = SystemRegistry::new();
        assert!(registry.list_physical_devices(DeviceKind::Gpu).unwrap().is_empty());
        assert!(registry.framework_version().contains("no GPU backends"));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_system_hint_on_macos_points_to_metal() {
        let hint = SystemRegistry::new().remediation_hint();
        assert!(hint.contains("Metal"));
        assert!(!hint.contains("CUDA"));
        assert!(!hint.contains("--features cuda"));
    }

    #[cfg(all(not(target_os = "macos"), not(feature = "cuda")))]
    #[test]
    fn test_system_hint_without_cuda_suggests_rebuild() {
        let hint = SystemRegistry::new().remediation_hint();
        assert!(hint.contains("--features cuda"));
        assert!(!hint.contains("Metal"));
    }

    #[cfg(all(not(target_os = "macos"), feature = "cuda"))]
    #[test]
    fn test_system_hint_with_cuda_checks_driver() {
        let hint = SystemRegistry::new().remediation_hint();
        assert!(hint.contains("NVIDIA driver"));
        assert!(!hint.contains("Metal"));
    }
}
