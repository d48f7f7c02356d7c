//! GPU detection summary.
//!
//! This module snapshots the GPUs a registry can see and answers the
//! questions the diagnostic needs: is there any GPU, which backends expose
//! one, and which device would a training job pick first.

use crate::{
    device::{DeviceKind, GpuBackendType, PhysicalDevice},
    error::Result,
    registry::DeviceRegistry,
};

/// Snapshot of the GPUs visible through a registry.
#[derive(Debug, Clone)]
pub struct GpuSelector {
    devices: Vec<PhysicalDevice>,
    preferred_backend: Option<GpuBackendType>,
}

impl GpuSelector {
    /// Queries `registry` once for its GPU devices.
    pub fn detect<R: DeviceRegistry + ?Sized>(registry: &R) -> Result<Self> {
        let devices = registry.list_physical_devices(DeviceKind::Gpu)?;
        log::info!(
            "{} reports {} GPU device(s)",
            registry.framework_name(),
            devices.len()
        );
        Ok(Self {
            devices,
            preferred_backend: None,
        })
    }

    /// Sets a preferred backend type.
    pub fn with_preferred_backend(mut self, backend: GpuBackendType) -> Self {
        self.preferred_backend = Some(backend);
        self
    }

    /// Lists all available devices.
    pub fn available_devices(&self) -> &[PhysicalDevice] {
        &self.devices
    }

    /// Checks if any GPU is available.
    pub fn has_gpu(&self) -> bool {
        !self.devices.is_empty()
    }

    /// Checks if a specific backend type is available.
    pub fn has_backend(&self, backend_type: GpuBackendType) -> bool {
        self.devices
            .iter()
            .any(|d| d.backend == Some(backend_type))
    }

    /// First device of the preferred backend, falling back to the first
    /// device of any backend.
    pub fn select_device(&self) -> Option<&PhysicalDevice> {
        self.preferred_backend
            .and_then(|pref| self.devices.iter().find(|d| d.backend == Some(pref)))
            .or_else(|| self.devices.first())
    }
}
