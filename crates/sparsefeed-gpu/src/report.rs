//! Human-readable GPU status report.

use crate::{
    device::PhysicalDevice,
    error::Result,
    registry::DeviceRegistry,
    selector::GpuSelector,
};
use std::{fmt, io::Write};

/// Width of the separator lines framing the device section.
pub const SEPARATOR_WIDTH: usize = 30;

/// Everything the diagnostic prints, collected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Operating system and architecture of the running binary
    pub platform: String,
    /// Name of the probing stack
    pub framework: String,
    /// Version of the probing stack
    pub framework_version: String,
    /// Visible GPU devices
    pub devices: Vec<PhysicalDevice>,
    /// Printed when `devices` is empty
    pub hint: String,
}

impl DiagnosticReport {
    /// Queries `registry` once and captures the result.
    pub fn collect<R: DeviceRegistry + ?Sized>(registry: &R) -> Result<Self> {
        let selector = GpuSelector::detect(registry)?;
        if let Some(device) = selector.select_device() {
            log::debug!("default training device: {device}");
        }

        Ok(Self {
            platform: format!("{} ({})", std::env::consts::OS, std::env::consts::ARCH),
            framework: registry.framework_name().to_string(),
            framework_version: registry.framework_version(),
            devices: selector.available_devices().to_vec(),
            hint: registry.remediation_hint(),
        })
    }

    /// Whether at least one GPU is visible.
    pub fn gpu_found(&self) -> bool {
        !self.devices.is_empty()
    }

    /// Writes the report text.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SEPARATOR_WIDTH);

        writeln!(f, "Platform: {}", self.platform)?;
        writeln!(f, "{} Version: {}", self.framework, self.framework_version)?;
        writeln!(f, "{separator}")?;

        if self.gpu_found() {
            writeln!(f, "✅ {} is recognizing the GPU.", self.framework)?;
            writeln!(f, "Available GPU(s):")?;
            for device in &self.devices {
                writeln!(f, "  - {device}")?;
            }
        } else {
            writeln!(f, "❌ {} is not recognizing the GPU.", self.framework)?;
            writeln!(f, "   {}", self.hint)?;
        }

        writeln!(f, "{separator}")
    }
}

/// Collects a report from `registry` and writes it to `out`.
///
/// A missing GPU is reported, not returned as an error.
pub fn run_diagnostic<R, W>(registry: &R, out: &mut W) -> Result<DiagnosticReport>
where
    R: DeviceRegistry + ?Sized,
    W: Write + ?Sized,
{
    let report = DiagnosticReport::collect(registry)?;
    report.write_to(out)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{device::GpuBackendType, registry::StaticRegistry};

    #[test]
    fn test_gpu_found_flag() {
        let empty = DiagnosticReport::collect(&StaticRegistry::new("mock", "1")).unwrap();
        assert!(!empty.gpu_found());

        let one = StaticRegistry::new("mock", "1").with_device(PhysicalDevice::gpu(0, GpuBackendType::Cuda));
        assert!(DiagnosticReport::collect(&one).unwrap().gpu_found());
    }

    #[test]
    fn test_report_is_framed_by_separators() {
        let report = DiagnosticReport::collect(&StaticRegistry::new("mock", "1")).unwrap();
        let text = report.to_string();
        let separator = "-".repeat(SEPARATOR_WIDTH);
        assert_eq!(text.lines().filter(|l| *l == separator).count(), 2);
        assert!(text.ends_with(&format!("{separator}\n")));
    }
}
