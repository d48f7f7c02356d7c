//! Report text produced for mocked device registries.

use pretty_assertions::assert_eq;
use sparsefeed_gpu::{
    run_diagnostic, DeviceKind, DeviceRegistry, GpuBackendType, GpuError, PhysicalDevice,
    StaticRegistry,
};

fn render<R: DeviceRegistry>(registry: &R) -> String {
    let mut out = Vec::new();
    run_diagnostic(registry, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn platform_line() -> String {
    format!(
        "Platform: {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[test]
fn empty_registry_reports_failure_and_hint() {
    let registry = StaticRegistry::new("tensorstack", "2.16.1")
        .with_hint("Make sure you have installed the vendor acceleration plugin.");

    let expected = format!(
        "{}\n\
         tensorstack Version: 2.16.1\n\
         ------------------------------\n\
         ❌ tensorstack is not recognizing the GPU.\n   \
         Make sure you have installed the vendor acceleration plugin.\n\
         ------------------------------\n",
        platform_line()
    );
    assert_eq!(render(&registry), expected);
}

#[test]
fn single_device_is_enumerated_under_success_banner() {
    let device = PhysicalDevice::new(DeviceKind::Gpu, 0);
    let registry = StaticRegistry::new("tensorstack", "2.16.1").with_device(device);

    let expected = format!(
        "{}\n\
         tensorstack Version: 2.16.1\n\
         ------------------------------\n\
         ✅ tensorstack is recognizing the GPU.\n\
         Available GPU(s):\n  \
         - PhysicalDevice(name='/physical_device:GPU:0', device_type='GPU')\n\
         ------------------------------\n",
        platform_line()
    );
    let text = render(&registry);
    assert_eq!(text, expected);
    assert!(!text.contains("not recognizing"));
}

#[test]
fn every_device_gets_one_line() {
    let registry = StaticRegistry::new("mock", "0")
        .with_device(PhysicalDevice::gpu(0, GpuBackendType::Cuda).with_model("A100"))
        .with_device(PhysicalDevice::gpu(1, GpuBackendType::Cuda).with_model("A100"))
        .with_device(PhysicalDevice::new(DeviceKind::Cpu, 0));

    let text = render(&registry);
    let device_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("  - ")).collect();
    assert_eq!(device_lines.len(), 2);
    assert!(device_lines[1].contains("/physical_device:GPU:1"));
    assert!(!text.contains("CPU"));
}

/// Registry whose driver query always fails.
struct BrokenDriver;

impl DeviceRegistry for BrokenDriver {
    fn framework_name(&self) -> &str {
        "broken"
    }

    fn framework_version(&self) -> String {
        "0".to_string()
    }

    fn list_physical_devices(&self, _kind: DeviceKind) -> sparsefeed_gpu::Result<Vec<PhysicalDevice>> {
        Err(GpuError::driver("libcuda.so not found"))
    }
}

#[test]
fn driver_failures_propagate() {
    let mut out = Vec::new();
    let err = run_diagnostic(&BrokenDriver, &mut out).unwrap_err();
    assert!(matches!(err, GpuError::DriverError(_)));
    assert!(out.is_empty());
}
