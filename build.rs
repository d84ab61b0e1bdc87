use std::cmp::Ordering;
use std::env;
use std::process::Command;

// CPU features backing a SIMD backend of this crate
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_feature: &'static str,
    cfg_flag: &'static str,
    arch: &'static [&'static str],
    // Reported by the host CPU
    detected: bool,
    // Enabled for codegen, so intrinsics inline
    enabled: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx2" => 0,
            "sse4_1" => 1,
            "neon" => 2,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse4_1",
                target_feature: "sse4.1",
                cfg_flag: "sse",
                arch: &["x86", "x86_64"],
                detected: false,
                enabled: false,
            },
            CpuFeature {
                name: "avx2",
                target_feature: "avx2",
                cfg_flag: "avx2",
                arch: &["x86", "x86_64"],
                detected: false,
                enabled: false,
            },
            CpuFeature {
                name: "neon",
                target_feature: "neon",
                cfg_flag: "neon",
                arch: &["aarch64"],
                detected: false,
                enabled: false,
            },
        ]
    }

    fn matches_arch(&self, target_arch: &str) -> bool {
        self.arch.contains(&target_arch)
    }

    fn compiled(&self, target_arch: &str) -> bool {
        (self.detected || self.enabled) && self.matches_arch(target_arch)
    }

    fn selectable(&self, target_arch: &str) -> bool {
        self.enabled && self.matches_arch(target_arch)
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                // aarch64 kernels report NEON as "asimd"
                feature.detected |= match feature.name {
                    "neon" => contents.contains("asimd") || contents.contains("neon"),
                    name => contents.contains(name),
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                feature.detected |= match feature.name {
                    "avx2" => contents.contains("hw.optional.avx2_0: 1"),
                    "sse4_1" => contents.contains("hw.optional.sse4_1: 1"),
                    "neon" => contents.contains("hw.optional.neon: 1"),
                    _ => false,
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    // Features the compiler was explicitly told to target (e.g. `-C target-cpu=native`)
    fn static_target_features(features: &mut [CpuFeature], target_arch: &str) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            feature.enabled |= enabled.contains(&feature.target_feature);
            // NEON is mandatory on AArch64
            feature.enabled |= feature.name == "neon" && target_arch == "aarch64";
        }
    }

    fn requested_backend() -> Option<String> {
        if env::var_os("CARGO_FEATURE_SCALAR_BACKEND").is_some() {
            return Some("scalar".to_string());
        }
        env::var("SIMDPAD_BACKEND")
            .ok()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
    }

    fn apply(features: &mut [CpuFeature], target_arch: &str) {
        features.sort();

        // Every capability the host or the target reports gets compiled so it
        // can be checked against the scalar oracle at runtime
        for feature in features.iter().filter(|f| f.compiled(target_arch)) {
            println!("cargo:rustc-cfg={}", feature.cfg_flag);
        }

        // Only a backend the compiler generates code for may become `Native`;
        // without the target feature every intrinsic is an out-of-line call
        let best = features
            .iter()
            .find(|f| f.selectable(target_arch))
            .map(|f| f.cfg_flag)
            .unwrap_or("scalar");

        let backend = match Self::requested_backend() {
            Some(requested) if requested == "scalar" => "scalar",
            Some(requested) => {
                let feature = features.iter().find(|f| f.cfg_flag == requested);
                match feature {
                    Some(f) if f.selectable(target_arch) => f.cfg_flag,
                    Some(f) if f.compiled(target_arch) => {
                        println!(
                            "cargo:warning=SIMDPAD_BACKEND={requested} needs the `{}` target feature; \
                             build with RUSTFLAGS=\"-C target-feature=+{}\" or \"-C target-cpu=native\", using {best}",
                            f.target_feature, f.target_feature
                        );
                        best
                    }
                    _ => {
                        println!(
                            "cargo:warning=SIMDPAD_BACKEND={requested} is not available on this target, using {best}"
                        );
                        best
                    }
                }
            }
            None => {
                let detected = features.iter().find(|f| f.compiled(target_arch));
                // Sorted by priority, so an unselectable first hit outranks `best`
                if let Some(f) = detected.filter(|f| !f.selectable(target_arch)) {
                    println!(
                        "cargo:warning=this CPU supports {} but `{}` is not an enabled target feature; \
                         build with RUSTFLAGS=\"-C target-cpu=native\" or \"-C target-feature=+{}\" to use it, using {best}",
                        f.cfg_flag, f.target_feature, f.target_feature
                    );
                }
                best
            }
        };

        println!("cargo:rustc-cfg=backend=\"{backend}\"");

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!(
            "cargo::rustc-check-cfg=cfg(backend, values(\"scalar\", \"sse\", \"avx2\", \"neon\"))"
        );
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SIMDPAD_BACKEND");
    println!("cargo:rerun-if-env-changed=CARGO_ENCODED_RUSTFLAGS");

    let mut features = CpuFeature::features();

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    // Only run CPU detection for native builds
    if host == target {
        PlatformDetector::detect_cpu_features(&mut features);
    }
    PlatformDetector::static_target_features(&mut features, &target_arch);

    PlatformDetector::apply(&mut features, &target_arch);
}
