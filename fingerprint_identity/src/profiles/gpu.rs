use crate::configs::Platform;
use rand::prelude::IndexedRandom;
use rand::Rng;

/// The unmasked WebGL identity of one real graphics stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuProfile {
    /// The value for `UNMASKED_VENDOR_WEBGL` (GL enum 37445).
    pub webgl_vendor: &'static str,
    /// The value for `UNMASKED_RENDERER_WEBGL` (GL enum 37446).
    pub webgl_renderer: &'static str,
}

/// Chrome on Windows renders through ANGLE on Direct3D.
pub static GPU_PROFILES_WINDOWS: &[GpuProfile] = &[
    GpuProfile {
        webgl_vendor: "Google Inc. (NVIDIA)",
        webgl_renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 3060 Direct3D11 vs_5_0 ps_5_0, D3D11)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (NVIDIA)",
        webgl_renderer: "ANGLE (NVIDIA, NVIDIA GeForce GTX 1650 Direct3D11 vs_5_0 ps_5_0, D3D11)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (NVIDIA)",
        webgl_renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 4070 Direct3D11 vs_5_0 ps_5_0, D3D11)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Intel)",
        webgl_renderer: "ANGLE (Intel, Intel(R) UHD Graphics 630 Direct3D11 vs_5_0 ps_5_0, D3D11)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Intel)",
        webgl_renderer: "ANGLE (Intel, Intel(R) Iris(R) Xe Graphics Direct3D11 vs_5_0 ps_5_0, D3D11)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (AMD)",
        webgl_renderer: "ANGLE (AMD, AMD Radeon RX 6700 XT Direct3D11 vs_5_0 ps_5_0, D3D11)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (AMD)",
        webgl_renderer: "ANGLE (AMD, AMD Radeon(TM) Graphics Direct3D11 vs_5_0 ps_5_0, D3D11)",
    },
];

/// Chrome on macOS renders through ANGLE on Metal.
pub static GPU_PROFILES_MAC: &[GpuProfile] = &[
    GpuProfile {
        webgl_vendor: "Google Inc. (Apple)",
        webgl_renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M1, Unspecified Version)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Apple)",
        webgl_renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M1 Pro, Unspecified Version)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Apple)",
        webgl_renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M2, Unspecified Version)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Apple)",
        webgl_renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M2 Pro, Unspecified Version)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Apple)",
        webgl_renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M3, Unspecified Version)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Intel Inc.)",
        webgl_renderer: "ANGLE (Intel Inc., Intel(R) Iris(TM) Plus Graphics 655, OpenGL 4.1)",
    },
];

/// Chrome on Linux renders through ANGLE on OpenGL.
pub static GPU_PROFILES_LINUX: &[GpuProfile] = &[
    GpuProfile {
        webgl_vendor: "Google Inc. (Intel)",
        webgl_renderer: "ANGLE (Intel, Mesa Intel(R) UHD Graphics 620 (KBL GT2), OpenGL 4.6)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (Intel)",
        webgl_renderer: "ANGLE (Intel, Mesa Intel(R) HD Graphics 520 (SKL GT2), OpenGL 4.6)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (NVIDIA Corporation)",
        webgl_renderer: "ANGLE (NVIDIA Corporation, NVIDIA GeForce GTX 1080/PCIe/SSE2, OpenGL 4.5.0)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (NVIDIA Corporation)",
        webgl_renderer: "ANGLE (NVIDIA Corporation, NVIDIA GeForce RTX 3060/PCIe/SSE2, OpenGL 4.5.0)",
    },
    GpuProfile {
        webgl_vendor: "Google Inc. (AMD)",
        webgl_renderer: "ANGLE (AMD, AMD Radeon Graphics (renoir, LLVM 15.0.7, DRM 3.49), OpenGL 4.6)",
    },
];

/// Fallback GPU profile used when a table is empty.
pub static FALLBACK_GPU_PROFILE: GpuProfile = GpuProfile {
    webgl_vendor: "Google Inc. (Intel)",
    webgl_renderer: "ANGLE (Intel, Intel(R) UHD Graphics 630 Direct3D11 vs_5_0 ps_5_0, D3D11)",
};

/// The GPU table matching a platform.
pub fn gpu_profiles_for(platform: Platform) -> &'static [GpuProfile] {
    if platform.is_windows() {
        GPU_PROFILES_WINDOWS
    } else if platform.is_mac() {
        GPU_PROFILES_MAC
    } else {
        GPU_PROFILES_LINUX
    }
}

/// Select a random GPU profile that fits the platform.
pub fn select_gpu_profile<R: Rng>(platform: Platform, rng: &mut R) -> &'static GpuProfile {
    gpu_profiles_for(platform)
        .choose(rng)
        .unwrap_or(&FALLBACK_GPU_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mac_gets_apple_or_intel_metal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let gpu = select_gpu_profile(Platform::MacIntel, &mut rng);
            assert!(GPU_PROFILES_MAC.contains(gpu));
        }
    }

    #[test]
    fn test_windows_profiles_are_direct3d() {
        assert!(GPU_PROFILES_WINDOWS
            .iter()
            .all(|gpu| gpu.webgl_renderer.ends_with("D3D11)")));
    }

    #[test]
    fn test_profiles_are_never_empty() {
        for table in [GPU_PROFILES_WINDOWS, GPU_PROFILES_MAC, GPU_PROFILES_LINUX] {
            assert!(table
                .iter()
                .all(|gpu| !gpu.webgl_vendor.is_empty() && !gpu.webgl_renderer.is_empty()));
        }
    }
}
