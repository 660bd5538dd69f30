/// Peak resident set size of the current process, in megabytes.
///
/// `ru_maxrss` is reported in kilobytes on Linux and in bytes on macOS. Returns
/// `0.0` when `getrusage` fails.
pub fn max_mem_usage_mb() -> f64 {
    // SAFETY: `getrusage` only writes into the zeroed struct we hand it.
    let (status, usage) = unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        let status = libc::getrusage(libc::RUSAGE_SELF, &mut usage);
        (status, usage)
    };
    if status != 0 {
        return 0.0;
    }

    let maxrss = usage.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        maxrss / 1024.0 / 1024.0
    } else {
        maxrss / 1024.0
    }
}

/// Tracks growth of the peak RSS across a conversion.
#[derive(Debug, Clone, Copy)]
pub struct MemoryProbe {
    baseline_mb: f64,
}

impl MemoryProbe {
    /// Records the current peak RSS as the baseline.
    pub fn start() -> Self {
        Self {
            baseline_mb: max_mem_usage_mb(),
        }
    }

    /// Peak RSS growth since [`MemoryProbe::start`], never negative.
    pub fn delta_mb(&self) -> f64 {
        (max_mem_usage_mb() - self.baseline_mb).max(0.0)
    }
}
