use std::net::IpAddr;

use crate::constants::{ONE_GIB, SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE};

/// Whole gibibytes, truncated.
pub fn whole_gib(bytes: u64) -> u64 {
    bytes / ONE_GIB
}

/// Inputs of the system stats panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemStats {
    /// Global CPU usage over the sampling window (percent).
    pub cpu_percent: f32,
    pub ram_percent: f32,
    /// Usage of the root filesystem (percent).
    pub disk_percent: f32,
    /// Logical cores.
    pub cpu_count: usize,
    pub available_ram: u64,
    pub free_disk: u64,
}

/// Inputs of the diagnostics panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsSnapshot {
    /// Seconds since boot.
    pub uptime_secs: u64,
    pub cpu_freq_mhz: u64,
    pub cpu_max_freq_mhz: u64,
    pub process_count: usize,
}

impl DiagnosticsSnapshot {
    /// Uptime split into (days, hours, minutes).
    pub fn uptime_parts(&self) -> (u64, u64, u64) {
        let s = self.uptime_secs;
        (
            s / SECS_PER_DAY,
            (s % SECS_PER_DAY) / SECS_PER_HOUR,
            (s % SECS_PER_HOUR) / SECS_PER_MINUTE,
        )
    }
}

/// Inputs of the network panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    pub hostname: String,
    pub ip: IpAddr,
    /// Whether the reachability probe connected.
    pub internet: bool,
}

/// Inputs of the memory panel. Byte counts.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySnapshot {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub swap_total: u64,
    pub swap_used: u64,
}

impl MemorySnapshot {
    /// Share of RAM not available to new allocations.
    pub fn usage_percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.total.saturating_sub(self.available) as f32 / self.total as f32) * 100.0
    }
}

/// CPU/RAM pair polled by the frontend status widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveUsage {
    pub cpu_percent: f32,
    pub ram_percent: f32,
}
