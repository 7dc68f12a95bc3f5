use std::path::Path;
use std::time::Duration;

use sysinfo::{Disk, Disks, ProcessesToUpdate, System, MINIMUM_CPU_UPDATE_INTERVAL};

use crate::config::MetricsConfig;
use crate::constants::CPU_MAX_FREQ_PATH;
use crate::error::{AssistantError, Result};
use crate::models::{
    DiagnosticsSnapshot, LiveUsage, MemorySnapshot, NetworkSnapshot, SystemStats,
};
use crate::monitor::network::{resolve_host_ip, ConnectivityProbe};

/// Where the reports get their numbers from.
///
/// Every call is a fresh read; implementations must not cache between calls
/// and must be safe to call from several threads at once.
pub trait MetricsSource: Send + Sync {
    fn system_stats(&self) -> Result<SystemStats>;
    fn diagnostics(&self) -> Result<DiagnosticsSnapshot>;
    fn network(&self) -> Result<NetworkSnapshot>;
    fn memory(&self) -> Result<MemorySnapshot>;
    fn live_usage(&self) -> Result<LiveUsage>;
}

/// Reads live metrics through sysinfo.
/// Only gathers data; formatting lives in the reporter.
pub struct SysinfoSource {
    cpu_sample: Duration,
    usage_sample: Duration,
    probe: ConnectivityProbe,
}

impl SysinfoSource {
    pub fn new(config: &MetricsConfig) -> Self {
        Self {
            cpu_sample: Duration::from_millis(config.cpu_sample_ms),
            usage_sample: Duration::from_millis(config.usage_sample_ms),
            probe: ConnectivityProbe::new(
                config.connectivity_probe.clone(),
                Duration::from_millis(config.connectivity_timeout_ms),
            ),
        }
    }
}

impl MetricsSource for SysinfoSource {
    fn system_stats(&self) -> Result<SystemStats> {
        let mut sys = System::new();
        let cpu_percent = sample_cpu(&mut sys, self.cpu_sample);
        sys.refresh_memory();

        let disks = Disks::new_with_refreshed_list();
        let disk = root_disk(&disks)
            .ok_or_else(|| AssistantError::Metrics("no mounted disk found".into()))?;
        let disk_total = disk.total_space();
        let disk_free = disk.available_space();

        Ok(SystemStats {
            cpu_percent,
            ram_percent: ram_percent(&sys),
            disk_percent: percent_of(disk_total.saturating_sub(disk_free), disk_total),
            cpu_count: sys.cpus().len(),
            available_ram: sys.available_memory(),
            free_disk: disk_free,
        })
    }

    fn diagnostics(&self) -> Result<DiagnosticsSnapshot> {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        let freqs: Vec<u64> = sys.cpus().iter().map(|c| c.frequency()).collect();
        if freqs.is_empty() {
            return Err(AssistantError::Metrics("no CPU information available".into()));
        }
        let current = freqs.iter().sum::<u64>() / freqs.len() as u64;
        let max = read_max_frequency_mhz()
            .unwrap_or_else(|| freqs.iter().copied().max().unwrap_or(current));

        let now = chrono::Utc::now().timestamp().max(0) as u64;

        Ok(DiagnosticsSnapshot {
            uptime_secs: now.saturating_sub(System::boot_time()),
            cpu_freq_mhz: current,
            cpu_max_freq_mhz: max,
            process_count: sys.processes().len(),
        })
    }

    fn network(&self) -> Result<NetworkSnapshot> {
        let hostname = System::host_name()
            .ok_or_else(|| AssistantError::Metrics("hostname unavailable".into()))?;
        let ip = resolve_host_ip(&hostname)?;

        Ok(NetworkSnapshot {
            internet: self.probe.is_reachable(),
            hostname,
            ip,
        })
    }

    fn memory(&self) -> Result<MemorySnapshot> {
        let mut sys = System::new();
        sys.refresh_memory();
        if sys.total_memory() == 0 {
            return Err(AssistantError::Metrics("memory information unavailable".into()));
        }

        Ok(MemorySnapshot {
            total: sys.total_memory(),
            used: sys.used_memory(),
            available: sys.available_memory(),
            swap_total: sys.total_swap(),
            swap_used: sys.used_swap(),
        })
    }

    fn live_usage(&self) -> Result<LiveUsage> {
        let mut sys = System::new();
        let cpu_percent = sample_cpu(&mut sys, self.usage_sample);
        sys.refresh_memory();

        Ok(LiveUsage {
            cpu_percent,
            ram_percent: ram_percent(&sys),
        })
    }
}

/// Global CPU usage measured across `window` (at least sysinfo's minimum).
fn sample_cpu(sys: &mut System, window: Duration) -> f32 {
    sys.refresh_cpu_usage();
    std::thread::sleep(window.max(MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_usage();
    sys.global_cpu_usage()
}

fn ram_percent(sys: &System) -> f32 {
    let total = sys.total_memory();
    percent_of(total.saturating_sub(sys.available_memory()), total)
}

fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 100.0) as f32
}

/// The disk mounted at `/`, or the first listed one (Windows drive letters).
fn root_disk(disks: &Disks) -> Option<&Disk> {
    let list = disks.list();
    list.iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .or_else(|| list.first())
}

/// Maximum CPU frequency from sysfs (kHz on disk). None off Linux.
fn read_max_frequency_mhz() -> Option<u64> {
    let khz: u64 = std::fs::read_to_string(CPU_MAX_FREQ_PATH)
        .ok()?
        .trim()
        .parse()
        .ok()?;
    Some(khz / 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SysinfoSource {
        SysinfoSource::new(&MetricsConfig::default())
    }

    #[test]
    fn percent_of_handles_zero_total() {
        assert_eq!(percent_of(5, 0), 0.0);
        assert!((percent_of(1, 4) - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn memory_reads_live_values() {
        let mem = source().memory().unwrap();
        assert!(mem.total > 0);
        assert!(mem.available <= mem.total);
    }

    #[test]
    fn diagnostics_counts_processes() {
        let diag = source().diagnostics().unwrap();
        assert!(diag.process_count > 0);
        assert!(diag.cpu_max_freq_mhz >= diag.cpu_freq_mhz || diag.cpu_max_freq_mhz > 0);
    }
}
