mod collector;
pub mod network;

pub use collector::{MetricsSource, SysinfoSource};

#[cfg(test)]
pub(crate) mod test_support {
    use super::MetricsSource;
    use crate::constants::ONE_GIB;
    use crate::error::{AssistantError, Result};
    use crate::models::{
        DiagnosticsSnapshot, LiveUsage, MemorySnapshot, NetworkSnapshot, SystemStats,
    };

    /// Canned metrics; a `None` field simulates a failed read.
    #[derive(Clone)]
    pub(crate) struct StaticSource {
        pub stats: Option<SystemStats>,
        pub diagnostics: Option<DiagnosticsSnapshot>,
        pub network: Option<NetworkSnapshot>,
        pub memory: Option<MemorySnapshot>,
        pub usage: Option<LiveUsage>,
    }

    impl StaticSource {
        pub(crate) fn healthy() -> Self {
            Self {
                stats: Some(SystemStats {
                    cpu_percent: 42.0,
                    ram_percent: 55.0,
                    disk_percent: 10.0,
                    cpu_count: 8,
                    available_ram: 4 * ONE_GIB,
                    free_disk: 100 * ONE_GIB,
                }),
                diagnostics: Some(DiagnosticsSnapshot {
                    uptime_secs: 3 * 86_400 + 4 * 3_600 + 5 * 60,
                    cpu_freq_mhz: 2_400,
                    cpu_max_freq_mhz: 4_700,
                    process_count: 312,
                }),
                network: Some(NetworkSnapshot {
                    hostname: "workstation".to_string(),
                    ip: "192.168.1.20".parse().unwrap(),
                    internet: true,
                }),
                memory: Some(MemorySnapshot {
                    total: 16 * ONE_GIB,
                    used: 9 * ONE_GIB,
                    available: 6 * ONE_GIB,
                    swap_total: 2 * ONE_GIB,
                    swap_used: ONE_GIB / 2,
                }),
                usage: Some(LiveUsage {
                    cpu_percent: 12.7,
                    ram_percent: 48.2,
                }),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                stats: None,
                diagnostics: None,
                network: None,
                memory: None,
                usage: None,
            }
        }
    }

    fn read<T: Clone>(value: &Option<T>, what: &str) -> Result<T> {
        value
            .clone()
            .ok_or_else(|| AssistantError::Metrics(format!("simulated {} failure", what)))
    }

    impl MetricsSource for StaticSource {
        fn system_stats(&self) -> Result<SystemStats> {
            read(&self.stats, "stats")
        }

        fn diagnostics(&self) -> Result<DiagnosticsSnapshot> {
            read(&self.diagnostics, "diagnostics")
        }

        fn network(&self) -> Result<NetworkSnapshot> {
            read(&self.network, "DNS lookup")
        }

        fn memory(&self) -> Result<MemorySnapshot> {
            read(&self.memory, "memory")
        }

        fn live_usage(&self) -> Result<LiveUsage> {
            read(&self.usage, "usage")
        }
    }
}
