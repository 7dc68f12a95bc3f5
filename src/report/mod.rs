//! Human-readable reports built from live metrics.
//!
//! Each report is a read followed by pure formatting. The `render_*`
//! functions take a snapshot and never touch the OS, which keeps the exact
//! field widths testable. A failed read degrades to an "unavailable" line
//! carrying the error text; it never propagates.

pub mod jokes;
pub mod panel;

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use tracing::warn;

pub use panel::Panel;

use crate::constants::{
    HOSTNAME_DISPLAY_LEN, PLACEHOLDER_CPU_TEMP, PLACEHOLDER_DISK_IO, PLACEHOLDER_ENCRYPTION,
    PLACEHOLDER_SIGNAL,
};
use crate::error::AssistantError;
use crate::models::{
    whole_gib, DiagnosticsSnapshot, LiveUsage, MemorySnapshot, NetworkSnapshot, SystemStats,
};
use crate::monitor::MetricsSource;
use crate::utils::take_chars;

/// Builds report strings from a [`MetricsSource`].
pub struct Reporter<S> {
    source: S,
}

impl<S: MetricsSource> Reporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn system_stats(&self) -> String {
        match self.source.system_stats() {
            Ok(stats) => render_system_stats(&stats),
            Err(e) => unavailable("System stats", e),
        }
    }

    pub fn diagnostics(&self) -> String {
        match self.source.diagnostics() {
            Ok(diag) => render_diagnostics(&diag),
            Err(e) => unavailable("Diagnostics", e),
        }
    }

    pub fn network_status(&self) -> String {
        match self.source.network() {
            Ok(net) => render_network(&net),
            Err(e) => unavailable("Network status", e),
        }
    }

    pub fn memory_info(&self) -> String {
        match self.source.memory() {
            Ok(mem) => render_memory(&mem),
            Err(e) => unavailable("Memory info", e),
        }
    }

    pub fn time_info(&self) -> String {
        render_time(&Local::now())
    }

    pub fn joke(&self) -> String {
        format!("😂 {}", jokes::pick(&mut rand::thread_rng()))
    }

    /// Raw CPU/RAM pair for the status widget. Errors are left to the caller.
    pub fn live_usage(&self) -> Result<LiveUsage, AssistantError> {
        self.source.live_usage()
    }
}

fn unavailable(what: &str, err: AssistantError) -> String {
    warn!(report = what, error = %err, "metrics read failed");
    format!("{} unavailable: {}", what, err)
}

pub fn render_system_stats(s: &SystemStats) -> String {
    Panel::new("⚡ SYSTEM STATUS REPORT")
        .row("💻", "CPU USAGE", format!("{:>6.1}%", s.cpu_percent))
        .row("🧠", "RAM USAGE", format!("{:>6.1}%", s.ram_percent))
        .row("💾", "DISK USAGE", format!("{:>6.1}%", s.disk_percent))
        .row("🔩", "CPU CORES", format!("{:>6}", s.cpu_count))
        .row("📊", "AVAILABLE RAM", format!("{:>5} GB", whole_gib(s.available_ram)))
        .row("📂", "FREE DISK", format!("{:>5} GB", whole_gib(s.free_disk)))
        .render()
}

pub fn render_diagnostics(d: &DiagnosticsSnapshot) -> String {
    let (days, hours, mins) = d.uptime_parts();
    Panel::new("🔧 FULL SYSTEM DIAGNOSTICS")
        .row("⏳", "UPTIME", format!("{}d {}h {}m", days, hours, mins))
        .row("⚡", "CPU FREQUENCY", format!("{:.2} GHz", mhz_to_ghz(d.cpu_freq_mhz)))
        .row("📈", "MAX FREQ", format!("{:.2} GHz", mhz_to_ghz(d.cpu_max_freq_mhz)))
        .row("🔄", "PROCESSES", format!("{:>6}", d.process_count))
        .row("🔥", "CPU TEMP", PLACEHOLDER_CPU_TEMP)
        .row("📀", "DISK I/O", PLACEHOLDER_DISK_IO)
        .render()
}

pub fn render_network(n: &NetworkSnapshot) -> String {
    let internet = if n.internet { "✅ CONNECTED" } else { "❌ DISCONNECTED" };
    Panel::new("🌐 NETWORK STATUS REPORT")
        .row("🏠", "HOSTNAME", format!("{:<25}", take_chars(&n.hostname, HOSTNAME_DISPLAY_LEN)))
        .row("📡", "IP ADDRESS", format!("{:<25}", n.ip))
        .row("🌍", "INTERNET", internet)
        .row("📶", "SIGNAL", PLACEHOLDER_SIGNAL)
        .row("🔐", "ENCRYPTION", PLACEHOLDER_ENCRYPTION)
        .render()
}

pub fn render_memory(m: &MemorySnapshot) -> String {
    Panel::new("💾 MEMORY & PROCESS ANALYSIS")
        .row("🧠", "TOTAL RAM", format!("{:>6} GB", whole_gib(m.total)))
        .row("📊", "USED RAM", format!("{:>6} GB", whole_gib(m.used)))
        .row("✨", "AVAILABLE", format!("{:>6} GB", whole_gib(m.available)))
        .row("📈", "USAGE %", format!("{:>6.1}%", m.usage_percent()))
        .row("🔄", "SWAP TOTAL", format!("{:>6} GB", whole_gib(m.swap_total)))
        .row("🔄", "SWAP USED", format!("{:>6} GB", whole_gib(m.swap_used)))
        .render()
}

pub fn render_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "⏰ TEMPORAL COORDINATES:\n   Time: {}\n   Date: {}\n   Day:  {}",
        now.format("%I:%M:%S %p"),
        now.format("%A, %B %d, %Y"),
        now.format("%A"),
    )
}

fn mhz_to_ghz(mhz: u64) -> f64 {
    mhz as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::test_support::StaticSource;
    use chrono::Utc;

    fn reporter() -> Reporter<StaticSource> {
        Reporter::new(StaticSource::healthy())
    }

    fn row<'a>(report: &'a str, label: &str) -> &'a str {
        report
            .lines()
            .find(|l| l.contains(label))
            .unwrap_or_else(|| panic!("no {} row in\n{}", label, report))
    }

    // ── System stats ──────────────────────────────────────────────

    #[test]
    fn system_stats_fields_and_widths() {
        let out = reporter().system_stats();
        assert!(row(&out, "CPU USAGE").contains(":   42.0%"));
        assert!(row(&out, "RAM USAGE").contains(":   55.0%"));
        assert!(row(&out, "DISK USAGE").contains(":   10.0%"));
        assert!(row(&out, "CPU CORES").contains(":      8"));
        assert!(row(&out, "AVAILABLE RAM").contains(":     4 GB"));
        assert!(row(&out, "FREE DISK").contains(":   100 GB"));
    }

    #[test]
    fn system_stats_failure_degrades() {
        let out = Reporter::new(StaticSource::failing()).system_stats();
        assert_eq!(out, "System stats unavailable: simulated stats failure");
    }

    // ── Diagnostics ───────────────────────────────────────────────

    #[test]
    fn diagnostics_fields() {
        let out = reporter().diagnostics();
        assert!(row(&out, "UPTIME").contains(": 3d 4h 5m"));
        assert!(row(&out, "CPU FREQUENCY").contains(": 2.40 GHz"));
        assert!(row(&out, "MAX FREQ").contains(": 4.70 GHz"));
        assert!(row(&out, "PROCESSES").contains(":    312"));
        assert!(row(&out, "CPU TEMP").contains("CHECK FIRMWARE"));
        assert!(row(&out, "DISK I/O").contains("OPTIMAL"));
    }

    // ── Network ───────────────────────────────────────────────────

    #[test]
    fn network_fields() {
        let out = reporter().network_status();
        assert!(row(&out, "HOSTNAME").contains("workstation"));
        assert!(row(&out, "IP ADDRESS").contains("192.168.1.20"));
        assert!(row(&out, "INTERNET").contains("✅ CONNECTED"));
        assert!(row(&out, "SIGNAL").contains("STRONG"));
        assert!(row(&out, "ENCRYPTION").contains("ENABLED"));
    }

    #[test]
    fn network_offline_and_long_hostname() {
        let mut source = StaticSource::healthy();
        source.network = Some(NetworkSnapshot {
            hostname: "a-very-long-hostname-that-keeps-going.example.com".to_string(),
            ip: "10.0.0.2".parse().unwrap(),
            internet: false,
        });
        let out = Reporter::new(source).network_status();
        assert!(row(&out, "INTERNET").contains("❌ DISCONNECTED"));
        let host = row(&out, "HOSTNAME");
        assert!(host.contains("a-very-long-hostname-that"));
        assert!(!host.contains("keeps"));
    }

    #[test]
    fn network_failure_never_propagates() {
        let out = Reporter::new(StaticSource::failing()).network_status();
        assert!(out.contains("unavailable"));
        assert!(out.contains("simulated DNS lookup failure"));
    }

    // ── Memory ────────────────────────────────────────────────────

    #[test]
    fn memory_fields() {
        let out = reporter().memory_info();
        assert!(row(&out, "TOTAL RAM").contains(":     16 GB"));
        assert!(row(&out, "USED RAM").contains(":      9 GB"));
        assert!(row(&out, "AVAILABLE").contains(":      6 GB"));
        assert!(row(&out, "USAGE %").contains(":   62.5%"));
        assert!(row(&out, "SWAP TOTAL").contains(":      2 GB"));
        assert!(row(&out, "SWAP USED").contains(":      0 GB"));
    }

    // ── Time ──────────────────────────────────────────────────────

    #[test]
    fn time_uses_twelve_hour_clock() {
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 15, 4, 5).unwrap();
        let out = render_time(&now);
        assert!(out.contains("Time: 03:04:05 PM"));
        assert!(out.contains("Date: Monday, January 05, 2026"));
        assert!(out.contains("Day:  Monday"));
    }

    // ── Jokes ─────────────────────────────────────────────────────

    #[test]
    fn jokes_always_come_from_the_list() {
        let r = reporter();
        for _ in 0..1000 {
            let out = r.joke();
            let joke = out.strip_prefix("😂 ").expect("joke prefix");
            assert!(jokes::JOKES.contains(&joke), "unexpected joke: {}", joke);
        }
    }
}
