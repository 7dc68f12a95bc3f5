//! Host address lookup and internet reachability.

use std::net::{IpAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use crate::error::{AssistantError, Result};

/// Decides reachability by opening (and immediately dropping) a TCP
/// connection. No payload is exchanged.
#[derive(Debug, Clone)]
pub struct ConnectivityProbe {
    target: String,
    timeout: Duration,
}

impl ConnectivityProbe {
    pub fn new(target: impl Into<String>, timeout: Duration) -> Self {
        Self {
            target: target.into(),
            timeout,
        }
    }

    pub fn is_reachable(&self) -> bool {
        let addrs = match self.target.to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                debug!(target = %self.target, error = %e, "probe target did not resolve");
                return false;
            }
        };
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => return true,
                Err(e) => debug!(%addr, error = %e, "probe connect failed"),
            }
        }
        false
    }
}

/// Resolve `hostname` to one address, preferring IPv4.
pub fn resolve_host_ip(hostname: &str) -> Result<IpAddr> {
    let addrs: Vec<_> = (hostname, 0)
        .to_socket_addrs()
        .map_err(|e| AssistantError::Metrics(format!("cannot resolve {}: {}", hostname, e)))?
        .collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .map(|a| a.ip())
        .ok_or_else(|| AssistantError::Metrics(format!("no address found for {}", hostname)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn probe_reaches_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let probe = ConnectivityProbe::new(addr.to_string(), Duration::from_millis(500));
        assert!(probe.is_reachable());
    }

    #[test]
    fn probe_reports_closed_port_as_unreachable() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let probe = ConnectivityProbe::new(addr.to_string(), Duration::from_millis(500));
        assert!(!probe.is_reachable());
    }

    #[test]
    fn probe_with_malformed_target_is_unreachable() {
        let probe = ConnectivityProbe::new("not a socket address", Duration::from_millis(100));
        assert!(!probe.is_reachable());
    }

    #[test]
    fn resolves_literal_address() {
        assert_eq!(
            resolve_host_ip("127.0.0.1").unwrap(),
            "127.0.0.1".parse::<IpAddr>().unwrap()
        );
    }
}
