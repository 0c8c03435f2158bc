use std::net::ToSocketAddrs;

use quake_engine::ConnectivityProbe;
use quake_logging::quake_debug;

/// Treats the network as available when `host:port` resolves to at least one address.
pub struct DnsConnectivityProbe {
    target: String,
}

impl DnsConnectivityProbe {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl ConnectivityProbe for DnsConnectivityProbe {
    fn is_network_available(&self) -> bool {
        match self.target.to_socket_addrs() {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(err) => {
                quake_debug!("Connectivity probe for {} failed: {}", self.target, err);
                false
            }
        }
    }
}
