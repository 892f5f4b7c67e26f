//! Client registry (spec module 4.A): resolves an inbound request's source
//! IP and `User-Agent` down to a [`ClientProfile`], caching SSDP-discovered
//! clients so later HTTP requests from the same address resolve without a
//! `User-Agent` match.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

use crate::clients::profile::ClientProfile;

const DEFAULT_CACHE_EVICTION: Duration = Duration::from_secs(3600);

/// A resolved-client sighting, kept for the admin UI's "active clients" view.
#[derive(Debug, Clone)]
pub struct ClientObservation {
    pub profile_name: String,
    pub ip: IpAddr,
    pub user_agent: String,
    pub first_seen: Instant,
    pub last_seen: Instant,
}

struct DiscoveryEntry {
    profile_name: String,
    user_agent: String,
    first_seen: Instant,
    last_seen: Instant,
}

/// Holds the configured [`ClientProfile`] list plus a bounded cache of
/// SSDP-seeded IP -> profile associations. Single mutex, matching the
/// spec's concurrency note for this component.
pub struct ClientRegistry {
    profiles: Vec<ClientProfile>,
    cache_eviction: Duration,
    discovered: Mutex<HashMap<IpAddr, DiscoveryEntry>>,
}

impl ClientRegistry {
    pub fn new(profiles: Vec<ClientProfile>, cache_eviction: Duration) -> Self {
        Self { profiles, cache_eviction, discovered: Mutex::new(HashMap::new()) }
    }

    /// Loads `clients:` from the global configuration and
    /// `upnp.client_eviction_seconds` for the discovery-cache window.
    pub fn load_from_config() -> Self {
        let config = avsconfig::get_config();
        let profiles = match config.get_value(&["clients"]) {
            Ok(value) => serde_yaml::from_value(value).unwrap_or_default(),
            Err(_) => Vec::new(),
        };
        let eviction_secs = match config.get_value(&["upnp", "client_eviction_seconds"]) {
            Ok(serde_yaml::Value::Number(n)) => n.as_u64().unwrap_or(3600),
            _ => 3600,
        };
        Self::new(profiles, Duration::from_secs(eviction_secs))
    }

    /// Resolution order: longest-matching IP/CIDR rule first, then the
    /// first `UserAgent` substring match in configuration order, then the
    /// discovery cache, then the `Unknown` fallback.
    pub fn resolve(&self, addr: IpAddr, user_agent: &str) -> (ClientProfile, ClientObservation) {
        self.evict_stale();

        let resolved = self
            .best_ip_match(addr)
            .or_else(|| self.first_user_agent_match(user_agent))
            .or_else(|| self.from_discovery_cache(addr));

        let profile = resolved.cloned().unwrap_or_else(ClientProfile::unknown);
        let observation = self.record_observation(addr, &profile.name, user_agent);
        (profile, observation)
    }

    fn best_ip_match(&self, addr: IpAddr) -> Option<&ClientProfile> {
        use crate::clients::profile::MatchType;

        self.profiles
            .iter()
            .filter(|p| p.match_type == MatchType::Ip)
            .filter_map(|p| ip_match_specificity(&p.match_value, addr).map(|bits| (bits, p)))
            .max_by_key(|(bits, _)| *bits)
            .map(|(_, p)| p)
    }

    fn first_user_agent_match(&self, user_agent: &str) -> Option<&ClientProfile> {
        use crate::clients::profile::MatchType;

        if user_agent.is_empty() {
            return None;
        }
        self.profiles
            .iter()
            .find(|p| p.match_type == MatchType::UserAgent && user_agent.contains(p.match_value.as_str()))
    }

    fn from_discovery_cache(&self, addr: IpAddr) -> Option<&ClientProfile> {
        let cache = self.discovered.lock().unwrap();
        let entry = cache.get(&addr)?;
        self.profiles.iter().find(|p| p.name == entry.profile_name)
    }

    /// Called when SSDP discovery or a `NOTIFY` identifies `addr` as running
    /// the profile named `profile_name`, seeding the cache ahead of any HTTP
    /// request from that address.
    pub fn note_discovery(&self, addr: IpAddr, profile_name: &str, user_agent: &str) {
        let now = Instant::now();
        let mut cache = self.discovered.lock().unwrap();
        cache
            .entry(addr)
            .and_modify(|e| {
                e.last_seen = now;
                e.profile_name = profile_name.to_string();
            })
            .or_insert(DiscoveryEntry {
                profile_name: profile_name.to_string(),
                user_agent: user_agent.to_string(),
                first_seen: now,
                last_seen: now,
            });
    }

    fn record_observation(&self, addr: IpAddr, profile_name: &str, user_agent: &str) -> ClientObservation {
        let now = Instant::now();
        let mut cache = self.discovered.lock().unwrap();
        let entry = cache.entry(addr).or_insert(DiscoveryEntry {
            profile_name: profile_name.to_string(),
            user_agent: user_agent.to_string(),
            first_seen: now,
            last_seen: now,
        });
        entry.last_seen = now;
        if !user_agent.is_empty() {
            entry.user_agent = user_agent.to_string();
        }
        ClientObservation {
            profile_name: profile_name.to_string(),
            ip: addr,
            user_agent: entry.user_agent.clone(),
            first_seen: entry.first_seen,
            last_seen: entry.last_seen,
        }
    }

    fn evict_stale(&self) {
        let now = Instant::now();
        let mut cache = self.discovered.lock().unwrap();
        cache.retain(|_, entry| now.duration_since(entry.last_seen) < self.cache_eviction);
    }

    pub fn list_active(&self) -> Vec<ClientObservation> {
        self.evict_stale();
        let cache = self.discovered.lock().unwrap();
        cache
            .iter()
            .map(|(ip, entry)| ClientObservation {
                profile_name: entry.profile_name.clone(),
                ip: *ip,
                user_agent: entry.user_agent.clone(),
                first_seen: entry.first_seen,
                last_seen: entry.last_seen,
            })
            .collect()
    }

    pub fn profiles(&self) -> &[ClientProfile] {
        &self.profiles
    }
}

/// Returns the number of significant bits in `rule` if `addr` matches it
/// (an exact IP literal counts as fully specific), used to rank IPv4 CIDR
/// rules by specificity. IPv6 rules only support exact-address matching.
fn ip_match_specificity(rule: &str, addr: IpAddr) -> Option<u32> {
    let addr4 = match addr {
        IpAddr::V4(v4) => v4,
        IpAddr::V6(_) => return rule.parse::<IpAddr>().ok().filter(|r| *r == addr).map(|_| 128),
    };

    if let Some((network, bits)) = rule.split_once('/') {
        let network: std::net::Ipv4Addr = network.parse().ok()?;
        let bits: u32 = bits.parse().ok()?;
        if bits > 32 {
            return None;
        }
        let mask = if bits == 0 { 0 } else { u32::MAX << (32 - bits) };
        let network_bits = u32::from(network) & mask;
        let addr_bits = u32::from(addr4) & mask;
        return (network_bits == addr_bits).then_some(bits);
    }

    rule.parse::<std::net::Ipv4Addr>().ok().filter(|r| *r == addr4).map(|_| 32)
}

pub static CLIENT_REGISTRY: Lazy<ClientRegistry> = Lazy::new(ClientRegistry::load_from_config);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::profile::MatchType;

    fn profile(name: &str, match_type: MatchType, match_value: &str) -> ClientProfile {
        ClientProfile { name: name.to_string(), match_type, match_value: match_value.to_string(), ..ClientProfile::unknown() }
    }

    #[test]
    fn longest_ip_prefix_wins() {
        let registry = ClientRegistry::new(
            vec![
                profile("Subnet", MatchType::Ip, "192.168.1.0/24"),
                profile("Exact", MatchType::Ip, "192.168.1.42/32"),
            ],
            DEFAULT_CACHE_EVICTION,
        );
        let (profile, _) = registry.resolve("192.168.1.42".parse().unwrap(), "");
        assert_eq!(profile.name, "Exact");
    }

    #[test]
    fn user_agent_substring_matches_in_config_order() {
        let registry = ClientRegistry::new(
            vec![profile("Samsung TV", MatchType::UserAgent, "SEC_HHP")],
            DEFAULT_CACHE_EVICTION,
        );
        let (profile, _) = registry.resolve("10.0.0.5".parse().unwrap(), "SEC_HHP/1.0 UPnP/1.0");
        assert_eq!(profile.name, "Samsung TV");
    }

    #[test]
    fn falls_back_to_unknown() {
        let registry = ClientRegistry::new(Vec::new(), DEFAULT_CACHE_EVICTION);
        let (profile, _) = registry.resolve("10.0.0.5".parse().unwrap(), "whatever");
        assert_eq!(profile.name, "Unknown");
    }

    #[test]
    fn discovery_cache_resolves_without_user_agent() {
        let registry = ClientRegistry::new(vec![profile("Renderer", MatchType::None, "")], DEFAULT_CACHE_EVICTION);
        let addr = "10.0.0.9".parse().unwrap();
        registry.note_discovery(addr, "Renderer", "SomeRenderer/1.0");
        let (profile, observation) = registry.resolve(addr, "");
        assert_eq!(profile.name, "Renderer");
        assert_eq!(observation.ip, addr);
    }
}
