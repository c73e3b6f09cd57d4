//! Client address extraction from CGI-style server variables.

use memchr::memchr;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Server variables consulted, in priority order.
pub const CLIENT_IP_KEYS: [&str; 7] = [
    "HTTP_CLIENT_IP",
    "HTTP_X_FORWARDED_FOR",
    "HTTP_X_FORWARDED",
    "HTTP_X_CLUSTER_CLIENT_IP",
    "HTTP_FORWARDED_FOR",
    "HTTP_FORWARDED",
    "REMOTE_ADDR",
];

/// Returned when no variable carries an address.
pub const UNKNOWN_IP: &str = "0.0.0.0";

/// Read access to the server variables of the current request.
pub trait ServerVars {
    fn var(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> ServerVars for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ServerVars for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ServerVars for [(&str, &str)] {
    fn var(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

impl<const N: usize> ServerVars for [(&str, &str); N] {
    fn var(&self, key: &str) -> Option<&str> {
        self.as_slice().var(key)
    }
}

/// Best guess at the client address: the first entry of the first set
/// variable in [`CLIENT_IP_KEYS`], trimmed. The value is not validated.
///
/// A variable counts as unset when it is missing, empty or exactly `"0"`.
pub fn client_ip<V: ServerVars + ?Sized>(vars: &V) -> &str {
    for key in CLIENT_IP_KEYS {
        let Some(value) = vars.var(key).filter(|v| !v.is_empty() && *v != "0") else {
            continue;
        };
        let first = match memchr(b',', value.as_bytes()) {
            Some(i) => &value[..i],
            None => value,
        };
        return first.trim();
    }
    UNKNOWN_IP
}
