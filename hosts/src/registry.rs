//! Host registry for front-end discovery.
//!
//! Each host self-registers via [`inventory::submit!`] with a [`HostEntry`]
//! containing its CLI name and a factory function. The front-end discovers
//! available hosts at runtime without any central list.

use abacus_core::host::Host;

/// Describes a selectable host.
pub struct HostEntry {
    /// CLI name used to select this host (e.g., "console").
    pub name: &'static str,
    /// Factory: construct the host wired to its real I/O endpoints.
    pub create: fn() -> Box<dyn Host>,
}

impl HostEntry {
    pub const fn new(name: &'static str, create: fn() -> Box<dyn Host>) -> Self {
        Self { name, create }
    }
}

inventory::collect!(HostEntry);

/// Return all registered hosts, sorted by name.
pub fn all() -> Vec<&'static HostEntry> {
    let mut entries: Vec<_> = inventory::iter::<HostEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a host by its CLI name.
pub fn find(name: &str) -> Option<&'static HostEntry> {
    inventory::iter::<HostEntry>
        .into_iter()
        .find(|e| e.name == name)
}
