// File: crates/chart-core/src/registry.rs
// Summary: Handle minting and the handle -> resize watch registry of attached charts.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ParseHandleError;
use crate::host::ResizeWatch;

const PREFIX: &str = "petal-";

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier tying a host to its registry entry. Unique within the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    /// Mint a handle never returned before in this process.
    pub fn mint() -> Self {
        Handle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl FromStr for Handle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(PREFIX)
            .and_then(|n| n.parse().ok())
            .map(Handle)
            .ok_or(ParseHandleError)
    }
}

/// Active resize watches keyed by handle.
#[derive(Default)]
pub struct Registry {
    watches: HashMap<Handle, Box<dyn ResizeWatch>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, handle: Handle, watch: Box<dyn ResizeWatch>) {
        if let Some(mut old) = self.watches.insert(handle, watch) {
            old.disconnect();
        }
    }

    /// Disconnect and drop the watch for `handle`. Returns whether one was registered.
    pub fn release(&mut self, handle: Handle) -> bool {
        match self.watches.remove(&handle) {
            Some(mut watch) => {
                watch.disconnect();
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.watches.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        for (_, mut watch) in self.watches.drain() {
            watch.disconnect();
        }
    }
}
