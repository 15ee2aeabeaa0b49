//! Bookkeeping for remote peers that have interacted with this process.

use anyhow::{bail, Result};
use std::collections::HashMap;
use std::time::SystemTime;

/// A remote peer, unique by port. `last_seen` is bookkeeping only and is
/// never used to evict entries.
#[derive(Debug, Clone)]
pub struct Client {
    pub port: u16,
    pub last_seen: SystemTime,
}

/// Tracks registered clients plus a pointer to the most recently registered
/// one. Mutated only from the orchestration thread.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    clients: HashMap<u16, Client>,
    current: Option<u16>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a client entry and make it the current client.
    pub fn register(&mut self, port: u16) {
        self.clients.insert(
            port,
            Client {
                port,
                last_seen: SystemTime::now(),
            },
        );
        self.current = Some(port);
    }

    /// Remove a client entry. Fails when the port was never registered.
    ///
    /// The current-client pointer tracks the most recent registration, not
    /// liveness: deregistering the current client leaves it in place.
    pub fn deregister(&mut self, port: u16) -> Result<Client> {
        match self.clients.remove(&port) {
            Some(client) => Ok(client),
            None => bail!("no client registered on port {port}"),
        }
    }

    pub fn current_client(&self) -> Option<u16> {
        self.current
    }

    pub fn contains(&self, port: u16) -> bool {
        self.clients.contains_key(&port)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
