use crate::domain::model::Voyage;

/// Cached voyage list. Mutations never patch entries in place: a successful
/// create or delete marks the cache stale, and the next read refetches from
/// the remote service. Stale entries remain readable until replaced.
#[derive(Debug, Default)]
pub struct VoyageCache {
    entries: Vec<Voyage>,
    stale: bool,
}

impl VoyageCache {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            stale: true,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Replaces the cached list with a fresh remote response.
    pub fn store(&mut self, entries: Vec<Voyage>) {
        self.entries = entries;
        self.stale = false;
    }

    pub fn entries(&self) -> &[Voyage] {
        &self.entries
    }
}
