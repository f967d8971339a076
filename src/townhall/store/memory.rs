use super::{check_key, BlobStore};
use crate::error::{Result, TownhallError};
use std::collections::HashMap;

/// In-memory blob store for testing.
#[derive(Default)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, for exercising error paths.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(TownhallError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl BlobStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.check_write()?;
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        self.check_write()?;
        self.blobs.remove(key);
        Ok(())
    }
}
