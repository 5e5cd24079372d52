//! Thread-safe in-memory [`CacheStore`] implementation for single-process deployments and tests.

// self
use crate::{
	_prelude::*,
	store::{CacheStore, StoreFuture},
};

type StoreMap = Arc<RwLock<HashMap<String, String>>>;

/// Storage backend that keeps entries in-process; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	/// Returns the number of stored entries.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when no entry has been stored yet.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	/// Returns a copy of the raw value stored under `key`.
	pub fn raw(&self, key: &str) -> Option<String> {
		self.0.read().get(key).cloned()
	}

	/// Writes a raw value, bypassing the async contract.
	pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
		self.0.write().insert(key.into(), value.into());
	}
}
impl CacheStore for MemoryStore {
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(map.read().get(key).cloned()) })
	}

	fn set<'a>(&'a self, key: &'a str, value: String) -> StoreFuture<'a, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			map.write().insert(key.to_owned(), value);

			Ok(())
		})
	}
}
