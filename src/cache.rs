//! Read-through credential cache shared by access tokens and JS-API tickets.
//!
//! [`CredentialCache::acquire`] looks the scope key up in the injected [`CacheStore`],
//! returns the stored credential while it is still valid, and otherwise calls the supplied
//! fetch capability, writes the new credential back, and returns it. The component owns no
//! storage and is agnostic to what the fetch does.
//!
//! Concurrent callers are not coordinated by default. Callers that race on a cold or stale
//! slot each fetch independently, and the last write wins. [`CredentialCache::with_single_flight`]
//! opts into a per-scope-key async guard so that waiting callers re-read the cache instead of
//! fetching again.
//!
//! Store read failures and undecodable entries count as misses. A failed write after a
//! successful fetch is reported through `tracing`, and the fresh credential is still returned.
//! Fetch failures propagate unchanged, with no retry.

mod metrics;

pub use metrics::AcquireMetrics;

// self
use crate::{
	_prelude::*,
	auth::{Credential, CredentialKind, IssuedCredential, ScopeKey},
	obs::{self, AcquireOutcome, FlowSpan},
	store::CacheStore,
};

type FlightGuards = Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>;

/// Stateless orchestrator of the read-validate-refresh-write cycle over a [`CacheStore`].
#[derive(Clone)]
pub struct CredentialCache {
	/// Store that persists credential cache entries.
	pub store: Arc<dyn CacheStore>,
	/// Shared counters for acquisition outcomes.
	pub metrics: Arc<AcquireMetrics>,
	expiry_skew: Duration,
	single_flight: bool,
	flight_guards: FlightGuards,
}
impl CredentialCache {
	/// Creates a cache over the provided store with no expiry skew and no single-flight.
	pub fn new(store: Arc<dyn CacheStore>) -> Self {
		Self {
			store,
			metrics: Default::default(),
			expiry_skew: Duration::ZERO,
			single_flight: false,
			flight_guards: Default::default(),
		}
	}

	/// Treats credentials as stale once less than `skew` of their lifetime remains.
	pub fn with_expiry_skew(mut self, skew: Duration) -> Self {
		self.expiry_skew = if skew.is_negative() { Duration::ZERO } else { skew };

		self
	}

	/// De-duplicates concurrent refreshes of the same scope key.
	pub fn with_single_flight(mut self) -> Self {
		self.single_flight = true;

		self
	}

	/// Configured expiry skew.
	pub fn expiry_skew(&self) -> Duration {
		self.expiry_skew
	}

	/// Returns `true` when concurrent refreshes are de-duplicated.
	pub fn is_single_flight(&self) -> bool {
		self.single_flight
	}

	/// Returns a currently valid credential for `key`, calling `fetch` only on a miss.
	pub async fn acquire<F, Fut>(&self, key: &ScopeKey, fetch: F) -> Result<Credential>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<IssuedCredential>>,
	{
		self.acquire_at(key, OffsetDateTime::now_utc(), fetch).await
	}

	/// Same as [`CredentialCache::acquire`], evaluating freshness against `now`.
	pub async fn acquire_at<F, Fut>(
		&self,
		key: &ScopeKey,
		now: OffsetDateTime,
		fetch: F,
	) -> Result<Credential>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<IssuedCredential>>,
	{
		let kind = key.kind;
		let span = FlowSpan::new(kind, "acquire");

		obs::record_acquire_outcome(kind, AcquireOutcome::Attempt);
		self.metrics.record_attempt();

		let result = span.instrument(self.read_through(key, now, fetch)).await;
		let outcome = match &result {
			Ok((_, outcome)) => *outcome,
			Err(_) => AcquireOutcome::Failure,
		};

		match outcome {
			AcquireOutcome::CacheHit => self.metrics.record_hit(),
			AcquireOutcome::Refreshed => self.metrics.record_refresh(),
			_ => self.metrics.record_failure(),
		}

		obs::record_acquire_outcome(kind, outcome);

		result.map(|(credential, _)| credential)
	}

	async fn read_through<F, Fut>(
		&self,
		key: &ScopeKey,
		now: OffsetDateTime,
		fetch: F,
	) -> Result<(Credential, AcquireOutcome)>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = Result<IssuedCredential>>,
	{
		let cache_key = key.cache_key();

		if let Some(current) = self.lookup(&cache_key, key.kind, now).await {
			return Ok((current, AcquireOutcome::CacheHit));
		}

		let flight = self.single_flight.then(|| self.flight_guard(&cache_key));
		let _singleflight = match flight.as_ref() {
			Some(guard) => Some(guard.lock().await),
			None => None,
		};

		// Another caller may have refilled the slot while this one waited.
		let refilled = match &flight {
			Some(_) => self.lookup(&cache_key, key.kind, now).await,
			None => None,
		};

		if let Some(current) = refilled {
			return Ok((current, AcquireOutcome::CacheHit));
		}

		let issued = fetch().await?;
		let credential = Credential::from_issued(key.kind, issued, now)?;

		self.persist(&cache_key, &credential).await;
		obs::credential_resolved(&cache_key, "remote");

		Ok((credential, AcquireOutcome::Refreshed))
	}

	async fn lookup(
		&self,
		cache_key: &str,
		kind: CredentialKind,
		now: OffsetDateTime,
	) -> Option<Credential> {
		let raw = match <dyn CacheStore>::get(self.store.as_ref(), cache_key).await {
			Ok(raw) => raw?,
			Err(e) => {
				obs::cache_read_discarded(cache_key, &e);

				return None;
			},
		};

		match Credential::from_cache_entry(&raw, kind) {
			Ok(credential) if credential.is_valid_at(now, self.expiry_skew) => {
				obs::credential_resolved(cache_key, "cache");

				Some(credential)
			},
			Ok(_) => None,
			Err(e) => {
				obs::cache_read_discarded(cache_key, &e);

				None
			},
		}
	}

	async fn persist(&self, cache_key: &str, credential: &Credential) {
		let written = match credential.to_cache_entry() {
			Ok(entry) => <dyn CacheStore>::set(self.store.as_ref(), cache_key, entry).await,
			Err(e) => Err(e),
		};

		if let Err(e) = written {
			obs::cache_write_failed(cache_key, &e);
		}
	}

	fn flight_guard(&self, cache_key: &str) -> Arc<AsyncMutex<()>> {
		let mut guards = self.flight_guards.lock();

		guards.entry(cache_key.to_owned()).or_insert_with(|| Arc::new(AsyncMutex::new(()))).clone()
	}
}
impl Debug for CredentialCache {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialCache")
			.field("expiry_skew", &self.expiry_skew)
			.field("single_flight", &self.single_flight)
			.field("metrics", &self.metrics)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::{
		auth::{AppId, TenantId},
		error::TransientError,
		store::{MemoryStore, StoreError, StoreFuture},
	};

	const T0: OffsetDateTime = macros::datetime!(2025-06-01 00:00 UTC);

	struct ReadOnlyStore(MemoryStore);
	impl CacheStore for ReadOnlyStore {
		fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
			self.0.get(key)
		}

		fn set<'a>(&'a self, _key: &'a str, _value: String) -> StoreFuture<'a, ()> {
			Box::pin(async { Err(StoreError::Backend { message: "read-only replica".into() }) })
		}
	}

	fn key(kind: CredentialKind) -> ScopeKey {
		ScopeKey::new(
			AppId::new("wx-app").expect("App fixture should be valid."),
			TenantId::new("ww-corp").expect("Tenant fixture should be valid."),
			kind,
		)
	}

	fn cache_over(store: &MemoryStore) -> CredentialCache {
		CredentialCache::new(Arc::new(store.clone()))
	}

	async fn counted_fetch(
		calls: &AtomicUsize,
		value: &str,
		expires_in: i64,
	) -> Result<IssuedCredential> {
		calls.fetch_add(1, Ordering::SeqCst);

		Ok(IssuedCredential::from_secs(value, expires_in))
	}

	#[tokio::test]
	async fn cold_cache_fetches_and_populates() {
		let store = MemoryStore::default();
		let cache = cache_over(&store);
		let key = key(CredentialKind::AccessToken);
		let calls = AtomicUsize::new(0);
		let credential = cache
			.acquire_at(&key, T0, || counted_fetch(&calls, "tok-123", 7200))
			.await
			.expect("Cold acquisition should succeed.");

		assert_eq!(credential.value.expose(), "tok-123");
		assert_eq!(credential.expires_at, T0 + Duration::seconds(7200));
		assert_eq!(calls.load(Ordering::SeqCst), 1);

		let stored = store.raw(&key.cache_key()).expect("Cache should hold the fresh entry.");
		let decoded = Credential::from_cache_entry(&stored, CredentialKind::AccessToken)
			.expect("Stored entry should decode.");

		assert_eq!(decoded, credential);
	}

	#[tokio::test]
	async fn warm_cache_skips_fetch() {
		let store = MemoryStore::default();
		let cache = cache_over(&store);
		let key = key(CredentialKind::CorpJsApiTicket);
		let calls = AtomicUsize::new(0);
		let first = cache
			.acquire_at(&key, T0, || counted_fetch(&calls, "ticket-a", 7200))
			.await
			.expect("First acquisition should succeed.");
		let second = cache
			.acquire_at(&key, T0 + Duration::hours(1), || counted_fetch(&calls, "ticket-b", 7200))
			.await
			.expect("Second acquisition should succeed.");

		assert_eq!(first, second);
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(cache.metrics.hits(), 1);
		assert_eq!(cache.metrics.refreshes(), 1);
		assert_eq!(cache.metrics.attempts(), 2);
	}

	#[tokio::test]
	async fn expired_entry_is_refetched_and_overwritten() {
		let store = MemoryStore::default();
		let cache = cache_over(&store);
		let key = key(CredentialKind::AccessToken);
		let calls = AtomicUsize::new(0);

		cache
			.acquire_at(&key, T0, || counted_fetch(&calls, "short-lived", 10))
			.await
			.expect("Seeding acquisition should succeed.");

		let later = T0 + Duration::seconds(20);
		let refreshed = cache
			.acquire_at(&key, later, || counted_fetch(&calls, "renewed", 7200))
			.await
			.expect("Refresh acquisition should succeed.");

		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert_eq!(refreshed.value.expose(), "renewed");
		assert_eq!(refreshed.expires_at, later + Duration::seconds(7200));

		let stored = store.raw(&key.cache_key()).expect("Cache should hold the renewed entry.");

		assert!(stored.contains("renewed"));
	}

	#[tokio::test]
	async fn malformed_entry_is_treated_as_miss_and_repaired() {
		let store = MemoryStore::default();
		let cache = cache_over(&store);
		let key = key(CredentialKind::AgentJsApiTicket);
		let calls = AtomicUsize::new(0);

		store.insert_raw(key.cache_key(), "{\"ticket\":");

		let credential = cache
			.acquire_at(&key, T0, || counted_fetch(&calls, "agent-ticket", 7200))
			.await
			.expect("Corrupt entries must not fail the acquisition.");

		assert_eq!(calls.load(Ordering::SeqCst), 1);

		let repaired = store.raw(&key.cache_key()).expect("Cache should be repaired.");

		assert_eq!(
			Credential::from_cache_entry(&repaired, CredentialKind::AgentJsApiTicket)
				.expect("Repaired entry should decode."),
			credential
		);
	}

	#[tokio::test]
	async fn skew_refreshes_early() {
		let store = MemoryStore::default();
		let cache = cache_over(&store).with_expiry_skew(Duration::seconds(60));
		let key = key(CredentialKind::AccessToken);
		let calls = AtomicUsize::new(0);

		cache
			.acquire_at(&key, T0, || counted_fetch(&calls, "tok", 7200))
			.await
			.expect("Seeding acquisition should succeed.");
		cache
			.acquire_at(&key, T0 + Duration::seconds(7150), || counted_fetch(&calls, "tok-2", 7200))
			.await
			.expect("Early refresh should succeed.");

		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert_eq!(
			CredentialCache::new(Arc::new(MemoryStore::default()))
				.with_expiry_skew(Duration::seconds(-5))
				.expiry_skew(),
			Duration::ZERO
		);
	}

	#[tokio::test]
	async fn fetch_failure_propagates_without_writing() {
		let store = MemoryStore::default();
		let cache = cache_over(&store);
		let key = key(CredentialKind::AccessToken);
		let err = cache
			.acquire_at(&key, T0, || async {
				Err::<IssuedCredential, _>(Error::from(TransientError::Endpoint {
					message: "bad gateway".into(),
					status: Some(502),
					retry_after: None,
				}))
			})
			.await
			.expect_err("Fetch failures must surface.");

		assert!(matches!(err, Error::Transient(TransientError::Endpoint { status: Some(502), .. })));
		assert!(store.is_empty());
		assert_eq!(cache.metrics.failures(), 1);
	}

	#[tokio::test]
	async fn write_failure_still_returns_credential() {
		let cache = CredentialCache::new(Arc::new(ReadOnlyStore(MemoryStore::default())));
		let key = key(CredentialKind::AccessToken);
		let calls = AtomicUsize::new(0);
		let credential = cache
			.acquire_at(&key, T0, || counted_fetch(&calls, "tok-unpersisted", 7200))
			.await
			.expect("Write failures must not fail the acquisition.");

		assert_eq!(credential.value.expose(), "tok-unpersisted");
		assert_eq!(cache.metrics.refreshes(), 1);
	}

	#[tokio::test]
	async fn non_positive_lifetime_is_rejected() {
		let store = MemoryStore::default();
		let cache = cache_over(&store);
		let key = key(CredentialKind::AccessToken);
		let calls = AtomicUsize::new(0);
		let err = cache
			.acquire_at(&key, T0, || counted_fetch(&calls, "tok", 0))
			.await
			.expect_err("Zero lifetimes must be rejected.");

		assert!(matches!(err, Error::Config(crate::error::ConfigError::NonPositiveExpiresIn)));
		assert!(store.is_empty());
	}

	async fn race(cache: CredentialCache, callers: usize) -> usize {
		let calls = Arc::new(AtomicUsize::new(0));
		let key = key(CredentialKind::AccessToken);
		let mut handles = Vec::with_capacity(callers);

		for _ in 0..callers {
			let cache = cache.clone();
			let calls = calls.clone();
			let key = key.clone();

			handles.push(tokio::spawn(async move {
				cache
					.acquire_at(&key, T0, || async move {
						calls.fetch_add(1, Ordering::SeqCst);
						tokio::time::sleep(std::time::Duration::from_millis(20)).await;

						Ok(IssuedCredential::from_secs("raced", 7200))
					})
					.await
			}));
		}
		for handle in handles {
			handle
				.await
				.expect("Acquisition task should not panic.")
				.expect("Concurrent acquisition should succeed.");
		}

		calls.load(Ordering::SeqCst)
	}

	#[tokio::test]
	async fn concurrent_cold_callers_each_fetch() {
		let cache = CredentialCache::new(Arc::new(MemoryStore::default()));

		assert_eq!(race(cache, 8).await, 8);
	}

	#[tokio::test]
	async fn single_flight_collapses_concurrent_fetches() {
		let cache = CredentialCache::new(Arc::new(MemoryStore::default())).with_single_flight();

		assert_eq!(race(cache.clone(), 8).await, 1);
		assert_eq!(cache.metrics.hits(), 7);
	}
}
