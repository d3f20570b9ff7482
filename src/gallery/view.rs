//! Root view state: the form, one query per fetch mode and the derived list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::display::DisplayMemo;
use super::query::QueryState;
use crate::api::nft::{CollectionPage, Nft, NftSource};
use crate::core::errors::GalleryError;

/// User-editable inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    pub wallet: String,
    pub collection: String,
    pub fetch_for_collection: bool,
    pub filter_by_floor_price: bool,
    /// Collection pagination token used by the next collection fetch.
    pub page_key: Option<String>,
}

/// What a trigger resolved to, captured from the form at trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    Wallet(String),
    Collection { address: String, page_key: Option<String> },
}

#[derive(Debug, Default)]
pub struct Gallery {
    form: FormState,
    wallet_query: QueryState<Vec<Nft>>,
    collection_query: QueryState<CollectionPage>,
    /// Address the stored collection page was fetched for.
    collection_page_address: Option<String>,
    memo: DisplayMemo,
}

pub type SharedGallery = Arc<Mutex<Gallery>>;

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedGallery {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_wallet(&mut self, wallet: impl Into<String>) {
        self.form.wallet = wallet.into();
    }

    pub fn set_collection(&mut self, collection: impl Into<String>) {
        self.form.collection = collection.into();
    }

    pub fn set_fetch_for_collection(&mut self, on: bool) {
        self.form.fetch_for_collection = on;
    }

    pub fn set_filter_by_floor_price(&mut self, on: bool) {
        self.form.filter_by_floor_price = on;
    }

    pub fn set_page_key(&mut self, page_key: Option<String>) {
        self.form.page_key = page_key.filter(|k| !k.is_empty());
    }

    pub fn wallet_query(&self) -> &QueryState<Vec<Nft>> {
        &self.wallet_query
    }

    pub fn collection_query(&self) -> &QueryState<CollectionPage> {
        &self.collection_query
    }

    /// Starts a fetch for the active mode and returns what to fetch, or `None`
    /// if that mode already has a request in flight.
    pub fn begin_fetch(&mut self) -> Option<FetchTarget> {
        if self.form.fetch_for_collection {
            if !self.collection_query.begin() {
                warn!("Collection fetch already in flight, ignoring trigger");
                return None;
            }
            Some(FetchTarget::Collection {
                address: self.form.collection.clone(),
                page_key: self.current_page_key(self.form.page_key.as_deref()).map(str::to_string),
            })
        } else {
            if !self.wallet_query.begin() {
                warn!("Wallet fetch already in flight, ignoring trigger");
                return None;
            }
            Some(FetchTarget::Wallet(self.form.wallet.clone()))
        }
    }

    pub fn complete_wallet(&mut self, result: Result<Vec<Nft>, GalleryError>) {
        self.wallet_query.complete(result);
    }

    pub fn complete_collection(
        &mut self,
        address: &str,
        result: Result<CollectionPage, GalleryError>,
    ) {
        self.collection_page_address = result.as_ref().ok().map(|_| address.to_string());
        self.collection_query.complete(result);
    }

    /// `page_key` if the stored page belongs to the collection now in the form.
    /// A token from another contract's listing is discarded.
    fn current_page_key<'a>(&self, page_key: Option<&'a str>) -> Option<&'a str> {
        let key = page_key?;
        if self.collection_page_address.as_deref() == Some(self.form.collection.as_str()) {
            Some(key)
        } else {
            debug!("Dropping page key {}, collection changed to {}", key, self.form.collection);
            None
        }
    }

    pub fn active_loading(&self) -> bool {
        if self.form.fetch_for_collection {
            self.collection_query.loading
        } else {
            self.wallet_query.loading
        }
    }

    pub fn active_error(&self) -> Option<&str> {
        if self.form.fetch_for_collection {
            self.collection_query.error.as_deref()
        } else {
            self.wallet_query.error.as_deref()
        }
    }

    /// Pagination token of the current collection page, when in collection mode.
    pub fn next_page_key(&self) -> Option<&str> {
        if !self.form.fetch_for_collection {
            return None;
        }
        let token = self.collection_query.data.as_ref().and_then(|page| page.next_token.as_deref());
        self.current_page_key(token)
    }

    /// The list the grid shows, recomputed only when the mode, the filter
    /// toggle or the active result changed.
    pub fn displayed(&mut self) -> Option<Arc<Vec<Nft>>> {
        let for_collection = self.form.fetch_for_collection;
        let (generation, list) = if for_collection {
            (
                self.collection_query.generation,
                self.collection_query.data.as_ref().map(|page| page.nfts.as_slice()),
            )
        } else {
            (self.wallet_query.generation, self.wallet_query.data.as_deref())
        };
        self.memo
            .get_or_compute(for_collection, self.form.filter_by_floor_price, generation, list)
    }

    pub fn memo_computations(&self) -> u64 {
        self.memo.computations()
    }
}

/// Runs `target` against `source`; the caller stores the result.
async fn run_target(source: &dyn NftSource, target: &FetchTarget) -> FetchOutcome {
    match target {
        FetchTarget::Wallet(wallet) => {
            info!("Fetching NFTs for wallet {}", wallet);
            FetchOutcome::Wallet(source.fetch_nfts(wallet).await)
        }
        FetchTarget::Collection { address, page_key } => {
            info!("Fetching NFTs for collection {} (page key: {:?})", address, page_key);
            let result = source.fetch_nfts_for_collection(address, page_key.as_deref()).await;
            FetchOutcome::Collection(address.clone(), result)
        }
    }
}

enum FetchOutcome {
    Wallet(Result<Vec<Nft>, GalleryError>),
    Collection(String, Result<CollectionPage, GalleryError>),
}

impl FetchOutcome {
    fn failed(target: &FetchTarget, err: GalleryError) -> Self {
        match target {
            FetchTarget::Wallet(_) => FetchOutcome::Wallet(Err(err)),
            FetchTarget::Collection { address, .. } => FetchOutcome::Collection(address.clone(), Err(err)),
        }
    }
}

impl Gallery {
    fn store(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Wallet(result) => {
                if let Err(e) = &result {
                    warn!("Wallet fetch failed: {}", e);
                }
                self.complete_wallet(result);
            }
            FetchOutcome::Collection(address, result) => {
                if let Err(e) = &result {
                    warn!("Collection fetch failed: {}", e);
                }
                self.complete_collection(&address, result);
            }
        }
    }

    /// Trigger and await a fetch on an exclusively owned view.
    #[cfg(test)]
    pub async fn trigger(&mut self, source: &dyn NftSource) -> Option<FetchTarget> {
        let target = self.begin_fetch()?;
        let outcome = run_target(source, &target).await;
        self.store(outcome);
        Some(target)
    }
}

/// Trigger a fetch on a shared view and wait for it.
///
/// The request runs on its own task that also stores the result, so the query
/// always leaves the loading state even if the caller is dropped mid-flight.
/// The lock is not held while the request is in flight.
pub async fn trigger_shared(gallery: &SharedGallery, source: Arc<dyn NftSource>) -> Option<FetchTarget> {
    let target = gallery.lock().await.begin_fetch()?;

    let task = {
        let gallery = Arc::clone(gallery);
        let target = target.clone();
        tokio::spawn(async move {
            let outcome = run_target(source.as_ref(), &target).await;
            gallery.lock().await.store(outcome);
        })
    };

    if let Err(e) = task.await {
        error!("Fetch task for {:?} did not finish: {}", target, e);
        gallery
            .lock()
            .await
            .store(FetchOutcome::failed(&target, GalleryError::Network(format!("fetch aborted: {}", e))));
    }
    Some(target)
}
