//! Summary records in IndexedDB.
//!
//! Database `tldrify` (version 1) holds one object store, `summaries`,
//! keyed by `id` with non-unique `createdAt` and `updatedAt` indexes.
//! Records cross the JS boundary as JSON so their shape is exactly the
//! serde representation of [`SummaryRecord`].
//!
//! Each request is awaited by handing the request's `onsuccess` /
//! `onerror` slots the resolve/reject functions of a JS `Promise`.

use std::cell::RefCell;

use dioxus::logger::tracing;
use tldrify_summary::{SummaryRecord, order_by_recency};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    IdbDatabase, IdbObjectStore, IdbObjectStoreParameters, IdbOpenDbRequest, IdbRequest,
    IdbTransactionMode,
};

const DB_NAME: &str = "tldrify";
const DB_VERSION: u32 = 1;
const STORE: &str = "summaries";
const KEY_PATH: &str = "id";
const INDEX_CREATED_AT: &str = "createdAt";
const INDEX_UPDATED_AT: &str = "updatedAt";

thread_local! {
    static DATABASE: RefCell<Option<IdbDatabase>> = const { RefCell::new(None) };
}

/// Errors from the summary store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IndexedDB is not available in this browser context.
    #[error("IndexedDB is unavailable")]
    Unavailable,

    /// A stored value could not be converted to or from a record.
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Insert or replace `record`.
///
/// # Errors
///
/// Returns a [`StoreError`] if the database cannot be opened or the
/// write fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn put_summary(record: &SummaryRecord) -> Result<(), StoreError> {
    let value = to_js(record)?;
    let store = object_store(IdbTransactionMode::Readwrite).await?;
    settle(&store.put(&value)?).await?;
    tracing::debug!(id = %record.id, "summary stored");
    Ok(())
}

/// Fetch the record with `id`, if present.
///
/// # Errors
///
/// Returns a [`StoreError`] if the read fails or the stored value is
/// not a valid record.
#[allow(clippy::future_not_send)]
pub async fn get_summary(id: &str) -> Result<Option<SummaryRecord>, StoreError> {
    let store = object_store(IdbTransactionMode::Readonly).await?;
    let value = settle(&store.get(&JsValue::from_str(id))?).await?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    from_js(&value).map(Some)
}

/// Delete the record with `id`. Deleting a missing id succeeds.
///
/// # Errors
///
/// Returns a [`StoreError`] if the delete fails.
#[allow(clippy::future_not_send)]
pub async fn delete_summary(id: &str) -> Result<(), StoreError> {
    let store = object_store(IdbTransactionMode::Readwrite).await?;
    settle(&store.delete(&JsValue::from_str(id))?).await?;
    tracing::debug!(id, "summary deleted");
    Ok(())
}

/// Every record, most recently updated first.
///
/// Values that fail to parse are skipped and logged rather than
/// hiding the rest of the history.
///
/// # Errors
///
/// Returns a [`StoreError`] if the read fails.
#[allow(clippy::future_not_send)]
pub async fn list_summaries() -> Result<Vec<SummaryRecord>, StoreError> {
    let store = object_store(IdbTransactionMode::Readonly).await?;
    let index = store.index(INDEX_UPDATED_AT)?;
    let values: js_sys::Array = settle(&index.get_all()?).await?.unchecked_into();

    let mut records: Vec<SummaryRecord> = values
        .iter()
        .filter_map(|value| {
            from_js(&value)
                .inspect_err(|e| tracing::warn!("skipping stored summary: {e}"))
                .ok()
        })
        .collect();
    order_by_recency(&mut records);
    Ok(records)
}

/// Await an IndexedDB request and return its result.
#[allow(clippy::future_not_send)]
async fn settle(request: &IdbRequest) -> Result<JsValue, StoreError> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        request.set_onsuccess(Some(&resolve));
        request.set_onerror(Some(&reject));
    });
    let outcome = JsFuture::from(promise).await;
    request.set_onsuccess(None);
    request.set_onerror(None);
    outcome?;
    Ok(request.result()?)
}

#[allow(clippy::future_not_send)]
async fn object_store(mode: IdbTransactionMode) -> Result<IdbObjectStore, StoreError> {
    let db = database().await?;
    let tx = db.transaction_with_str_and_mode(STORE, mode)?;
    Ok(tx.object_store(STORE)?)
}

/// The open database, opening (and upgrading) it on first use.
#[allow(clippy::future_not_send)]
async fn database() -> Result<IdbDatabase, StoreError> {
    if let Some(db) = DATABASE.with_borrow(Clone::clone) {
        return Ok(db);
    }

    let factory = web_sys::window()
        .and_then(|w| w.indexed_db().ok().flatten())
        .ok_or(StoreError::Unavailable)?;
    let request = factory.open_with_u32(DB_NAME, DB_VERSION)?;

    let upgrade_request = request.clone();
    let on_upgrade = Closure::<dyn FnMut(web_sys::IdbVersionChangeEvent)>::new(move |_| {
        if let Err(e) = create_schema(&upgrade_request) {
            tracing::error!("summary store upgrade failed: {e}");
        }
    });
    request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

    let opened = settle(&request).await;
    request.set_onupgradeneeded(None);
    drop(on_upgrade);

    let db: IdbDatabase = opened?.unchecked_into();
    DATABASE.with_borrow_mut(|slot| *slot = Some(db.clone()));
    tracing::info!(name = DB_NAME, version = DB_VERSION, "summary store opened");
    Ok(db)
}

fn create_schema(request: &IdbOpenDbRequest) -> Result<(), StoreError> {
    let db: IdbDatabase = request.result()?.unchecked_into();
    if db.object_store_names().contains(STORE) {
        return Ok(());
    }

    let params = IdbObjectStoreParameters::new();
    params.set_key_path(&JsValue::from_str(KEY_PATH));
    let store = db.create_object_store_with_optional_parameters(STORE, &params)?;
    store.create_index_with_str(INDEX_CREATED_AT, INDEX_CREATED_AT)?;
    store.create_index_with_str(INDEX_UPDATED_AT, INDEX_UPDATED_AT)?;
    Ok(())
}

fn to_js(record: &SummaryRecord) -> Result<JsValue, StoreError> {
    let json = serde_json::to_string(record)?;
    Ok(js_sys::JSON::parse(&json)?)
}

fn from_js(value: &JsValue) -> Result<SummaryRecord, StoreError> {
    let json = String::from(js_sys::JSON::stringify(value)?);
    Ok(serde_json::from_str(&json)?)
}
