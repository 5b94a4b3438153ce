//! Featured-fields panel: drag-reorderable field list whose priority
//! order is persisted to a remote endpoint.
//!
//! Reorders apply optimistically: the local array moves first, then
//! the new ranks are POSTed. A successful POST triggers a refresh of
//! the authoritative field list, which reconciles any divergence; a
//! failed POST leaves the optimistic order in place and is only
//! logged, since the next successful persist or refresh re-converges.

use indexmap::IndexMap;
use relay_ui_core::{ItemId, Size};
use relay_ui_input::PointerEvent;
use relay_ui_widgets::{SortEvent, SortEvents, SortableItem, SortableList, Swap};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// One field record as held by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Stable field identifier.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Priority rank; higher ranks sort earlier in the panel.
    #[serde(default)]
    pub priority: u32,
}

impl Field {
    /// Creates a field record.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, priority: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            priority,
        }
    }
}

/// Errors from priority persistence.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Transport-level failure.
    #[error("priority request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("priority endpoint returned {status}")]
    Status {
        /// The HTTP status code.
        status: reqwest::StatusCode,
    },
}

/// HTTP client for the priority and field-list endpoints.
#[derive(Debug, Clone)]
pub struct PriorityClient {
    http: reqwest::Client,
    priority_url: String,
    fields_url: String,
}

impl PriorityClient {
    /// Creates a client for the two configured endpoints.
    #[must_use]
    pub fn new(priority_url: impl Into<String>, fields_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            priority_url: priority_url.into(),
            fields_url: fields_url.into(),
        }
    }

    /// POSTs an `id -> rank` object to the priority endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] on transport failure or a non-success
    /// status.
    pub async fn persist_order(&self, ranks: &IndexMap<String, u32>) -> Result<(), PersistError> {
        let response = self.http.post(&self.priority_url).json(ranks).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PersistError::Status { status });
        }
        debug!(endpoint = %self.priority_url, ranks = ranks.len(), "persisted field priorities");
        Ok(())
    }

    /// Fetches the authoritative field list.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] on transport failure, a non-success
    /// status, or an unparseable body.
    pub async fn fetch_fields(&self) -> Result<Vec<Field>, PersistError> {
        let response = self.http.get(&self.fields_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PersistError::Status { status });
        }
        Ok(response.json().await?)
    }
}

const ROW_SIZE: Size = Size::new(32, 3);

/// The featured-fields panel: a drag-reorderable list of [`Field`]s
/// whose order maps to server-side priority ranks.
pub struct FieldManager {
    fields: Vec<Field>,
    list: SortableList,
    client: PriorityClient,
}

impl fmt::Debug for FieldManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldManager")
            .field("fields", &self.fields.len())
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl FieldManager {
    /// Creates an empty panel talking to the given endpoints.
    #[must_use]
    pub fn new(client: PriorityClient) -> Self {
        Self {
            fields: Vec::new(),
            list: SortableList::builder().gap(1).build(),
            client,
        }
    }

    /// Replaces the panel's fields, ordered by descending priority,
    /// and rebuilds the sortable rows.
    pub fn set_fields(&mut self, mut fields: Vec<Field>) {
        fields.sort_by(|a, b| b.priority.cmp(&a.priority));
        self.fields = fields;
        self.rebuild_rows();
    }

    /// The fields in their current visual order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The sortable list hosting the rows.
    #[must_use]
    pub fn list(&self) -> &SortableList {
        &self.list
    }

    /// Feeds a pointer event through the sortable list and mirrors any
    /// committed swap into the field array. Persistence is a separate,
    /// asynchronous step; call [`persist_priorities`] after a swap.
    ///
    /// [`persist_priorities`]: FieldManager::persist_priorities
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> SortEvents {
        let events = self.list.handle_pointer(event);
        for event in &events {
            if let SortEvent::OrderChanged { swap } = event {
                self.apply_swap(*swap);
            }
        }
        events
    }

    /// Applies a committed swap to the field array.
    pub fn apply_swap(&mut self, swap: Swap) {
        if swap.from < self.fields.len() && swap.to < self.fields.len() {
            let field = self.fields.remove(swap.from);
            self.fields.insert(swap.to, field);
        }
    }

    /// The persistence payload: the current visual order read back
    /// from the list, reversed and enumerated, so the first visible
    /// field carries the highest rank.
    #[must_use]
    pub fn rank_payload(&self) -> IndexMap<String, u32> {
        let mut ids = self.list.get_ids();
        ids.reverse();
        ids.into_iter()
            .enumerate()
            .map(|(rank, id)| (id.to_string(), rank as u32))
            .collect()
    }

    /// Persists the current order and, on success, refreshes the
    /// authoritative field list. On failure the optimistic local order
    /// is kept and the error is returned after being logged.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when the POST or the follow-up refresh
    /// fails.
    pub async fn persist_priorities(&mut self) -> Result<(), PersistError> {
        let payload = self.rank_payload();
        if let Err(error) = self.client.persist_order(&payload).await {
            warn!(%error, "field priority persist failed, keeping optimistic order");
            return Err(error);
        }
        let fields = self.client.fetch_fields().await?;
        self.set_fields(fields);
        Ok(())
    }

    fn rebuild_rows(&mut self) {
        while !self.list.is_empty() {
            let last = self.list.len() - 1;
            let _ = self.list.remove_item(last);
        }
        for field in &self.fields {
            self.list
                .push_item(SortableItem::new(ItemId::from(field.id.as_str()), ROW_SIZE));
        }
    }
}
