//! Create-or-update by key with partial-field merge.
//!
//! Every upserting resource (medical histories, food preferences, meal plans,
//! food combinations) goes through [`upsert`]: validate the patch, run the
//! caller's guard, look the row up by key, then either build a new row from the
//! patch or merge the patch into the existing one.
//!
//! Merging is truthiness based: a field is only overwritten when the patch
//! carries a non-empty string, a non-zero number or `true`. An empty or zero
//! value therefore cannot clear a stored field. Clients of the API rely on this,
//! so [`merge`] and [`merge_optional`] are the single place to change it.

use std::{fmt::Display, future::Future};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::common::entities::app_errors::CoreError;

/// Values that count as "set" when merged into an existing row.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for DateTime<Utc> {
    fn is_truthy(&self) -> bool {
        true
    }
}

pub fn is_present<T: Truthy>(value: &Option<T>) -> bool {
    value.as_ref().is_some_and(Truthy::is_truthy)
}

/// Overwrites `slot` when `incoming` is present and truthy.
pub fn merge<T: Truthy>(slot: &mut T, incoming: Option<T>) {
    if let Some(value) = incoming
        && value.is_truthy()
    {
        *slot = value;
    }
}

/// Same as [`merge`] for nullable columns.
pub fn merge_optional<T: Truthy>(slot: &mut Option<T>, incoming: Option<T>) {
    if let Some(value) = incoming
        && value.is_truthy()
    {
        *slot = Some(value);
    }
}

/// Fails with [`CoreError::Validation`] when any named field is not present.
pub fn require_fields(fields: &[(&'static str, bool)]) -> Result<(), CoreError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        debug!(?missing, "rejecting input with missing fields");
        Err(CoreError::missing_fields())
    }
}

/// An entity that can be written through [`upsert`].
pub trait Upsertable: Sized + Send + Sync {
    type Key: Clone + Display + Send + Sync;
    type Patch: Send + Sync;

    /// Entity name used in logs.
    const NAME: &'static str;

    /// Required fields of the patch, paired with whether each one is present.
    fn required(patch: &Self::Patch) -> Vec<(&'static str, bool)>;

    fn validate(patch: &Self::Patch) -> Result<(), CoreError> {
        require_fields(&Self::required(patch))
    }

    /// Builds a new row. Only called with a patch that passed [`Upsertable::validate`].
    fn create(key: Self::Key, patch: Self::Patch) -> Self;

    fn merge(&mut self, patch: Self::Patch);
}

/// The three store operations [`upsert`] needs.
pub trait UpsertStore<E: Upsertable>: Send + Sync {
    fn find_by_key(
        &self,
        key: &E::Key,
    ) -> impl Future<Output = Result<Option<E>, CoreError>> + Send;

    fn insert(&self, entity: E) -> impl Future<Output = Result<E, CoreError>> + Send;

    fn save(&self, entity: E) -> impl Future<Output = Result<E, CoreError>> + Send;
}

/// Borrows a resource repository as an [`UpsertStore`].
///
/// Each upserting resource implements `UpsertStore<Entity>` for
/// `RepositoryStore<'_, R>` where `R` is its repository port.
pub struct RepositoryStore<'a, R>(pub &'a R);

#[derive(Debug, Clone, PartialEq)]
pub enum Upserted<T> {
    Created(T),
    Updated(T),
}

impl<T> Upserted<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Upserted::Created(value) | Upserted::Updated(value) => value,
        }
    }
}

/// Validates `patch`, awaits `guard`, then creates or merges the row stored under `key`.
///
/// `guard` is only polled once validation passed, so a parent-existence check
/// passed as a plain future never hits the store for invalid input.
/// Two concurrent calls on an absent key can both reach the insert; the store
/// rejects the second one with [`CoreError::DuplicateKey`].
pub async fn upsert<E, S, G>(
    store: &S,
    key: E::Key,
    patch: E::Patch,
    guard: G,
) -> Result<Upserted<E>, CoreError>
where
    E: Upsertable,
    S: UpsertStore<E>,
    G: Future<Output = Result<(), CoreError>> + Send,
{
    E::validate(&patch)?;
    guard.await?;

    match store.find_by_key(&key).await? {
        None => {
            let created = store.insert(E::create(key.clone(), patch)).await?;
            info!(entity = E::NAME, %key, "created on upsert");
            Ok(Upserted::Created(created))
        }
        Some(mut existing) => {
            existing.merge(patch);
            let saved = store.save(existing).await?;
            debug!(entity = E::NAME, %key, "updated on upsert");
            Ok(Upserted::Updated(saved))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::ready;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        title: String,
        body: Option<String>,
        stars: i32,
        pinned: bool,
    }

    #[derive(Default)]
    struct NotePatch {
        title: Option<String>,
        body: Option<String>,
        stars: Option<i32>,
        pinned: Option<bool>,
    }

    impl Upsertable for Note {
        type Key = String;
        type Patch = NotePatch;

        const NAME: &'static str = "note";

        fn required(patch: &NotePatch) -> Vec<(&'static str, bool)> {
            vec![("title", is_present(&patch.title))]
        }

        fn create(key: String, patch: NotePatch) -> Self {
            Self {
                id: key,
                title: patch.title.unwrap_or_default(),
                body: patch.body,
                stars: patch.stars.unwrap_or_default(),
                pinned: patch.pinned.unwrap_or_default(),
            }
        }

        fn merge(&mut self, patch: NotePatch) {
            merge(&mut self.title, patch.title);
            merge_optional(&mut self.body, patch.body);
            merge(&mut self.stars, patch.stars);
            merge(&mut self.pinned, patch.pinned);
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<HashMap<String, Note>>,
        lookups: AtomicUsize,
        reject_inserts: bool,
    }

    impl MemoryStore {
        fn with(notes: Vec<Note>) -> Self {
            Self {
                rows: Mutex::new(notes.into_iter().map(|n| (n.id.clone(), n)).collect()),
                ..Default::default()
            }
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        fn get(&self, key: &str) -> Option<Note> {
            self.rows.lock().unwrap().get(key).cloned()
        }
    }

    impl UpsertStore<Note> for MemoryStore {
        async fn find_by_key(&self, key: &String) -> Result<Option<Note>, CoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.get(key))
        }

        async fn insert(&self, entity: Note) -> Result<Note, CoreError> {
            let mut rows = self.rows.lock().unwrap();
            if self.reject_inserts || rows.contains_key(&entity.id) {
                return Err(CoreError::DuplicateKey("notes_pkey".to_string()));
            }
            rows.insert(entity.id.clone(), entity.clone());
            Ok(entity)
        }

        async fn save(&self, entity: Note) -> Result<Note, CoreError> {
            self.rows
                .lock()
                .unwrap()
                .insert(entity.id.clone(), entity.clone());
            Ok(entity)
        }
    }

    fn stored_note() -> Note {
        Note {
            id: "n1".to_string(),
            title: "groceries".to_string(),
            body: Some("oats".to_string()),
            stars: 3,
            pinned: true,
        }
    }

    #[tokio::test]
    async fn creates_exactly_one_row_for_unknown_key() {
        let store = MemoryStore::default();

        let result = upsert(
            &store,
            "n1".to_string(),
            NotePatch {
                title: Some("groceries".to_string()),
                ..Default::default()
            },
            ready(Ok(())),
        )
        .await
        .unwrap();

        assert!(result.is_created());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("n1").unwrap().title, "groceries");
    }

    #[tokio::test]
    async fn updating_existing_key_keeps_row_count() {
        let store = MemoryStore::with(vec![stored_note()]);

        let result = upsert(
            &store,
            "n1".to_string(),
            NotePatch {
                title: Some("pantry".to_string()),
                body: Some("rice".to_string()),
                ..Default::default()
            },
            ready(Ok(())),
        )
        .await
        .unwrap();

        assert!(!result.is_created());
        assert_eq!(store.len(), 1);
        let note = result.into_inner();
        assert_eq!(note.title, "pantry");
        assert_eq!(note.body.as_deref(), Some("rice"));
        assert_eq!(note.stars, 3);
    }

    #[tokio::test]
    async fn falsy_values_leave_stored_fields_unchanged() {
        let store = MemoryStore::with(vec![stored_note()]);

        upsert(
            &store,
            "n1".to_string(),
            NotePatch {
                title: Some("groceries".to_string()),
                body: Some(String::new()),
                stars: Some(0),
                pinned: Some(false),
            },
            ready(Ok(())),
        )
        .await
        .unwrap();

        assert_eq!(store.get("n1").unwrap(), stored_note());
    }

    #[tokio::test]
    async fn missing_required_field_never_touches_the_store() {
        let store = MemoryStore::default();
        let guard_polled = AtomicUsize::new(0);

        let err = upsert(
            &store,
            "n1".to_string(),
            NotePatch {
                title: Some(String::new()),
                ..Default::default()
            },
            async {
                guard_polled.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err, CoreError::missing_fields());
        assert_eq!(guard_polled.load(Ordering::SeqCst), 0);
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn failing_guard_stops_before_lookup() {
        let store = MemoryStore::default();

        let err = upsert(
            &store,
            "n1".to_string(),
            NotePatch {
                title: Some("groceries".to_string()),
                ..Default::default()
            },
            ready(Err(CoreError::NotFound("Invalid client for id: 7!".to_string()))),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn duplicate_on_insert_is_reported() {
        let store = MemoryStore {
            reject_inserts: true,
            ..Default::default()
        };

        let err = upsert(
            &store,
            "n1".to_string(),
            NotePatch {
                title: Some("groceries".to_string()),
                ..Default::default()
            },
            ready(Ok(())),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateKey(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn truthiness_matches_merge_rules() {
        assert!(!String::new().is_truthy());
        assert!("x".to_string().is_truthy());
        assert!(!0.is_truthy());
        assert!(!0.0_f64.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!false.is_truthy());
        assert!(is_present(&Some(72.5_f64)));
        assert!(!is_present::<String>(&None));
    }
}
