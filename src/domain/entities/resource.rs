use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A flat record type exposed through the uniform CRUD surface.
///
/// The router, services and storage are parameterized by this trait alone:
/// a resource brings its creation payload (carrying the required-field
/// rules) and its patch-merge rules, never behavior of its own.
pub trait Resource: Clone + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {
    /// Route segment and collection name, e.g. `projects`.
    const NAME: &'static str;

    type Create: DeserializeOwned + Validate + Send + 'static;
    type Patch: DeserializeOwned + Send + 'static;

    /// Builds a full record from a validated creation payload, assigning
    /// the identifier and both timestamps.
    fn from_create(input: Self::Create) -> Self;

    /// Merges the supplied fields into the record and refreshes the
    /// modification timestamp. Identifier and creation timestamp are
    /// never touched.
    fn apply_patch(&mut self, patch: Self::Patch);

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;
}
