//! Documents, collections, filters and write acknowledgements.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Top-level fields of a stored document.
pub type Fields = BTreeMap<String, Value>;

/// The collections the API stores documents in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Users,
    Packages,
    Wishlist,
    TourGuides,
    Reviews,
    Bookings,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Users,
        Collection::Packages,
        Collection::Wishlist,
        Collection::TourGuides,
        Collection::Reviews,
        Collection::Bookings,
    ];

    /// Name under which the collection is stored.
    pub const fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Packages => "packages",
            Collection::Wishlist => "wishList",
            Collection::TourGuides => "tourGuide",
            Collection::Reviews => "review",
            Collection::Bookings => "booking",
        }
    }

    /// Field whose value must be unique within the collection.
    ///
    /// Must match the partial unique index in the migrations.
    pub const fn unique_field(self) -> Option<&'static str> {
        match self {
            Collection::Users => Some("email"),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored document: its store-assigned `_id` plus arbitrary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub body: BTreeMap<String, Value>,
}

impl Document {
    pub fn new(id: Uuid, body: Fields) -> Self {
        Self { id, body }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}

/// Selects documents by id and/or exact top-level field values.
///
/// An empty filter matches every document in a collection. A field named
/// in `missing` matches when it is absent or `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    id: Option<Uuid>,
    fields: Fields,
    missing: Vec<String>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and_eq(field, value)
    }

    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn and_missing(mut self, field: impl Into<String>) -> Self {
        self.missing.push(field.into());
        self
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn matches(&self, document: &Document) -> bool {
        if self.id.is_some_and(|id| id != document.id) {
            return false;
        }
        let missing = self
            .missing
            .iter()
            .all(|field| document.get(field).is_none_or(Value::is_null));
        missing
            && self
                .fields
                .iter()
                .all(|(field, expected)| document.body.get(field) == Some(expected))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertOneResult {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking(id: Uuid, email: &str) -> Document {
        let mut body = Fields::new();
        body.insert("touristEmail".to_string(), json!(email));
        body.insert("status".to_string(), json!("Pending"));
        Document::new(id, body)
    }

    #[test]
    fn test_document_serializes_flat_with_id() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(booking(id, "t@example.com")).unwrap();
        assert_eq!(value["_id"], json!(id.to_string()));
        assert_eq!(value["touristEmail"], "t@example.com");
        assert_eq!(value["status"], "Pending");
    }

    #[test]
    fn test_document_deserializes_extra_fields_into_body() {
        let id = Uuid::new_v4();
        let doc: Document =
            serde_json::from_value(json!({"_id": id, "name": "Rafi", "rating": 5})).unwrap();
        assert_eq!(doc.id, id);
        assert_eq!(doc.get_str("name"), Some("Rafi"));
        assert_eq!(doc.get("rating"), Some(&json!(5)));
        assert!(!doc.body.contains_key("_id"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::all().matches(&booking(Uuid::new_v4(), "a@example.com")));
    }

    #[test]
    fn test_filter_by_id() {
        let id = Uuid::new_v4();
        let doc = booking(id, "a@example.com");
        assert!(Filter::by_id(id).matches(&doc));
        assert!(!Filter::by_id(Uuid::new_v4()).matches(&doc));
    }

    #[test]
    fn test_filter_by_fields() {
        let doc = booking(Uuid::new_v4(), "a@example.com");
        assert!(Filter::eq("touristEmail", "a@example.com").matches(&doc));
        assert!(!Filter::eq("touristEmail", "b@example.com").matches(&doc));
        assert!(!Filter::eq("selectedGuide", "a@example.com").matches(&doc));
        assert!(
            Filter::eq("touristEmail", "a@example.com")
                .and_eq("status", "Pending")
                .matches(&doc)
        );
    }

    #[test]
    fn test_filter_missing_field() {
        let mut doc = booking(Uuid::new_v4(), "a@example.com");
        assert!(!Filter::all().and_missing("status").matches(&doc));
        assert!(Filter::all().and_missing("selectedGuide").matches(&doc));

        doc.body.insert("status".to_string(), Value::Null);
        assert!(Filter::by_id(doc.id).and_missing("status").matches(&doc));

        doc.body.remove("status");
        assert!(Filter::by_id(doc.id).and_missing("status").matches(&doc));
    }

    #[test]
    fn test_write_results_wire_shape() {
        let id = Uuid::new_v4();
        assert_eq!(
            serde_json::to_value(InsertOneResult::new(id)).unwrap(),
            json!({"acknowledged": true, "insertedId": id})
        );
        assert_eq!(
            serde_json::to_value(UpdateResult::new(1, 0)).unwrap(),
            json!({"acknowledged": true, "matchedCount": 1, "modifiedCount": 0})
        );
        assert_eq!(
            serde_json::to_value(DeleteResult::new(1)).unwrap(),
            json!({"acknowledged": true, "deletedCount": 1})
        );
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(Collection::Wishlist.name(), "wishList");
        assert_eq!(Collection::TourGuides.to_string(), "tourGuide");
        assert_eq!(Collection::Users.unique_field(), Some("email"));
        assert_eq!(Collection::Bookings.unique_field(), None);
    }
}
