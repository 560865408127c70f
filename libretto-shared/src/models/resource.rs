use serde::Serialize;
use serde::de::DeserializeOwned;

use super::errors::ApiError;

/// Descriptor for a resource kind managed by the collection screens.
///
/// Books and quotes share one controller; this trait is the seam that
/// carries everything that differs between them: endpoint path, display
/// label, payload shape, and the query-parameter projection used to hand
/// an item from the listing to the edit form.
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Client-authored payload for create and update calls.
    type Draft: Clone + Default + PartialEq + Serialize + 'static;

    /// Query-parameter projection of an item for the edit form fast path.
    type Query: Clone + Default + PartialEq + Serialize + DeserializeOwned + 'static;

    /// Path segment of the collection endpoint, e.g. `books`.
    const COLLECTION: &'static str;

    /// Singular display label, e.g. `Book`.
    const LABEL: &'static str;

    /// Server-assigned identifier.
    fn id(&self) -> i64;

    /// Project the item into an editable draft.
    fn to_draft(&self) -> Self::Draft;

    /// Project the item into query parameters for navigation.
    fn to_query(&self) -> Self::Query;

    /// Rebuild an item from query parameters.
    ///
    /// Returns `None` when required fields are missing, in which case the
    /// form falls back to fetching the item by id.
    fn from_query(query: &Self::Query) -> Option<Self>;

    /// The id carried by the query parameters, if any.
    fn query_id(query: &Self::Query) -> Option<i64>;

    /// Check that required text fields are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with a user-facing message when a
    /// required field is empty; no network call may follow.
    fn validate(draft: &Self::Draft) -> Result<(), ApiError>;
}

/// What an edit form has been asked to do.
///
/// The typed replacement for round-tripping edit state through loose
/// query strings: either create a new item or edit a specific one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent<R> {
    /// The form creates a new item.
    Create,
    /// The form edits this existing item.
    Edit(R),
}

impl<R> Default for EditIntent<R> {
    fn default() -> Self {
        Self::Create
    }
}

impl<R: Resource> EditIntent<R> {
    /// Identifier of the item being edited, if any.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(item) => Some(item.id()),
        }
    }

    /// Whether the form is editing an existing item.
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Book;

    fn sample_book() -> Book {
        Book {
            id: 7,
            title: "The Overstory".to_string(),
            author: "Richard Powers".to_string(),
            publication_date: None,
        }
    }

    #[test]
    fn create_intent_has_no_id() {
        let intent: EditIntent<Book> = EditIntent::Create;
        assert_eq!(intent.id(), None);
        assert!(!intent.is_edit());
    }

    #[test]
    fn edit_intent_exposes_item_id() {
        let intent = EditIntent::Edit(sample_book());
        assert_eq!(intent.id(), Some(7));
        assert!(intent.is_edit());
    }

    #[test]
    fn default_intent_is_create() {
        assert_eq!(EditIntent::<Book>::default(), EditIntent::Create);
    }
}
