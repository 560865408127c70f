use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use super::resource::Resource;

/// A book in the user's library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Server-assigned identifier.
    pub id: i64,

    /// The book's title.
    pub title: String,

    /// The book's author.
    pub author: String,

    /// Optional publication date, as entered in the form's date field.
    pub publication_date: Option<NaiveDate>,
}

/// Client-authored book payload for create and update calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDraft {
    /// The book's title. Required.
    pub title: String,

    /// The book's author. Required.
    pub author: String,

    /// Optional publication date.
    pub publication_date: Option<NaiveDate>,
}

/// Query-parameter projection of a book, used to hand an item from the
/// listing to the edit form without a network round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookQuery {
    /// Identifier of the book being edited; absent when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Copy of the title field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Copy of the author field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Copy of the publication date field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,
}

impl Resource for Book {
    type Draft = BookDraft;
    type Query = BookQuery;

    const COLLECTION: &'static str = "books";
    const LABEL: &'static str = "Book";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            publication_date: self.publication_date,
        }
    }

    fn to_query(&self) -> BookQuery {
        BookQuery {
            id: Some(self.id),
            title: Some(self.title.clone()),
            author: Some(self.author.clone()),
            publication_date: self.publication_date,
        }
    }

    fn from_query(query: &BookQuery) -> Option<Self> {
        Some(Self {
            id: query.id?,
            title: query.title.clone()?,
            author: query.author.clone()?,
            publication_date: query.publication_date,
        })
    }

    fn query_id(query: &BookQuery) -> Option<i64> {
        query.id
    }

    fn validate(draft: &BookDraft) -> Result<(), ApiError> {
        if draft.title.trim().is_empty() || draft.author.trim().is_empty() {
            return Err(ApiError::Validation(
                "Title and Author are required fields!".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: 3,
            title: "Middlemarch".to_string(),
            author: "George Eliot".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1871, 12, 1),
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let book = sample();
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"publication_date\":\"1871-12-01\""));
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn deserializes_without_publication_date() {
        let json = r#"{"id":9,"title":"Ficciones","author":"Jorge Luis Borges","publication_date":null}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.publication_date, None);
    }

    #[test]
    fn draft_requires_title_and_author() {
        let draft = BookDraft {
            title: String::new(),
            author: "x".to_string(),
            publication_date: None,
        };
        assert!(matches!(
            Book::validate(&draft),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn draft_rejects_whitespace_only_fields() {
        let draft = BookDraft {
            title: "   ".to_string(),
            author: "\t".to_string(),
            publication_date: None,
        };
        assert!(Book::validate(&draft).is_err());
    }

    #[test]
    fn draft_accepts_populated_fields() {
        let draft = sample().to_draft();
        assert!(Book::validate(&draft).is_ok());
        assert_eq!(draft.title, "Middlemarch");
    }

    #[test]
    fn query_roundtrip_preserves_fields() {
        let book = sample();
        let query = book.to_query();
        assert_eq!(Book::query_id(&query), Some(3));
        assert_eq!(Book::from_query(&query), Some(book));
    }

    #[test]
    fn query_without_fields_cannot_rebuild_item() {
        let query = BookQuery {
            id: Some(3),
            ..BookQuery::default()
        };
        // Only the id survived the navigation; the form must fetch.
        assert_eq!(Book::from_query(&query), None);
        assert_eq!(Book::query_id(&query), Some(3));
    }

    #[test]
    fn empty_query_means_create() {
        let query = BookQuery::default();
        assert_eq!(Book::query_id(&query), None);
        assert_eq!(Book::from_query(&query), None);
    }
}
