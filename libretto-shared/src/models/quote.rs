use serde::{Deserialize, Serialize};

use super::errors::ApiError;
use super::resource::Resource;

/// A saved quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// Server-assigned identifier.
    pub id: i64,

    /// The quoted text.
    pub quote_text: String,

    /// Who said or wrote it.
    pub author: String,
}

/// Client-authored quote payload for create and update calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteDraft {
    /// The quoted text. Required.
    pub quote_text: String,

    /// Who said or wrote it. Required.
    pub author: String,
}

/// Query-parameter projection of a quote for the edit form fast path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteQuery {
    /// Identifier of the quote being edited; absent when creating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Copy of the quote text field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_text: Option<String>,

    /// Copy of the author field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Resource for Quote {
    type Draft = QuoteDraft;
    type Query = QuoteQuery;

    const COLLECTION: &'static str = "quotes";
    const LABEL: &'static str = "Quote";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_draft(&self) -> QuoteDraft {
        QuoteDraft {
            quote_text: self.quote_text.clone(),
            author: self.author.clone(),
        }
    }

    fn to_query(&self) -> QuoteQuery {
        QuoteQuery {
            id: Some(self.id),
            quote_text: Some(self.quote_text.clone()),
            author: Some(self.author.clone()),
        }
    }

    fn from_query(query: &QuoteQuery) -> Option<Self> {
        Some(Self {
            id: query.id?,
            quote_text: query.quote_text.clone()?,
            author: query.author.clone()?,
        })
    }

    fn query_id(query: &QuoteQuery) -> Option<i64> {
        query.id
    }

    fn validate(draft: &QuoteDraft) -> Result<(), ApiError> {
        if draft.quote_text.trim().is_empty() || draft.author.trim().is_empty() {
            return Err(ApiError::Validation(
                "Quote text and Author are required fields!".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Quote {
        Quote {
            id: 11,
            quote_text: "We tell ourselves stories in order to live.".to_string(),
            author: "Joan Didion".to_string(),
        }
    }

    #[test]
    fn serialization_roundtrip() {
        let quote = sample();
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }

    #[test]
    fn validation_requires_both_fields() {
        let draft = QuoteDraft {
            quote_text: "  ".to_string(),
            author: "Joan Didion".to_string(),
        };
        assert!(matches!(
            Quote::validate(&draft),
            Err(ApiError::Validation(_))
        ));

        let draft = QuoteDraft {
            quote_text: "Something".to_string(),
            author: String::new(),
        };
        assert!(Quote::validate(&draft).is_err());

        assert!(Quote::validate(&sample().to_draft()).is_ok());
    }

    #[test]
    fn query_roundtrip_preserves_fields() {
        let quote = sample();
        let query = quote.to_query();
        assert_eq!(Quote::query_id(&query), Some(11));
        assert_eq!(Quote::from_query(&query), Some(quote));
    }

    #[test]
    fn partial_query_falls_back_to_fetch() {
        let query = QuoteQuery {
            id: Some(11),
            quote_text: Some("orphaned".to_string()),
            author: None,
        };
        assert_eq!(Quote::from_query(&query), None);
    }
}
