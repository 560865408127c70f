//! Tests for the API client's request shaping.
//!
//! Validates URL construction and the create-versus-update dispatch the
//! forms rely on; response classification itself is covered alongside
//! the shared error taxonomy.

#[cfg(test)]
mod tests {
    use crate::api::{join_url, save_target};
    use reqwest::Method;
    use shared::models::{Book, Quote, Resource};

    /// Base URL joining tolerates stray slashes on either side.
    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "books"),
            "http://localhost:8000/books"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "/books"),
            "http://localhost:8000/books"
        );
        assert_eq!(
            join_url("http://localhost:8000", "books/7"),
            "http://localhost:8000/books/7"
        );
    }

    /// An editing slot with an id saves with PUT to the item.
    #[test]
    fn test_save_target_with_id_is_put() {
        let (method, path) = save_target::<Book>(Some(7));
        assert_eq!(method, Method::PUT);
        assert_eq!(path, "books/7");

        let (method, path) = save_target::<Quote>(Some(12));
        assert_eq!(method, Method::PUT);
        assert_eq!(path, "quotes/12");
    }

    /// An empty editing slot saves with POST to the collection.
    #[test]
    fn test_save_target_without_id_is_post() {
        let (method, path) = save_target::<Book>(None);
        assert_eq!(method, Method::POST);
        assert_eq!(path, "books");

        let (method, path) = save_target::<Quote>(None);
        assert_eq!(method, Method::POST);
        assert_eq!(path, "quotes");
    }

    /// Collection endpoints follow the documented paths.
    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Book::COLLECTION, "books");
        assert_eq!(Quote::COLLECTION, "quotes");
        assert_eq!(format!("{}/{}", Book::COLLECTION, 5), "books/5");
        assert_eq!(format!("{}/{}", Quote::COLLECTION, 5), "quotes/5");
    }

    /// Display labels feed the user-facing messages.
    #[test]
    fn test_labels() {
        assert_eq!(Book::LABEL, "Book");
        assert_eq!(Quote::LABEL, "Quote");
        assert_eq!(Book::LABEL.to_lowercase(), "book");
    }
}
