//! Tests for the routing system
//!
//! Validates route definitions, path mapping, page classification, and
//! the per-resource route bindings.

#[cfg(test)]
mod tests {
    use crate::routes::{PageClass, Route, Routed, page_class};
    use shared::models::{Book, Quote};
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::Books.to_path(), "/books");
        assert_eq!(Route::BookForm.to_path(), "/books/edit");
        assert_eq!(Route::Quotes.to_path(), "/quotes");
        assert_eq!(Route::QuoteForm.to_path(), "/quotes/edit");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    /// Tests path recognition
    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/books"), Some(Route::Books));
        assert_eq!(Route::recognize("/books/edit"), Some(Route::BookForm));
        assert_eq!(Route::recognize("/quotes/edit"), Some(Route::QuoteForm));
    }

    /// Tests route equality and cloning
    #[test]
    fn test_route_equality() {
        let route1 = Route::Books;
        let route2 = Route::Books;
        assert_eq!(route1, route2);
        assert_ne!(Route::Books, Route::Quotes);

        let cloned = route1.clone();
        assert_eq!(route1, cloned);
    }

    /// Login and register are the only public-only pages.
    #[test]
    fn test_public_only_pages() {
        for route in Route::iter() {
            let expected_public = matches!(route, Route::Login | Route::Register);
            assert_eq!(
                page_class(&route) == PageClass::PublicOnly,
                expected_public,
                "unexpected class for {route:?}"
            );
        }
    }

    /// Every catalog screen requires a session.
    #[test]
    fn test_protected_pages() {
        for route in [
            Route::Home,
            Route::Books,
            Route::BookForm,
            Route::Quotes,
            Route::QuoteForm,
        ] {
            assert_eq!(page_class(&route), PageClass::Protected);
        }
    }

    /// The not-found page is reachable either way.
    #[test]
    fn test_neutral_pages() {
        assert_eq!(page_class(&Route::NotFound), PageClass::Neutral);
    }

    /// Resource route bindings point at the matching screens.
    #[test]
    fn test_resource_route_bindings() {
        assert_eq!(<Book as Routed>::LIST, Route::Books);
        assert_eq!(<Book as Routed>::FORM, Route::BookForm);
        assert_eq!(<Quote as Routed>::LIST, Route::Quotes);
        assert_eq!(<Quote as Routed>::FORM, Route::QuoteForm);
    }
}
