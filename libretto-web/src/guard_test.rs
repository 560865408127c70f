//! Tests for the navigation guard's redirect policy.
//!
//! The guard's timer is a browser concern; the policy itself is a pure
//! function over page class and session state, checked here. The
//! redirect is deferred at runtime, so these describe where the guard
//! eventually sends a visitor, not an immediate jump.

#[cfg(test)]
mod tests {
    use crate::guard::redirect_target;
    use crate::routes::{PageClass, Route, page_class};
    use strum::IntoEnumIterator;

    /// Protected page without a session goes to login.
    #[test]
    fn test_protected_without_session_redirects_to_login() {
        assert_eq!(
            redirect_target(PageClass::Protected, false),
            Some(Route::Login)
        );
    }

    /// Login/register with a session goes to the landing page.
    #[test]
    fn test_public_only_with_session_redirects_home() {
        assert_eq!(
            redirect_target(PageClass::PublicOnly, true),
            Some(Route::Home)
        );
    }

    /// Matching page and session state means no redirect.
    #[test]
    fn test_allowed_combinations_do_not_redirect() {
        assert_eq!(redirect_target(PageClass::Protected, true), None);
        assert_eq!(redirect_target(PageClass::PublicOnly, false), None);
    }

    /// Neutral pages never redirect, whatever the session state.
    #[test]
    fn test_neutral_never_redirects() {
        assert_eq!(redirect_target(PageClass::Neutral, true), None);
        assert_eq!(redirect_target(PageClass::Neutral, false), None);
    }

    /// A signed-out visitor can only ever be sent to login.
    #[test]
    fn test_signed_out_policy_over_all_routes() {
        for route in Route::iter() {
            let target = redirect_target(page_class(&route), false);
            match page_class(&route) {
                PageClass::Protected => assert_eq!(target, Some(Route::Login)),
                _ => assert_eq!(target, None),
            }
        }
    }

    /// A signed-in visitor is only ever bounced off login/register.
    #[test]
    fn test_signed_in_policy_over_all_routes() {
        for route in Route::iter() {
            let target = redirect_target(page_class(&route), true);
            match page_class(&route) {
                PageClass::PublicOnly => assert_eq!(target, Some(Route::Home)),
                _ => assert_eq!(target, None),
            }
        }
    }
}
