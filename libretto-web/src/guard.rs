use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::routes::{PageClass, Route, page_class};

/// How long a guard redirect is deferred so in-flight page setup can
/// settle first. Cosmetic, not a correctness requirement.
const REDIRECT_DELAY_MS: u32 = 100;

/// Where the guard sends a visitor, given the destination's class and
/// whether a session is active. `None` means no redirect.
pub(crate) fn redirect_target(class: PageClass, authenticated: bool) -> Option<Route> {
    match (class, authenticated) {
        (PageClass::Protected, false) => Some(Route::Login),
        (PageClass::PublicOnly, true) => Some(Route::Home),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationGuardProps {
    /// The route being rendered.
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

/// Enforces which pages require or forbid an active session.
///
/// Runs on every route switch. The redirect is debounced and the pending
/// timer is dropped when the route changes again before it fires, so a
/// superseded redirect cannot race a later navigation.
#[function_component(NavigationGuard)]
pub fn navigation_guard(props: &NavigationGuardProps) -> Html {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();

    {
        let route = props.route.clone();
        use_effect_with(route, move |route| {
            let pending = api.and_then(|api| {
                let target = redirect_target(page_class(route), api.session().is_authenticated())?;
                let navigator = navigator?;
                Some(Timeout::new(REDIRECT_DELAY_MS, move || {
                    navigator.push(&target);
                }))
            });
            move || drop(pending)
        });
    }

    html! { <>{ props.children.clone() }</> }
}
