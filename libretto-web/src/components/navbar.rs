use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::ApiClient;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::models::app_state::AppState;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// The route currently being rendered, for link highlighting.
    pub current_route: Route,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not provided");
    let navigator = use_navigator().expect("navigator not available");
    let (state, dispatch) = use_store::<AppState>();

    // Storage is the source of truth; the store is just a render cache.
    let authenticated = api.session().is_authenticated();
    let user = state.user.clone().or_else(|| api.session().user());

    let on_logout = {
        let api = api.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            api.logout();
            dispatch.reduce_mut(|state| state.user = None);
            navigator.push(&Route::Login);
        })
    };

    let link_classes = |route: &Route| {
        if props.current_route == *route {
            classes!("active")
        } else {
            classes!()
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={Route::Home} classes="btn btn-ghost text-lg">
                {"Libretto"}
            </Link<Route>>
            if authenticated {
                <ul class="menu menu-horizontal gap-1">
                    <li>
                        <Link<Route> to={Route::Books} classes={link_classes(&Route::Books)}>
                            {"Books"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Quotes} classes={link_classes(&Route::Quotes)}>
                            {"Quotes"}
                        </Link<Route>>
                    </li>
                </ul>
            }
            <div class="flex items-center gap-2">
                <ThemeSwitcher />
                {
                    if authenticated {
                        html! {
                            <>
                                {
                                    user.map_or_else(Html::default, |user| html! {
                                        <span class="text-sm text-base-content/80">{ user.username }</span>
                                    })
                                }
                                <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                                    {"Logout"}
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <Link<Route> to={Route::Login} classes="btn btn-ghost btn-sm">
                                    {"Login"}
                                </Link<Route>>
                                <Link<Route> to={Route::Register} classes="btn btn-primary btn-sm">
                                    {"Register"}
                                </Link<Route>>
                            </>
                        }
                    }
                }
            </div>
        </nav>
    }
}
