use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::models::app_state::AppState;
use crate::routes::{Route, switch};

#[function_component(App)]
pub fn app() -> Html {
    // One client per app; components receive it through context instead
    // of reaching for a hidden global.
    let api = use_memo((), |()| ApiClient::new(&ApiConfig::new()));
    let (_state, dispatch) = use_store::<AppState>();

    {
        let api = api.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            // Rehydrate the signed-in user for the navbar on first render.
            let user = api.session().user();
            dispatch.reduce_mut(move |state| state.user = user);
            || ()
        });
    }

    html! {
        <ContextProvider<ApiClient> context={(*api).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}
