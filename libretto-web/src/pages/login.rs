use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::api::ApiClient;
use crate::models::app_state::AppState;
use crate::routes::Route;

/// How long a successful login lingers before moving to the landing
/// page.
const SUCCESS_REDIRECT_MS: u32 = 500;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not provided");
    let (_state, dispatch) = use_store::<AppState>();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let pending_redirect = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let api = api.clone();
        let dispatch = dispatch.clone();
        let username_handle = username.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let pending_redirect = pending_redirect.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username_value = (*username_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let api = api.clone();
            let dispatch = dispatch.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let pending_redirect = pending_redirect.clone();
            spawn_local(async move {
                match api.login(&username_value, &password_value).await {
                    Ok(response) => {
                        let user = response.user.or_else(|| api.session().user());
                        dispatch.reduce_mut(move |state| state.user = user);
                        if let Some(navigator) = navigator_handle {
                            *pending_redirect.borrow_mut() =
                                Some(Timeout::new(SUCCESS_REDIRECT_MS, move || {
                                    navigator.push(&Route::Home);
                                }));
                        }
                    }
                    Err(error) => {
                        error_ref.set(Some(error.to_string()));
                        loading_ref.set(false);
                    }
                }
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{"Username"}</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
