use gloo_timers::callback::Timeout;
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::ApiClient;
use crate::routes::Route;

/// How long the success notice lingers before moving to the login page.
const SUCCESS_REDIRECT_MS: u32 = 1000;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not provided");
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let created = use_state(|| false);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let pending_redirect = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let api = api.clone();
        let username_handle = username.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let created_handle = created.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let pending_redirect = pending_redirect.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = RegisterRequest {
                username: (*username_handle).clone(),
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let api = api.clone();
            let error_ref = error_handle.clone();
            let created_ref = created_handle.clone();
            let loading_ref = loading_handle.clone();
            let navigator_handle = navigator.clone();
            let pending_redirect = pending_redirect.clone();
            spawn_local(async move {
                match api.register(&payload).await {
                    Ok(_user) => {
                        created_ref.set(true);
                        if let Some(navigator) = navigator_handle {
                            *pending_redirect.borrow_mut() =
                                Some(Timeout::new(SUCCESS_REDIRECT_MS, move || {
                                    navigator.push(&Route::Login);
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

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_username_change = bind_input(&username);
    let on_email_change = bind_input(&email);
    let on_password_change = bind_input(&password);

    let is_busy = *loading;
    let disable_submit =
        (*username).is_empty() || (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    if *created {
                        <div class="alert alert-success">
                            <span>{"Registration successful! Please sign in."}</span>
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
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
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
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
