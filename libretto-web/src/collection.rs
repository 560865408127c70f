//! The generic collection controller behind the books and quotes screens.
//!
//! One controller, parametrized by the resource descriptor, owns the
//! list lifecycle and the editing slot for both resource kinds.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::models::{ApiError, EditIntent};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

use crate::api::ApiClient;
use crate::components::alert::Flash;
use crate::models::app_state::AppState;
use crate::routes::{Route, Routed};

/// Where a collection's list fetch currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// How long the expired-session warning stays up before the forced
/// logout runs.
const LOGOUT_DELAY_MS: u32 = 2000;

/// How long a saved form lingers before returning to the listing.
const RETURN_DELAY_MS: u32 = 1000;

/// Warn about the expired session, then clear it and return to login.
///
/// The timer handle is kept so a newer expiry (or unmount) replaces the
/// pending logout instead of racing it.
fn expire_session(
    api: &ApiClient,
    navigator: &Navigator,
    dispatch: &Dispatch<AppState>,
    flash: &UseStateHandle<Option<Flash>>,
    timer: &Rc<RefCell<Option<Timeout>>>,
) {
    flash.set(Some(Flash::warning(ApiError::SessionExpired.to_string())));
    let api = api.clone();
    let navigator = navigator.clone();
    let dispatch = dispatch.clone();
    *timer.borrow_mut() = Some(Timeout::new(LOGOUT_DELAY_MS, move || {
        api.logout();
        dispatch.reduce_mut(|state| state.user = None);
        navigator.push(&Route::Login);
    }));
}

/// Controller handle for a collection listing screen.
pub struct CollectionHandle<R: Routed> {
    /// The rendered collection. A failed refresh leaves it untouched.
    pub items: UseStateHandle<Vec<R>>,
    /// List fetch lifecycle.
    pub state: UseStateHandle<LoadState>,
    /// Dismissible notification, if any.
    pub flash: UseStateHandle<Option<Flash>>,
    /// Refresh the whole collection (full replace, no row diffing).
    pub load: Callback<()>,
    /// Confirm interactively, then delete one item and refresh.
    pub remove: Callback<i64>,
    /// Open the edit form for an item, carrying its fields in the query.
    pub edit: Callback<R>,
    /// Open the form in create mode.
    pub create: Callback<()>,
}

/// Controller for a collection listing screen. Fetches on mount.
#[hook]
pub fn use_collection<R: Routed>() -> CollectionHandle<R> {
    let api = use_context::<ApiClient>().expect("ApiClient context not provided");
    let navigator = use_navigator().expect("navigator not available");
    let (_state, dispatch) = use_store::<AppState>();
    let items = use_state(Vec::<R>::new);
    let state = use_state(|| LoadState::Idle);
    let flash = use_state(|| None::<Flash>);
    let epoch = use_mut_ref(|| 0_u64);
    let logout_timer = use_mut_ref(|| None::<Timeout>);

    let load = {
        let api = api.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let items = items.clone();
        let state = state.clone();
        let flash = flash.clone();
        let epoch = epoch.clone();
        let logout_timer = logout_timer.clone();
        Callback::from(move |()| {
            if !api.session().is_authenticated() {
                // The guard is already redirecting; skip the doomed call.
                return;
            }
            let generation = {
                let mut current = epoch.borrow_mut();
                *current += 1;
                *current
            };
            state.set(LoadState::Loading);
            let api = api.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let items = items.clone();
            let state = state.clone();
            let flash = flash.clone();
            let epoch = epoch.clone();
            let logout_timer = logout_timer.clone();
            spawn_local(async move {
                let result = api.list::<R>().await;
                if *epoch.borrow() != generation {
                    // A newer load owns the screen now; drop this response.
                    return;
                }
                match result {
                    Ok(collection) => {
                        items.set(collection);
                        state.set(LoadState::Loaded);
                    }
                    Err(error) if error.is_session_expired() => {
                        state.set(LoadState::LoadFailed);
                        expire_session(&api, &navigator, &dispatch, &flash, &logout_timer);
                    }
                    Err(error) => {
                        // Keep whatever was rendered; only surface the message.
                        state.set(LoadState::LoadFailed);
                        flash.set(Some(Flash::danger(format!(
                            "Error loading {}: {error}",
                            R::COLLECTION
                        ))));
                    }
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |()| {
            load.emit(());
            || ()
        });
    }

    let remove = {
        let api = api.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let flash = flash.clone();
        let logout_timer = logout_timer.clone();
        let load = load.clone();
        Callback::from(move |id: i64| {
            let prompt = format!(
                "Are you sure you want to delete this {}?",
                R::LABEL.to_lowercase()
            );
            let confirmed = web_sys::window()
                .and_then(|window| window.confirm_with_message(&prompt).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let flash = flash.clone();
            let logout_timer = logout_timer.clone();
            let load = load.clone();
            spawn_local(async move {
                match api.delete::<R>(id).await {
                    Ok(()) => {
                        flash.set(Some(Flash::success(format!(
                            "{} deleted successfully!",
                            R::LABEL
                        ))));
                        load.emit(());
                    }
                    Err(error) if error.is_session_expired() => {
                        expire_session(&api, &navigator, &dispatch, &flash, &logout_timer);
                    }
                    Err(error) => {
                        flash.set(Some(Flash::danger(format!(
                            "Error deleting {}: {error}",
                            R::LABEL.to_lowercase()
                        ))));
                    }
                }
            });
        })
    };

    let edit = {
        let navigator = navigator.clone();
        Callback::from(move |item: R| {
            // Hand the fields to the form through the query string so it
            // can populate without a round trip.
            if navigator.push_with_query(&R::FORM, &item.to_query()).is_err() {
                navigator.push(&R::FORM);
            }
        })
    };

    let create = {
        let navigator = navigator.clone();
        Callback::from(move |()| navigator.push(&R::FORM))
    };

    CollectionHandle {
        items,
        state,
        flash,
        load,
        remove,
        edit,
        create,
    }
}

/// Controller handle for an edit/create form screen.
pub struct EditorHandle<R: Routed> {
    /// What the form has been asked to do.
    pub intent: UseStateHandle<EditIntent<R>>,
    /// The fields as currently entered.
    pub draft: UseStateHandle<R::Draft>,
    /// Dismissible notification, if any.
    pub flash: UseStateHandle<Option<Flash>>,
    /// Whether a save is in flight; the submit button disables on it.
    pub saving: UseStateHandle<bool>,
    /// Validate and dispatch the save, then return to the listing.
    pub save: Callback<()>,
    /// Return to the listing without saving.
    pub cancel: Callback<()>,
}

/// Controller for an edit/create form screen.
///
/// Resolves the edit target once, in priority order: fields embedded in
/// the incoming query, direct fetch by id, then a scan of the full
/// collection. Only when all three fail is a terminal error shown.
#[hook]
pub fn use_editor<R: Routed>() -> EditorHandle<R> {
    let api = use_context::<ApiClient>().expect("ApiClient context not provided");
    let navigator = use_navigator().expect("navigator not available");
    let location = use_location();
    let (_state, dispatch) = use_store::<AppState>();
    let intent = use_state(EditIntent::<R>::default);
    let draft = use_state(<R::Draft>::default);
    let flash = use_state(|| None::<Flash>);
    let saving = use_state(|| false);
    let logout_timer = use_mut_ref(|| None::<Timeout>);
    let return_timer = use_mut_ref(|| None::<Timeout>);

    {
        let api = api.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let intent = intent.clone();
        let draft = draft.clone();
        let flash = flash.clone();
        let logout_timer = logout_timer.clone();
        use_effect_with((), move |()| {
            let query = location
                .and_then(|location| location.query::<R::Query>().ok())
                .unwrap_or_default();
            if let Some(id) = R::query_id(&query) {
                if let Some(item) = R::from_query(&query) {
                    draft.set(item.to_draft());
                    intent.set(EditIntent::Edit(item));
                } else {
                    spawn_local(async move {
                        let resolved = match api.fetch::<R>(id).await {
                            Ok(item) => Ok(item),
                            Err(error) if error.is_session_expired() => Err(error),
                            // Fall back to scanning the full collection.
                            Err(_) => api.list::<R>().await.and_then(|collection| {
                                collection
                                    .into_iter()
                                    .find(|item| item.id() == id)
                                    .ok_or(ApiError::NotFound(R::LABEL))
                            }),
                        };
                        match resolved {
                            Ok(item) => {
                                draft.set(item.to_draft());
                                intent.set(EditIntent::Edit(item));
                            }
                            Err(error) if error.is_session_expired() => {
                                expire_session(&api, &navigator, &dispatch, &flash, &logout_timer);
                            }
                            Err(error) => {
                                flash.set(Some(Flash::danger(error.to_string())));
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    let save = {
        let api = api.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let intent = intent.clone();
        let draft = draft.clone();
        let flash = flash.clone();
        let saving = saving.clone();
        let logout_timer = logout_timer.clone();
        let return_timer = return_timer.clone();
        Callback::from(move |()| {
            if *saving {
                return;
            }
            let current = (*draft).clone();
            if let Err(error) = R::validate(&current) {
                // Invalid input never reaches the network.
                flash.set(Some(Flash::danger(error.to_string())));
                return;
            }
            saving.set(true);
            let id = intent.id();
            let success = if id.is_some() {
                format!("{} updated successfully!", R::LABEL)
            } else {
                format!("{} added successfully!", R::LABEL)
            };
            let api = api.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let flash = flash.clone();
            let saving = saving.clone();
            let logout_timer = logout_timer.clone();
            let return_timer = return_timer.clone();
            spawn_local(async move {
                match api.save::<R>(id, &current).await {
                    Ok(_) => {
                        flash.set(Some(Flash::success(success)));
                        let navigator = navigator.clone();
                        *return_timer.borrow_mut() = Some(Timeout::new(RETURN_DELAY_MS, move || {
                            navigator.push(&R::LIST);
                        }));
                    }
                    Err(error) if error.is_session_expired() => {
                        saving.set(false);
                        expire_session(&api, &navigator, &dispatch, &flash, &logout_timer);
                    }
                    Err(error) => {
                        saving.set(false);
                        flash.set(Some(Flash::danger(format!(
                            "Error saving {}: {error}",
                            R::LABEL.to_lowercase()
                        ))));
                    }
                }
            });
        })
    };

    let cancel = {
        let navigator = navigator.clone();
        Callback::from(move |()| navigator.push(&R::LIST))
    };

    EditorHandle {
        intent,
        draft,
        flash,
        saving,
        save,
        cancel,
    }
}
