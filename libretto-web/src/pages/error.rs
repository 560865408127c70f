use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Catch-all page for unknown paths.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="p-8 text-center space-y-4">
            <h1 class="text-3xl font-bold">{"Page not found"}</h1>
            <p class="text-base-content/70">{"That page doesn't exist in this catalog."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to start"}
            </Link<Route>>
        </div>
    }
}
