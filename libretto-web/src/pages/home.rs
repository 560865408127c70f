use chrono::Utc;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::routes::Route;

/// Landing page for signed-in users.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let api = use_context::<ApiClient>().expect("ApiClient context not provided");
    let user = api.session().user();
    let token_status = api.session().token_status();

    let greeting = user.map_or_else(
        || "Welcome!".to_string(),
        |user| format!("Welcome back, {}!", user.username),
    );

    let session_note = token_status.map_or_else(Html::default, |status| {
        let now = Utc::now();
        if status.is_expired(now) {
            html! {
                <p class="text-sm text-warning">
                    {"Your session token has expired; the next request will send you back to login."}
                </p>
            }
        } else {
            status.expires_at.map_or_else(Html::default, |expires_at| {
                html! {
                    <p class="text-sm text-base-content/60">
                        { format!("Session valid until {}", expires_at.format("%Y-%m-%d %H:%M")) }
                    </p>
                }
            })
        }
    });

    html! {
        <div class="p-4 space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{ greeting }</h1>
                { session_note }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineBookOpen} class="w-6 h-6" />
                            {"Books"}
                        </h2>
                        <p>{"Keep track of what you own, what you loved, and when it was published."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Books} classes="btn btn-primary">
                                {"Open library"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-6 h-6" />
                            {"Quotes"}
                        </h2>
                        <p>{"Lines worth keeping, with the people who wrote or said them."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Quotes} classes="btn btn-secondary">
                                {"Open quotes"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
