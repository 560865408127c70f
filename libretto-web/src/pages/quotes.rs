use shared::models::Quote;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::collection::{LoadState, use_collection};
use crate::components::alert::Alert;
use crate::components::loading::Loading;
use crate::components::quote_card::QuoteCard;

/// Quotes listing page.
#[function_component(QuotesPage)]
pub fn quotes_page() -> Html {
    let collection = use_collection::<Quote>();

    let on_dismiss = {
        let flash = collection.flash.clone();
        Callback::from(move |()| flash.set(None))
    };
    let on_add = {
        let create = collection.create.clone();
        Callback::from(move |_| create.emit(()))
    };
    let on_refresh = {
        let load = collection.load.clone();
        Callback::from(move |_| load.emit(()))
    };

    let body = if collection.items.is_empty() {
        match *collection.state {
            LoadState::Idle | LoadState::Loading => html! { <Loading /> },
            LoadState::Loaded => html! {
                <div class="alert alert-info text-center">
                    {"No quotes found. Add your first quote!"}
                </div>
            },
            LoadState::LoadFailed => Html::default(),
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for collection.items.iter().map(|quote| {
                    let on_edit = collection.edit.clone();
                    let on_delete = collection.remove.clone();
                    html! { <QuoteCard quote={quote.clone()} {on_edit} {on_delete} /> }
                })}
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"My Quotes"}</h1>
                <div class="flex gap-2">
                    <button class="btn btn-ghost" onclick={on_refresh}>
                        <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-5 h-5" />
                    </button>
                    <button class="btn btn-primary" onclick={on_add}>
                        <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                        {"Add Quote"}
                    </button>
                </div>
            </div>
            if let Some(flash) = (*collection.flash).clone() {
                <Alert {flash} on_dismiss={on_dismiss} />
            }
            { body }
        </div>
    }
}
