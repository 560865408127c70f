use shared::models::Book;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::collection::{LoadState, use_collection};
use crate::components::alert::Alert;
use crate::components::book_card::BookCard;
use crate::components::loading::Loading;

/// Books listing page.
#[function_component(BooksPage)]
pub fn books_page() -> Html {
    let collection = use_collection::<Book>();

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
                    {"No books found. Add your first book!"}
                </div>
            },
            // The flash already explains the failure; the prior (empty)
            // listing stays as it was.
            LoadState::LoadFailed => Html::default(),
        }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for collection.items.iter().map(|book| {
                    let on_edit = collection.edit.clone();
                    let on_delete = collection.remove.clone();
                    html! { <BookCard book={book.clone()} {on_edit} {on_delete} /> }
                })}
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"My Books"}</h1>
                <div class="flex gap-2">
                    <button class="btn btn-ghost" onclick={on_refresh}>
                        <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-5 h-5" />
                    </button>
                    <button class="btn btn-primary" onclick={on_add}>
                        <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-5 h-5" />
                        {"Add Book"}
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
