use chrono::NaiveDate;
use shared::models::Book;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::collection::use_editor;
use crate::components::alert::Alert;

/// Create/edit form for a book. Which one it is comes from the incoming
/// navigation: an id in the query means edit.
#[function_component(BookFormPage)]
pub fn book_form_page() -> Html {
    let editor = use_editor::<Book>();
    let is_edit = editor.intent.is_edit();

    let on_dismiss = {
        let flash = editor.flash.clone();
        Callback::from(move |()| flash.set(None))
    };
    let on_title_change = {
        let draft = editor.draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.title = input.value();
                draft.set(next);
            }
        })
    };
    let on_author_change = {
        let draft = editor.draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.author = input.value();
                draft.set(next);
            }
        })
    };
    let on_date_change = {
        let draft = editor.draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                // An empty or unparsable date input means "no date".
                next.publication_date = input.value().parse::<NaiveDate>().ok();
                draft.set(next);
            }
        })
    };
    let onsubmit = {
        let save = editor.save.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            save.emit(());
        })
    };
    let on_cancel = {
        let cancel = editor.cancel.clone();
        Callback::from(move |_| cancel.emit(()))
    };

    let date_value = editor
        .draft
        .publication_date
        .map(|date| date.to_string())
        .unwrap_or_default();
    let is_saving = *editor.saving;

    html! {
        <div class="p-4 max-w-xl mx-auto space-y-4">
            if let Some(flash) = (*editor.flash).clone() {
                <Alert {flash} on_dismiss={on_dismiss} />
            }
            <div class="card bg-base-100 shadow-lg">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title">
                        { if is_edit { "Edit Book" } else { "Add Book" } }
                    </h2>
                    <div class="form-control">
                        <label class="label" for="title">
                            <span class="label-text">{"Title"}</span>
                        </label>
                        <input
                            id="title"
                            class="input input-bordered"
                            type="text"
                            value={editor.draft.title.clone()}
                            oninput={on_title_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="author">
                            <span class="label-text">{"Author"}</span>
                        </label>
                        <input
                            id="author"
                            class="input input-bordered"
                            type="text"
                            value={editor.draft.author.clone()}
                            oninput={on_author_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="publication_date">
                            <span class="label-text">{"Publication date"}</span>
                        </label>
                        <input
                            id="publication_date"
                            class="input input-bordered"
                            type="date"
                            value={date_value}
                            oninput={on_date_change}
                        />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-ghost" type="button" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={is_saving}>
                            { if is_edit { "Update Book" } else { "Save Book" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
