use shared::models::Quote;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::collection::use_editor;
use crate::components::alert::Alert;

/// Create/edit form for a quote.
#[function_component(QuoteFormPage)]
pub fn quote_form_page() -> Html {
    let editor = use_editor::<Quote>();
    let is_edit = editor.intent.is_edit();

    let on_dismiss = {
        let flash = editor.flash.clone();
        Callback::from(move |()| flash.set(None))
    };
    let on_text_change = {
        let draft = editor.draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*draft).clone();
                next.quote_text = input.value();
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

    let is_saving = *editor.saving;

    html! {
        <div class="p-4 max-w-xl mx-auto space-y-4">
            if let Some(flash) = (*editor.flash).clone() {
                <Alert {flash} on_dismiss={on_dismiss} />
            }
            <div class="card bg-base-100 shadow-lg">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title">
                        { if is_edit { "Edit Quote" } else { "Add Quote" } }
                    </h2>
                    <div class="form-control">
                        <label class="label" for="quote_text">
                            <span class="label-text">{"Quote"}</span>
                        </label>
                        <textarea
                            id="quote_text"
                            class="textarea textarea-bordered"
                            rows="4"
                            value={editor.draft.quote_text.clone()}
                            oninput={on_text_change}
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
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-ghost" type="button" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={is_saving}>
                            { if is_edit { "Update Quote" } else { "Save Quote" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
