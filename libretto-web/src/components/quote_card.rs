use shared::models::Quote;
use shared::text::escape_html;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct QuoteCardProps {
    pub quote: Quote,
    pub on_edit: Callback<Quote>,
    pub on_delete: Callback<i64>,
}

/// Write the quote to the clipboard as a markup snippet.
///
/// The snippet is assembled as a string, so the fields are escaped here
/// rather than by the view layer.
fn copy_markup(quote: &Quote) {
    let markup = format!(
        "<blockquote>{}<footer>&mdash; {}</footer></blockquote>",
        escape_html(&quote.quote_text),
        escape_html(&quote.author)
    );
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(&markup);
    }
}

#[function_component(QuoteCard)]
pub fn quote_card(props: &QuoteCardProps) -> Html {
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let quote = props.quote.clone();
        Callback::from(move |_| on_edit.emit(quote.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = props.quote.id;
        Callback::from(move |_| on_delete.emit(id))
    };
    let on_copy = {
        let quote = props.quote.clone();
        Callback::from(move |_| copy_markup(&quote))
    };

    html! {
        <div class="card bg-base-200 shadow-xl h-full">
            <div class="card-body">
                <blockquote class="italic">
                    { format!("\u{201c}{}\u{201d}", props.quote.quote_text) }
                </blockquote>
                <p class="text-base-content/70 text-right">{ format!("\u{2014} {}", props.quote.author) }</p>
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost btn-sm" aria-label="Copy quote" onclick={on_copy}>
                        <Icon icon_id={IconId::HeroiconsOutlineClipboard} class="w-4 h-4" />
                    </button>
                    <button class="btn btn-warning btn-sm" onclick={on_edit}>
                        <Icon icon_id={IconId::HeroiconsSolidPencilSquare} class="w-4 h-4" />
                        {"Edit"}
                    </button>
                    <button class="btn btn-error btn-sm" onclick={on_delete}>
                        <Icon icon_id={IconId::HeroiconsSolidTrash} class="w-4 h-4" />
                        {"Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
