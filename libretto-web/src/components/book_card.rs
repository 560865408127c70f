use shared::models::Book;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct BookCardProps {
    pub book: Book,
    pub on_edit: Callback<Book>,
    pub on_delete: Callback<i64>,
}

#[function_component(BookCard)]
pub fn book_card(props: &BookCardProps) -> Html {
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let book = props.book.clone();
        Callback::from(move |_| on_edit.emit(book.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = props.book.id;
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <div class="card bg-base-200 shadow-xl h-full">
            <div class="card-body">
                <h2 class="card-title">{ &props.book.title }</h2>
                <p class="text-base-content/70">{ format!("by {}", props.book.author) }</p>
                {
                    props.book.publication_date.map_or_else(Html::default, |date| html! {
                        <p class="text-xs text-base-content/50">{ format!("Published: {date}") }</p>
                    })
                }
                <div class="card-actions justify-end">
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
