use shared::models::{Book, Quote, Resource};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::Navbar;
use crate::guard::NavigationGuard;
use crate::pages::{
    BookFormPage, BooksPage, ErrorPage, HomePage, LoginPage, QuoteFormPage, QuotesPage,
    RegisterPage,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The app routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/books")]
    Books,
    #[at("/books/edit")]
    BookForm,
    #[at("/quotes")]
    Quotes,
    #[at("/quotes/edit")]
    QuoteForm,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Access class of a page, as enforced by the navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageClass {
    /// Only reachable without a session (login, register).
    PublicOnly,
    /// Requires an active session.
    Protected,
    /// Reachable either way.
    Neutral,
}

/// Classify a route for the navigation guard.
pub fn page_class(route: &Route) -> PageClass {
    match route {
        Route::Login | Route::Register => PageClass::PublicOnly,
        Route::Home | Route::Books | Route::BookForm | Route::Quotes | Route::QuoteForm => {
            PageClass::Protected
        }
        Route::NotFound => PageClass::Neutral,
    }
}

/// Route bindings for a resource kind's screens.
pub trait Routed: Resource {
    /// The listing route.
    const LIST: Route;
    /// The edit/create form route.
    const FORM: Route;
}

impl Routed for Book {
    const LIST: Route = Route::Books;
    const FORM: Route = Route::BookForm;
}

impl Routed for Quote {
    const LIST: Route = Route::Quotes;
    const FORM: Route = Route::QuoteForm;
}

/// Switch function for the routes.
pub fn switch(route: Route) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    let page = match &route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Books => html! { <BooksPage /> },
        Route::BookForm => html! { <BookFormPage /> },
        Route::Quotes => html! { <QuotesPage /> },
        Route::QuoteForm => html! { <QuoteFormPage /> },
        Route::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <NavigationGuard route={route.clone()}>
            <Navbar current_route={route} />
            <main class="container mx-auto">{ page }</main>
        </NavigationGuard>
    }
}
