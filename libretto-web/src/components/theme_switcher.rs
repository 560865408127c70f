use shared::session::StorageBackend;
use web_sys::window;
use yew::{
    Callback, Classes, Html, Properties, function_component, html, use_effect_with, use_state,
};
use yew_icons::{Icon, IconId};

use crate::storage::BrowserStorage;

/// Durable storage key holding the theme choice.
const THEME_KEY: &str = "theme";

fn apply_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("data-theme", theme);
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let current_theme = use_state(|| "light".to_string());

    // Stored choice wins; otherwise follow the system preference.
    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |()| {
            let stored = BrowserStorage
                .get(THEME_KEY)
                .filter(|theme| !theme.is_empty());
            let theme = stored.unwrap_or_else(|| {
                let system_prefers_dark = window()
                    .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
                    .flatten()
                    .is_some_and(|media_query| media_query.matches());
                if system_prefers_dark {
                    "dark".to_string()
                } else {
                    "light".to_string()
                }
            });
            apply_theme(&theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let new_theme = if *current_theme == "dark" {
                "light"
            } else {
                "dark"
            };
            BrowserStorage.set(THEME_KEY, new_theme);
            apply_theme(new_theme);
            current_theme.set(new_theme.to_string());
        })
    };

    // Sun in dark mode (to switch to light), moon in light mode.
    let theme_icon = match current_theme.as_str() {
        "light" => IconId::HeroiconsSolidMoon,
        _ => IconId::HeroiconsSolidSun,
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label="Toggle theme"
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
