use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a flash stays up before dismissing itself.
const DISMISS_DELAY_MS: u32 = 5000;

/// Visual tone of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Danger,
}

/// A dismissible notification shown at the top of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// Visual tone.
    pub level: Level,
    /// What the user reads.
    pub message: String,
}

impl Flash {
    /// A success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    /// A warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    /// An error notification.
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: Level::Danger,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub flash: Flash,
    pub on_dismiss: Callback<()>,
}

/// Dismissible alert that also dismisses itself after a few seconds.
///
/// The auto-dismiss timer is dropped when the flash changes or the alert
/// unmounts, so a stale timer never clears a newer message.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    {
        let flash = props.flash.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(flash, move |_| {
            let timer = Timeout::new(DISMISS_DELAY_MS, move || on_dismiss.emit(()));
            move || drop(timer)
        });
    }

    let tone = match props.flash.level {
        Level::Success => "alert-success",
        Level::Warning => "alert-warning",
        Level::Danger => "alert-error",
    };
    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("alert", tone, "mb-4")} role="alert">
            <span>{ props.flash.message.clone() }</span>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_click}>
                {"✕"}
            </button>
        </div>
    }
}
