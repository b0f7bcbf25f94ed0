use shared::Segment;
use yew::prelude::*;

use crate::styles;

const DARK_LABEL: &str = "#8B4B6B";
const LIGHT_LABEL: &str = "#FFFFFF";

/// Labels on white slices would vanish, so they get the dark plum instead.
pub fn label_color(segment: &Segment) -> &'static str {
    if segment.is_light() {
        DARK_LABEL
    } else {
        LIGHT_LABEL
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnerPopupProps {
    pub winner: Option<Segment>,
}

#[function_component(WinnerPopup)]
pub fn winner_popup(props: &WinnerPopupProps) -> Html {
    let Some(winner) = &props.winner else {
        return html! {};
    };

    html! {
        <div class={styles::POPUP_BACKDROP}>
            <div
                class={styles::POPUP_CARD}
                style={format!("background-color: {}; color: {};", winner.color, label_color(winner))}
            >
                if !winner.emoji.is_empty() {
                    <span class="text-6xl">{ &winner.emoji }</span>
                }
                <span class="text-3xl font-bold">{ &winner.text }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub enabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let label = if props.enabled { "Girar" } else { "A girar..." };

    html! {
        <button
            class={classes!(styles::BUTTON_PRIMARY, "w-full", "text-lg", "rounded-full", "py-3")}
            disabled={!props.enabled}
            onclick={props.onclick.clone()}
        >
            { label }
        </button>
    }
}
