mod wheel_canvas;
mod wheel_utils;

use shared::Theme;
use yew::prelude::*;

use crate::components::{HistoryList, SegmentEditor, WheelTabs};
use crate::hooks::{use_wheel_session, WheelCommand};
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{SpinButton, WinnerPopup};

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    let session = use_wheel_session();
    let screen = session.screen.clone();
    let on_command = session.on_command.clone();

    if !screen.ready {
        return html! {
            <div class={classes!(styles::CONTAINER, "flex", "items-center", "justify-center")}>
                <svg class={styles::LOADING_SPINNER} viewBox="0 0 24 24" fill="none">
                    <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.25" />
                    <path d="M4 12a8 8 0 018-8" stroke="currentColor" stroke-width="4" />
                </svg>
            </div>
        };
    }

    let on_spin = on_command.reform(|_: MouseEvent| WheelCommand::Spin);
    let on_theme = on_command.reform(|_: MouseEvent| WheelCommand::ToggleTheme);
    let theme_label = match screen.theme {
        Theme::Dark => "Modo claro",
        Theme::Light => "Modo escuro",
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <div class="flex items-center justify-between mb-6">
                    <h1 class={styles::TEXT_H1}>{ "Roda da Sorte" }</h1>
                    <button class={styles::BUTTON_ICON} onclick={on_theme}>{ theme_label }</button>
                </div>

                <WheelTabs
                    tabs={screen.tabs.clone()}
                    current_id={screen.current_id.clone()}
                    on_command={on_command.clone()}
                />

                <div class="grid grid-cols-1 lg:grid-cols-[3fr_2fr] gap-6">
                    <div class={classes!(styles::CARD, "flex", "flex-col", "gap-6")}>
                        if let Some(wheel) = &screen.wheel {
                            <WheelCanvas wheel={wheel.clone()} />
                        }
                        <SpinButton enabled={screen.spin_enabled} onclick={on_spin} />
                        <HistoryList history={screen.history.clone()} />
                    </div>

                    <div class={styles::CARD}>
                        <SegmentEditor
                            segments={screen.segments.clone()}
                            on_command={on_command.clone()}
                        />
                    </div>
                </div>
            </div>
            <WinnerPopup winner={screen.winner.clone()} />
        </div>
    }
}
