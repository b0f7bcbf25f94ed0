use yew::prelude::*;

use crate::hooks::WheelCommand;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelTabsProps {
    pub tabs: Vec<String>,
    pub current_id: String,
    pub on_command: Callback<WheelCommand>,
}

/// One tab per wheel, labelled by position rather than id.
#[function_component(WheelTabs)]
pub fn wheel_tabs(props: &WheelTabsProps) -> Html {
    let on_create = props.on_command.reform(|_: MouseEvent| WheelCommand::CreateWheel);
    let on_delete = props.on_command.reform(|_: MouseEvent| WheelCommand::DeleteWheel);

    html! {
        <div class="flex flex-wrap items-end gap-1 mb-4 border-b border-gray-200 dark:border-gray-700">
            { for props.tabs.iter().enumerate().map(|(index, id)| {
                let class = if *id == props.current_id { styles::TAB_ACTIVE } else { styles::TAB };
                let onclick = {
                    let id = id.clone();
                    props.on_command.reform(move |_: MouseEvent| WheelCommand::SelectWheel(id.clone()))
                };
                html! {
                    <button key={id.clone()} {class} {onclick}>
                        { format!("Roda {}", index + 1) }
                    </button>
                }
            }) }
            <button class={styles::TAB} title="Nova roda" onclick={on_create}>{ "+" }</button>
            <div class="ml-auto pb-1">
                <button class={classes!(styles::BUTTON_DANGER, "text-sm")} onclick={on_delete}>
                    { "Apagar roda" }
                </button>
            </div>
        </div>
    }
}
