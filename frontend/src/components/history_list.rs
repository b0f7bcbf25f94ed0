use shared::Segment;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub history: Vec<Segment>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <div>
            <h3 class={styles::TEXT_H3}>{ "Histórico" }</h3>
            if props.history.is_empty() {
                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{ "Nenhum resultado" }</p>
            } else {
                <ol class="mt-2 space-y-1">
                    { for props.history.iter().map(|entry| html! {
                        <li
                            class="rounded-md px-3 py-1 text-sm text-gray-900"
                            style={format!("background-color: {};", entry.color)}
                        >
                            { format!("{} {}", entry.emoji, entry.text) }
                        </li>
                    }) }
                </ol>
            }
        </div>
    }
}
