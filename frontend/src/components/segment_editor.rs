use shared::constants::{MAX_EMOJI_SIZE, MAX_SEGMENTS, MIN_EMOJI_SIZE};
use shared::{Segment, SegmentField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::WheelCommand;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SegmentEditorProps {
    pub segments: Vec<Segment>,
    pub on_command: Callback<WheelCommand>,
}

#[function_component(SegmentEditor)]
pub fn segment_editor(props: &SegmentEditorProps) -> Html {
    let count_ref = use_node_ref();

    let on_apply_count = {
        let count_ref = count_ref.clone();
        props.on_command.reform(move |_: MouseEvent| {
            let raw = count_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            WheelCommand::SetSegmentCount(raw)
        })
    };

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex items-end gap-2">
                <div class="flex-1">
                    <label class={styles::TEXT_LABEL} for="segment-count">{ "Número de segmentos" }</label>
                    <input
                        id="segment-count"
                        ref={count_ref}
                        class={classes!(styles::INPUT, "mt-2")}
                        type="number"
                        min="2"
                        max={MAX_SEGMENTS.to_string()}
                        value={props.segments.len().to_string()}
                    />
                </div>
                <button class={styles::BUTTON_SECONDARY} onclick={on_apply_count}>{ "Aplicar" }</button>
            </div>

            <div class="max-h-[60vh] overflow-y-auto pr-1">
                { for props.segments.iter().enumerate().map(|(index, segment)| html! {
                    <SegmentRow
                        key={index}
                        {index}
                        segment={segment.clone()}
                        on_command={props.on_command.clone()}
                    />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SegmentRowProps {
    index: usize,
    segment: Segment,
    on_command: Callback<WheelCommand>,
}

fn field_input(on_command: &Callback<WheelCommand>, index: usize, field: SegmentField) -> Callback<InputEvent> {
    on_command.reform(move |e: InputEvent| WheelCommand::UpdateSegment {
        index,
        field,
        value: e.target_unchecked_into::<HtmlInputElement>().value(),
    })
}

#[function_component(SegmentRow)]
fn segment_row(props: &SegmentRowProps) -> Html {
    let index = props.index;
    let segment = &props.segment;
    let emoji_size = use_state(|| segment.emoji_size);
    {
        let emoji_size = emoji_size.clone();
        use_effect_with(segment.emoji_size, move |size| {
            emoji_size.set(*size);
            || ()
        });
    }

    let on_size = {
        let emoji_size = emoji_size.clone();
        props.on_command.reform(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Ok(size) = value.parse() {
                emoji_size.set(size);
            }
            WheelCommand::UpdateSegment { index, field: SegmentField::EmojiSize, value }
        })
    };
    let on_remove = props.on_command.reform(move |_: MouseEvent| WheelCommand::RemoveSegment(index));

    html! {
        <div class={styles::SEGMENT_ROW}>
            <input
                class={styles::COLOR_SWATCH}
                type="color"
                value={segment.color.clone()}
                oninput={field_input(&props.on_command, index, SegmentField::Color)}
            />
            <input
                class={classes!(styles::INPUT, "text-center", "px-1")}
                type="text"
                maxlength="4"
                value={segment.emoji.clone()}
                oninput={field_input(&props.on_command, index, SegmentField::Emoji)}
            />
            <input
                class={styles::INPUT}
                type="text"
                value={segment.text.clone()}
                oninput={field_input(&props.on_command, index, SegmentField::Text)}
            />
            <label class="flex items-center gap-1">
                <input
                    class="w-16 accent-pink-500"
                    type="range"
                    min={MIN_EMOJI_SIZE.to_string()}
                    max={MAX_EMOJI_SIZE.to_string()}
                    value={segment.emoji_size.to_string()}
                    oninput={on_size}
                />
                <span class={styles::TEXT_SMALL}>{ *emoji_size }</span>
            </label>
            <button class={styles::BUTTON_ICON} title="Remover segmento" onclick={on_remove}>{ "✕" }</button>
        </div>
    }
}
