use std::f64::consts::PI;

use shared::{Segment, Wheel};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::wheel_utils::label_color;

pub const CANVAS_SIZE: u32 = 800;

const RIM_MARGIN: f64 = 40.0;
const HUB_RADIUS: f64 = 60.0;
const HUB_STROKE: &str = "#dd86ca";
const POINTER_FILL: &str = "#c95ba8";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub wheel: Wheel,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.wheel.clone(), move |wheel| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(err) = draw_wheel(&canvas, wheel) {
                    log::error!("Failed to draw wheel {}: {err:?}", wheel.id);
                }
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="w-full max-w-[520px] aspect-square mx-auto"
        />
    }
}

fn draw_wheel(canvas: &HtmlCanvasElement, wheel: &Wheel) -> Result<(), JsValue> {
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = center_x.min(center_y) - RIM_MARGIN;

    context.clear_rect(0.0, 0.0, width, height);

    // Slice 0 starts at 12 o'clock before rotation.
    let slice = 2.0 * PI / wheel.segments.len() as f64;
    for (index, segment) in wheel.segments.iter().enumerate() {
        let start = index as f64 * slice + wheel.rotation - PI / 2.0;
        draw_slice(&context, segment, center_x, center_y, radius, start, slice)?;
    }

    draw_hub(&context, center_x, center_y)?;
    draw_pointer(&context, center_x);
    Ok(())
}

fn draw_slice(
    context: &CanvasRenderingContext2d,
    segment: &Segment,
    center_x: f64,
    center_y: f64,
    radius: f64,
    start: f64,
    slice: f64,
) -> Result<(), JsValue> {
    context.begin_path();
    context.move_to(center_x, center_y);
    context.arc(center_x, center_y, radius, start, start + slice)?;
    context.close_path();
    context.set_fill_style_str(&segment.color);
    context.fill();
    context.set_stroke_style_str("#FFFFFF");
    context.set_line_width(3.0);
    context.stroke();

    context.save();
    context.translate(center_x, center_y)?;
    context.rotate(start + slice / 2.0)?;
    context.set_text_align("right");
    context.set_shadow_color("rgba(0, 0, 0, 0.15)");
    context.set_shadow_blur(2.0);
    context.set_fill_style_str(label_color(segment));

    if segment.emoji.is_empty() {
        context.set_font("600 14px Poppins");
        context.fill_text(&segment.text, radius - 50.0, 5.0)?;
    } else {
        context.set_font(&format!("{}px Arial", segment.emoji_size));
        context.fill_text(&segment.emoji, radius - 50.0, 2.0)?;
        context.set_font("600 13px Poppins");
        context.fill_text(&segment.text, radius - 85.0, 5.0)?;
    }

    context.restore();
    Ok(())
}

fn draw_hub(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64) -> Result<(), JsValue> {
    context.begin_path();
    context.arc(center_x, center_y, HUB_RADIUS, 0.0, 2.0 * PI)?;
    context.set_fill_style_str("#FFFFFF");
    context.fill();
    context.set_stroke_style_str(HUB_STROKE);
    context.set_line_width(4.0);
    context.stroke();
    Ok(())
}

// Fixed at 12 o'clock; it never rotates with the wheel.
fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64) {
    context.begin_path();
    context.move_to(center_x - 30.0, 10.0);
    context.line_to(center_x + 30.0, 10.0);
    context.line_to(center_x, 70.0);
    context.close_path();
    context.set_fill_style_str(POINTER_FILL);
    context.fill();
}
