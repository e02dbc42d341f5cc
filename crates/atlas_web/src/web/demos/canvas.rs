use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use webapi_atlas::CloseHandle;

use super::{demo_class, DoneButton};
use crate::ui_model::CANVAS_COLORS;

const WIDTH: u32 = 480;
const HEIGHT: u32 = 300;
const BACKGROUND: &str = "#0a0f1a";

fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Result<web_sys::CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())
}

#[allow(deprecated)]
fn clear(canvas: &web_sys::HtmlCanvasElement) -> Result<(), String> {
    let ctx = context_2d(canvas)?;
    ctx.set_fill_style(&JsValue::from_str(BACKGROUND));
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    Ok(())
}

#[allow(deprecated)]
fn stroke(
    canvas: &web_sys::HtmlCanvasElement,
    from: (f64, f64),
    to: (f64, f64),
    color: &str,
) -> Result<(), String> {
    let ctx = context_2d(canvas)?;
    ctx.set_stroke_style(&JsValue::from_str(color));
    ctx.set_line_width(4.0);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.stroke();
    Ok(())
}

fn point(ev: &MouseEvent) -> (f64, f64) {
    (ev.offset_x() as f64, ev.offset_y() as f64)
}

#[component]
pub(super) fn CanvasDemo(open: bool, on_close: CloseHandle) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (color, set_color) = signal(CANVAS_COLORS[0].0);
    // Last pointer position while the button is held.
    let last = StoredValue::new(None::<(f64, f64)>);

    canvas_ref.on_load(|canvas| {
        if let Err(e) = clear(&canvas) {
            crate::web::console_warn(&e);
        }
    });

    let on_down = move |ev: MouseEvent| last.set_value(Some(point(&ev)));
    let on_up = move |_: MouseEvent| last.set_value(None);
    let on_move = move |ev: MouseEvent| {
        let Some(from) = last.get_value() else {
            return;
        };
        let to = point(&ev);
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Err(e) = stroke(&canvas, from, to, color.get_untracked()) {
                crate::web::console_warn(&e);
            }
        }
        last.set_value(Some(to));
    };

    let on_clear = move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Err(e) = clear(&canvas) {
                crate::web::console_warn(&e);
            }
        }
    };

    let swatches = CANVAS_COLORS
        .iter()
        .map(|&(hex, name)| {
            view! {
                <button
                    class=move || if color.get() == hex { "swatch active" } else { "swatch" }
                    style=format!("background:{hex}")
                    title=name
                    on:click=move |_| set_color.set(hex)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class=demo_class(open)>
            <canvas
                class="draw-canvas"
                node_ref=canvas_ref
                width=WIDTH.to_string()
                height=HEIGHT.to_string()
                on:mousedown=on_down
                on:mouseup=on_up
                on:mouseleave=on_up
                on:mousemove=on_move
            ></canvas>
            <div class="demo-controls">
                {swatches}
                <button class="btn ghost" on:click=on_clear>"清除畫布"</button>
            </div>
            <DoneButton on_close=on_close />
        </div>
    }
}
