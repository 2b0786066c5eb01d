use yew::prelude::*;
use yew_hooks::use_event_with_window;
use stylist::yew::use_style;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

// Anything the ring should flare over. Plain divs stay cold unless they opt
// in with data-hover.
const HOT_TARGETS: &str = "a, button, input, [data-hover]";

#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let cursor_ref = use_node_ref();
    let hot = use_state_eq(|| false);

    let style = use_style(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        pointer-events: none;
        z-index: 10000;
        transform: translate(-100px, -100px);

        .ring {
            display: block;
            width: 32px;
            height: 32px;
            border: 1px solid rgba(255, 255, 255, 0.3);
            border-radius: 50%;
            mix-blend-mode: difference;
            transition: transform 0.25s ease, background-color 0.25s ease;
        }

        .ring.hot {
            transform: scale(2.5);
            background-color: #fff;
        }

        .core {
            position: absolute;
            top: 14px;
            left: 14px;
            width: 4px;
            height: 4px;
            border-radius: 50%;
            background: #0a0a0a;
        }

        @media (max-width: 768px) {
            display: none;
        }
    "#,
    );

    {
        let cursor_ref = cursor_ref.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            // Written straight to the node: routing every mousemove through
            // state would re-render the whole tree at pointer speed.
            if let Some(node) = cursor_ref.cast::<HtmlElement>() {
                let _ = node.set_attribute(
                    "style",
                    &format!(
                        "transform: translate({}px, {}px)",
                        e.client_x() - 16,
                        e.client_y() - 16
                    ),
                );
            }
        });
    }

    {
        let hot = hot.clone();
        use_event_with_window("mouseover", move |e: MouseEvent| {
            let over_target = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(HOT_TARGETS).ok())
                .flatten()
                .is_some();
            hot.set(over_target);
        });
    }

    html! {
        <div ref={cursor_ref} class={style}>
            <span class={classes!("ring", (*hot).then_some("hot"))}>
                {
                    if *hot {
                        html! { <span class="core"></span> }
                    } else {
                        html! {}
                    }
                }
            </span>
        </div>
    }
}
