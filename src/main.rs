use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

mod acquire;
mod config;
mod motion;
mod components {
    pub mod cursor;
}
mod pages {
    pub mod landing;
}

use components::cursor::CursorGlow;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let percent = use_state_eq(|| 0u32);
    let nav_ref = use_node_ref();

    {
        let percent = percent.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_pos = window_clone.scroll_y().unwrap();
                    let viewport = window_clone.inner_height().unwrap().as_f64().unwrap();
                    let doc_height = document
                        .document_element()
                        .map(|root| root.scroll_height() as f64)
                        .unwrap_or(0.0);

                    let page = motion::page_progress(scroll_pos, doc_height, viewport);
                    percent.set(motion::signal_percent(page));

                    // Hand the foreground to the acquisition section as it arrives.
                    if let Some(acquire) = document.query_selector("#acquire").ok().flatten() {
                        let section_top = acquire.get_bounding_client_rect().top() + scroll_pos;
                        let approach =
                            motion::approach_progress(scroll_pos, section_top, viewport);
                        let opacity = motion::sample(motion::HEADER_OPACITY, approach);
                        if let Some(nav) = nav_ref.cast::<web_sys::HtmlElement>() {
                            let _ = nav.set_attribute("style", &format!("opacity: {}", opacity));
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <nav ref={nav_ref} class="top-nav">
            <div class="nav-brand" data-hover="true">
                <span class="brand-mark">{"JEET"}</span>
                <span class="brand-tld">{".ing"}</span>
            </div>
            <div class="nav-links">
                <a href="#vision">{"Origins"}</a>
                <a href="#market">{"Potential"}</a>
                <a href="#acquire">{"Acquire"}</a>
            </div>
            <div class="nav-signal">
                {"SIGNAL: "}{*percent}{"%"}
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem 3rem;
                    mix-blend-mode: difference;
                    box-sizing: border-box;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-size: 1.15rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    cursor: pointer;
                }

                .brand-mark {
                    background: #fff;
                    color: #000;
                    padding: 0.1rem 0.5rem;
                    border-radius: 2px;
                    letter-spacing: 0.05em;
                }

                .brand-tld {
                    opacity: 0.5;
                }

                .nav-links {
                    display: flex;
                    gap: 3rem;
                    font-size: 0.6rem;
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    opacity: 0.6;
                    transition: opacity 0.3s;
                }

                .nav-links:hover {
                    opacity: 1;
                }

                .nav-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.3s;
                }

                .nav-links a:hover {
                    color: #fff;
                }

                .nav-signal {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-family: monospace;
                    font-size: 0.6rem;
                    opacity: 0.7;
                }

                @media (max-width: 640px) {
                    .nav-links {
                        display: none;
                    }

                    .top-nav {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <CursorGlow />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting jeet.ing showcase");
    yew::Renderer::<App>::new().render();
}
