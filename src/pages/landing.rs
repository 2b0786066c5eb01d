use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use chrono::{Datelike, Utc};

use crate::acquire::AcquirePanel;
use crate::motion::{self, StoryFrame};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_pos = window_clone.scroll_y().unwrap();
                    let viewport = window_clone.inner_height().unwrap().as_f64().unwrap();

                    // Drive the pinned chapters from the story track's progress.
                    if let Some(track) = document.query_selector(".story-track").ok().flatten() {
                        let rect = track.get_bounding_client_rect();
                        let track_top = rect.top() + scroll_pos;
                        let progress =
                            motion::track_progress(scroll_pos, track_top, rect.height(), viewport);
                        let frame = StoryFrame::at(progress);

                        if let Some(intro) =
                            document.query_selector(".chapter-intro").ok().flatten()
                        {
                            // A faded hero must not keep swallowing clicks meant
                            // for the chapters stacked above it.
                            let visibility = if frame.intro_opacity > 0.001 {
                                "visible"
                            } else {
                                "hidden"
                            };
                            let _ = intro.set_attribute(
                                "style",
                                &format!(
                                    "opacity: {}; transform: scale({}); visibility: {};",
                                    frame.intro_opacity, frame.intro_scale, visibility
                                ),
                            );
                        }

                        if let Some(dot) = document.query_selector(".portal-dot").ok().flatten() {
                            let _ = dot.set_attribute(
                                "style",
                                &format!("transform: scale({})", frame.dot_scale),
                            );
                        }

                        if let Some(chapter) =
                            document.query_selector(".chapter-etymology").ok().flatten()
                        {
                            let _ = chapter.set_attribute(
                                "style",
                                &format!(
                                    "opacity: {}; transform: translateY({}px)",
                                    frame.etymology_opacity, frame.etymology_rise
                                ),
                            );
                        }

                        if let Some(chapter) =
                            document.query_selector(".chapter-crypto").ok().flatten()
                        {
                            let _ = chapter.set_attribute(
                                "style",
                                &format!(
                                    "opacity: {}; transform: translateY({}px)",
                                    frame.crypto_opacity, frame.crypto_rise
                                ),
                            );
                        }

                        if let Some(chapter) =
                            document.query_selector(".chapter-vision").ok().flatten()
                        {
                            let _ = chapter.set_attribute(
                                "style",
                                &format!(
                                    "opacity: {}; transform: translateY({}px)",
                                    frame.vision_opacity, frame.vision_rise
                                ),
                            );
                        }

                        if let Some(overlay) =
                            document.query_selector(".chapter-handoff").ok().flatten()
                        {
                            let _ = overlay.set_attribute(
                                "style",
                                &format!("opacity: {}", frame.handoff_opacity),
                            );
                        }
                    }

                    // Reveal cards and section headers once they clear the lower fold.
                    if let Ok(nodes) = document.query_selector_all(".reveal") {
                        for i in 0..nodes.length() {
                            let element = match nodes
                                .item(i)
                                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                            {
                                Some(element) => element,
                                None => continue,
                            };
                            let classes = element.class_name();
                            if classes.contains("visible") {
                                continue;
                            }
                            if element.get_bounding_client_rect().top() < viewport * 0.85 {
                                element.set_class_name(&format!("{} visible", classes));
                            }
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Paint the first frame before any scrolling happens.
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
        <div class="landing-page">
            <div class="noise-overlay"></div>

            <section class="story-track">
                <div class="story-stage">
                    <div class="chapter chapter-intro">
                        <div class="status-pill">
                            <span class="pulse-dot"></span>
                            {"Premium Domain Available"}
                        </div>
                        <div class="hero-hint">
                            <span>{"This could be your domain"}</span>
                            <span class="hint-arrow">{"\u{2193}"}</span>
                        </div>
                        <h1 class="hero-word">
                            {"JEET"}
                            <span class="portal-dot">{"."}</span>
                            <span class="hero-dim">{"ING"}</span>
                        </h1>
                        <p class="hero-tagline">{"The Science of Winning Continuous"}</p>
                        <a class="hero-cta" href="#acquire">
                            {"Acquire This Asset"}
                            <span class="cta-arrow">{"\u{2192}"}</span>
                        </a>
                    </div>

                    <div class="chapter chapter-etymology">
                        <span class="chapter-label">{"01 // ETYMOLOGY"}</span>
                        <h2>{"In Sanskrit,"}<br/>{"Victory."}</h2>
                        <p class="chapter-copy">
                            {"A name rooted in millennia of achievement, signifying the moment of triumph."}
                        </p>
                    </div>

                    <div class="chapter chapter-crypto">
                        <span class="chapter-label">{"02 // WEB3_DIALECT"}</span>
                        <h2>{"In Crypto,"}<br/><span class="accent">{"The Exit."}</span></h2>
                        <p class="chapter-copy">
                            {"Reclaiming the meme. Jeeting is no longer just selling; it's the art of realized gains."}
                        </p>
                    </div>

                    <div class="chapter chapter-vision">
                        <span class="chapter-label">{"03 // THE_FUTURE"}</span>
                        <h2>{"One Domain"}<br/><span class="slant">{"Unlimited."}</span></h2>
                        <p class="chapter-copy">
                            {"The ultimate action-oriented TLD for those who never stop winning."}
                        </p>
                    </div>

                    <div class="chapter chapter-handoff"></div>
                </div>
            </section>

            <section id="vision" class="use-cases">
                <div class="use-cases-inner">
                    <div class="section-head reveal">
                        <h2>{"Infinite Possibilities."}</h2>
                        <p class="section-sub">
                            {"From market intelligence to pro gaming, JEET.ING powers the next generation of winners."}
                        </p>
                    </div>

                    <div class="card-grid">
                        <div class="case-card card-wide reveal">
                            <div>
                                <div class="card-chip">{"\u{2197}"}</div>
                                <h3>{"Market"}<br/>{"Intelligence."}</h3>
                                <p class="card-copy">
                                    {"The hub for professional traders. Track the \"jeets\" and the \"whales\" with surgical precision on a domain that defines the market."}
                                </p>
                            </div>
                            <a class="card-cta" href="#market">{"View Potential"}</a>
                        </div>

                        <div class="case-card card-tall reveal">
                            <div>
                                <h3>{"Pro-Gaming"}<br/>{"Arena."}</h3>
                                <p class="card-copy bright">
                                    {"A matchmaking elite lobby where every win is a jeet. Build the next Twitch or FaceIt on jeet.ing."}
                                </p>
                            </div>
                            <div class="card-meta">{"VALUATION_INDEX: HIGH \u{2192}"}</div>
                            <div class="card-watermark">{"GG"}</div>
                        </div>

                        <div class="case-card card-square reveal">
                            <div>
                                <h4>{"Lifestyle."}</h4>
                                <p class="card-copy">{"Performance brands and victory-driven content."}</p>
                            </div>
                        </div>

                        <div class="case-card card-square reveal">
                            <div>
                                <h4>{"SaaS."}</h4>
                                <p class="card-copy">{"Winning automation and scale-up tools."}</p>
                            </div>
                        </div>

                        <div class="case-card card-square reveal">
                            <div>
                                <h4>{"Venture."}</h4>
                                <p class="card-copy">{"Signaling the moment of exit and success."}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="market" class="stats-band">
                <div class="stats-glow"></div>
                <div class="stats-inner">
                    <h2 class="reveal">{"Strategic"}<br/>{"Real Estate."}</h2>
                    <div class="stats-grid reveal">
                        <div class="stat">
                            <span class="stat-value">{"4"}</span>
                            <span class="stat-label">{"Characters"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value">{".ing"}</span>
                            <span class="stat-label">{"Action TLD"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value">{"AA"}</span>
                            <span class="stat-label">{"Brand Grade"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value">{"1/1"}</span>
                            <span class="stat-label">{"Uniqueness"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section id="acquire" class="acquire-track">
                <div class="acquire-pin">
                    <div class="acquire-grid">
                        <div class="acquire-pitch reveal">
                            <h2>{"Become"}<br/>{"The Owner."}</h2>
                            <p>
                                {"Jeet.ing is not a purchase; it is a strategic positioning. Command the narrative of victory in the digital age."}
                            </p>
                            <div class="listing-flags">
                                <div class="listing-flag">
                                    <span class="flag-dot live"></span>
                                    {"STATUS: OPEN_NEGOTIATION"}
                                </div>
                                <div class="listing-flag">
                                    <span class="flag-dot listed"></span>
                                    {"LISTING: PREMIUM_4L_ACTION"}
                                </div>
                            </div>
                        </div>
                        <div class="reveal">
                            <AcquirePanel />
                        </div>
                    </div>

                    <footer class="site-footer">
                        <div>{format!("\u{a9} {} JEET.ING ASSET MGMT", Utc::now().year())}</div>
                        <div class="footer-links">
                            <a href="#">{"Portfolios"}</a>
                            <a href="#">{"Compliance"}</a>
                            <a href="#">{"Network"}</a>
                        </div>
                    </footer>
                </div>
            </section>

            <div class="marquee">
                <div class="marquee-inner">{"WINNING_ALWAYS_WINNING_ALWAYS_WINNING_ALWAYS"}</div>
            </div>

            <style>
                {r#"
                ::selection {
                    background: #6366f1;
                    color: #fff;
                }

                .landing-page {
                    position: relative;
                    background: #0a0a0a;
                    color: #e0e0e0;
                }

                .noise-overlay {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    opacity: 0.03;
                    z-index: 9999;
                    background-image: url('https://grainy-gradients.vercel.app/noise.svg');
                }

                /* ---- Story track ---- */

                .story-track {
                    position: relative;
                    height: 400vh;
                }

                .story-stage {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .chapter {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 2rem;
                }

                .chapter-etymology,
                .chapter-crypto,
                .chapter-vision {
                    opacity: 0;
                    pointer-events: none;
                }

                .chapter-handoff {
                    opacity: 0;
                    pointer-events: none;
                    background: linear-gradient(to bottom, transparent, #000);
                }

                .status-pill {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 9999px;
                    padding: 0.4rem 1rem;
                    backdrop-filter: blur(12px);
                    margin-bottom: 3rem;
                    font-family: monospace;
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.7);
                }

                .pulse-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #22c55e;
                    box-shadow: 0 0 10px rgba(34, 197, 94, 0.5);
                    animation: pulse 2s ease-in-out infinite;
                }

                .hero-hint {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    color: #818cf8;
                    font-family: monospace;
                    font-style: italic;
                    font-size: 0.8rem;
                    letter-spacing: 0.1em;
                }

                .hint-arrow {
                    animation: bounce 1s ease-in-out infinite;
                }

                .hero-word {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 15vw;
                    font-weight: 900;
                    line-height: 1;
                    letter-spacing: 0.02em;
                    margin: 0;
                }

                .portal-dot {
                    display: inline-block;
                    position: relative;
                    color: #6366f1;
                    will-change: transform;
                }

                .hero-dim {
                    opacity: 0.3;
                }

                .hero-tagline {
                    margin: 2rem auto 0;
                    max-width: 32rem;
                    font-size: 0.75rem;
                    font-weight: 300;
                    text-transform: uppercase;
                    letter-spacing: 0.5em;
                    line-height: 1.8;
                    opacity: 0.4;
                }

                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 3rem;
                    padding-bottom: 0.25rem;
                    border-bottom: 1px solid #6366f1;
                    color: #818cf8;
                    font-size: 0.65rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    text-decoration: none;
                    transition: color 0.3s, border-color 0.3s;
                    z-index: 20;
                }

                .hero-cta:hover {
                    color: #fff;
                    border-color: #fff;
                }

                .cta-arrow {
                    transition: transform 0.3s;
                }

                .hero-cta:hover .cta-arrow {
                    transform: translateX(4px);
                }

                .chapter-label {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                    color: #6366f1;
                    font-family: monospace;
                    font-size: 0.8rem;
                }

                .chapter-label::before {
                    content: '';
                    width: 2rem;
                    height: 1px;
                    background: #6366f1;
                }

                .chapter h2 {
                    font-size: clamp(3.5rem, 10vw, 10rem);
                    font-weight: 900;
                    line-height: 0.85;
                    letter-spacing: -0.04em;
                    margin: 0 0 2rem;
                }

                .chapter h2 .accent {
                    color: #818cf8;
                }

                .chapter h2 .slant {
                    font-style: italic;
                }

                .chapter-copy {
                    margin: 0 auto;
                    max-width: 42rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.6;
                }

                /* ---- Reveal-on-scroll ---- */

                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .card-grid .reveal:nth-child(2) { transition-delay: 0.1s; }
                .card-grid .reveal:nth-child(3) { transition-delay: 0.2s; }
                .card-grid .reveal:nth-child(4) { transition-delay: 0.3s; }
                .card-grid .reveal:nth-child(5) { transition-delay: 0.4s; }

                /* ---- Use cases ---- */

                .use-cases {
                    position: relative;
                    min-height: 100vh;
                    background: #000;
                    padding: 10rem 2rem;
                }

                .use-cases-inner {
                    max-width: 1400px;
                    margin: 0 auto;
                }

                .section-head {
                    text-align: center;
                    margin-bottom: 5rem;
                }

                .section-head h2 {
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    font-weight: 900;
                    letter-spacing: -0.03em;
                    margin: 0 0 1.5rem;
                }

                .section-sub {
                    margin: 0 auto;
                    max-width: 42rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 1.15rem;
                    font-weight: 300;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(12, 1fr);
                    gap: 1.5rem;
                }

                .case-card {
                    position: relative;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    background: linear-gradient(to bottom right, #0d0d0d, #0a0a0a);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 2.5rem;
                    padding: 3rem;
                    transition: background 0.7s, border-color 0.7s,
                        opacity 0.8s ease, transform 0.8s ease;
                }

                .case-card:hover {
                    background: linear-gradient(to bottom right, #4f46e5, #4338ca);
                    border-color: rgba(99, 102, 241, 0.3);
                }

                .card-wide {
                    grid-column: span 7;
                    min-height: 600px;
                }

                .card-tall {
                    grid-column: span 5;
                    min-height: 600px;
                }

                .card-square {
                    grid-column: span 4;
                    aspect-ratio: 1;
                    justify-content: flex-end;
                }

                .card-chip {
                    width: 3.5rem;
                    height: 3.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                    margin-bottom: 2.5rem;
                    transition: background 0.5s, border-color 0.5s;
                }

                .case-card:hover .card-chip {
                    background: #4f46e5;
                    border-color: transparent;
                }

                .case-card h3 {
                    font-size: clamp(2.5rem, 4.5vw, 4.5rem);
                    font-weight: 900;
                    letter-spacing: -0.03em;
                    line-height: 1;
                    margin: 0 0 1.5rem;
                }

                .card-tall h3 {
                    font-size: clamp(2rem, 3.5vw, 3rem);
                    line-height: 1.1;
                }

                .case-card h4 {
                    font-size: 1.75rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin: 0 0 0.75rem;
                }

                .card-copy {
                    max-width: 28rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 1.1rem;
                    font-weight: 300;
                    line-height: 1.6;
                    margin: 0;
                    transition: color 0.5s;
                }

                .card-copy.bright {
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 20rem;
                }

                .case-card:hover .card-copy {
                    color: rgba(255, 255, 255, 0.9);
                }

                .card-cta {
                    align-self: flex-start;
                    margin-top: 3rem;
                    background: #fff;
                    color: #000;
                    border-radius: 9999px;
                    padding: 1rem 2.5rem;
                    font-size: 0.6rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    text-decoration: none;
                    z-index: 1;
                    transition: background 0.3s, color 0.3s;
                }

                .card-cta:hover {
                    background: #6366f1;
                    color: #fff;
                }

                .card-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-family: monospace;
                    font-size: 0.65rem;
                    letter-spacing: 0.2em;
                    opacity: 0.4;
                    transition: opacity 0.5s;
                    z-index: 1;
                }

                .case-card:hover .card-meta {
                    opacity: 1;
                }

                .card-watermark {
                    position: absolute;
                    bottom: -5rem;
                    right: -5rem;
                    font-size: 15rem;
                    font-weight: 900;
                    color: rgba(0, 0, 0, 0.1);
                    user-select: none;
                    pointer-events: none;
                }

                /* ---- Stats ---- */

                .stats-band {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    overflow: hidden;
                    padding: 0 1.5rem;
                }

                .stats-glow {
                    position: absolute;
                    width: 150%;
                    height: 150%;
                    background: radial-gradient(circle at center, rgba(79, 70, 229, 0.07) 0%, transparent 70%);
                    pointer-events: none;
                }

                .stats-inner {
                    max-width: 64rem;
                    text-align: center;
                    z-index: 1;
                }

                .stats-inner h2 {
                    font-size: clamp(3.5rem, 9vw, 9rem);
                    font-style: italic;
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    line-height: 1;
                    margin: 0 0 4rem;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    transition: transform 0.3s;
                }

                .stat:hover {
                    transform: scale(1.1);
                }

                .stat-value {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #6366f1;
                }

                .stat-label {
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    opacity: 0.3;
                }

                /* ---- Acquisition ---- */

                .acquire-track {
                    position: relative;
                    height: 200vh;
                    background: #000;
                }

                .acquire-pin {
                    position: sticky;
                    top: 0;
                    min-height: 100vh;
                    padding: 8rem 1.5rem 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                }

                .acquire-grid {
                    width: 100%;
                    max-width: 80rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }

                .acquire-pitch h2 {
                    font-size: clamp(3.5rem, 8vw, 8rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    line-height: 0.85;
                    margin: 0 0 3rem;
                }

                .acquire-pitch p {
                    max-width: 32rem;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 1.35rem;
                    font-weight: 300;
                    line-height: 1.6;
                    margin: 0 0 3rem;
                }

                .listing-flags {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    font-family: monospace;
                    font-size: 0.65rem;
                    letter-spacing: 0.1em;
                    color: #818cf8;
                }

                .listing-flag {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .flag-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                }

                .flag-dot.live {
                    background: #22c55e;
                    box-shadow: 0 0 15px rgba(34, 197, 94, 0.5);
                    animation: pulse 2s ease-in-out infinite;
                }

                .flag-dot.listed {
                    background: rgba(255, 255, 255, 0.2);
                }

                /* ---- Footer ---- */

                .site-footer {
                    width: 100%;
                    max-width: 80rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    margin-top: 8rem;
                    padding: 3rem 0;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.6rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    opacity: 0.2;
                }

                .footer-links {
                    display: flex;
                    gap: 4rem;
                }

                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.3s;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                /* ---- Kinetic backdrop ---- */

                .marquee {
                    position: fixed;
                    bottom: -5rem;
                    left: 0;
                    width: 100%;
                    overflow: hidden;
                    pointer-events: none;
                    opacity: 0.015;
                    z-index: 0;
                }

                .marquee-inner {
                    font-size: 40vh;
                    font-weight: 900;
                    line-height: 1;
                    white-space: nowrap;
                    user-select: none;
                    animation: marquee-drift 30s linear infinite;
                }

                @keyframes marquee-drift {
                    from { transform: translateX(0); }
                    to { transform: translateX(-1000px); }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(6px); }
                }

                /* ---- Breakpoints ---- */

                @media (max-width: 1024px) {
                    .card-wide,
                    .card-tall {
                        grid-column: span 12;
                    }

                    .acquire-grid {
                        grid-template-columns: 1fr;
                        gap: 4rem;
                    }
                }

                @media (max-width: 768px) {
                    .card-square {
                        grid-column: span 12;
                        aspect-ratio: auto;
                        min-height: 280px;
                    }

                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .site-footer {
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .footer-links {
                        gap: 2rem;
                    }

                    .hero-word {
                        font-size: 18vw;
                    }
                }
                "#}
            </style>
        </div>
    }
}
