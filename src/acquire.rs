use yew::prelude::*;
use web_sys::{HtmlInputElement, RequestMode};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use serde::Serialize;
use std::rc::Rc;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AcquireTab {
    #[default]
    Buy,
    Inquiry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InquiryStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

// The panel's entire state. Tab selection and inquiry progress are
// independent: switching tabs mid-send must not lose the send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanelState {
    pub tab: AcquireTab,
    pub inquiry: InquiryStatus,
}

impl PanelState {
    pub fn with_tab(self, tab: AcquireTab) -> Self {
        Self { tab, ..self }
    }

    pub fn begin_send(self) -> Self {
        match self.inquiry {
            InquiryStatus::Idle => Self {
                inquiry: InquiryStatus::Sending,
                ..self
            },
            _ => self,
        }
    }

    pub fn finish_send(self) -> Self {
        match self.inquiry {
            InquiryStatus::Sending => Self {
                inquiry: InquiryStatus::Success,
                ..self
            },
            _ => self,
        }
    }

    pub fn reset_inquiry(self) -> Self {
        match self.inquiry {
            InquiryStatus::Success => Self {
                inquiry: InquiryStatus::Idle,
                ..self
            },
            _ => self,
        }
    }
}

pub enum PanelAction {
    SelectTab(AcquireTab),
    BeginSend,
    FinishSend,
    ResetInquiry,
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PanelAction::SelectTab(tab) => self.with_tab(tab),
            PanelAction::BeginSend => self.begin_send(),
            PanelAction::FinishSend => self.finish_send(),
            PanelAction::ResetInquiry => self.reset_inquiry(),
        };
        Rc::new(next)
    }
}

// Exactly what the collector script expects: two string fields, untrimmed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InquiryPayload {
    pub email: String,
    pub offer: String,
}

impl InquiryPayload {
    // Mirrors the native required-field check for submits that arrive
    // without passing through browser validation.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.offer.is_empty()
    }
}

// The Apps Script endpoint only takes opaque no-cors posts, so a success here
// means the request left the browser, not that the script accepted it.
pub async fn send_inquiry(payload: &InquiryPayload) -> Result<(), gloo_net::Error> {
    Request::post(config::INQUIRY_ENDPOINT)
        .mode(RequestMode::NoCors)
        .json(payload)?
        .send()
        .await?;
    Ok(())
}

#[function_component(AcquirePanel)]
pub fn acquire_panel() -> Html {
    let panel = use_reducer(PanelState::default);
    let email = use_state(String::new);
    let offer = use_state(String::new);

    let select_buy = {
        let panel = panel.clone();
        Callback::from(move |_| panel.dispatch(PanelAction::SelectTab(AcquireTab::Buy)))
    };
    let select_inquiry = {
        let panel = panel.clone();
        Callback::from(move |_| panel.dispatch(PanelAction::SelectTab(AcquireTab::Inquiry)))
    };
    let reset_inquiry = {
        let panel = panel.clone();
        Callback::from(move |_| panel.dispatch(PanelAction::ResetInquiry))
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_offer = {
        let offer = offer.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            offer.set(input.value());
        })
    };

    let on_submit = {
        let panel = panel.clone();
        let email = email.clone();
        let offer = offer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if panel.inquiry != InquiryStatus::Idle {
                return;
            }
            let payload = InquiryPayload {
                email: (*email).clone(),
                offer: (*offer).clone(),
            };
            if !payload.is_complete() {
                return;
            }
            log!("Submitting acquisition inquiry");
            panel.dispatch(PanelAction::BeginSend);
            let panel = panel.clone();
            let email = email.clone();
            let offer = offer.clone();
            spawn_local(async move {
                if let Err(err) = send_inquiry(&payload).await {
                    error!("Inquiry submission failed:", err.to_string());
                }
                // Hold the sending state long enough to read, even on a LAN.
                TimeoutFuture::new(600).await;
                email.set(String::new());
                offer.set(String::new());
                panel.dispatch(PanelAction::FinishSend);
            });
        })
    };

    let sending = panel.inquiry == InquiryStatus::Sending;

    html! {
        <div class="acquire-panel">
            <div class="acquire-tabs">
                <button
                    class={classes!("acquire-tab", (panel.tab == AcquireTab::Buy).then_some("active"))}
                    onclick={select_buy}
                >
                    {"01 // Buy Now"}
                </button>
                <button
                    class={classes!("acquire-tab", (panel.tab == AcquireTab::Inquiry).then_some("active"))}
                    onclick={select_inquiry}
                >
                    {"02 // Inquire"}
                </button>
            </div>
            {
                match panel.tab {
                    AcquireTab::Buy => html! {
                        <div class="acquire-body">
                            <h3>{"Instant Acquisition."}</h3>
                            <p class="acquire-copy">
                                {"Secure JEET.ING immediately through our verified marketplace \
                                  partner. All transfers are handled via secure escrow."}
                            </p>
                            <a
                                class="acquire-primary"
                                href={config::marketplace_search_url()}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Buy Now ($1,500)"}
                            </a>
                            <a
                                class="acquire-ghost"
                                href={config::marketplace_search_url()}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Make Offer"}
                            </a>
                            <div class="acquire-partners">
                                <span>{"SPACESHIP"}</span>
                                <span class="partner-dot"></span>
                                <span>{"AFTERNIC"}</span>
                                <span class="partner-dot"></span>
                                <span>{"ESCROW.COM"}</span>
                            </div>
                        </div>
                    },
                    AcquireTab::Inquiry => match panel.inquiry {
                        InquiryStatus::Success => html! {
                            <div class="acquire-body acquire-logged">
                                <div class="acquire-seal">{"\u{2713}"}</div>
                                <h3>{"Request Logged."}</h3>
                                <p class="acquire-copy">
                                    {"Our digital asset manager will respond via encrypted \
                                      channel shortly."}
                                </p>
                                <button class="acquire-reset" onclick={reset_inquiry}>
                                    {"New Inquiry"}
                                </button>
                            </div>
                        },
                        _ => html! {
                            <form class="acquire-body" onsubmit={on_submit}>
                                <label class="acquire-label">{"Inquiry Email"}</label>
                                <input
                                    required={true}
                                    type="email"
                                    placeholder="ceo@venture.capital"
                                    value={(*email).clone()}
                                    oninput={on_email}
                                    disabled={sending}
                                />
                                <label class="acquire-label">{"Acquisition Offer (USD)"}</label>
                                <input
                                    required={true}
                                    type="text"
                                    placeholder="Minimum $5,000"
                                    value={(*offer).clone()}
                                    oninput={on_offer}
                                    disabled={sending}
                                />
                                <button class="acquire-primary" type="submit" disabled={sending}>
                                    {
                                        if sending {
                                            html! {
                                                <>
                                                    <span class="acquire-spinner"></span>
                                                    {"ESTABLISHING_LINK..."}
                                                </>
                                            }
                                        } else {
                                            html! { "INITIATE_TRANSFER" }
                                        }
                                    }
                                </button>
                                <p class="acquire-fine">
                                    {"Official purchase, escrow clearance via spaceship.com"}
                                </p>
                            </form>
                        },
                    },
                }
            }
            <style>
                {r#"
                .acquire-panel {
                    background: #0d0d0d;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 3rem;
                    overflow: hidden;
                    width: 100%;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }

                .acquire-tabs {
                    display: flex;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .acquire-tab {
                    flex: 1;
                    background: none;
                    border: none;
                    border-bottom: 2px solid transparent;
                    color: rgba(255, 255, 255, 0.2);
                    font-size: 0.65rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    padding: 2rem 0;
                    cursor: pointer;
                    transition: color 0.5s;
                }

                .acquire-tab:hover {
                    color: rgba(255, 255, 255, 0.4);
                }

                .acquire-tab.active {
                    color: #fff;
                    border-bottom-color: #6366f1;
                }

                .acquire-body {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 3rem;
                }

                .acquire-body h3 {
                    font-size: 2rem;
                    font-weight: 900;
                    letter-spacing: -0.02em;
                    margin: 0;
                }

                .acquire-copy {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 1rem;
                    font-weight: 300;
                    line-height: 1.6;
                    margin: 0;
                }

                .acquire-label {
                    color: rgba(255, 255, 255, 0.3);
                    font-size: 0.6rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    margin-bottom: -1rem;
                }

                .acquire-body input {
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    color: #e0e0e0;
                    font-size: 1.1rem;
                    font-weight: 300;
                    padding: 1rem 0.5rem;
                    outline: none;
                    transition: border-color 0.3s;
                }

                .acquire-body input:focus {
                    border-bottom-color: #6366f1;
                }

                .acquire-body input:disabled {
                    opacity: 0.5;
                }

                .acquire-primary {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: #fff;
                    color: #0a0a0a;
                    border: none;
                    border-radius: 1.5rem;
                    font-size: 0.7rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.5em;
                    padding: 1.75rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: background 0.5s, color 0.5s;
                }

                .acquire-primary:hover {
                    background: #4f46e5;
                    color: #fff;
                }

                .acquire-primary:disabled {
                    opacity: 0.5;
                    cursor: wait;
                }

                .acquire-ghost {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    color: #fff;
                    font-size: 0.7rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.5em;
                    padding: 1.75rem;
                    text-decoration: none;
                    transition: background 0.5s;
                }

                .acquire-ghost:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                .acquire-partners {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    opacity: 0.2;
                    font-family: monospace;
                    font-size: 0.65rem;
                    letter-spacing: 0.15em;
                }

                .partner-dot {
                    width: 4px;
                    height: 4px;
                    border-radius: 50%;
                    background: #fff;
                }

                .acquire-fine {
                    color: rgba(255, 255, 255, 0.2);
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    text-align: center;
                    line-height: 1.6;
                    margin: 0;
                }

                .acquire-logged {
                    align-items: center;
                    text-align: center;
                }

                .acquire-seal {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    background: #4f46e5;
                    color: #fff;
                    font-size: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 0 50px rgba(79, 70, 229, 0.4);
                }

                .acquire-reset {
                    background: none;
                    border: none;
                    color: #818cf8;
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-decoration: underline;
                    cursor: pointer;
                    transition: color 0.3s;
                }

                .acquire-reset:hover {
                    color: #fff;
                }

                .acquire-spinner {
                    width: 14px;
                    height: 14px;
                    border: 2px solid rgba(10, 10, 10, 0.25);
                    border-top-color: #0a0a0a;
                    border-radius: 50%;
                    animation: acquire-spin 0.6s linear infinite;
                }

                @keyframes acquire-spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn panel_opens_on_the_buy_tab_with_no_inquiry_in_flight() {
        let state = PanelState::default();
        assert_eq!(state.tab, AcquireTab::Buy);
        assert_eq!(state.inquiry, InquiryStatus::Idle);
    }

    #[test]
    fn switching_tabs_never_touches_the_inquiry() {
        let sending = PanelState {
            tab: AcquireTab::Inquiry,
            inquiry: InquiryStatus::Sending,
        };
        let toured = sending
            .with_tab(AcquireTab::Buy)
            .with_tab(AcquireTab::Inquiry);
        assert_eq!(toured.inquiry, InquiryStatus::Sending);

        let success = PanelState {
            tab: AcquireTab::Inquiry,
            inquiry: InquiryStatus::Success,
        };
        assert_eq!(
            success.with_tab(AcquireTab::Buy).inquiry,
            InquiryStatus::Success
        );
    }

    #[test]
    fn a_send_only_starts_from_idle() {
        let idle = PanelState::default();
        assert_eq!(idle.begin_send().inquiry, InquiryStatus::Sending);

        let sending = idle.begin_send();
        assert_eq!(sending.begin_send(), sending);

        let success = sending.finish_send();
        assert_eq!(success.begin_send(), success);
    }

    #[test]
    fn a_send_only_finishes_from_sending() {
        let idle = PanelState::default();
        assert_eq!(idle.finish_send(), idle);
        assert_eq!(
            idle.begin_send().finish_send().inquiry,
            InquiryStatus::Success
        );
    }

    #[test]
    fn reset_only_leaves_success() {
        let idle = PanelState::default();
        assert_eq!(idle.reset_inquiry(), idle);

        let sending = idle.begin_send();
        assert_eq!(sending.reset_inquiry(), sending);

        let reset = sending.finish_send().reset_inquiry();
        assert_eq!(reset.inquiry, InquiryStatus::Idle);
    }

    #[test]
    fn the_full_inquiry_walk_round_trips_to_idle() {
        let state = PanelState::default()
            .with_tab(AcquireTab::Inquiry)
            .begin_send()
            .finish_send()
            .reset_inquiry();
        assert_eq!(state.tab, AcquireTab::Inquiry);
        assert_eq!(state.inquiry, InquiryStatus::Idle);
    }

    #[test]
    fn reducer_actions_delegate_to_the_transitions() {
        let state = Rc::new(PanelState::default());
        let state = state.reduce(PanelAction::SelectTab(AcquireTab::Inquiry));
        assert_eq!(state.tab, AcquireTab::Inquiry);

        let state = state.reduce(PanelAction::BeginSend);
        assert_eq!(state.inquiry, InquiryStatus::Sending);

        // Illegal actions are absorbed without touching the state.
        let state = state.reduce(PanelAction::ResetInquiry);
        assert_eq!(state.inquiry, InquiryStatus::Sending);

        let state = state.reduce(PanelAction::FinishSend);
        assert_eq!(state.inquiry, InquiryStatus::Success);
    }

    #[test]
    fn an_incomplete_payload_never_clears_the_submit_guard() {
        let no_email = InquiryPayload {
            email: String::new(),
            offer: "5000".to_string(),
        };
        let no_offer = InquiryPayload {
            email: "a@b.com".to_string(),
            offer: String::new(),
        };
        let blank = InquiryPayload {
            email: String::new(),
            offer: String::new(),
        };
        assert!(!no_email.is_complete());
        assert!(!no_offer.is_complete());
        assert!(!blank.is_complete());

        let complete = InquiryPayload {
            email: "a@b.com".to_string(),
            offer: "5000".to_string(),
        };
        assert!(complete.is_complete());
    }

    #[test]
    fn inquiry_payload_serializes_field_for_field() {
        let payload = InquiryPayload {
            email: "a@b.com".to_string(),
            offer: "5000".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"email":"a@b.com","offer":"5000"}"#
        );
    }

    #[test]
    fn inquiry_payload_keeps_entered_values_verbatim() {
        // Whitespace and currency symbols pass through untouched.
        let payload = InquiryPayload {
            email: " ceo@fund.xyz ".to_string(),
            offer: "$12,000".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"email":" ceo@fund.xyz ","offer":"$12,000"}"#
        );
    }
}
