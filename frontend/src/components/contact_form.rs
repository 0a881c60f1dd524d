use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::utils::api::Api;

#[derive(Clone, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    // Honeypot: hidden from humans, bots fill it in
    let website = use_state(String::new);
    let submit_state = use_state(|| SubmitState::Idle);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };
    let on_website = {
        let website = website.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            website.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let website = website.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submit_state == SubmitState::Sending {
                return;
            }

            let payload = json!({
                "name": (*name).clone(),
                "email": (*email).clone(),
                "phone": (*phone).clone(),
                "message": (*message).clone(),
                "website": (*website).clone(),
            });

            submit_state.set(SubmitState::Sending);
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                let request = match Api::post("/api/contact").json(&payload) {
                    Ok(request) => request,
                    Err(_) => {
                        submit_state.set(SubmitState::Failed(
                            "Something went wrong, please try again.".to_string(),
                        ));
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) if response.ok() => {
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        message.set(String::new());
                        submit_state.set(SubmitState::Sent);
                        gloo_timers::future::TimeoutFuture::new(4_000).await;
                        submit_state.set(SubmitState::Idle);
                    }
                    Ok(response) if response.status() == 400 => {
                        submit_state.set(SubmitState::Failed(
                            "Please fill in your name, email and message.".to_string(),
                        ));
                    }
                    _ => {
                        submit_state.set(SubmitState::Failed(
                            "Something went wrong, please try again.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let notice = match &*submit_state {
        SubmitState::Idle => html! {},
        SubmitState::Sending => html! { <p class="form-notice">{"Sending..."}</p> },
        SubmitState::Sent => {
            html! { <p class="form-notice form-notice-ok">{"Got your message! I'll be in touch soon."}</p> }
        }
        SubmitState::Failed(reason) => {
            html! { <p class="form-notice form-notice-error">{reason.clone()}</p> }
        }
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <label>
                {"Name"}
                <input type="text" value={(*name).clone()} oninput={on_name} required=true />
            </label>
            <label>
                {"Email"}
                <input type="email" value={(*email).clone()} oninput={on_email} required=true />
            </label>
            <label>
                {"Phone (optional)"}
                <input type="tel" value={(*phone).clone()} oninput={on_phone} />
            </label>
            <label>
                {"Message"}
                <textarea value={(*message).clone()} oninput={on_message} required=true />
            </label>
            <input
                type="text"
                name="website"
                class="contact-website"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                value={(*website).clone()}
                oninput={on_website}
            />
            <button type="submit" disabled={*submit_state == SubmitState::Sending}>
                {"Send message"}
            </button>
            {notice}
        </form>
    }
}
