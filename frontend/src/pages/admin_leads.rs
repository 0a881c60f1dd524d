use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;
use yew::prelude::*;

use crate::config;
use crate::utils::api::Api;

#[derive(Deserialize, Clone, PartialEq)]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i64,
}

fn format_created_at(timestamp: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64 * 1000.0));
    String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
}

async fn fetch_leads(leads: UseStateHandle<Vec<Lead>>, error: UseStateHandle<Option<String>>) {
    match Api::get("/api/admin/leads").send().await {
        Ok(response) if response.status() == 401 => {
            // Not unlocked (or session expired): back to the landing page
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
        Ok(response) if response.ok() => match response.json::<Vec<Lead>>().await {
            Ok(list) => leads.set(list),
            Err(e) => {
                log::info!("Failed to parse leads response: {}", e);
                error.set(Some("Failed to load leads.".to_string()));
            }
        },
        _ => error.set(Some("Failed to load leads.".to_string())),
    }
}

#[function_component(AdminLeads)]
pub fn admin_leads() -> Html {
    let leads = use_state(Vec::<Lead>::new);
    let error = use_state(|| None::<String>);

    {
        let leads = leads.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    fetch_leads(leads, error).await;
                });
                || ()
            },
            (),
        );
    }

    let on_delete = {
        let leads = leads.clone();
        let error = error.clone();
        Callback::from(move |lead_id: i32| {
            let leads = leads.clone();
            let error = error.clone();
            spawn_local(async move {
                let uri = format!("/api/admin/leads/{}/delete", lead_id);
                match Api::post(&uri).send().await {
                    Ok(response) if response.ok() => {
                        let remaining: Vec<Lead> = leads
                            .iter()
                            .filter(|lead| lead.id != lead_id)
                            .cloned()
                            .collect();
                        leads.set(remaining);
                    }
                    _ => error.set(Some("Failed to delete lead.".to_string())),
                }
            });
        })
    };

    let table_css = r#"
        .leads {
            max-width: 1040px;
            margin: 0 auto;
            padding: 2rem 1.5rem;
        }
        .leads-toolbar {
            display: flex;
            gap: 1rem;
            margin-bottom: 1.5rem;
        }
        .leads table {
            width: 100%;
            border-collapse: collapse;
            font-size: 0.9rem;
        }
        .leads th, .leads td {
            text-align: left;
            padding: 0.5rem 0.6rem;
            border-bottom: 1px solid #e2e5ea;
            vertical-align: top;
        }
        .leads-error {
            color: #b91c1c;
        }
    "#;

    html! {
        <div class="leads">
            <style>{table_css}</style>
            <h1>{"Leads"}</h1>
            <div class="leads-toolbar">
                // Plain navigations, so they need the same prefix Api applies
                <a href={format!("{}/admin/leads.csv", config::get_backend_url())}>{"Export CSV"}</a>
                <a href={format!("{}/admin/logout", config::get_backend_url())}>{"Log out"}</a>
            </div>
            {
                if let Some(reason) = &*error {
                    html! { <p class="leads-error">{reason.clone()}</p> }
                } else {
                    html! {}
                }
            }
            {
                if leads.is_empty() && error.is_none() {
                    html! { <p>{"No leads yet."}</p> }
                } else {
                    html! {
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Received"}</th>
                                    <th>{"Name"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Phone"}</th>
                                    <th>{"Message"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for leads.iter().map(|lead| {
                                    let on_delete = {
                                        let on_delete = on_delete.clone();
                                        let lead_id = lead.id;
                                        Callback::from(move |_: MouseEvent| on_delete.emit(lead_id))
                                    };
                                    html! {
                                        <tr key={lead.id.to_string()}>
                                            <td>{format_created_at(lead.created_at)}</td>
                                            <td>{lead.name.clone()}</td>
                                            <td>{lead.email.clone()}</td>
                                            <td>{lead.phone.clone().unwrap_or_default()}</td>
                                            <td>{lead.message.clone()}</td>
                                            <td><button onclick={on_delete}>{"Delete"}</button></td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}
