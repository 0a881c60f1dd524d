use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::unlock::flow::run_unlock_flow;
use crate::unlock::gesture::{ClickGesture, DEBOUNCE_MS};

#[derive(Properties, PartialEq)]
pub struct AdminHotspotProps {
    /// Also render the secondary trigger that forwards into the same
    /// detector. A pure alias, not a second state machine.
    #[prop_or_default]
    pub aux_trigger: bool,
}

/// Invisible easter-egg region in the footer. Three rapid clicks open the
/// admin PIN prompt.
#[function_component(AdminHotspot)]
pub fn admin_hotspot(props: &AdminHotspotProps) -> Html {
    let gesture = use_mut_ref(ClickGesture::new);
    let pending_reset = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let gesture = gesture.clone();
        let pending_reset = pending_reset.clone();
        Callback::from(move |_: MouseEvent| {
            // Cancel-and-reschedule: at most one reset is ever pending
            let reset = {
                let gesture = gesture.clone();
                Timeout::new(DEBOUNCE_MS, move || gesture.borrow_mut().expire())
            };
            if let Some(previous) = pending_reset.borrow_mut().replace(reset) {
                previous.cancel();
            }

            if gesture.borrow_mut().click() {
                run_unlock_flow();
            }
        })
    };

    html! {
        <>
            <span
                id="admin-brand-hotspot"
                class="admin-hotspot"
                onclick={onclick.clone()}
            ></span>
            {
                if props.aux_trigger {
                    html! {
                        <button
                            id="admin-door"
                            class="admin-door"
                            aria-hidden="true"
                            onclick={onclick}
                        ></button>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
