use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod admin_hotspot;
    pub mod contact_form;
}
mod pages {
    pub mod admin_leads;
    pub mod landing;
}
mod unlock {
    pub mod flow;
    pub mod gesture;
}
mod utils {
    pub mod api;
}

use pages::admin_leads::AdminLeads;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/leads")]
    AdminLeads,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Landing /> },
        Route::AdminLeads => html! { <AdminLeads /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
