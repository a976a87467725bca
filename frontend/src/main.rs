use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod error;
mod events;
mod theme;
mod controllers {
    pub mod accessibility;
    pub mod forms;
    pub mod performance;
    pub mod smooth_scroll;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod roadmap;
}

use content::RoadmapTable;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, table: Rc<RoadmapTable>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {table} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

fn load_content() -> Rc<RoadmapTable> {
    match RoadmapTable::builtin() {
        Ok(table) => Rc::new(table),
        Err(err) => {
            error::report("Roadmap content", &err);
            Rc::new(RoadmapTable::default())
        }
    }
}

#[function_component]
fn App() -> Html {
    let table = use_state(load_content);

    let render = {
        let table = (*table).clone();
        move |routes: Route| switch(routes, table.clone())
    };

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let theme = theme::init_theme();
    debug!("Initial theme: {}", theme.as_str());

    yew::Renderer::<App>::new().render();
}
