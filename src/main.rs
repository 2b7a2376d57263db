use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod nav;
mod motion {
    pub mod frame;
    pub mod interpolate;
    pub mod reveal;
    pub mod scroll;
    pub mod spring;
}
mod dom {
    pub mod hooks;
    pub mod listener;
    pub mod navigation;
    pub mod raf;
    pub mod runtime;
    pub mod tasks;
}
mod components {
    pub mod contact_form;
    pub mod hero_canvas;
    pub mod motion;
    pub mod navbar;
    pub mod progress_bar;
    pub mod sphere;
    pub mod typewriter;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod stats;
}
mod pages {
    pub mod home;
}

use components::navbar::Navbar;
use dom::runtime::MotionRuntime;
use pages::home::{Home, NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Home page at contact");
            html! { <Home focus={AttrValue::from("contact")} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // One runtime for the lifetime of the app; every animated block subscribes to it.
    let runtime = use_memo(|_| MotionRuntime::new(), ());

    html! {
        <ContextProvider<MotionRuntime> context={(*runtime).clone()}>
            <BrowserRouter>
                <Navbar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<MotionRuntime>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting {}", config::site().company);
    yew::Renderer::<App>::new().render();
}
