use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod section_tracker;
mod theme;
mod components {
    pub mod animated_link;
    pub mod icons;
    pub mod mobile_menu;
    pub mod scroll_spy;
    pub mod starry_background;
    pub mod theme_toggle;
}
mod pages {
    pub mod home;
    pub mod projects;
    pub mod team;
}

use pages::home::Home;
use theme::ThemeProvider;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
