use log::{error, info, Level};
use yew::prelude::*;

mod browser;
mod config;
mod error;
mod components {
    pub mod background_media;
    pub mod icon;
    pub mod links;
    pub mod profile_header;
}
mod controllers {
    pub mod gate;
    pub mod media;
    pub mod scheduler;
    pub mod typewriter;
    pub mod volume;
}
mod pages {
    pub mod home;
}

use config::SiteConfig;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    let site = use_memo(|_| SiteConfig::load(), ());

    match &*site {
        Ok(site) => {
            info!("Rendering Home page");
            html! { <Home site={site.clone()} /> }
        }
        Err(err) => {
            error!("Failed to load site config: {}", err);
            html! { <p class="config-error">{"This page could not be loaded."}</p> }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
