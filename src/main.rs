use log::{error, info};

mod config;
mod dom;
mod error;
mod mount;
mod platform;
mod components {
    pub mod carousel;
    pub mod counter;
    pub mod filter;
    pub mod form;
    pub mod nav;
    pub mod reveal;
    pub mod scroll;
    pub mod share;
    pub mod theme;
}

use config::Config;
use mount::Page;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging; the page config may lower or raise the level below
    console_log::init_with_level(config::default_log_level()).expect("error initializing log");

    let config = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => Config::load(&document),
        None => Config::default(),
    };
    log::set_max_level(config.level().to_level_filter());

    match Page::current(config) {
        Ok(page) => {
            info!("Starting portfolio behavior");
            mount::mount(&page);
        }
        Err(e) => error!("Nothing to attach to: {}", e),
    }
}
