use dioxus::prelude::*;
use dioxus_desktop::{Config, WindowBuilder};
use views::{Header, Transactions};

mod components;
mod contexts;
mod forms;
mod views;
mod utils;

use contexts::{ActiveQuery, TransactionsContext};
use utils::{config, logging};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Header)]
        #[route("/")]
        Transactions {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    logging::init();
    tracing::info!("Starting {}", config::WINDOW_TITLE);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(config::WINDOW_TITLE)
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // The list refetches whenever a search records a new query here
    let query = use_signal(|| None::<String>);
    let active_query = use_context_provider(|| ActiveQuery::new(query));
    use_context_provider(|| TransactionsContext::new(active_query));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
