use crate::Route;
use dioxus::prelude::*;

use crate::utils::config::WINDOW_TITLE;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

#[component]
pub fn Header() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        div { class: "layout-container",
            header { class: "page-header",
                Link {
                    to: Route::Transactions {},
                    class: "header-title",
                    "{WINDOW_TITLE}"
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
