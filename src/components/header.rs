use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdCheckCircle;

#[component]
pub fn Header(server_url: String) -> Element {
    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdCheckCircle
            }
            h1 { "Quality Gates" }
            span { class: "server-url", "{server_url}" }
        }
    }
}
