use crate::components::app::Route;
use crate::components::blog_preview::format_publish_date;
use crate::components::markdown::RenderMarkdown;
use crate::posts;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

#[component]
pub fn Post(slug: String) -> Element {
    let Some(meta) = posts::find(&slug) else {
        log::warn!("unknown post slug: {slug}");
        return rsx! {
            div { id: "post",
                div { class: "back-button-container",
                    Link {
                        to: Route::Home {},
                        "< Back"
                    }
                }
                h1 { "Post not found." }
            }
        };
    };
    let published = format_publish_date(&meta.published_at)?;
    rsx! {
        div { id: "post",
            div { class: "back-button-container",
                Link {
                    to: Route::Home {},
                    "< Back"
                }
            }
            h1 { "{meta.title}" }
            div { class: "post-date",
                "{published}"
            }
            RenderMarkdown { source: posts::content(&slug) }
        }
    }
}
