use crate::components::blog_preview::BlogPreview;
use crate::posts;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            id: "main",
            header {
                class: "site-header",
                "Devlog"
            }
            for post in posts::all() {
                BlogPreview { post }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::components::app::Route;
    use crate::components::blog_preview::format_publish_date;
    use crate::posts;
    use dioxus::prelude::*;
    use dioxus_history::{History, MemoryHistory};
    use dioxus_router::prelude::*;
    use std::rc::Rc;

    #[component]
    fn TestApp(path: &'static str) -> Element {
        use_hook(|| {
            provide_context(Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>)
        });
        rsx! {
            Router::<Route> {}
        }
    }

    pub(crate) fn render_at(path: &'static str) -> String {
        let mut dom = VirtualDom::new_with_props(TestApp, TestAppProps { path });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn home_renders_one_link_per_post() {
        let html = render_at("/");
        for post in posts::all() {
            let href = format!("href=\"/blog/{}\"", post.slug);
            assert_eq!(html.matches(&href).count(), 1, "{}", post.slug);
        }
    }

    #[test]
    fn preview_titles_appear_untruncated() {
        let html = render_at("/");
        for post in posts::all() {
            assert!(html.contains(&post.title), "{}", post.slug);
        }
    }

    #[test]
    fn preview_dates_are_formatted() {
        let html = render_at("/");
        assert!(html.contains("January 05, 2024"));
        for post in posts::all() {
            let formatted = format_publish_date(&post.published_at).unwrap();
            assert!(html.contains(&formatted), "{}", post.slug);
        }
    }

    #[test]
    fn descriptions_carry_the_two_line_clamp() {
        let html = render_at("/");
        let clamped = html.matches("line-clamp-2").count();
        assert_eq!(clamped, posts::all().len());
    }
}
