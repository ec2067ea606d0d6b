mod contact;
mod header;
mod homepage;
mod icons;
mod reveal;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::config::SITE_OWNER;
use crate::state::{ScrollMetrics, Theme, UiState};

pub use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="light">
                <App />
            </body>
        </html>
    }
}

/// Presentation state shared with every component on the page.
///
/// The memos split the single [`UiState`] so scroll updates don't re-render
/// the menu or the theme switch.
#[derive(Clone, Copy)]
pub struct UiContext {
    pub state: RwSignal<UiState>,
    pub menu_open: Memo<bool>,
    pub theme: Memo<Theme>,
    pub progress: Memo<f64>,
}

impl UiContext {
    pub fn new() -> Self {
        let state = RwSignal::new(UiState::new());
        Self {
            state,
            menu_open: Memo::new(move |_| state.with(|s| s.menu_open)),
            theme: Memo::new(move |_| state.with(|s| s.theme())),
            progress: Memo::new(move |_| state.with(|s| s.scroll_progress)),
        }
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| s.toggle_menu());
        log::debug!("menu open: {}", self.state.with_untracked(|s| s.menu_open));
    }

    pub fn close_menu(&self) {
        self.state.update(|s| s.close_menu());
    }

    pub fn toggle_theme(&self) {
        self.state.update(|s| s.toggle_theme());
        log::debug!("theme: {:?}", self.state.with_untracked(|s| s.theme()));
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_ui() -> UiContext {
    expect_context::<UiContext>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let ui = UiContext::new();
    provide_context(ui);

    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    Effect::new(move |_| {
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        let metrics = ScrollMetrics {
            offset: scroll_y.get(),
            document_height,
            viewport_height: height.get(),
        };
        ui.state.update(|s| s.set_scroll(metrics));
    });

    // keep the body in step so overscroll areas match the palette
    Effect::new(move |_| {
        let theme = ui.theme.get();
        if let Some(body) = document().body() {
            body.set_class_name(theme.class());
        }
    });

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />
        <Meta name="description" content=format!("Portfolio of {SITE_OWNER}") />

        <Router>
            <ThemeRoot>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </ThemeRoot>
        </Router>
    }
}

/// Carries the theme class every `dark:` variant below keys off.
#[component]
pub fn ThemeRoot(children: Children) -> impl IntoView {
    let ui = use_ui();
    view! {
        <div class=move || format!("min-h-screen {}", ui.theme.get().class())>
            <div class="bg-gradient-to-br from-zinc-50 via-zinc-100 to-zinc-200 dark:from-zinc-900 dark:via-zinc-800 dark:to-zinc-900 text-zinc-900 dark:text-zinc-100 transition-colors duration-300">
                {children()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{NAV_ITEMS, PROJECTS, SKILLS};

    fn render_home() -> String {
        render_home_after(|_| {})
    }

    fn render_home_after(interact: impl FnOnce(UiContext)) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            let ui = UiContext::new();
            provide_context(ui);
            interact(ui);
            view! { <HomePage /> }.to_html()
        })
    }

    fn render_root_after(interact: impl FnOnce(UiContext)) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let ui = UiContext::new();
            provide_context(ui);
            interact(ui);
            view! {
                <ThemeRoot>
                    <p>"content"</p>
                </ThemeRoot>
            }
            .to_html()
        })
    }

    fn mobile_menu(html: &str) -> &str {
        let start = html.find("id=\"mobile-menu\"").expect("overlay rendered");
        let end = html[start..].find("<main").expect("main follows overlay");
        &html[start..start + end]
    }

    #[test]
    fn test_every_nav_anchor_is_rendered() {
        let html = render_home();
        for item in NAV_ITEMS {
            let id = format!("id=\"{}\"", item.target.id());
            assert!(html.contains(&id), "missing section {}", item.target.id());
            assert!(html.contains(&format!("href=\"{}\"", item.target.href())));
        }
    }

    #[test]
    fn test_first_render_state() {
        let html = render_home();
        // hero starts fully opaque with the menu closed
        assert!(html.contains("opacity: 1; transform: scale(1);"));
        assert!(!html.contains("mobile-menu"));
        for skill in SKILLS {
            assert!(html.contains(&skill.0.replace('&', "&amp;")));
        }
        for project in PROJECTS {
            assert!(html.contains(project.image_url));
        }
        assert!(html.contains("aria-label=\"Open menu\""));
        assert!(html.contains("aria-checked=\"false\""));
        // the resume button is inert until a document is published
        assert!(html.contains("Download Resume"));
        assert!(!html.contains(".pdf"));
        assert!(!html.contains("download="));
    }

    #[test]
    fn test_open_menu_renders_overlay() {
        let html = render_home_after(|ui| ui.toggle_menu());
        assert!(html.contains("aria-label=\"Close menu\""));
        assert!(html.contains("aria-expanded=\"true\""));

        let overlay = mobile_menu(&html);
        for item in NAV_ITEMS {
            assert!(
                overlay.contains(&format!("href=\"{}\"", item.target.href())),
                "overlay missing {}",
                item.label
            );
        }
    }

    #[test]
    fn test_closed_menu_removes_overlay() {
        let html = render_home_after(|ui| {
            ui.toggle_menu();
            ui.close_menu();
        });
        assert!(!html.contains("mobile-menu"));
        assert!(html.contains("aria-label=\"Open menu\""));
    }

    #[test]
    fn test_dark_theme_render() {
        let html = render_home_after(|ui| ui.toggle_theme());
        assert!(html.contains("aria-checked=\"true\""));
        assert!(!html.contains("aria-checked=\"false\""));

        assert!(render_root_after(|ui| ui.toggle_theme()).contains("min-h-screen dark"));
        assert!(render_root_after(|_| {}).contains("min-h-screen light"));
        let twice = render_root_after(|ui| {
            ui.toggle_theme();
            ui.toggle_theme();
        });
        assert!(twice.contains("min-h-screen light"));
    }
}
