use leptos::prelude::*;

use crate::config::SITE_OWNER;
use crate::content::NAV_ITEMS;
use crate::motion::{
    progress_bar_style, stagger_delay, DROP_IN, OVERLAY_IN, OVERLAY_LINK_IN, SLIDE_IN_LEFT,
};

use super::icons::{Glyph, Icon};
use super::reveal::use_mounted;
use super::use_ui;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let ui = use_ui();
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-zinc-600 dark:bg-zinc-400 z-50"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", ui.progress.get() * 100.0)
            style=move || progress_bar_style(ui.progress.get())
        ></div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = use_ui();
    let mounted = use_mounted();

    view! {
        <header class="fixed w-full z-40 bg-zinc-50/80 dark:bg-zinc-900/80 backdrop-blur-md">
            <nav class="container mx-auto px-6 py-4 flex justify-between items-center">
                <h1
                    class="text-3xl font-extrabold bg-clip-text text-transparent bg-gradient-to-r from-zinc-600 via-zinc-700 to-zinc-800 dark:from-zinc-300 dark:via-zinc-200 dark:to-zinc-100"
                    style=move || SLIDE_IN_LEFT.style(mounted.get())
                >
                    {SITE_OWNER}
                </h1>
                <div class="hidden md:flex space-x-8 items-center">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let entrance = DROP_IN.delayed(stagger_delay(i));
                            view! {
                                <a
                                    href=item.target.href()
                                    class="text-zinc-700 dark:text-zinc-300 hover:text-zinc-900 dark:hover:text-zinc-100 transition-colors text-lg font-medium relative group hover:scale-105 active:scale-95"
                                    style=move || entrance.style(mounted.get())
                                >
                                    {item.label}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-zinc-600 dark:bg-zinc-400 transition-all group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeSwitch />
                </div>
                <div class="md:hidden flex items-center space-x-4">
                    <ThemeSwitch />
                    <button
                        type="button"
                        class="inline-flex items-center justify-center h-10 w-10 rounded-md hover:bg-zinc-200 dark:hover:bg-zinc-800"
                        aria-label=move || { if ui.menu_open.get() { "Close menu" } else { "Open menu" } }
                        aria-expanded=move || ui.menu_open.get().to_string()
                        on:click=move |_| ui.toggle_menu()
                    >
                        {move || {
                            let glyph = if ui.menu_open.get() { Glyph::Close } else { Glyph::Menu };
                            view! { <Icon glyph class="h-6 w-6" /> }
                        }}
                    </button>
                </div>
            </nav>
        </header>
        <Show when=move || ui.menu_open.get()>
            <MobileMenu />
        </Show>
    }
}

#[component]
fn ThemeSwitch() -> impl IntoView {
    let ui = use_ui();
    let dark = move || ui.theme.get().is_dark();
    view! {
        <div class="flex items-center space-x-2">
            <Icon glyph=Glyph::Sun class="h-4 w-4" />
            <button
                type="button"
                role="switch"
                aria-label="Toggle dark mode"
                aria-checked=move || dark().to_string()
                class=move || {
                    format!(
                        "relative inline-flex h-6 w-11 shrink-0 items-center rounded-full transition-colors {}",
                        if dark() { "bg-zinc-200" } else { "bg-zinc-800" },
                    )
                }
                on:click=move |_| ui.toggle_theme()
            >
                <span class=move || {
                    format!(
                        "pointer-events-none block h-5 w-5 rounded-full shadow-lg transition-transform {}",
                        if dark() { "translate-x-5 bg-zinc-900" } else { "translate-x-0.5 bg-white" },
                    )
                }></span>
            </button>
            <Icon glyph=Glyph::Moon class="h-4 w-4" />
        </div>
    }
}

/// Remounted each time the menu opens, so its entrance replays.
#[component]
fn MobileMenu() -> impl IntoView {
    let ui = use_ui();
    let mounted = use_mounted();
    view! {
        <div
            id="mobile-menu"
            class="fixed inset-0 bg-zinc-50/95 dark:bg-zinc-900/95 z-30 flex flex-col items-center justify-center space-y-8"
            style=move || OVERLAY_IN.style(mounted.get())
        >
            {NAV_ITEMS
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let entrance = OVERLAY_LINK_IN.delayed(stagger_delay(i));
                    view! {
                        <a
                            href=item.target.href()
                            class="text-4xl text-zinc-700 dark:text-zinc-300 hover:text-zinc-900 dark:hover:text-zinc-100 transition-colors hover:scale-110 active:scale-95"
                            style=move || entrance.style(mounted.get())
                            on:click=move |_| ui.close_menu()
                        >
                            {item.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
