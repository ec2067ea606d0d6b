use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::Section;
use crate::motion::{Entrance, RevealLatch, FADE_IN_UP};

/// False on the server and during hydration, true once mounted in the browser.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

/// Flips to true the first time `target` scrolls into view and stays there.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let latch = RwSignal::new(RevealLatch::default());
    Effect::new(move |_| {
        let visible = visible.get();
        if visible && !latch.with_untracked(|l| l.revealed()) {
            latch.update(|l| {
                l.observe(visible);
            });
        }
    });
    Signal::derive(move || latch.with(|l| l.revealed()))
}

#[component]
pub fn Reveal(
    entrance: Entrance,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let shown = use_reveal(target);
    view! {
        <div node_ref=target class=class style=move || entrance.style(shown.get())>
            {children()}
        </div>
    }
}

#[component]
pub fn RevealSection(
    section: Section,
    #[prop(optional)] shaded: bool,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let shown = use_reveal(target);
    let class = if shaded {
        "py-20 bg-zinc-100 dark:bg-zinc-800"
    } else {
        "py-20"
    };
    view! {
        <section id=section.id() class=class style=move || FADE_IN_UP.style(shown.get())>
            <div node_ref=target class="container mx-auto px-6">
                <SectionHeading text=section.heading() />
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h3 class="text-5xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-zinc-600 via-zinc-700 to-zinc-800 dark:from-zinc-300 dark:via-zinc-200 dark:to-zinc-100">
            {text}
        </h3>
    }
}
