use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::{
    BUILD_YEAR, GITHUB_URL, LINKEDIN_URL, MAIL_URL, SITE_OWNER, SITE_TAGLINE,
};
use crate::content::Section;
use crate::motion::{hero_style, HERO_CONTENT_IN, HERO_RISE, HERO_TITLE_RISE};

use super::contact::Contact;
use super::header::{Header, ProgressBar};
use super::icons::{Glyph, Icon};
use super::reveal::use_mounted;
use super::sections::{About, Education, Projects, Skills};
use super::use_ui;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <ProgressBar />
        <Header />
        <main class="pt-20">
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Education />
            <Contact />
        </main>
        <Footer />
    }
}

/// Fades and shrinks over the first few percent of the scroll.
#[component]
fn Hero() -> impl IntoView {
    let ui = use_ui();
    let mounted = use_mounted();
    let rise = move |delay: f64| move || HERO_RISE.delayed(delay).style(mounted.get());

    view! {
        <section
            class="min-h-screen flex flex-col items-center justify-center relative overflow-hidden"
            style=move || hero_style(ui.progress.get())
        >
            <div class="text-center z-10" style=move || HERO_CONTENT_IN.style(mounted.get())>
                <h2
                    class="text-7xl md:text-9xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-zinc-600 via-zinc-700 to-zinc-800 dark:from-zinc-300 dark:via-zinc-200 dark:to-zinc-100"
                    style=move || HERO_TITLE_RISE.style(mounted.get())
                >
                    {SITE_OWNER}
                </h2>
                <p
                    class="text-2xl md:text-4xl text-zinc-700 dark:text-zinc-300 mb-12 font-light"
                    style=rise(0.2)
                >
                    {SITE_TAGLINE}
                </p>
                <div style=rise(0.4)>
                    <a
                        href=Section::Contact.href()
                        class="inline-flex items-center text-lg px-8 py-4 bg-zinc-800 hover:bg-zinc-700 text-zinc-100 dark:bg-zinc-200 dark:hover:bg-zinc-300 dark:text-zinc-800 rounded-full transition-all duration-300 hover:shadow-lg"
                    >
                        "Get in Touch"
                    </a>
                    <button
                        type="button"
                        class="inline-flex items-center text-lg px-8 mx-4 py-4 border rounded-full border-zinc-800 text-zinc-800 hover:bg-zinc-800 hover:text-zinc-100 bg-transparent dark:border-zinc-100 dark:text-zinc-100 dark:hover:bg-zinc-100 dark:hover:text-zinc-800 transition-all duration-300"
                    >
                        <Icon glyph=Glyph::Download class="mr-2 h-4 w-4" />
                        "Download Resume"
                    </button>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce">
                <Icon glyph=Glyph::ChevronDown class="h-12 w-12 text-zinc-600 dark:text-zinc-400" />
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let links = [
        (GITHUB_URL, Glyph::Github, "GitHub"),
        (LINKEDIN_URL, Glyph::Linkedin, "LinkedIn"),
        (MAIL_URL, Glyph::Mail, "Email"),
    ];
    view! {
        <footer class="bg-zinc-50 dark:bg-zinc-900 py-8">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center">
                <p class="text-zinc-600 dark:text-zinc-400">
                    {format!("© {BUILD_YEAR} {SITE_OWNER}. All rights reserved.")}
                </p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    {links
                        .into_iter()
                        .map(|(href, glyph, label)| {
                            view! {
                                <a
                                    href=href
                                    aria-label=label
                                    class="text-zinc-600 dark:text-zinc-400 hover:text-zinc-800 dark:hover:text-zinc-200 transition-colors"
                                >
                                    <Icon glyph class="h-6 w-6" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
