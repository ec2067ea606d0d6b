use leptos::{html, prelude::*};

use crate::config::is_allowed_image;
use crate::content::{
    EducationEntry, ProjectCard, Section, ABOUT_PARAGRAPHS, EDUCATION, PROJECTS, SKILLS,
};
use crate::motion::{stagger_delay, timeline_delay, FADE_IN_UP, RISE};

use super::icons::{Glyph, Icon};
use super::reveal::{use_reveal, Reveal, RevealSection};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection section=Section::About shaded=true>
            <div class="max-w-3xl mx-auto space-y-6 text-zinc-700 dark:text-zinc-300">
                {ABOUT_PARAGRAPHS
                    .iter()
                    .map(|(text, delay)| {
                        view! {
                            <Reveal entrance=RISE.delayed(*delay)>
                                <p class="text-xl leading-relaxed">{*text}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let grid = NodeRef::<html::Div>::new();
    let shown = use_reveal(grid);
    view! {
        <RevealSection section=Section::Skills>
            <div node_ref=grid class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let entrance = FADE_IN_UP.delayed(stagger_delay(i));
                        view! {
                            <div style=move || entrance.style(shown.get())>
                                <div class="bg-zinc-800 dark:bg-zinc-200 rounded-lg p-6 text-center shadow-lg transition-all duration-300 hover:scale-105 hover:-translate-y-1 hover:shadow-xl hover:shadow-zinc-300/20 dark:hover:shadow-zinc-600/20">
                                    <span class="text-xl font-semibold dark:text-zinc-800 text-zinc-100">
                                        {skill.0}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection section=Section::Projects shaded=true>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-12">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <Reveal entrance=RISE>
                                <ProjectCardView project=*project />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCardView(project: ProjectCard) -> impl IntoView {
    let image = if is_allowed_image(project.image_url) {
        view! {
            <img
                src=project.image_url
                alt=project.image_alt
                width=ProjectCard::IMAGE_WIDTH
                height=ProjectCard::IMAGE_HEIGHT
                loading="lazy"
                class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
            />
        }
        .into_any()
    } else {
        log::warn!("image host not allowed: {}", project.image_url);
        view! { <div class="w-full h-48 bg-zinc-300 dark:bg-zinc-600"></div> }.into_any()
    };

    view! {
        <div class="rounded-lg border bg-zinc-50 dark:bg-zinc-700 border-zinc-200 dark:border-zinc-600 overflow-hidden group hover:shadow-xl hover:shadow-zinc-300/20 dark:hover:shadow-zinc-600/20 transition-all duration-300">
            <div class="relative overflow-hidden">
                {image}
                <div class="absolute inset-0 bg-zinc-900/60 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center">
                    <div class="space-x-4">
                        <ProjectLink href=project.code_url glyph=Glyph::Github label="Code" />
                        <ProjectLink href=project.demo_url glyph=Glyph::ExternalLink label="Demo" />
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h4 class="text-2xl font-semibold text-zinc-800 dark:text-zinc-100">
                    {project.title}
                </h4>
            </div>
            <div class="px-6 pb-6">
                <p class="text-zinc-600 dark:text-zinc-300 mb-4">{project.description}</p>
                <p class="text-zinc-500 dark:text-zinc-400 text-sm">
                    <span class="font-semibold">"Tools used:"</span>
                    " "
                    {project.tools}
                </p>
            </div>
        </div>
    }
}

#[component]
fn ProjectLink(href: &'static str, glyph: Glyph, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center rounded-md border px-4 py-2 text-sm font-medium bg-zinc-50 border-zinc-100 hover:bg-zinc-100 text-zinc-900 dark:bg-zinc-800 dark:text-zinc-100 dark:border-none dark:hover:bg-zinc-100 dark:hover:text-zinc-900"
        >
            <Icon glyph class="mr-2 h-4 w-4" />
            {label}
        </a>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <RevealSection section=Section::Education>
            <div class="space-y-12">
                {EDUCATION
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        view! {
                            <Reveal
                                entrance=RISE.delayed(timeline_delay(i))
                                class="bg-zinc-50 dark:bg-zinc-700 p-6 rounded-lg shadow-lg hover:shadow-xl hover:shadow-zinc-300/20 dark:hover:shadow-zinc-600/20 transition-shadow duration-300"
                            >
                                <EducationItem entry=*entry />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn EducationItem(entry: EducationEntry) -> impl IntoView {
    let details = (!entry.details.is_empty()).then(|| {
        view! {
            <ul class="list-disc list-inside mt-2 text-zinc-600 dark:text-zinc-300">
                {entry.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
            </ul>
        }
    });
    view! {
        <h4 class="text-2xl font-bold text-zinc-800 dark:text-zinc-100 mb-2">
            {entry.institution}
        </h4>
        <p class="text-zinc-600 dark:text-zinc-300">{entry.summary()}</p>
        {details}
    }
}
