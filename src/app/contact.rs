use leptos::prelude::*;

use crate::content::Section;

use super::reveal::RevealSection;

static FIELD_CLASS: &str = "w-full rounded-md border px-3 py-2 bg-zinc-100 dark:bg-zinc-800 border-zinc-300 dark:border-zinc-600 text-zinc-800 dark:text-zinc-100 focus:outline-none focus:ring-2 focus:ring-zinc-500 dark:focus:ring-zinc-400";
static LABEL_CLASS: &str = "text-sm font-medium text-zinc-700 dark:text-zinc-200";

// no delivery behind the form; submitting does nothing
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection section=Section::Contact shaded=true>
            <div class="max-w-2xl mx-auto rounded-lg border bg-zinc-50 dark:bg-zinc-700 border-zinc-200 dark:border-zinc-600 shadow-xl hover:shadow-2xl hover:shadow-zinc-300/20 dark:hover:shadow-zinc-600/20 transition-all duration-300">
                <div class="p-6 space-y-1.5">
                    <h4 class="text-3xl font-semibold text-zinc-800 dark:text-zinc-100">
                        "Contact Me"
                    </h4>
                    <p class="text-zinc-600 dark:text-zinc-300">
                        "Fill out the form below to send me a message."
                    </p>
                </div>
                <form
                    class="px-6 pb-6 space-y-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        log::debug!("contact form has no delivery configured");
                    }
                >
                    <div class="grid grid-cols-2 gap-6">
                        <div class="space-y-2">
                            <label for="name" class=LABEL_CLASS>
                                "Name"
                            </label>
                            <input id="name" type="text" placeholder="Your name" class=FIELD_CLASS />
                        </div>
                        <div class="space-y-2">
                            <label for="email" class=LABEL_CLASS>
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Your email"
                                class=FIELD_CLASS
                            />
                        </div>
                    </div>
                    <div class="space-y-2">
                        <label for="message" class=LABEL_CLASS>
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            placeholder="Your message"
                            class=format!("{FIELD_CLASS} min-h-[80px]")
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        class="w-full rounded-md px-4 py-2 font-medium bg-zinc-800 hover:bg-zinc-700 text-zinc-100 dark:bg-zinc-200 dark:hover:bg-zinc-300 dark:text-zinc-800 transition-all duration-300 hover:shadow-lg"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </RevealSection>
    }
}
