use leptos::prelude::*;

use crate::content::Profile;
use crate::scroll_spy::Section;

use super::effects::Scroller;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let scroller = expect_context::<Scroller>();

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 pt-24 sm:pt-32 pb-16 sm:pb-20 relative z-10"
        >
            <div class="max-w-5xl mx-auto w-full">
                <div class="space-y-6 sm:space-y-8">
                    <AvailabilityBadge text="Available for opportunities" />
                    <div class="space-y-4 sm:space-y-6">
                        <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-bold text-gray-900 leading-tight">
                            {profile.greeting.clone()}
                        </h1>
                        <p class="text-xl sm:text-2xl md:text-3xl text-gray-600 font-light max-w-3xl leading-relaxed">
                            {profile.tagline.clone()}
                        </p>
                    </div>
                    <div class="bg-white/60 backdrop-blur-md rounded-3xl p-6 sm:p-8 shadow-lg border border-gray-200/50 max-w-2xl">
                        <h3 class="text-lg sm:text-xl font-semibold text-gray-800 mb-4 sm:mb-6">
                            "what you'll find me doing"
                        </h3>
                        <div class="space-y-2 sm:space-y-3">
                            {profile
                                .activities
                                .iter()
                                .map(|a| {
                                    view! {
                                        <p class="text-gray-600 text-base sm:text-lg font-light">
                                            {format!("✦ {a}")}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex flex-col sm:flex-row flex-wrap gap-3 sm:gap-4 pt-4">
                        <button
                            on:click=move |_| scroller.scroll_to_section(Section::Work)
                            class="group bg-gray-900 text-white px-6 sm:px-8 py-3 sm:py-4 rounded-full font-medium hover:scale-105 transition-all shadow-lg flex items-center justify-center gap-2"
                        >
                            "View My Work"
                            <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                        </button>
                        <a
                            href=profile.resume.path.clone()
                            download=profile.resume.download_name.clone()
                            class="bg-white/80 backdrop-blur-md text-gray-900 px-6 sm:px-8 py-3 sm:py-4 rounded-full font-medium hover:scale-105 transition-all shadow-lg border border-gray-200/50 flex items-center justify-center gap-2"
                        >
                            "⬇ Resume"
                        </a>
                    </div>
                    <div class="flex gap-4 pt-4 text-2xl">
                        <a
                            href=profile.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-600 hover:text-gray-900 transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain" />
                        </a>
                        <a
                            href=profile.linkedin.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-600 hover:text-gray-900 transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain" />
                        </a>
                        <button
                            on:click=move |_| scroller.scroll_to_section(Section::Contact)
                            class="text-gray-600 hover:text-gray-900 transition-colors"
                            aria-label="Contact"
                        >
                            "✉"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Pill with a pulsing green dot.
#[component]
pub fn AvailabilityBadge(text: &'static str) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-3 bg-white/80 backdrop-blur-md rounded-full px-4 sm:px-6 py-2 sm:py-3 shadow-lg border border-gray-200/50">
            <span class="relative flex h-3 w-3">
                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75"></span>
                <span class="relative inline-flex rounded-full h-3 w-3 bg-green-500"></span>
            </span>
            <span class="text-gray-700 font-medium text-sm sm:text-base">{text}</span>
        </div>
    }
}
