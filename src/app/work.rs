use leptos::prelude::*;

use crate::content::ProjectEntry;
use crate::scroll_spy::Section;

#[component]
pub fn Work(projects: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <section id=Section::Work.id() class="py-20 sm:py-32 px-4 sm:px-6 relative z-10">
            <div class="max-w-7xl mx-auto">
                <div class="mb-12 sm:mb-20">
                    <h2 class="text-4xl sm:text-5xl md:text-6xl font-bold text-gray-900 mb-4">
                        "Selected Work"
                    </h2>
                    <p class="text-lg sm:text-xl text-gray-600 font-light">
                        "Projects that challenge and inspire me"
                    </p>
                </div>
                <div class="grid sm:grid-cols-2 gap-6 sm:gap-8">
                    {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="group bg-white/60 backdrop-blur-md rounded-3xl p-6 sm:p-8 shadow-lg border border-gray-200/50 hover:shadow-2xl hover:scale-[1.02] transition-all duration-300">
            <div class=format!(
                "w-10 h-10 sm:w-12 sm:h-12 bg-gradient-to-r {} rounded-2xl mb-4 sm:mb-6 group-hover:scale-110 transition-transform",
                project.gradient,
            ) />
            <h3 class="text-xl sm:text-2xl font-bold text-gray-900 mb-2 sm:mb-3 group-hover:text-transparent group-hover:bg-gradient-to-r group-hover:bg-clip-text group-hover:from-blue-600 group-hover:to-purple-600 transition-all">
                {project.title.clone()}
            </h3>
            <p class="text-xs sm:text-sm font-medium text-gray-500 mb-3 sm:mb-4">
                {project.role.clone()}
            </p>
            <p class="text-sm sm:text-base text-gray-600 mb-4 sm:mb-6 leading-relaxed">
                {project.description.clone()}
            </p>
            <div class="flex flex-wrap gap-2 mb-4 sm:mb-6">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2 sm:px-3 py-1 bg-gray-100 text-gray-700 rounded-full text-xs font-medium">
                                {t.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=project.link.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 text-gray-900 font-medium group-hover:gap-3 transition-all text-sm sm:text-base"
            >
                "View Project →"
            </a>
        </div>
    }
}
