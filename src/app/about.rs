use leptos::prelude::*;

use crate::content::Profile;
use crate::scroll_spy::Section;

#[component]
pub fn About(profile: &'static Profile) -> impl IntoView {
    let education = &profile.education;
    view! {
        <section id=Section::About.id() class="py-20 sm:py-32 px-4 sm:px-6 relative z-10">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-2 gap-12 sm:gap-16 items-center">
                    <div class="space-y-4 sm:space-y-6">
                        <h2 class="text-4xl sm:text-5xl md:text-6xl font-bold text-gray-900">
                            "About Me"
                        </h2>
                        <div class="space-y-3 sm:space-y-4 text-base sm:text-lg text-gray-600 leading-relaxed">
                            {profile.about.iter().map(|p| view! { <p>{p.clone()}</p> }).collect_view()}
                        </div>
                        <div class="bg-white/60 backdrop-blur-md rounded-3xl p-5 sm:p-6 border border-gray-200/50">
                            <h3 class="font-semibold text-gray-900 mb-2 sm:mb-3 text-base sm:text-lg">
                                "Education"
                            </h3>
                            <p class="text-gray-700 font-medium text-sm sm:text-base">
                                {education.degree.clone()}
                            </p>
                            <p class="text-gray-600 text-xs sm:text-sm">{education.school.clone()}</p>
                            <p class="text-gray-500 text-xs sm:text-sm">
                                {format!("{} • {}", education.years, education.grade)}
                            </p>
                        </div>
                    </div>
                    <ProfileCard profile />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileCard(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="relative order-first md:order-last">
            <div class="bg-gradient-to-br from-blue-400 to-purple-500 rounded-3xl p-1 shadow-2xl">
                <div class="bg-white rounded-3xl p-8 sm:p-12 text-center">
                    <div class="text-6xl sm:text-8xl mb-4 sm:mb-6">"👨‍💻"</div>
                    <h3 class="text-xl sm:text-2xl font-bold text-gray-900 mb-2">
                        {profile.name.clone()}
                    </h3>
                    <p class="text-sm sm:text-base text-gray-600">{profile.headline.clone()}</p>
                    <div class="mt-6 sm:mt-8 pt-6 sm:pt-8 border-t border-gray-200 text-left space-y-2 sm:space-y-3">
                        <div class="flex items-center gap-3 text-gray-600 text-sm sm:text-base">
                            <span class="text-blue-500 flex-shrink-0">"📍"</span>
                            <span>{profile.location.clone()}</span>
                        </div>
                        <div class="flex items-center gap-3 text-gray-600">
                            <span class="text-purple-500 flex-shrink-0">"✉"</span>
                            <span class="text-xs sm:text-sm break-all">{profile.email.clone()}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
