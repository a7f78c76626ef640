use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::Profile;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let year = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|d| format!("{} ", d.year()))
        .unwrap_or_default();
    view! {
        <footer class="py-8 sm:py-12 px-4 sm:px-6 border-t border-gray-200/50 bg-white/30 backdrop-blur-md">
            <div class="max-w-7xl mx-auto text-center">
                <p class="text-gray-600 text-sm sm:text-base">
                    {format!("© {year}{} • Made with ", profile.name)}
                    <span class="text-red-500">"desperateness"</span>
                </p>
            </div>
        </footer>
    }
}
