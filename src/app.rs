mod about;
mod contact;
mod effects;
mod footer;
mod hero;
mod nav;
mod work;

use leptos::{either::Either, html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{load_profile, load_projects};
use crate::motion::{FAST_LAYER, SLOW_LAYER};

use about::About;
use contact::Contact;
use effects::{use_active_section, use_parallax, use_smooth_scroll};
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use work::Work;

pub use contact::get_mail_config;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Caveat:wght@700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Anuj Patil - {title}") />
        <Meta
            name="description"
            content="Software developer and AI practitioner. Projects, background and contact."
        />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site: one scrolling page of sections.
#[component]
fn Portfolio() -> impl IntoView {
    let profile = match load_profile() {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            return Either::Right(view! { <p class="p-8">"Portfolio content unavailable."</p> });
        }
    };
    let projects = load_projects().unwrap_or_else(|e| {
        log::error!("{e}");
        &[]
    });

    let slow_blob = NodeRef::<html::Div>::new();
    let fast_blob = NodeRef::<html::Div>::new();
    use_parallax(slow_blob, fast_blob);
    let scroller = use_smooth_scroll();
    provide_context(scroller);
    let active = use_active_section();

    Either::Left(view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-amber-50 via-rose-50 to-blue-50 text-gray-800 relative overflow-hidden">
            <div class="fixed inset-0 pointer-events-none z-0">
                <div
                    node_ref=slow_blob
                    class="absolute left-0 top-0 w-96 h-96 bg-blue-200/30 rounded-full blur-3xl will-change-transform"
                    style=format!("transition: {}", SLOW_LAYER.transition())
                />
                <div
                    node_ref=fast_blob
                    class="absolute right-0 bottom-0 w-96 h-96 bg-purple-200/20 rounded-full blur-3xl will-change-transform"
                    style=format!("transition: {}", FAST_LAYER.transition())
                />
            </div>
            <NavBar active profile />
            <Hero profile />
            <Work projects />
            <About profile />
            <Contact profile />
            <Footer profile />
        </div>
    })
}
