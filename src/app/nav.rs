use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};

use crate::content::Profile;
use crate::motion::Indicator;
use crate::scroll_spy::Section;

use super::effects::{set_style, Scroller};

fn pill_geometry(x: f64, width: f64) -> [String; 2] {
    [format!("translateX({x}px)"), format!("{width}px")]
}

#[component]
pub fn NavBar(active: Signal<Section>, profile: &'static Profile) -> impl IntoView {
    let scroller = expect_context::<Scroller>();
    let buttons: [NodeRef<html::Button>; 4] = std::array::from_fn(|_| NodeRef::new());
    let pill = NodeRef::<html::Span>::new();
    let motion = StoredValue::new(Indicator::default());

    let retarget = move |section: Section| {
        let Some(i) = Section::ALL.iter().position(|s| *s == section) else {
            return;
        };
        let Some(button) = buttons[i].get_untracked() else {
            return;
        };
        let (left, width): (f64, f64) = (button.offset_left().into(), button.offset_width().into());
        motion.update_value(|m| m.retarget(left, width));
    };

    Effect::new(move |_| retarget(active.get()));
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        retarget(active.get_untracked())
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let Some((x, width)) = motion.try_update_value(|m| m.frame(args.delta / 1000.0)).flatten()
        else {
            return;
        };
        let Some(el) = pill.get_untracked() else {
            return;
        };
        let [transform, width] = pill_geometry(x, width);
        let res = set_style(
            &el,
            &[
                ("transform", transform.as_str()),
                ("width", width.as_str()),
                ("opacity", "1"),
            ],
        );
        if let Err(e) = res {
            log::warn!("couldn't move nav pill: {e:?}");
        }
    });

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 px-4 sm:px-6 py-4 sm:py-6">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-center justify-between gap-2">
                    <div class="bg-white/80 backdrop-blur-md rounded-full px-4 sm:px-6 py-2 sm:py-3 shadow-lg border border-gray-200/50">
                        <div class="w-8 h-8 sm:w-10 sm:h-10 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-white font-bold text-sm sm:text-base">
                            {profile.initials.clone()}
                        </div>
                    </div>
                    <div class="relative flex bg-white/80 backdrop-blur-md rounded-full px-1 sm:px-1.5 py-1 sm:py-1.5 shadow-lg border border-gray-200/50">
                        <span
                            node_ref=pill
                            class="absolute top-1 bottom-1 sm:top-1.5 sm:bottom-1.5 left-0 bg-gray-900 rounded-full opacity-0"
                        />
                        {Section::ALL
                            .into_iter()
                            .zip(buttons)
                            .map(|(section, node)| {
                                view! {
                                    <button
                                        node_ref=node
                                        on:click=move |_| scroller.scroll_to_section(section)
                                        class=move || {
                                            let color = if active.get() == section {
                                                "text-white"
                                            } else {
                                                "text-gray-600 hover:text-gray-900"
                                            };
                                            format!(
                                                "relative px-2 sm:px-6 py-1.5 sm:py-2 rounded-full text-xs sm:text-sm font-medium transition-colors duration-300 {color}",
                                            )
                                        }
                                    >
                                        <span class="relative z-10">{section.label()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="relative group">
                        <div class="absolute hidden lg:block -left-28 top-2 w-28 pointer-events-none opacity-80 rotate-[-6deg]">
                            <div class="relative flex flex-col items-center">
                                <svg
                                    width="60"
                                    height="40"
                                    viewBox="0 0 100 60"
                                    class="absolute -right-2 -top-4"
                                >
                                    <path
                                        d="M 10 40 Q 40 10 90 20"
                                        fill="none"
                                        stroke="black"
                                        stroke-width="4"
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    />
                                    <path
                                        d="M 75 10 L 90 20 L 80 32"
                                        fill="none"
                                        stroke="black"
                                        stroke-width="4"
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    />
                                </svg>
                                <span class="font-caveat text-2xl font-bold text-gray-800 mt-6 mr-4">
                                    "github"
                                </span>
                            </div>
                        </div>
                        <a
                            href=profile.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-white/80 backdrop-blur-md rounded-full p-2 sm:p-3 shadow-lg border border-gray-200/50 hover:scale-110 transition-transform block"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain text-lg sm:text-xl" />
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
