use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::content::OWNER;
use crate::nav::{LayoutOracle, NavigationState};

/// Navigation state shared with everything below [`Navigation`].
pub type NavContext = RwSignal<NavigationState>;

/// Section offsets as currently laid out in the document.
struct DomLayout;

impl LayoutOracle for DomLayout {
    fn offset_of(&self, id: &str) -> Option<f64> {
        let el = document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }
}

fn window_width() -> Option<f64> {
    window().inner_width().ok()?.as_f64()
}

fn smooth_scroll(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Owns the page's [`NavigationState`] and the window listeners feeding it,
/// then renders the header followed by `children`.
#[component]
pub fn Navigation(children: Children) -> impl IntoView {
    let nav: NavContext = RwSignal::new(NavigationState::default());
    provide_context(nav);

    let sync_viewport = move || {
        // a failed measurement keeps the current layout until the next resize
        if let Some(width) = window_width() {
            nav.maybe_update(|state| state.set_viewport_class(width));
        }
    };
    let track_scroll = move || {
        let Ok(scroll_y) = window().scroll_y() else {
            return;
        };
        nav.maybe_update(|state| {
            let changed = state.track_scroll(scroll_y, &DomLayout);
            if changed {
                if let Some(section) = state.active() {
                    log::debug!("active section: {}", section.label());
                }
            }
            changed
        });
    };

    // both listeners are detached when this component's owner is disposed
    let _ = use_event_listener(use_window(), ev::resize, move |_| sync_viewport());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| track_scroll());

    // client only: measure once after hydration
    Effect::new(move |_| {
        sync_viewport();
        track_scroll();
    });

    view! {
        <Header />
        {children()}
    }
}

#[component]
fn Header() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    move || {
        if nav.with(|s| s.viewport().is_mobile()) {
            Either::Left(view! { <MobileHeader /> })
        } else {
            Either::Right(view! { <DesktopHeader /> })
        }
    }
}

#[component]
fn DesktopHeader() -> impl IntoView {
    view! {
        <header class="fixed z-30 right-8 top-[38vh] flex flex-col items-start w-48">
            <div class="mb-8 w-full">
                <h2 class="text-xl font-bold text-[#59437a]">
                    <span class="border-b-2 border-[#59437a] pb-1">{OWNER}</span>
                </h2>
            </div>
            <nav class="w-full">
                <NavItems />
            </nav>
        </header>
    }
}

#[component]
fn MobileHeader() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let menu_open = move || nav.with(|s| s.menu_open());
    let toggle = move |_: ev::MouseEvent| nav.update(NavigationState::toggle_menu);

    view! {
        <header class="fixed z-30 top-0 left-0 w-full">
            <div class="flex justify-between items-center p-4 bg-[#c262af]">
                <h2 class="text-xl text-[#59437a]">{OWNER}</h2>
                <button
                    on:click=toggle
                    class="text-2xl text-[#59437a]"
                    aria-label="Open menu"
                    aria-expanded=move || menu_open().to_string()
                >
                    <div class="space-y-1">
                        <span class="block w-6 h-0.5 bg-black"></span>
                        <span class="block w-4 h-0.5 bg-black"></span>
                        <span class="block w-5 h-0.5 bg-black"></span>
                    </div>
                </button>
            </div>
            <nav
                class=move || {
                    let state = if menu_open() {
                        "opacity-100 translate-x-0"
                    } else {
                        "opacity-0 -translate-x-full pointer-events-none"
                    };
                    format!(
                        "fixed top-0 left-0 h-full w-3/4 bg-[#c262af] p-8 transition-all duration-300 {state}",
                    )
                }
                aria-hidden=move || (!menu_open()).to_string()
            >
                <div class="flex justify-between items-center mb-8">
                    <h2 class="text-xl text-white">{OWNER}</h2>
                    <button on:click=toggle class="text-2xl text-[#59437a]" aria-label="Close menu">
                        "×"
                    </button>
                </div>
                <NavItems />
            </nav>
        </header>
    }
}

#[component]
fn NavItems() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let is_mobile = move || nav.with(|s| s.viewport().is_mobile());
    let menu_open = move || nav.with(|s| s.menu_open());

    let activate = move |id: &str| {
        let mut request = None;
        nav.maybe_update(|state| {
            request = state.activate_section(id, &DomLayout);
            request.is_some()
        });
        if let Some(request) = request {
            smooth_scroll(request.top);
        }
    };

    let sections = nav.with_untracked(|s| s.sections());
    view! {
        <ul class=move || if is_mobile() { "space-y-4" } else { "text-left" }>
            {sections
                .iter()
                .copied()
                .map(|section| {
                    let id = section.id();
                    let is_active = move || nav.with(|s| s.is_active(&section));
                    view! {
                        <li class=move || if is_mobile() { "" } else { "mb-3" }>
                            <a
                                href=section.href()
                                aria-current=move || is_active().then_some("true")
                                class=move || {
                                    let color = if is_mobile() && menu_open() {
                                        "text-white"
                                    } else {
                                        "text-[#59437a]"
                                    };
                                    format!("text-base uppercase {color} relative group transition-colors")
                                }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    activate(&id);
                                }
                            >
                                {section.label()}
                                <span class=move || {
                                    let width = if is_active() { "w-full" } else { "w-0" };
                                    format!(
                                        "absolute left-0 -bottom-0.5 h-[2px] bg-white transition-all duration-300 group-hover:w-full {width}",
                                    )
                                }></span>
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
