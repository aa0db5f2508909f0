use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use super::NavContext;
use crate::content::{Service, SERVICES};
use crate::nav::Pointer;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-12 md:py-24 relative overflow-hidden">
            <div class="container mx-auto relative z-10 px-4 md:px-0">
                <div class="md:mr-64 md:ml-16">
                    <Reveal entrance=Entrance::Drop delay_ms=200>
                        <h2 class="text-5xl md:text-8xl font-bold mb-8 md:mb-16 text-white text-center">
                            "My Services"
                        </h2>
                    </Reveal>
                    <Reveal delay_ms=400>
                        <p class="text-white mb-12 sm:mb-16 text-center text-base sm:text-lg max-w-2xl mx-auto">
                            "I leverage cutting-edge technologies and creative expertise to deliver exceptional solutions across various domains. From AI integration to stunning visual designs, I'm here to bring your vision to reality."
                        </p>
                    </Reveal>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 sm:gap-8">
                        {SERVICES
                            .iter()
                            .enumerate()
                            .map(|(index, service)| view! { <ServiceCard service index /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Shows the framework overlay on hover, or on tap for mobile viewports.
#[component]
fn ServiceCard(service: &'static Service, index: usize) -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let (overlay, set_overlay) = signal(false);
    let on_pointer = move |pointer: Pointer| {
        let viewport = nav.with_untracked(|s| s.viewport());
        set_overlay.update(|shown| *shown = viewport.overlay_after(*shown, pointer));
    };

    let stagger = index as u32 * 200;

    view! {
        <Reveal delay_ms=stagger class="h-full">
            <div
                class="bg-[#59437a] p-6 sm:p-8 rounded-2xl shadow-lg text-center h-full flex flex-col justify-between relative overflow-hidden group"
                on:mouseenter=move |_| on_pointer(Pointer::Enter)
                on:mouseleave=move |_| on_pointer(Pointer::Leave)
                on:click=move |_| on_pointer(Pointer::Tap)
            >
                <div>
                    <div class="text-white text-4xl sm:text-5xl mb-4 sm:mb-6" aria-hidden="true">
                        {service.icon}
                    </div>
                    <h3 class="text-white text-xl sm:text-2xl font-bold mb-3 sm:mb-4">
                        {service.title}
                    </h3>
                    <p class="text-white text-sm sm:text-base opacity-90">{service.description}</p>
                </div>
                <div class=move || {
                    let state = if overlay.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-full"
                    };
                    format!(
                        "absolute inset-0 bg-[#4a3663] p-4 sm:p-6 flex flex-col justify-center items-center transition-all duration-300 {state}",
                    )
                }>
                    <h4 class="text-white text-lg sm:text-xl font-bold mb-4">"Expertise"</h4>
                    <div class="flex flex-wrap justify-center gap-2 sm:gap-3">
                        {service
                            .frameworks
                            .iter()
                            .map(|framework| {
                                view! {
                                    <span class="bg-[#59437a] text-white text-xs sm:text-sm px-2 sm:px-3 py-1 sm:py-2 rounded-full">
                                        {*framework}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}
