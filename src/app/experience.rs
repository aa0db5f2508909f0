use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use crate::content::{Role, Timeline, TIMELINES};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-16 md:py-24 relative overflow-hidden">
            <div class="container mx-auto relative px-4 md:px-0">
                <div class="md:mr-64 md:ml-16">
                    <Reveal entrance=Entrance::Drop delay_ms=200>
                        <h1 class="text-5xl md:text-8xl font-bold mb-8 md:mb-16 text-white text-center font-serif">
                            "Experience"
                        </h1>
                    </Reveal>
                    <div class="relative z-10">
                        {TIMELINES.iter().map(|timeline| view! { <TimelineBlock timeline /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineBlock(timeline: &'static Timeline) -> impl IntoView {
    let last = timeline.roles.len().saturating_sub(1);
    view! {
        <div class="mb-12 md:mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-white mb-6 md:mb-8 font-serif">
                {timeline.title}
            </h2>
            <div class="space-y-6 md:space-y-8">
                {timeline
                    .roles
                    .iter()
                    .enumerate()
                    .map(|(index, role)| {
                        view! {
                            <RoleItem role index />
                            {(index < last)
                                .then(|| {
                                    view! {
                                        <hr class="border-[#59437a] mt-8 md:mt-14 border-t-[2px] md:border-t-[2.5px]" />
                                    }
                                })}
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RoleItem(role: &'static Role, index: usize) -> impl IntoView {
    let stagger = index as u32 * 200;
    view! {
        <Reveal delay_ms=stagger class="mb-8 md:mb-12 flex flex-col md:flex-row">
            <div class="w-full md:w-1/3 mb-2 md:mb-0 md:pr-8">
                <p class="text-base md:text-lg text-[#59437a]">{role.period}</p>
            </div>
            <div class="w-full md:w-2/3">
                <h3 class="text-xl md:text-2xl font-bold text-white mb-2 font-serif">{role.title}</h3>
                <p class="text-base md:text-lg text-[#59437a] mb-2">{role.description}</p>
                <p class="text-sm md:text-base text-[#59437a]">{role.location}</p>
            </div>
        </Reveal>
    }
}
