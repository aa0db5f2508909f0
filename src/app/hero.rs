use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use crate::content::{OWNER, ROLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="pt-20 md:pt-12 pb-12 md:pb-24 relative overflow-hidden">
            <div class="container mx-auto relative z-10">
                <div class="px-4 md:mr-64 md:ml-16 flex flex-col md:flex-row md:items-center md:justify-between">
                    <Reveal
                        entrance=Entrance::FromRight
                        delay_ms=400
                        class="relative z-10 mb-8 md:mb-0 w-full md:w-auto order-1 md:order-2"
                    >
                        <div class="relative w-full aspect-square md:w-[580px] md:h-[700px] rounded-3xl overflow-hidden">
                            <img
                                src="/images/ather.png"
                                alt=OWNER
                                class="w-full h-full object-cover object-[center_2%] rounded-3xl shadow-2xl"
                            />
                        </div>
                    </Reveal>
                    <Reveal
                        entrance=Entrance::FromLeft
                        delay_ms=200
                        class="z-20 max-w-full md:max-w-2xl order-2 md:order-1"
                    >
                        <h1 class="text-7xl md:text-8xl font-bold text-white leading-tight mb-4 font-serif">
                            <span class="block">"Hello"</span>
                            <span class="block">"I'm Ather"</span>
                            <span class="block">"Ali"</span>
                        </h1>
                        <p class="text-xl md:text-2xl text-white mt-6">{ROLE}</p>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
