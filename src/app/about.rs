use leptos::{either::Either, prelude::*};

use super::reveal::{Entrance, Reveal};
use crate::content::{InfoRow, BEYOND_TECH, EDUCATION, JOURNEY, PERSONAL_INFO};

#[component]
pub fn AboutMe() -> impl IntoView {
    view! {
        <section id="about" class="py-12 md:py-24 relative overflow-hidden">
            <div class="container mx-auto relative z-10 px-4 md:px-0">
                <div class="md:mr-64 md:ml-16">
                    <Reveal entrance=Entrance::Drop delay_ms=200>
                        <h1 class="text-5xl md:text-8xl font-bold mb-8 md:mb-16 text-white text-center font-serif">
                            "About Me"
                        </h1>
                    </Reveal>
                    <div class="flex flex-col lg:flex-row space-y-8 lg:space-y-0 lg:space-x-8">
                        <Reveal entrance=Entrance::FromLeft delay_ms=400 class="lg:w-1/3">
                            <div class="space-y-4 text-white">
                                {PERSONAL_INFO.iter().map(info_row).collect_view()}
                            </div>
                        </Reveal>
                        <Reveal entrance=Entrance::FromRight delay_ms=600 class="lg:w-2/3">
                            <div class="p-6 md:p-8 rounded-lg w-full flex flex-col">
                                <Education />
                                <div class="space-y-4 mb-8 text-white">
                                    <h2 class="text-lg md:text-xl font-bold text-[#59437a]">
                                        "Professional Journey"
                                    </h2>
                                    {JOURNEY
                                        .iter()
                                        .map(|p| view! { <p class="text-sm md:text-base">{*p}</p> })
                                        .collect_view()}
                                    <h2 class="text-lg md:text-xl font-bold text-[#59437a] mt-6">
                                        "Beyond Tech"
                                    </h2>
                                    <p class="text-sm md:text-base">{BEYOND_TECH}</p>
                                </div>
                                <a
                                    href="/cv.pdf"
                                    download="AtherAliCV.pdf"
                                    class="block text-center bg-[#c262af] text-white px-8 py-4 rounded-full hover:bg-opacity-90 transition duration-300 w-full mt-auto text-sm md:text-base font-semibold"
                                >
                                    "DOWNLOAD CV"
                                </a>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn info_row(info: &'static InfoRow) -> impl IntoView {
    let value = match info.href() {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="text-base md:text-lg hover:underline"
            >
                {info.value}
            </a>
        }),
        None => Either::Right(view! { <p class="text-base md:text-lg">{info.value}</p> }),
    };
    view! {
        <div>
            <h2 class="text-sm tracking-[4px] italic mb-1">{info.label}</h2>
            {value}
        </div>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <div class="mb-6 md:mb-8">
            <h2 class="text-2xl md:text-3xl font-bold text-[#59437a] mb-3">"Education"</h2>
            <div class="space-y-2">
                <h3 class="text-xl md:text-2xl font-semibold text-white">{EDUCATION.school}</h3>
                <p class="text-base md:text-lg text-white italic">{EDUCATION.degree}</p>
                <p class="text-[10px] md:text-[14px] text-white">{EDUCATION.focus}</p>
                <p class="text-base md:text-lg text-white">{EDUCATION.years}</p>
                <a
                    href=EDUCATION.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-[#59437a] hover:underline text-sm"
                >
                    {EDUCATION.url.trim_start_matches("https://")}
                </a>
            </div>
        </div>
    }
}
