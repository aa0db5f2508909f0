use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};
use crate::content::{Project, PROJECTS};

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="py-16 md:py-28 relative overflow-hidden">
            <div class="container mx-auto relative z-10 px-4 md:px-0">
                <div class="md:mr-64 md:ml-16">
                    <Reveal entrance=Entrance::Drop delay_ms=200>
                        <h1 class="text-5xl md:text-8xl font-bold mb-8 md:mb-16 text-white text-center font-serif">
                            "Portfolio"
                        </h1>
                    </Reveal>
                    <Reveal delay_ms=400>
                        <p class="text-white mb-2 max-w-2xl mx-auto text-center text-base md:text-lg">
                            "Showcasing my latest projects in Generative AI, web development, and Illustrations."
                        </p>
                    </Reveal>
                    <Reveal delay_ms=600>
                        <p class="text-white mb-12 md:mb-20 max-w-2xl mx-auto text-center text-base md:text-lg">
                            "Explore my diverse portfolio of innovative solutions and cutting-edge technologies."
                        </p>
                    </Reveal>
                    <div class="space-y-12 md:space-y-20">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(index, project)| view! { <ProjectItem project index /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Odd items put the text on the left.
#[component]
fn ProjectItem(project: &'static Project, index: usize) -> impl IntoView {
    let flipped = index % 2 != 0;
    let image_class = if flipped { "md:order-2 md:pl-8" } else { "md:pr-8" };
    let text_class = if flipped { "md:order-1" } else { "" };
    view! {
        <Reveal class="flex flex-col md:flex-row mb-20">
            <div class=format!("w-full mb-6 md:mb-0 md:w-1/2 {image_class}")>
                <div class="w-full aspect-[4/3] md:h-96 overflow-hidden rounded-3xl shadow-lg transition-transform duration-300 ease-in-out transform hover:scale-110 hover:rotate-3">
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        class="w-full h-full object-cover object-[center_2%]"
                    />
                </div>
            </div>
            <div class=format!(
                "w-full md:w-1/2 mt-4 md:mt-0 flex flex-col justify-center {text_class}",
            )>
                <a
                    href=project.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-3xl font-bold mb-2 text-white font-serif hover:text-[#59437a] transition-colors duration-300"
                >
                    <h3>{project.title}</h3>
                </a>
                <p class="text-[#59437a] mb-4 text-base md:text-lg">{project.description}</p>
                <a
                    href=project.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-[#59437a] font-semibold uppercase tracking-wider inline-block relative group w-max"
                >
                    "View Project"
                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-[#59437a] transition-all duration-300 group-hover:w-full"></span>
                </a>
            </div>
        </Reveal>
    }
}
