use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

use super::reveal::{Entrance, Reveal};
use crate::blog::BlogEntry;
#[cfg(feature = "ssr")]
use crate::blog::get_entries;

#[server(input = GetUrl)]
pub async fn get_blog_entries() -> Result<Vec<BlogEntry>, ServerFnError> {
    let entries = get_entries();
    tracing::debug!("serving {} blog entries", entries.len());
    Ok(entries)
}

#[component]
pub fn Blog() -> impl IntoView {
    let entries = Resource::new(
        || (),
        |_| async move {
            get_blog_entries().await.unwrap_or_else(|e| {
                log::error!("couldn't load blog entries: {e}");
                Vec::new()
            })
        },
    );

    view! {
        <section id="blog" class="py-16 md:py-28 relative overflow-hidden">
            <div class="container mx-auto relative px-4 md:px-0">
                <div class="md:mr-64 md:ml-16">
                    <Reveal entrance=Entrance::Drop delay_ms=200>
                        <h1 class="text-5xl md:text-8xl font-bold mb-8 md:mb-16 text-white text-center font-serif">
                            "Blog"
                        </h1>
                    </Reveal>
                    <Reveal delay_ms=400>
                        <p class="text-white mb-12 md:mb-20 max-w-2xl mx-auto text-center text-base md:text-lg">
                            "Stay updated with the latest trends and insights in web development and design."
                        </p>
                    </Reveal>
                    <Transition fallback=move || {
                        view! {
                            <div class="space-y-4">
                                <div class="loading-skeleton h-8 rounded"></div>
                                <div class="loading-skeleton h-6 rounded w-3/4"></div>
                                <div class="loading-skeleton h-8 rounded"></div>
                                <div class="loading-skeleton h-6 rounded w-2/3"></div>
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            let entries = entries.await;
                            view! {
                                <div class="space-y-12 md:space-y-20 relative z-10">
                                    {entries
                                        .into_iter()
                                        .map(|entry| view! { <BlogItem entry /> })
                                        .collect_view()}
                                </div>
                            }
                        })}
                    </Transition>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BlogItem(entry: BlogEntry) -> impl IntoView {
    let date = entry.display_date();
    view! {
        <Reveal class="flex flex-col md:flex-row mb-12 md:mb-20">
            <div class="md:w-1/2 md:pr-8 mb-6 md:mb-0">
                <div class="w-full aspect-[4/3] md:h-96 overflow-hidden rounded-3xl shadow-lg transition-transform duration-300 ease-in-out transform hover:scale-105 hover:rotate-2">
                    <img
                        src=entry.image
                        alt=entry.title.clone()
                        loading="lazy"
                        class="w-full h-full object-cover object-[center_2%]"
                    />
                </div>
            </div>
            <div class="md:w-1/2 flex flex-col justify-center">
                <a
                    href=entry.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-2xl md:text-3xl font-bold mb-2 text-white font-serif hover:text-[#59437a] transition-colors duration-300"
                >
                    <h3>{entry.title}</h3>
                </a>
                <p class="text-[#59437a] mb-2 text-sm md:text-lg">{date}</p>
                <div class="text-white mb-4 text-base md:text-lg" inner_html=entry.excerpt></div>
                <a
                    href=entry.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-[#59437a] font-semibold uppercase tracking-wider inline-block relative group w-max"
                >
                    "Read More"
                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-[#59437a] transition-all duration-300 group-hover:w-full"></span>
                </a>
            </div>
        </Reveal>
    }
}
