use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Entrance, Reveal};
use crate::content::{Skill, SkillCategory, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-16 md:py-24 relative overflow-hidden">
            <div class="container mx-auto px-4 md:px-8 relative">
                <div class="md:mr-64 md:ml-16">
                    <Reveal entrance=Entrance::Drop delay_ms=200>
                        <h1 class="text-4xl md:text-8xl font-bold mb-8 md:mb-16 text-white text-center font-serif">
                            "Skills"
                        </h1>
                    </Reveal>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {SKILL_CATEGORIES
                            .iter()
                            .enumerate()
                            .map(|(index, category)| view! { <Category category index /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Category(category: &'static SkillCategory, index: usize) -> impl IntoView {
    let stagger = index as u32 * 200;
    view! {
        <Reveal delay_ms=stagger class="mb-8">
            <h3 class="text-lg md:text-xl font-bold mb-4 text-white">{category.title}</h3>
            {category
                .skills
                .iter()
                .enumerate()
                .map(|(index, skill)| view! { <SkillBar skill index /> })
                .collect_view()}
        </Reveal>
    }
}

/// Grows from empty to the skill's level once scrolled into view.
#[component]
fn SkillBar(skill: &'static Skill, index: usize) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target);
    let fill = skill.fill();
    let stagger = index * 100;
    view! {
        <div node_ref=target class="mb-4">
            <div class="flex justify-between items-center mb-1">
                <span class="text-xs md:text-sm font-medium text-white">{skill.name}</span>
                <span class="text-xs md:text-sm font-semibold text-[#59437a]">{format!("{fill}%")}</span>
            </div>
            <div class="w-full bg-white/20 rounded-full">
                <div
                    class="bg-[#59437a] h-3 rounded-full transition-[width] duration-1000 ease-in-out"
                    style=move || {
                        let width = if revealed.get() { fill } else { 0 };
                        format!("width: {width}%; transition-delay: {stagger}ms")
                    }
                ></div>
            </div>
        </div>
    }
}
