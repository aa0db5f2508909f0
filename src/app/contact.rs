use leptos::{either::Either, ev, prelude::*, task::spawn_local};

use super::reveal::{Entrance, Reveal};
use crate::contact::{
    ContactForm, ContactState, EmailRelay, HttpRelay, RelayConfig, Submission, SUCCESS_NOTICE,
};
use crate::content::{CONTACT_DETAILS, SOCIAL_LINKS};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 sm:py-24 md:py-32 relative overflow-hidden">
            <div class="container mx-auto relative px-4 sm:px-6 lg:px-8">
                <div class="md:mr-64 md:ml-16">
                    <Reveal entrance=Entrance::Drop delay_ms=200>
                        <h1 class="text-4xl sm:text-6xl md:text-8xl font-bold mb-10 sm:mb-16 md:mb-20 text-white text-center font-serif">
                            "Get In Touch"
                        </h1>
                    </Reveal>
                    <div class="flex flex-col md:flex-row space-y-12 md:space-y-0 md:space-x-8">
                        <div class="w-full md:w-1/2 flex justify-center">
                            <Reveal
                                entrance=Entrance::FromLeft
                                delay_ms=100
                                class="bg-[#59437a] p-6 sm:p-10 rounded-3xl shadow-lg w-full max-w-md mx-auto"
                            >
                                <MessageForm />
                            </Reveal>
                        </div>
                        <div class="w-full md:w-1/2">
                            <Reveal delay_ms=200 class="text-white">
                                <ContactInfo />
                            </Reveal>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Renders one labelled form field bound to a [`ContactForm`] field.
fn field(
    state: RwSignal<ContactState>,
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    get: fn(&ContactForm) -> &String,
    get_mut: fn(&mut ContactForm) -> &mut String,
) -> impl IntoView {
    let input_class = "w-full bg-transparent border-b-2 border-white text-white placeholder-white focus:outline-none focus:border-[#58B19F] transition duration-300";
    let value = move || state.with(|s| get(&s.form).clone());
    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        state.update(|s| *get_mut(&mut s.form) = text);
    };
    let control = if kind == "textarea" {
        Either::Left(view! {
            <textarea
                id=id
                rows="4"
                class=format!("{input_class} resize-none")
                required
                aria-required="true"
                prop:value=value
                on:input=on_input
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                type=kind
                id=id
                class=input_class
                required
                aria-required="true"
                prop:value=value
                on:input=on_input
            />
        })
    };
    view! {
        <div class="mb-6 sm:mb-8">
            <label for=id class="block text-white text-base sm:text-lg mb-2 sm:mb-3">
                {label}
            </label>
            {control}
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = state.try_update(ContactState::begin).flatten() else {
            return;
        };
        let relay = HttpRelay::new(RelayConfig::from_build_env());
        spawn_local(async move {
            let result = relay.send(&form).await;
            match &result {
                Ok(()) => log::info!("contact message sent"),
                Err(e) => log::error!("contact message failed: {e}"),
            }
            state.update(|s| s.finish(result));
        });
    };

    view! {
        <form on:submit=on_submit>
            {field(state, "name", "Name", "text", |f| &f.name, |f| &mut f.name)}
            {field(state, "email", "Email", "email", |f| &f.email, |f| &mut f.email)}
            {field(state, "subject", "Subject", "text", |f| &f.subject, |f| &mut f.subject)}
            {field(state, "message", "Message", "textarea", |f| &f.message, |f| &mut f.message)}
            <button
                type="submit"
                disabled=move || state.with(|s| s.is_sending())
                class="w-full bg-white text-[#59437a] py-3 sm:py-4 px-6 rounded-full font-bold uppercase tracking-wider hover:bg-[#58B19F] hover:text-white transition duration-300 disabled:opacity-50"
            >
                {move || state.with(|s| s.submit_label())}
            </button>
        </form>
        {move || {
            state
                .with(|s| match s.status() {
                    Submission::Sent => Some(("text-green-500", SUCCESS_NOTICE.to_string())),
                    Submission::Failed(notice) => Some(("text-red-500", notice.clone())),
                    Submission::Idle | Submission::Sending => None,
                })
                .map(|(color, notice)| view! { <p class=format!("mt-4 {color}")>{notice}</p> })
        }}
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <h2 class="text-2xl sm:text-3xl font-bold mb-6 sm:mb-8 font-serif">
            "Let's Connect and Create Something Amazing Together"
        </h2>
        <p class="mb-6 sm:mb-8 text-sm sm:text-base">
            "I'm passionate about bringing innovative ideas to life through collaboration. Whether you have a specific project in mind or simply want to discuss the latest trends in AI & web development, I'm eager to connect. My expertise is at your disposal, so don't hesitate to reach out. Let's create something extraordinary together!"
        </p>
        {CONTACT_DETAILS
            .iter()
            .map(|(label, value)| {
                view! {
                    <div class="mb-4 sm:mb-5 text-sm sm:text-base">
                        <strong>{format!("{label}:")}</strong>
                        " "
                        {*value}
                    </div>
                }
            })
            .collect_view()}
        <div class="flex space-x-4 sm:space-x-6 mt-8 sm:mt-10">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.label
                            class="text-[#59437a] hover:text-white transition-colors duration-300 text-2xl sm:text-3xl"
                        >
                            <i class=link.icon></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
