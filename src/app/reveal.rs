use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Share of the element that has to be on screen before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Rise,
    Drop,
    FromLeft,
    FromRight,
    Fade,
}

impl Entrance {
    fn hidden_class(self) -> &'static str {
        match self {
            Self::Rise => "opacity-0 translate-y-12",
            Self::Drop => "opacity-0 -translate-y-12",
            Self::FromLeft => "opacity-0 -translate-x-12",
            Self::FromRight => "opacity-0 translate-x-12",
            Self::Fade => "opacity-0",
        }
    }
}

/// Flips to `true` the first time `target` scrolls into view and stays there.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed.set(true);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    revealed
}

#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    /// Stagger, in milliseconds, before the entrance transition starts.
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_reveal(target);
    view! {
        <div
            node_ref=target
            style=format!("transition-delay: {delay_ms}ms")
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-x-0 translate-y-0"
                } else {
                    entrance.hidden_class()
                };
                format!("transition-all duration-700 ease-out {class} {state}")
            }
        >
            {children()}
        </div>
    }
}
