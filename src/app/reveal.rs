use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealTracker, RevealVariant, TargetId, REVEAL_THRESHOLD};

/// Reveal state for every `Reveal` on a page.
///
/// Provided by the page that mounts the sections and detached when that
/// page is torn down.
#[derive(Debug, Clone, Copy)]
pub struct RevealRegistry(StoredValue<RevealTracker>);

impl RevealRegistry {
    pub fn new() -> Self {
        Self(StoredValue::new(RevealTracker::new()))
    }

    fn attach(&self) -> Option<TargetId> {
        self.0.try_update_value(|tracker| {
            let id = tracker.register();
            tracker.attach([id]);
            id
        })
    }

    /// Whether `ratio` revealed the target just now.
    fn visible(&self, id: TargetId, ratio: f64) -> bool {
        self.0
            .try_update_value(|tracker| tracker.on_visibility([(id, ratio)]).contains(&id))
            .unwrap_or(false)
    }

    fn release(&self, id: TargetId) {
        self.0.try_update_value(|tracker| tracker.release(id));
    }

    pub fn detach(&self) {
        if let Some(stopped) = self.0.try_update_value(|tracker| tracker.detach()) {
            log::debug!("stopped observing {} unrevealed sections", stopped.len());
        }
    }
}

/// Wraps `children` in an element that plays its entrance animation the
/// first time at least [`REVEAL_THRESHOLD`] of it scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional)] variant: RevealVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let registry = expect_context::<RevealRegistry>();
    let target = NodeRef::<html::Div>::new();
    let revealed = RwSignal::new(false);
    let target_id = registry.attach();

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let Some(id) = target_id else {
                return;
            };
            for entry in entries {
                if registry.visible(id, entry.intersection_ratio()) {
                    log::debug!("revealed {id:?}");
                    revealed.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    on_cleanup(move || {
        if let Some(id) = target_id {
            registry.release(id);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if revealed.get() { " revealed" } else { "" };
                format!("{} {class}{state}", variant.class())
            }
        >
            {children()}
        </div>
    }
}
