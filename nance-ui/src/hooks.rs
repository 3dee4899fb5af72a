//! Reactive hooks

use gloo_timers::callback::Timeout;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Default debounce delay in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

/// Debounce a signal: the returned signal takes the source value only after
/// `delay_ms` of silence.
///
/// One pending timer per hook instance; every new source value cancels and
/// replaces it. The timer is dropped with the owning component.
pub fn use_debounced(value: Signal<String>, delay_ms: u32) -> ReadSignal<String> {
    let (debounced, set_debounced) = create_signal(value.get_untracked());

    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    create_effect(move |_| {
        let next = value.get();

        // Replacing the slot drops, and thereby cancels, the previous timer
        let timeout = Timeout::new(delay_ms, move || {
            set_debounced.set(next);
        });
        *pending.borrow_mut() = Some(timeout);
    });

    debounced
}
