use std::time::Duration;

use leptos::html::Div;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// Out-of-range thresholds are clamped into `[0, 1]` rather than rejected
/// (NaN maps to 0).
pub fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// One-shot entrance reveal: the returned flag flips to `true` the first
/// time the target's visible fraction reaches `threshold` and never
/// reverts. The underlying observer is dropped after the flip.
pub fn use_scroll_reveal(threshold: f64) -> (NodeRef<Div>, Signal<bool>) {
    let target = NodeRef::<Div>::new();
    let (is_visible, set_visible) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            // the observer may fire again before the stop below lands
            if is_visible.get_untracked() {
                return;
            }
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_visible(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![clamp_threshold(threshold)]),
    );

    Effect::new(move |_| {
        if is_visible.get() {
            stop();
        }
    });

    (target, is_visible.into())
}

/// Staggered reveal for a list sharing one container trigger. When the
/// container first reaches `threshold`, flag `i` flips at
/// `i * stagger_delay_ms`; the trigger fires at most once per mount and
/// re-entering the viewport does not restart the sequence. Pending
/// flag-sets are canceled if the component unmounts first.
pub fn use_stagger_reveal(
    item_count: usize,
    stagger_delay_ms: u64,
    threshold: f64,
) -> (NodeRef<Div>, Signal<Vec<bool>>) {
    let container = NodeRef::<Div>::new();
    let (visible_items, set_visible_items) = signal(vec![false; item_count]);
    let (triggered, set_triggered) = signal(false);
    let handles = StoredValue::new(Vec::<TimeoutHandle>::new());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        container,
        move |entries, _| {
            if triggered.get_untracked() || !entries.iter().any(|entry| entry.is_intersecting()) {
                return;
            }
            set_triggered(true);
            for index in 0..item_count {
                let delay = Duration::from_millis(stagger_delay_ms * index as u64);
                let scheduled = set_timeout_with_handle(
                    move || {
                        set_visible_items.update(|flags| {
                            if let Some(flag) = flags.get_mut(index) {
                                *flag = true;
                            }
                        });
                    },
                    delay,
                );
                if let Ok(handle) = scheduled {
                    handles.update_value(|h| h.push(handle));
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![clamp_threshold(threshold)]),
    );

    Effect::new(move |_| {
        if triggered.get() {
            stop();
        }
    });

    on_cleanup(move || {
        handles.update_value(|h| {
            for handle in h.drain(..) {
                handle.clear();
            }
        });
    });

    (container, visible_items.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_threshold() {
        assert_eq!(clamp_threshold(0.5), 0.5);
        assert_eq!(clamp_threshold(-0.2), 0.0);
        assert_eq!(clamp_threshold(1.7), 1.0);
        assert_eq!(clamp_threshold(f64::NAN), 0.0);
    }
}
