use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_interval_fn, use_timeout_fn, use_window, UseTimeoutFnReturn};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::guide::{STORAGE_KEY_ACHIEVEMENTS, STORAGE_KEY_SEEN_FACTS, STORAGE_KEY_TOTAL_CLICKS};
use crate::guide::{
    section_at_midpoint, total_fact_count, GuideState, Phase, Section, ACHIEVEMENT_TOAST_MS,
    FACT_DISPLAY_MS, IDLE_PULSE_INTERVAL_MS, IDLE_PULSE_MS, WELCOME_DISMISS_MS,
};

fn random_roll() -> f64 {
    web_sys::js_sys::Math::random()
}

/// The floating interactive assistant: cycles contextual facts per page
/// section, tracks discovery progress, and unlocks achievements.
#[component]
pub fn PortfolioGuide() -> impl IntoView {
    let state = RwSignal::new(GuideState::default());
    let (is_idle, set_is_idle) = signal(false);
    let (show_welcome, set_show_welcome) = signal(true);

    #[cfg(feature = "hydrate")]
    let persist = {
        let (stored_unlocked, set_stored_unlocked, _) = use_local_storage::<
            Vec<crate::guide::AchievementId>,
            JsonSerdeWasmCodec,
        >(STORAGE_KEY_ACHIEVEMENTS);
        let (stored_seen, set_stored_seen, _) =
            use_local_storage::<Vec<String>, JsonSerdeWasmCodec>(STORAGE_KEY_SEEN_FACTS);
        let (stored_clicks, set_stored_clicks, _) =
            use_local_storage::<u32, JsonSerdeWasmCodec>(STORAGE_KEY_TOTAL_CLICKS);

        // one-shot hydration from storage; corrupted entries decode to
        // defaults inside the codec
        Effect::watch(
            || (),
            move |_, _, _| {
                state.update(|s| {
                    s.hydrate(
                        stored_unlocked.get_untracked(),
                        stored_seen.get_untracked(),
                        stored_clicks.get_untracked(),
                    )
                });
            },
            true,
        );

        move || {
            state.with_untracked(|s| {
                let (unlocked, seen, clicks) = s.persisted();
                set_stored_unlocked(unlocked);
                set_stored_seen(seen);
                set_stored_clicks(clicks);
            })
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let persist = move || {};

    let UseTimeoutFnReturn {
        start: start_dismiss,
        stop: stop_dismiss,
        ..
    } = use_timeout_fn(move |_: ()| state.update(|s| s.dismiss()), FACT_DISPLAY_MS);
    let UseTimeoutFnReturn {
        start: start_toast_clear,
        ..
    } = use_timeout_fn(
        move |_: ()| state.update(|s| s.clear_latest_unlock()),
        ACHIEVEMENT_TOAST_MS,
    );
    let UseTimeoutFnReturn {
        start: start_welcome_clear,
        ..
    } = use_timeout_fn(move |_: ()| set_show_welcome(false), WELCOME_DISMISS_MS);
    let UseTimeoutFnReturn {
        start: start_idle_clear,
        ..
    } = use_timeout_fn(move |_: ()| set_is_idle(false), IDLE_PULSE_MS);

    {
        let start_idle_clear = start_idle_clear.clone();
        let _ = use_interval_fn(
            move || {
                set_is_idle(true);
                start_idle_clear(());
            },
            IDLE_PULSE_INTERVAL_MS,
        );
    }

    {
        let start_welcome_clear = start_welcome_clear.clone();
        Effect::new(move |_| start_welcome_clear(()));
    }

    let reposition = move || {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);
        state.update(|s| s.reposition(width, random_roll(), random_roll()));
    };

    let recompute_section = move || {
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let rects: Vec<(Section, f64, f64)> = Section::ALL
            .iter()
            .filter_map(|&section| {
                document().get_element_by_id(section.dom_id()).map(|el| {
                    let rect = el.get_bounding_client_rect();
                    (section, rect.top(), rect.bottom())
                })
            })
            .collect();
        let section = section_at_midpoint(&rects, viewport_height);
        if state.with_untracked(|s| s.current_section()) != section {
            state.update(|s| {
                s.set_section(section);
            });
            // follow the reader to the new section
            reposition();
        }
    };

    // initial section scan + placement once the page is interactive
    Effect::new(move |_| recompute_section());

    let activate = {
        let start_dismiss = start_dismiss.clone();
        let start_toast_clear = start_toast_clear.clone();
        move || {
            if state.with_untracked(|s| s.phase()) == Phase::Displaying {
                return;
            }
            reposition();
            let outcome = state
                .try_update(|s| s.activate_with(|len| (random_roll() * len as f64) as usize))
                .flatten();
            if let Some(activation) = outcome {
                persist();
                start_dismiss(());
                if !activation.unlocked.is_empty() {
                    start_toast_clear(());
                }
            }
        }
    };

    let dismiss = {
        let stop_dismiss = stop_dismiss.clone();
        move || {
            stop_dismiss();
            state.update(|s| s.dismiss());
        }
    };

    let trigger_secret = {
        let start_dismiss = start_dismiss.clone();
        let start_toast_clear = start_toast_clear.clone();
        move || {
            let newly = state.try_update(|s| s.unlock_secret()).unwrap_or(false);
            if newly {
                persist();
                start_dismiss(());
                start_toast_clear(());
            }
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| recompute_section());
    let _ = use_event_listener(use_window(), ev::resize, move |_| reposition());
    {
        let activate = activate.clone();
        let dismiss = dismiss.clone();
        let trigger_secret = trigger_secret.clone();
        let _ = use_event_listener(use_window(), ev::keydown, move |ev: ev::KeyboardEvent| {
            if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "s" {
                ev.prevent_default();
                trigger_secret();
                return;
            }
            if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
                return;
            }
            match ev.key().as_str() {
                "i" | "I" => activate(),
                "m" | "M" => reposition(),
                "Escape" => dismiss(),
                _ => {}
            }
        });
    }

    let total_clicks = move || state.with(|s| s.total_clicks());
    let active_fact = move || state.with(|s| s.active_fact());
    let latest_unlock = move || state.with(|s| s.latest_unlock().map(|id| id.info()));
    let glyph = move || state.with(|s| s.section_glyph());
    let section_title = move || state.with(|s| s.section_title());
    let progress = move || state.with(|s| s.progress_percent());
    let seen_count = move || state.with(|s| s.seen_count());
    let widget_style = move || {
        let position = state.with(|s| s.position());
        format!("left: {}px; top: {}vh;", position.x, position.y)
    };
    let bubble_style = move || {
        let position = state.with(|s| s.position());
        format!(
            "left: min({}px, calc(100vw - 380px)); top: {}vh; max-width: 360px;",
            position.x + 100.0,
            position.y
        )
    };

    view! {
        <div
            class="fixed z-50 transition-all duration-1000 ease-out"
            style=widget_style
            role="button"
            aria-label="Portfolio guide - click for information"
            tabindex=0
            on:click={
                let activate = activate.clone();
                move |_| activate()
            }
            on:keydown={
                let activate = activate.clone();
                move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        activate();
                    }
                }
            }
        >
            <div class="relative group cursor-pointer">
                <div class="absolute inset-0 bg-white rounded-full blur-2xl opacity-20 group-hover:opacity-40 transition-all duration-500"></div>
                <div class=move || {
                    if is_idle() {
                        "relative w-14 h-14 md:w-20 md:h-20 bg-black rounded-full border-2 border-white shadow-2xl flex items-center justify-center transition-all duration-300 scale-95"
                    } else {
                        "relative w-14 h-14 md:w-20 md:h-20 bg-black rounded-full border-2 border-white shadow-2xl flex items-center justify-center transition-all duration-300 group-hover:scale-110"
                    }
                }>
                    <span class=move || {
                        if is_idle() { "text-2xl md:text-4xl animate-pulse" } else { "text-2xl md:text-4xl" }
                    }>{glyph}</span>
                    <div class="absolute inset-0 rounded-full border border-white/30 animate-ping opacity-20"></div>
                    {move || {
                        let clicks = total_clicks();
                        (clicks > 0)
                            .then(|| {
                                view! {
                                    <div class="absolute -bottom-1 -right-1 w-6 h-6 bg-white text-black rounded-full flex items-center justify-center text-xs font-bold shadow-lg border-2 border-black">
                                        {clicks}
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </div>

        {move || {
            (total_clicks() > 0)
                .then(|| {
                    view! {
                        <div class="fixed top-24 left-6 z-40 bg-black text-white rounded-xl px-4 py-3 shadow-2xl border border-white/20">
                            <div class="text-xs font-semibold tracking-wide">"Discovery Progress"</div>
                            <div class="flex items-center gap-2 mt-1.5">
                                <div class="w-28 h-1.5 bg-white/10 rounded-full overflow-hidden border border-white/10">
                                    <div
                                        class="h-full bg-white transition-all duration-700"
                                        style=move || format!("width: {}%", progress())
                                    ></div>
                                </div>
                                <span class="text-xs font-mono font-semibold">{progress}"%"</span>
                            </div>
                        </div>
                    }
                })
        }}

        {move || {
            active_fact()
                .map(|fact| {
                    view! {
                        <div class="fixed z-50 transition-all duration-500" style=bubble_style>
                            <div class="relative bg-black text-white rounded-xl p-5 shadow-2xl border border-white/30">
                                <button
                                    on:click={
                                        let dismiss = dismiss.clone();
                                        move |ev| {
                                            ev.stop_propagation();
                                            dismiss();
                                        }
                                    }
                                    class="absolute -top-2 -right-2 w-8 h-8 bg-white text-black rounded-full flex items-center justify-center hover:scale-110 transition-all shadow-lg border-2 border-black"
                                    aria-label="Close"
                                >
                                    "✕"
                                </button>
                                <div class="flex items-center gap-3 mb-3 pb-3 border-b border-white/20">
                                    <span class="p-1.5 bg-white/10 rounded-lg border border-white/20">
                                        {glyph}
                                    </span>
                                    <span class="text-sm font-semibold uppercase tracking-wider">
                                        {section_title}
                                    </span>
                                </div>
                                <p class="text-sm leading-relaxed text-white/90">{fact}</p>
                                <div class="mt-4 pt-3 border-t border-white/10 flex items-center justify-between text-xs">
                                    <span class="text-white/60 font-medium">"Press 'I' for more"</span>
                                    <span class="text-white/40 font-mono">
                                        {seen_count}"/"{total_fact_count()}
                                    </span>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}

        {move || {
            (show_welcome() && active_fact().is_none())
                .then(|| {
                    view! {
                        <div class="fixed bottom-8 right-8 z-40 bg-black text-white rounded-xl p-6 shadow-2xl border border-white/30 max-w-md">
                            <button
                                on:click=move |_| set_show_welcome(false)
                                class="absolute -top-2 -right-2 w-8 h-8 bg-white text-black rounded-full flex items-center justify-center hover:scale-110 transition-all shadow-lg border-2 border-black"
                                aria-label="Close welcome message"
                            >
                                "✕"
                            </button>
                            <h4 class="font-bold mb-2 text-lg">"Interactive Portfolio Guide ✨"</h4>
                            <p class="text-sm text-white/80 leading-relaxed mb-3">
                                "I'll move around as you explore. Click me to discover:"
                            </p>
                            <ul class="text-xs text-white/70 space-y-2">
                                <li>"🏆 Achievements & qualifications"</li>
                                <li>"💻 Technical implementation details"</li>
                                <li>"🚀 Project features & technologies"</li>
                            </ul>
                            <div class="mt-4 pt-3 border-t border-white/10 text-xs text-white/60 font-medium">
                                "Keyboard: Press 'I' for info | 'M' to move"
                            </div>
                        </div>
                    }
                })
        }}

        {move || {
            latest_unlock()
                .map(|achievement| {
                    view! {
                        <div class="fixed top-24 right-8 z-50 bg-white text-black rounded-xl p-4 shadow-2xl border-2 border-black">
                            <div class="flex items-center gap-3">
                                <div class="w-12 h-12 bg-black text-white rounded-full flex items-center justify-center text-xl">
                                    "🏅"
                                </div>
                                <div>
                                    <div class="font-bold text-sm">"Achievement Unlocked ✔"</div>
                                    <div class="text-sm font-semibold mt-0.5">{achievement.title}</div>
                                    <div class="text-xs opacity-70">{achievement.description}</div>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
