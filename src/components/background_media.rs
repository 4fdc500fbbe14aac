use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::browser::{HtmlMediaSink, InteractionListener};
use crate::components::icon::Icon;
use crate::controllers::media::MediaController;
use crate::controllers::volume::{VolumeAction, VolumeState};

#[derive(Properties, PartialEq)]
pub struct BackgroundMediaProps {
    pub video_src: AttrValue,
    pub audio_src: AttrValue,
}

#[function_component(BackgroundMedia)]
pub fn background_media(props: &BackgroundMediaProps) -> Html {
    let video_ref = use_node_ref();
    let audio_ref = use_node_ref();
    let volume = use_reducer(VolumeState::default);
    let interacted = use_state(|| false);
    let volume_hovered = use_state(|| false);

    let controller = {
        let video_ref = video_ref.clone();
        let audio_ref = audio_ref.clone();
        use_memo(
            move |_| {
                MediaController::new(
                    HtmlMediaSink::new(video_ref, "Video"),
                    HtmlMediaSink::new(audio_ref, "Audio"),
                )
            },
            (),
        )
    };

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                controller.silence_video();
                || ()
            },
            (),
        );
    }

    // Listen for the first click/touch until the gate opens; the guard
    // drops (and unregisters) on either that or unmount.
    {
        let controller = controller.clone();
        let interacted_handle = interacted.clone();
        use_effect_with_deps(
            move |interacted: &bool| {
                let listener = if *interacted {
                    None
                } else {
                    let on_interaction = move || {
                        if controller.interact() {
                            interacted_handle.set(true);
                        }
                    };
                    match InteractionListener::attach(on_interaction) {
                        Ok(listener) => Some(listener),
                        Err(err) => {
                            warn!("Could not listen for first interaction: {}", err);
                            None
                        }
                    }
                };
                move || drop(listener)
            },
            *interacted,
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |(state, _): &(VolumeState, bool)| {
                controller.sync(state);
                || ()
            },
            (*volume, *interacted),
        );
    }

    let on_toggle_mute = {
        let controller = controller.clone();
        let volume = volume.clone();
        let interacted = interacted.clone();
        Callback::from(move |_: MouseEvent| {
            volume.dispatch(controller.toggle_mute());
            if controller.has_interacted() && !*interacted {
                info!("Audio unlocked from mute button");
                interacted.set(true);
            }
        })
    };

    let on_volume_input = {
        let volume = volume.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let level = input.value_as_number();
            if level.is_nan() {
                warn!("Ignoring non-numeric volume input {:?}", input.value());
                return;
            }
            volume.dispatch(VolumeAction::SetLevel(level));
        })
    };

    let on_mouse_enter = {
        let volume_hovered = volume_hovered.clone();
        Callback::from(move |_: MouseEvent| volume_hovered.set(true))
    };
    let on_mouse_leave = {
        let volume_hovered = volume_hovered.clone();
        Callback::from(move |_: MouseEvent| volume_hovered.set(false))
    };

    let slider_class = if *volume_hovered {
        "volume-slider open"
    } else {
        "volume-slider"
    };

    html! {
        <>
            <video
                ref={video_ref}
                src={props.video_src.clone()}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
                class="background-video"
            />
            <audio ref={audio_ref} src={props.audio_src.clone()} loop=true playsinline=true />
            <div class="background-overlay" />
            <div class="volume-control" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
                <button class="volume-button" onclick={on_toggle_mute} aria-label="Toggle sound">
                    { Icon::from(volume.icon()).render("icon-lg") }
                </button>
                <div class={slider_class}>
                    <input
                        type="range"
                        min="0"
                        max="1"
                        step="0.01"
                        value={volume.slider_value().to_string()}
                        oninput={on_volume_input}
                    />
                </div>
            </div>
        </>
    }
}
