use serde::Deserialize;
use yew::prelude::*;

use crate::controllers::volume::VolumeIcon;

/// Line icons (lucide path data) used by the link rows and the volume button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Youtube,
    Music,
    Handshake,
    Twitch,
    Instagram,
    Twitter,
    VolumeMuted,
    VolumeLow,
    VolumeHigh,
}

impl From<VolumeIcon> for Icon {
    fn from(icon: VolumeIcon) -> Self {
        match icon {
            VolumeIcon::Muted => Icon::VolumeMuted,
            VolumeIcon::Low => Icon::VolumeLow,
            VolumeIcon::High => Icon::VolumeHigh,
        }
    }
}

impl Icon {
    fn shapes(self) -> Html {
        let speaker = html! { <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5" /> };
        match self {
            Icon::Youtube => html! {
                <>
                    <path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17" />
                    <path d="m10 15 5-3-5-3z" />
                </>
            },
            Icon::Music => html! {
                <>
                    <path d="M9 18V5l12-2v13" />
                    <circle cx="6" cy="18" r="3" />
                    <circle cx="18" cy="16" r="3" />
                </>
            },
            Icon::Handshake => html! {
                <>
                    <path d="m11 17 2 2a1 1 0 1 0 3-3" />
                    <path d="m14 14 2.5 2.5a1 1 0 1 0 3-3l-3.88-3.88a3 3 0 0 0-4.24 0l-.88.88a1 1 0 1 1-3-3l2.81-2.81a5.79 5.79 0 0 1 7.06-.87l.47.28a2 2 0 0 0 1.42.25L21 4" />
                    <path d="m21 3 1 11h-2" />
                    <path d="M3 3 2 14l6.5 6.5a1 1 0 1 0 3-3" />
                    <path d="M3 4h8" />
                </>
            },
            Icon::Twitch => html! {
                <path d="M21 2H3v16h5v4l4-4h5l4-4V2zm-10 9V7m5 4V7" />
            },
            Icon::Instagram => html! {
                <>
                    <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                    <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                </>
            },
            Icon::Twitter => html! {
                <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
            },
            Icon::VolumeMuted => html! {
                <>
                    {speaker}
                    <line x1="22" x2="16" y1="9" y2="15" />
                    <line x1="16" x2="22" y1="9" y2="15" />
                </>
            },
            Icon::VolumeLow => html! {
                <>
                    {speaker}
                    <path d="M15.54 8.46a5 5 0 0 1 0 7.07" />
                </>
            },
            Icon::VolumeHigh => html! {
                <>
                    {speaker}
                    <path d="M15.54 8.46a5 5 0 0 1 0 7.07" />
                    <path d="M19.07 4.93a10 10 0 0 1 0 14.14" />
                </>
            },
        }
    }

    pub fn render(self, class: &'static str) -> Html {
        html! {
            <svg
                class={class}
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { self.shapes() }
            </svg>
        }
    }
}
