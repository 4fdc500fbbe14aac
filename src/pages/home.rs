use log::info;
use yew::prelude::*;

use crate::browser::{DocumentTitle, TimeoutScheduler};
use crate::components::background_media::BackgroundMedia;
use crate::components::links::{MainLinks, SocialLinks};
use crate::components::profile_header::ProfileHeader;
use crate::config::SiteConfig;
use crate::controllers::typewriter::TitleTypewriter;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub site: SiteConfig,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let site = &props.site;

    {
        let title = site.title.clone();
        let timings = site.typewriter;
        use_effect_with_deps(
            move |_| {
                let typewriter = TitleTypewriter::new(title, timings, TimeoutScheduler, DocumentTitle);
                typewriter.start();
                move || {
                    info!("Stopping title animation");
                    typewriter.stop();
                }
            },
            (),
        );
    }

    html! {
        <div class="page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: "Open Sans", sans-serif;
                    }
                    .page {
                        position: relative;
                        width: 100%;
                        min-height: 100vh;
                        overflow: hidden;
                    }
                    .background-video, .background-overlay {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        z-index: -10;
                    }
                    .background-video {
                        object-fit: cover;
                    }
                    .background-overlay {
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .volume-control {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .volume-button {
                        display: flex;
                        padding: 0.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(12px);
                        cursor: pointer;
                    }
                    .volume-button:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .volume-slider {
                        width: 0;
                        opacity: 0;
                        overflow: hidden;
                        transition: all 0.3s ease-in-out;
                        background: rgba(0, 0, 0, 0.3);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                    }
                    .volume-slider.open {
                        width: 8rem;
                        opacity: 1;
                        padding: 0.5rem;
                    }
                    .volume-slider input {
                        width: 100%;
                    }
                    .content {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        min-height: 100vh;
                        padding: 1rem;
                        box-sizing: border-box;
                    }
                    .card {
                        width: 100%;
                        max-width: 24rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(12px);
                        box-sizing: border-box;
                    }
                    .profile-header {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .avatar {
                        width: 7rem;
                        height: 7rem;
                        border-radius: 50%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #27272a;
                        box-shadow: 0 0 0 4px #7c3aed;
                    }
                    .avatar img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .avatar-fallback {
                        font-size: 1.875rem;
                    }
                    .profile-text h1 {
                        font-family: "Roboto", sans-serif;
                        font-size: 2.25rem;
                        margin: 1rem 0 0.5rem;
                    }
                    .profile-text p {
                        font-size: 1.125rem;
                        color: #d1d5db;
                        margin: 0;
                    }
                    .main-links {
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .main-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        color: #fff;
                        text-decoration: none;
                        font-size: 1.125rem;
                        font-weight: 600;
                        background: rgba(255, 255, 255, 0.1);
                        transition: transform 0.3s, background 0.3s;
                    }
                    .main-link:hover {
                        transform: scale(1.05);
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .social-links {
                        display: flex;
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .social-link {
                        color: #d1d5db;
                        transition: color 0.3s, transform 0.3s;
                    }
                    .social-link:hover {
                        color: #fff;
                        transform: scale(1.1);
                    }
                    .icon-md {
                        width: 1.25rem;
                        height: 1.25rem;
                    }
                    .icon-lg {
                        width: 1.75rem;
                        height: 1.75rem;
                    }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                        white-space: nowrap;
                    }
                "#}
            </style>
            <BackgroundMedia
                video_src={site.media.video.clone()}
                audio_src={site.media.audio.clone()}
            />
            <div class="content">
                <main class="card">
                    <ProfileHeader profile={site.profile.clone()} />
                    <MainLinks links={site.main_links.clone()} />
                    <SocialLinks links={site.social_links.clone()} />
                </main>
            </div>
        </div>
    }
}
