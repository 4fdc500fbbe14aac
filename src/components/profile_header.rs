use yew::prelude::*;

use crate::config::Profile;

#[derive(Properties, PartialEq)]
pub struct ProfileHeaderProps {
    pub profile: Profile,
}

#[function_component(ProfileHeader)]
pub fn profile_header(props: &ProfileHeaderProps) -> Html {
    let profile = &props.profile;
    let avatar_failed = use_state(|| false);

    let on_avatar_error = {
        let avatar_failed = avatar_failed.clone();
        Callback::from(move |_: Event| avatar_failed.set(true))
    };

    html! {
        <header class="profile-header">
            <div class="avatar">
                {
                    if *avatar_failed {
                        html! { <span class="avatar-fallback">{ profile.initials() }</span> }
                    } else {
                        html! {
                            <img src={profile.avatar_url.clone()} alt={profile.name.clone()} onerror={on_avatar_error} />
                        }
                    }
                }
            </div>
            <div class="profile-text">
                <h1>{ &profile.name }</h1>
                <p>{ &profile.description }</p>
            </div>
        </header>
    }
}
