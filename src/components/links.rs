use yew::prelude::*;

use crate::config::LinkRecord;

#[derive(Properties, PartialEq)]
pub struct LinksProps {
    pub links: Vec<LinkRecord>,
}

/// Full-width call-to-action buttons.
#[function_component(MainLinks)]
pub fn main_links(props: &LinksProps) -> Html {
    html! {
        <section class="main-links">
            { for props.links.iter().map(|link| html! {
                <a key={link.title.clone()} class="main-link" href={link.url.clone()} target="_blank" rel="noopener noreferrer">
                    { link.icon.render("icon-md") }
                    <span>{ &link.title }</span>
                </a>
            }) }
        </section>
    }
}

#[function_component(SocialLinks)]
pub fn social_links(props: &LinksProps) -> Html {
    html! {
        <section class="social-links">
            { for props.links.iter().map(|link| html! {
                <a key={link.title.clone()} class="social-link" href={link.url.clone()} target="_blank" rel="noopener noreferrer">
                    { link.icon.render("icon-lg") }
                    <span class="sr-only">{ &link.title }</span>
                </a>
            }) }
        </section>
    }
}
