use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimatedLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Link that grows slightly while hovered.
#[function_component(AnimatedLink)]
pub fn animated_link(props: &AnimatedLinkProps) -> Html {
    html! {
        <span class="animated-link">
            <a href={props.href.clone()} class={props.class.clone()}>
                { for props.children.iter() }
            </a>
        </span>
    }
}
