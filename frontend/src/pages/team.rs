use yew::prelude::*;

use crate::components::animated_link::AnimatedLink;
use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{TeamMember, TEAM};

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub name: AttrValue,
    pub initial: AttrValue,
    pub src: Option<AttrValue>,
}

/// Shows the picture once it loads, the initial otherwise.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let loaded = use_state(|| false);
    let failed = use_state(|| false);

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    let image = match &props.src {
        Some(src) if !*failed => html! {
            <img
                class={classes!("avatar-image", (!*loaded).then(|| "hidden"))}
                src={src.clone()}
                alt={props.name.clone()}
                {onload}
                {onerror}
            />
        },
        _ => html! {},
    };

    html! {
        <div class="avatar">
            { image }
            {
                if !*loaded || *failed {
                    html! { <span class="avatar-fallback">{props.initial.clone()}</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamMemberCardProps {
    pub member: TeamMember,
}

#[function_component(TeamMemberCard)]
pub fn team_member_card(props: &TeamMemberCardProps) -> Html {
    let member = &props.member;

    html! {
        <div class="team-card card hover-grow scale-in">
            <div class="card-header gradient-header team-card__header">
                <Avatar
                    name={member.name}
                    initial={member.initial()}
                    src={member.avatar_url.map(AttrValue::from)}
                />
            </div>
            <div class="card-content team-card__content">
                <h3>{format!("@{}", member.name)}</h3>
                <p class="muted small">{member.role}</p>
                {
                    if let Some(github_url) = member.github_url {
                        html! {
                            <AnimatedLink href={github_url}>
                                <span class="button button--outline button--small">
                                    <Icon kind={IconKind::Github} size={16} />
                                    {"GitHub"}
                                </span>
                            </AnimatedLink>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <section id="team" class="page-section">
            <h2 class="section-title fade-up">{"Meet Our Visionary Team"}</h2>
            <p class="section-lead fade-up delay-1">
                {"Connect with our team members on our "}
                <AnimatedLink href={config::DISCORD_URL} class="text-link">{"Discord server"}</AnimatedLink>
            </p>
            <div class="team-grid">
                {
                    TEAM.iter().map(|member| html! {
                        <TeamMemberCard key={member.name} member={member.clone()} />
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                .team-card__header {
                    padding: 0.5rem;
                }

                .team-card__content {
                    text-align: center;
                    padding: 0.5rem;
                }

                .team-card__content h3 {
                    margin: 0;
                    font-size: 0.875rem;
                }

                .team-card__content .button {
                    margin-top: 0.5rem;
                }

                .avatar {
                    position: relative;
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto;
                    border-radius: 9999px;
                    border: 4px solid var(--background);
                    overflow: hidden;
                    background: var(--border);
                }

                .avatar-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .avatar-image.hidden {
                    display: none;
                }

                .avatar-fallback {
                    display: flex;
                    width: 100%;
                    height: 100%;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                }

                @media (min-width: 640px) {
                    .team-grid {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .team-card__header,
                    .team-card__content {
                        padding: 1rem;
                    }

                    .team-card__content h3 {
                        font-size: 1rem;
                    }

                    .avatar {
                        width: 6rem;
                        height: 6rem;
                    }
                }

                @media (min-width: 1024px) {
                    .team-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
