use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::section_tracker::SectionId;

fn section_label(id: SectionId) -> &'static str {
    match id {
        SectionId::Home => "Home",
        SectionId::Projects => "Projects",
        SectionId::Team => "Team",
    }
}

#[function_component(MobileMenu)]
pub fn mobile_menu() -> Html {
    let menu_open = use_state(|| false);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    // Anchors still navigate; closing only hides the sheet.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <button class="button button--outline button--icon mobile-menu-trigger" onclick={open_menu}>
                <Icon kind={IconKind::Menu} />
                <span class="sr-only">{"Open menu"}</span>
            </button>
            {
                if *menu_open {
                    html! {
                        <>
                            <div class="sheet-overlay" onclick={close_menu.clone()}></div>
                            <aside class="sheet" role="dialog" aria-modal="true">
                                <button class="sheet-close" onclick={close_menu.clone()}>
                                    <Icon kind={IconKind::Close} size={16} />
                                    <span class="sr-only">{"Close"}</span>
                                </button>
                                <header class="sheet-header">
                                    <h2>{"Menu"}</h2>
                                    <p>{"Navigate through our site"}</p>
                                </header>
                                <nav class="sheet-nav">
                                    {
                                        SectionId::ALL.iter().map(|&id| html! {
                                            <a key={id.as_str()} href={id.anchor()} onclick={close_menu.clone()}>
                                                {section_label(id)}
                                            </a>
                                        }).collect::<Html>()
                                    }
                                    <a href={config::DISCORD_URL} onclick={close_menu.clone()}>{"Join Discord"}</a>
                                    <a href={config::GITHUB_ORG_URL} onclick={close_menu.clone()}>{"GitHub"}</a>
                                </nav>
                            </aside>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .mobile-menu-trigger {
                    position: fixed;
                    top: 1rem;
                    right: 4rem;
                    z-index: 50;
                }

                .sheet-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.8);
                    z-index: 60;
                    animation: overlayIn 0.2s ease-out;
                }

                .sheet {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100%;
                    width: 75%;
                    max-width: 24rem;
                    padding: 1.5rem;
                    box-sizing: border-box;
                    background: var(--background);
                    border-left: 1px solid var(--border);
                    z-index: 70;
                    animation: sheetIn 0.3s ease-out;
                }

                .sheet-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    opacity: 0.7;
                    cursor: pointer;
                }

                .sheet-close:hover {
                    opacity: 1;
                }

                .sheet-header h2 {
                    margin: 0;
                    font-size: 1.125rem;
                }

                .sheet-header p {
                    margin: 0.5rem 0 0;
                    color: var(--muted-foreground);
                    font-size: 0.875rem;
                }

                .sheet-nav {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                .sheet-nav a {
                    color: var(--foreground);
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-decoration: none;
                }

                @keyframes overlayIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes sheetIn {
                    from { transform: translateX(100%); }
                    to { transform: translateX(0); }
                }
                "#}
            </style>
        </>
    }
}
