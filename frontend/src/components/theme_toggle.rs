use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::theme::{Theme, ThemeAction, ThemeContext};

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
        Theme::System => "System",
    }
}

/// Fixed top-right button with a light / dark / system picker.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let menu_open = use_state(|| false);
    let theme = use_context::<ThemeContext>();
    let Some(theme) = theme else {
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let icon = match theme.resolved() {
        Theme::Light => IconKind::Sun,
        _ => IconKind::Moon,
    };

    html! {
        <div class="theme-toggle">
            <button class="button button--outline button--icon" onclick={toggle_menu}>
                <Icon kind={icon} size={20} />
                <span class="sr-only">{"Toggle theme"}</span>
            </button>
            {
                if *menu_open {
                    html! {
                        <ul class="theme-menu" role="menu">
                            {
                                Theme::ALL.iter().map(|&option| {
                                    let onclick = {
                                        let theme = theme.clone();
                                        let menu_open = menu_open.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            theme.dispatch(ThemeAction::Set(option));
                                            menu_open.set(false);
                                        })
                                    };
                                    html! {
                                        <li key={option.as_str()} role="menuitem">
                                            <button
                                                class={classes!("theme-menu__item", (theme.theme == option).then(|| "selected"))}
                                                {onclick}
                                            >
                                                {theme_label(option)}
                                            </button>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .theme-toggle {
                    position: fixed;
                    top: 1rem;
                    right: 1rem;
                    z-index: 50;
                }

                .theme-menu {
                    position: absolute;
                    right: 0;
                    margin: 0.25rem 0 0;
                    padding: 0.25rem;
                    min-width: 8rem;
                    list-style: none;
                    border-radius: 0.375rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                }

                .theme-menu__item {
                    width: 100%;
                    padding: 0.375rem 0.5rem;
                    border: none;
                    border-radius: 0.25rem;
                    background: none;
                    color: var(--card-foreground);
                    text-align: left;
                    font-size: 0.875rem;
                    cursor: pointer;
                }

                .theme-menu__item:hover,
                .theme-menu__item.selected {
                    background: var(--border);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_option_has_a_label() {
        let labels: Vec<_> = Theme::ALL.iter().map(|&theme| theme_label(theme)).collect();
        assert_eq!(labels, vec!["Light", "Dark", "System"]);
    }
}
