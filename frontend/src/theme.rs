use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, error, info, warn};
use stylist::css;
use stylist::yew::Global;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;
use yew::prelude::*;

use crate::config;
use crate::error::{document, SiteError};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// The theme setting as chosen by the visitor, plus what the OS currently prefers.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
    pub system_prefers_dark: bool,
}

impl ThemeState {
    pub fn new(theme: Theme, system_prefers_dark: bool) -> Self {
        Self { theme, system_prefers_dark }
    }

    /// Always `Light` or `Dark`.
    pub fn resolved(&self) -> Theme {
        match self.theme {
            Theme::System if self.system_prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            explicit => explicit,
        }
    }
}

pub enum ThemeAction {
    Set(Theme),
    SystemChanged(bool),
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ThemeAction::Set(theme) => ThemeState::new(theme, self.system_prefers_dark),
            ThemeAction::SystemChanged(prefers_dark) => {
                if prefers_dark == self.system_prefers_dark {
                    return self;
                }
                ThemeState::new(self.theme, prefers_dark)
            }
        };
        Rc::new(next)
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

fn storage() -> Option<web_sys::Storage> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Some(storage),
        _ => {
            warn!("localStorage unavailable, theme will not persist");
            None
        }
    }
}

fn load_theme() -> Theme {
    let stored = storage().and_then(|s| s.get_item(config::THEME_STORAGE_KEY).ok().flatten());
    match stored.map(|value| value.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            warn!("ignoring stored theme: {}", e);
            Theme::default()
        }
        None => Theme::default(),
    }
}

fn store_theme(theme: Theme) {
    if let Some(storage) = storage() {
        if let Err(e) = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str()) {
            warn!("failed to persist theme: {}", SiteError::from(e));
        }
    }
}

fn dark_scheme_query() -> Result<MediaQueryList, SiteError> {
    web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .match_media(DARK_SCHEME_QUERY)?
        .ok_or_else(|| SiteError::Js(format!("matchMedia{} returned null", DARK_SCHEME_QUERY)))
}

fn system_prefers_dark() -> bool {
    dark_scheme_query().map(|q| q.matches()).unwrap_or(true)
}

fn apply_to_document(resolved: Theme) -> Result<(), SiteError> {
    let root = document()?.document_element().ok_or(SiteError::NoDocument)?;
    let classes = root.class_list();
    classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str())?;
    classes.add_1(resolved.as_str())?;
    Ok(())
}

/// Keeps a `change` listener on the dark-scheme media query until dropped.
struct SystemSchemeListener {
    query: MediaQueryList,
    callback: Closure<dyn Fn()>,
}

impl SystemSchemeListener {
    fn attach(dispatcher: UseReducerDispatcher<ThemeState>) -> Result<Self, SiteError> {
        let query = dark_scheme_query()?;
        let callback = Closure::<dyn Fn()>::new({
            let query = query.clone();
            move || dispatcher.dispatch(ThemeAction::SystemChanged(query.matches()))
        });
        query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())?;
        Ok(Self { query, callback })
    }
}

impl Drop for SystemSchemeListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to detach color scheme listener: {}", SiteError::from(e));
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(|| ThemeState::new(load_theme(), system_prefers_dark()));

    {
        use_effect_with_deps(
            move |state: &ThemeState| {
                info!("Theme set to {} (showing {})", state.theme, state.resolved());
                store_theme(state.theme);
                if let Err(e) = apply_to_document(state.resolved()) {
                    error!("failed to apply theme: {}", e);
                }
                || ()
            },
            (*state).clone(),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = match SystemSchemeListener::attach(dispatcher) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        debug!("not following system color scheme: {}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ThemeContext> context={state}>
            <ThemePalette />
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(ThemePalette)]
fn theme_palette() -> Html {
    html! {
        <Global css={css!(r#"
            html.light {
                --background: #ffffff;
                --foreground: #09090b;
                --card: #ffffff;
                --card-foreground: #09090b;
                --primary: #7c3aed;
                --primary-foreground: #fafafa;
                --accent: #db2777;
                --muted-foreground: #71717a;
                --border: #e4e4e7;
            }
            html.dark {
                --background: #09090b;
                --foreground: #fafafa;
                --card: #18181b;
                --card-foreground: #fafafa;
                --primary: #a78bfa;
                --primary-foreground: #09090b;
                --accent: #f472b6;
                --muted-foreground: #a1a1aa;
                --border: #27272a;
            }
            body {
                margin: 0;
                background: var(--background);
                color: var(--foreground);
                font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                transition: background 0.3s ease, color 0.3s ease;
            }
            html {
                scroll-behavior: smooth;
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ThemeState, action: ThemeAction) -> ThemeState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn parses_known_theme_names() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("system".parse::<Theme>(), Ok(Theme::System));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::System.to_string(), "system");
    }

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn system_theme_follows_preference() {
        assert_eq!(ThemeState::new(Theme::System, true).resolved(), Theme::Dark);
        assert_eq!(ThemeState::new(Theme::System, false).resolved(), Theme::Light);
        assert_eq!(ThemeState::new(Theme::Light, true).resolved(), Theme::Light);
    }

    #[test]
    fn set_replaces_the_setting_and_keeps_preference() {
        let state = reduce(ThemeState::new(Theme::Dark, false), ThemeAction::Set(Theme::System));
        assert_eq!(state, ThemeState::new(Theme::System, false));
        assert_eq!(state.resolved(), Theme::Light);
    }

    #[test]
    fn system_change_keeps_explicit_setting() {
        let state = reduce(ThemeState::new(Theme::Light, true), ThemeAction::SystemChanged(false));
        assert_eq!(state, ThemeState::new(Theme::Light, false));
    }

    #[test]
    fn unchanged_system_preference_returns_same_state() {
        let state = Rc::new(ThemeState::new(Theme::System, true));
        let next = state.clone().reduce(ThemeAction::SystemChanged(true));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
