use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Briefcase,
    ChevronDown,
    Close,
    Code,
    ExternalLink,
    Github,
    Home,
    Menu,
    Moon,
    Sparkles,
    Sun,
    UserCircle,
    Users,
    Zap,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(24)]
    pub size: u32,
}

fn paths(kind: IconKind) -> Html {
    match kind {
        IconKind::Briefcase => html! {
            <>
                <rect x="2" y="7" width="20" height="14" rx="2" ry="2" />
                <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
            </>
        },
        IconKind::ChevronDown => html! { <polyline points="6 9 12 15 18 9" /> },
        IconKind::Close => html! { <path d="M18 6 6 18M6 6l12 12" /> },
        IconKind::Code => html! {
            <>
                <polyline points="16 18 22 12 16 6" />
                <polyline points="8 6 2 12 8 18" />
            </>
        },
        IconKind::ExternalLink => html! {
            <>
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
                <polyline points="15 3 21 3 21 9" />
                <line x1="10" y1="14" x2="21" y2="3" />
            </>
        },
        IconKind::Github => html! {
            <>
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
                <path d="M9 18c-4.51 2-5-2-7-2" />
            </>
        },
        IconKind::Home => html! {
            <>
                <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
                <polyline points="9 22 9 12 15 12 15 22" />
            </>
        },
        IconKind::Menu => html! {
            <>
                <line x1="4" y1="6" x2="20" y2="6" />
                <line x1="4" y1="12" x2="20" y2="12" />
                <line x1="4" y1="18" x2="20" y2="18" />
            </>
        },
        IconKind::Moon => html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" /> },
        IconKind::Sparkles => html! {
            <path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z" />
        },
        IconKind::Sun => html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
            </>
        },
        IconKind::UserCircle => html! {
            <>
                <path d="M18 20a6 6 0 0 0-12 0" />
                <circle cx="12" cy="10" r="4" />
                <circle cx="12" cy="12" r="10" />
            </>
        },
        IconKind::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
        IconKind::Zap => html! { <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" /> },
    }
}

/// Stroke icons drawn on a 24x24 grid.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="icon"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths(props.kind) }
        </svg>
    }
}
