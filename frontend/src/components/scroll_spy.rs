use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::error::{document, SiteError};
use crate::section_tracker::{IntersectionEntry, IntersectionHost, Observation, SectionId, SectionTracker};

/// Browser `IntersectionObserver` feeding a shared [`SectionTracker`].
pub struct DomIntersectionHost {
    document: Document,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl DomIntersectionHost {
    pub fn new(tracker: Rc<RefCell<SectionTracker>>, threshold: f64) -> Result<Self, SiteError> {
        let document = document()?;

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let batch: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry {
                    target_id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            tracker.borrow_mut().apply_batch(&batch);
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            document,
            observer,
            _callback: callback,
        })
    }
}

impl IntersectionHost for DomIntersectionHost {
    fn observe(&mut self, section: SectionId) -> Result<(), SiteError> {
        let element = self
            .document
            .get_element_by_id(section.as_str())
            .ok_or(SiteError::MissingSection(section.as_str()))?;
        self.observer.observe(&element);
        Ok(())
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

fn section_icon(id: SectionId) -> IconKind {
    match id {
        SectionId::Home => IconKind::Home,
        SectionId::Projects => IconKind::Briefcase,
        SectionId::Team => IconKind::UserCircle,
    }
}

fn item_class(active: bool) -> &'static str {
    if active {
        "scroll-spy-button active"
    } else {
        "scroll-spy-button"
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollSpyItemProps {
    pub id: SectionId,
    pub active: bool,
}

#[function_component(ScrollSpyItem)]
pub fn scroll_spy_item(props: &ScrollSpyItemProps) -> Html {
    html! {
        <li>
            <a href={props.id.anchor()} class={item_class(props.active)}>
                <Icon kind={section_icon(props.id)} size={20} />
                <span class="sr-only">{props.id.as_str()}</span>
            </a>
        </li>
    }
}

/// Floating section navigation that highlights whichever section is in view.
#[function_component(ScrollSpy)]
pub fn scroll_spy() -> Html {
    let active = use_state(|| SectionId::Home);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(SectionTracker::new()));
                {
                    let setter = active.setter();
                    tracker.borrow_mut().subscribe(move |id| setter.set(id));
                }

                let observation =
                    DomIntersectionHost::new(tracker.clone(), config::SECTION_VISIBILITY_THRESHOLD)
                        .and_then(|host| Observation::start(tracker, host, &SectionId::ALL));
                let observation = match observation {
                    Ok(observation) => Some(observation),
                    Err(e) => {
                        error!("Section tracking disabled: {}", e);
                        None
                    }
                };

                move || drop(observation)
            },
            (),
        );
    }

    html! {
        <nav class="scroll-spy">
            <ul>
                {
                    SectionId::ALL.iter().map(|&id| html! {
                        <ScrollSpyItem key={id.as_str()} id={id} active={*active == id} />
                    }).collect::<Html>()
                }
            </ul>
            <style>
                {r#"
                .scroll-spy {
                    position: fixed;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(4px);
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    z-index: 40;
                }

                .scroll-spy ul {
                    display: flex;
                    gap: 1rem;
                    list-style: none;
                    margin: 0;
                    padding: 0.5rem 1rem;
                }

                .scroll-spy-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    color: var(--foreground);
                    transition: background 0.2s ease, color 0.2s ease;
                }

                .scroll-spy-button:hover {
                    background: var(--border);
                }

                .scroll-spy-button.active {
                    background: var(--primary);
                    color: var(--primary-foreground);
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_entry_is_highlighted() {
        let active = SectionId::Projects;
        let classes: Vec<_> = SectionId::ALL
            .iter()
            .map(|&id| item_class(id == active))
            .collect();
        assert_eq!(
            classes,
            vec!["scroll-spy-button", "scroll-spy-button active", "scroll-spy-button"]
        );
    }

    #[test]
    fn every_section_has_its_own_icon() {
        assert_eq!(section_icon(SectionId::Home), IconKind::Home);
        assert_eq!(section_icon(SectionId::Projects), IconKind::Briefcase);
        assert_eq!(section_icon(SectionId::Team), IconKind::UserCircle);
    }
}
