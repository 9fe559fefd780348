use yew::prelude::*;

use crate::components::animated_link::AnimatedLink;
use crate::components::icons::{Icon, IconKind};
use crate::components::mobile_menu::MobileMenu;
use crate::components::scroll_spy::ScrollSpy;
use crate::components::starry_background::StarryBackground;
use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::content;
use crate::pages::projects::ProjectsSection;
use crate::pages::team::TeamSection;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero__header fade-up">
                <AnimatedLink href={config::DISCORD_URL} class="hero__tagline">
                    <span>{content::TAGLINE}</span>
                </AnimatedLink>
                <h1 class="hero__title fade-up delay-1">{content::HEADLINE}</h1>
                <div class="fade-up delay-2">
                    <p class="hero__description">{content::HERO_DESCRIPTION}</p>
                </div>
                <div class="hero__actions fade-up delay-3">
                    <AnimatedLink href={config::DISCORD_URL}>
                        <span class="button button--large">{"Join Our Discord"}</span>
                    </AnimatedLink>
                    <AnimatedLink href={config::GITHUB_ORG_URL}>
                        <span class="button button--large button--outline">
                            {"Explore our Github Organization"}
                        </span>
                    </AnimatedLink>
                </div>
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    html! {
        <section class="cta rise-in">
            <h2 class="cta__title">{content::CTA_HEADLINE}</h2>
            <p class="cta__description">{content::CTA_DESCRIPTION}</p>
            <AnimatedLink href={config::DISCORD_URL}>
                <span class="button cta__button">
                    {"Enter the AI Realm"}
                    <Icon kind={IconKind::ChevronDown} size={20} />
                </span>
            </AnimatedLink>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{content::COPYRIGHT}</p>
            <p>
                {"Contact us on "}
                <AnimatedLink href={config::DISCORD_URL} class="text-link">{"Discord"}</AnimatedLink>
            </p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <StarryBackground />
            <ThemeToggle />
            <MobileMenu />
            <main class="container">
                <Hero />
                <ProjectsSection />
                <TeamSection />
                <CtaSection />
                <Footer />
            </main>
            <ScrollSpy />

            <style>
                {r#"
                .site {
                    position: relative;
                    min-height: 100vh;
                }

                .container {
                    position: relative;
                    z-index: 1;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 4rem 1rem 0;
                }

                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    padding: 0;
                    margin: -1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                    border: 0;
                }

                .muted {
                    color: var(--muted-foreground);
                }

                .small {
                    font-size: 0.875rem;
                }

                .text-link {
                    color: var(--primary);
                }

                .text-link:hover {
                    text-decoration: underline;
                }

                /* entrance and hover motion */
                .fade-up {
                    opacity: 0;
                    animation: fadeUp 0.5s ease-out forwards;
                }

                .delay-1 { animation-delay: 0.2s; }
                .delay-2 { animation-delay: 0.4s; }
                .delay-3 { animation-delay: 0.6s; }

                .scale-in {
                    opacity: 0;
                    animation: scaleIn 0.3s ease-out forwards;
                }

                .rise-in {
                    opacity: 0;
                    animation: riseIn 0.5s ease-out forwards;
                }

                .hover-grow {
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .hover-grow:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.25);
                }

                .animated-link {
                    display: inline-block;
                    transition: transform 0.2s ease;
                }

                .animated-link:hover {
                    transform: scale(1.05);
                }

                .animated-link > a {
                    color: inherit;
                    text-decoration: none;
                }

                @keyframes fadeUp {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                @keyframes scaleIn {
                    from {
                        opacity: 0;
                        transform: scale(0.9);
                    }
                    to {
                        opacity: 1;
                        transform: scale(1);
                    }
                }

                @keyframes riseIn {
                    from {
                        opacity: 0;
                        transform: translateY(50px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                /* buttons */
                .button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 0.375rem;
                    border: 1px solid transparent;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s ease, opacity 0.2s ease;
                }

                .button:hover {
                    opacity: 0.9;
                }

                .button--outline {
                    background: var(--background);
                    border-color: var(--border);
                    color: var(--foreground);
                }

                .button--outline:hover {
                    background: var(--border);
                }

                .button--large {
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                }

                .button--small {
                    padding: 0.25rem 0.5rem;
                    font-size: 0.75rem;
                }

                .button--icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    padding: 0;
                }

                /* cards */
                .card {
                    overflow: hidden;
                    border-radius: 0.5rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--card-foreground);
                }

                .card-header {
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                }

                .gradient-header {
                    background: linear-gradient(to right, var(--primary), var(--accent));
                    color: var(--primary-foreground);
                }

                .card-content {
                    padding: 1rem;
                }

                .card-footer {
                    display: flex;
                    align-items: center;
                    padding: 1rem;
                }

                /* sections */
                .page-section {
                    margin-top: 6rem;
                }

                .page-section > * + * {
                    margin-top: 3rem;
                }

                .section-title {
                    text-align: center;
                    font-size: 1.875rem;
                    font-weight: 700;
                }

                .section-lead {
                    text-align: center;
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hero__header {
                    max-width: 980px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 2rem 0;
                }

                .hero__tagline {
                    color: var(--primary);
                    font-weight: 500;
                }

                .hero__tagline:hover span {
                    text-decoration: underline;
                    text-underline-offset: 4px;
                }

                .hero__title {
                    text-align: center;
                    font-size: 1.875rem;
                    font-weight: 700;
                    line-height: 1.1;
                    letter-spacing: -0.05em;
                    margin: 0;
                }

                .hero__description {
                    max-width: 750px;
                    text-align: center;
                    font-size: 1.125rem;
                    font-weight: 300;
                    color: var(--muted-foreground);
                    text-wrap: balance;
                }

                .hero__actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1rem 0;
                }

                .cta {
                    text-align: center;
                    margin-top: 6rem;
                }

                .cta__title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    background: linear-gradient(to right, var(--primary), var(--accent));
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .cta__description {
                    max-width: 42rem;
                    margin: 2rem auto;
                }

                .cta__button {
                    padding: 0.75rem 1.5rem;
                    font-size: 1rem;
                }

                .footer {
                    margin-top: 6rem;
                    padding: 2rem 1rem;
                    text-align: center;
                    background: var(--card);
                    color: var(--card-foreground);
                }

                .footer p + p {
                    margin-top: 0.5rem;
                }

                @media (min-width: 640px) {
                    .container {
                        padding-left: 1.5rem;
                        padding-right: 1.5rem;
                    }

                    .section-title,
                    .cta__title {
                        font-size: 2.25rem;
                    }

                    .hero__title {
                        font-size: 2.25rem;
                    }

                    .hero__actions {
                        flex-direction: row;
                    }

                    .cta__button {
                        padding: 1rem 2rem;
                        font-size: 1.125rem;
                    }
                }

                @media (min-width: 768px) {
                    .hero__title {
                        font-size: 3rem;
                    }

                    .hero__description {
                        font-size: 1.5rem;
                    }
                }

                @media (min-width: 1024px) {
                    .container {
                        padding-left: 2rem;
                        padding-right: 2rem;
                    }

                    .hero__title {
                        font-size: 3.75rem;
                    }

                    .hero__header {
                        padding: 6rem 0 5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
