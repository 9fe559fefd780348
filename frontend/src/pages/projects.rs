use yew::prelude::*;

use crate::components::animated_link::AnimatedLink;
use crate::components::icons::{Icon, IconKind};
use crate::content::{Project, PROJECTS};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let footer = if project.coming_soon {
        html! { <p class="muted small">{"Coming Soon"}</p> }
    } else {
        html! {
            <div class="card-actions">
                {
                    if let Some(link) = project.link {
                        html! {
                            <AnimatedLink href={link}>
                                <span class="button button--outline button--small">
                                    <Icon kind={IconKind::ExternalLink} size={16} />
                                    {"See for yourself!"}
                                </span>
                            </AnimatedLink>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(github) = project.github {
                        html! {
                            <AnimatedLink href={github}>
                                <span class="button button--outline button--small">
                                    <Icon kind={IconKind::Github} size={16} />
                                    {"See the Github"}
                                </span>
                            </AnimatedLink>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    };

    html! {
        <div class="project-card card hover-grow fade-up">
            <div class="card-header gradient-header">
                <Icon kind={project.icon} />
                <h3 class="card-title">{project.title}</h3>
            </div>
            <div class="card-content">
                <p class="muted">{project.description}</p>
            </div>
            <div class="card-footer">
                { footer }
            </div>
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section id="projects" class="page-section">
            <h2 class="section-title fade-up">{"Our Groundbreaking Projects"}</h2>
            <div class="projects-grid">
                {
                    PROJECTS.iter().map(|project| html! {
                        <ProjectCard key={project.title} project={project.clone()} />
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .projects-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .project-card {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                }

                .project-card .card-header {
                    flex-direction: row;
                    align-items: center;
                }

                .project-card .card-title {
                    margin: 0 0 0 0.5rem;
                    font-size: 1.125rem;
                }

                .project-card .card-content {
                    flex-grow: 1;
                }

                .card-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    width: 100%;
                }

                @media (min-width: 640px) {
                    .card-actions {
                        flex-direction: row;
                        gap: 1rem;
                    }
                }

                @media (min-width: 768px) {
                    .projects-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
