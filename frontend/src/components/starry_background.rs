use log::debug;
use rand::Rng;
use yew::prelude::*;

use crate::config;
use crate::theme::{Theme, ThemeContext};

/// One decorative point. `x`/`y` are viewport percentages, `size` is a diameter in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(config::STAR_SIZE_MIN..config::STAR_SIZE_MAX),
        })
        .collect()
}

/// The star set of one mounted background. Sampled once in [`Starfield::attach`];
/// theme changes only decide whether it is drawn.
#[derive(Debug, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn attach<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = generate_stars(rng, config::STAR_COUNT);
        debug!("Generated {} stars", stars.len());
        Self { stars }
    }

    /// `None` means nothing is rendered at all, container included.
    /// Only an explicit light setting hides the stars.
    pub fn render(&self, theme: Theme) -> Option<&[Star]> {
        match theme {
            Theme::Light => None,
            _ => Some(&self.stars),
        }
    }
}

fn star_style(star: &Star) -> String {
    format!(
        "left: {}%; top: {}%; width: {}px; height: {}px;",
        star.x, star.y, star.size, star.size
    )
}

#[function_component(StarryBackground)]
pub fn starry_background() -> Html {
    // use_state's initializer runs once per mount, so re-renders never resample.
    let starfield = use_state(|| Starfield::attach(&mut rand::thread_rng()));
    let theme = use_context::<ThemeContext>();
    let theme = theme.map(|ctx| ctx.theme).unwrap_or_default();

    let Some(stars) = starfield.render(theme) else {
        return html! {};
    };

    html! {
        <div class="starry-background">
            {
                stars.iter().enumerate().map(|(index, star)| {
                    html! {
                        <div key={index} class="star" style={star_style(star)}></div>
                    }
                }).collect::<Html>()
            }
            <style>
                {format!(r#"
                .starry-background {{
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                }}

                .star {{
                    position: absolute;
                    background: #ffffff;
                    border-radius: 9999px;
                    animation: twinkle {}s infinite;
                }}

                @keyframes twinkle {{
                    0%, 100% {{ opacity: 1; }}
                    50% {{ opacity: 0.5; }}
                }}
                "#, config::TWINKLE_PERIOD_SECS)}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Vec<Star> {
        generate_stars(&mut StdRng::seed_from_u64(7), config::STAR_COUNT)
    }

    #[test]
    fn generates_exactly_one_hundred_stars() {
        assert_eq!(sample().len(), 100);
    }

    #[test]
    fn stars_stay_within_bounds() {
        for seed in 0..20 {
            for star in generate_stars(&mut StdRng::seed_from_u64(seed), config::STAR_COUNT) {
                assert!((0.0..100.0).contains(&star.x), "x out of range: {}", star.x);
                assert!((0.0..100.0).contains(&star.y), "y out of range: {}", star.y);
                assert!((1.0..3.0).contains(&star.size), "size out of range: {}", star.size);
            }
        }
    }

    #[test]
    fn light_theme_renders_nothing() {
        let starfield = Starfield::attach(&mut StdRng::seed_from_u64(7));
        assert_eq!(starfield.render(Theme::Light), None);
    }

    #[test]
    fn leaving_light_theme_shows_the_stars_sampled_at_attach() {
        let starfield = Starfield::attach(&mut StdRng::seed_from_u64(7));
        let attached = starfield.render(Theme::Dark).unwrap().to_vec();
        assert_eq!(attached, sample());

        assert_eq!(starfield.render(Theme::Light), None);
        assert_eq!(starfield.render(Theme::Dark), Some(attached.as_slice()));
        assert_eq!(starfield.render(Theme::System), Some(attached.as_slice()));
    }

    #[test]
    fn remounting_samples_a_fresh_set() {
        let first = Starfield::attach(&mut StdRng::seed_from_u64(7));
        let second = Starfield::attach(&mut StdRng::seed_from_u64(8));
        assert_ne!(first, second);
    }

    #[test]
    fn style_positions_by_percent_and_sizes_by_pixels() {
        let star = Star { x: 12.5, y: 40.0, size: 2.0 };
        assert_eq!(star_style(&star), "left: 12.5%; top: 40%; width: 2px; height: 2px;");
    }
}
