use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::pattern_backdrop::PatternBackdrop;
use crate::components::reveal_card::{ScrollRevealCard, REVEAL_CARD_CSS};
use crate::components::scene::{ContainerSize, SceneEmbed, SplineViewer};
use crate::config;
use crate::content::{FeatureEntry, BRAND, CTA_LABEL, FEATURES, FEATURES_BLURB, HERO_TAGLINE};

pub const FEATURES_ANCHOR: &str = "features";

/// Hero copy enters with a short stagger, in this order.
const ENTRANCE_DELAYS_MS: [u32; 3] = [0, 80, 160];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <Hero />
            <FeatureSection features={FEATURES.to_vec()} />
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FadeUpProps {
    delay_ms: u32,
    #[prop_or_default]
    class: Classes,
    children: Children,
}

#[function_component(FadeUp)]
fn fade_up(props: &FadeUpProps) -> Html {
    html! {
        <div
            class={classes!("fade-up", props.class.clone())}
            style={format!("animation-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let [heading_delay, tagline_delay, cta_delay] = ENTRANCE_DELAYS_MS;

    html! {
        <section class="hero">
            <SceneEmbed<SplineViewer>
                widget={SplineViewer::new(config::SCENE_URL)}
                size={ContainerSize::FILL}
            />
            // Contrast wash over the scene; lets pointer input through
            <div class="hero-wash"></div>

            <div class="hero-overlay">
                <div class="hero-inner">
                    <div class="hero-copy">
                        <FadeUp delay_ms={heading_delay}>
                            <h1 class="hero-title">{ BRAND }</h1>
                        </FadeUp>
                        <FadeUp delay_ms={tagline_delay}>
                            <p class="hero-tagline">{ HERO_TAGLINE }</p>
                        </FadeUp>
                        <FadeUp delay_ms={cta_delay} class="hero-cta-row">
                            <a href={format!("#{}", FEATURES_ANCHOR)} class="cta cta-dark">
                                { CTA_LABEL }
                            </a>
                        </FadeUp>
                    </div>
                </div>
            </div>
            <PatternBackdrop />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureSectionProps {
    #[prop_or_default]
    pub features: Vec<FeatureEntry>,
}

/// Sticky brand column beside a stack of reveal cards, one per entry in
/// the order given.
#[function_component(FeatureSection)]
pub fn feature_section(props: &FeatureSectionProps) -> Html {
    html! {
        <section id={FEATURES_ANCHOR} class="features">
            <style>{ REVEAL_CARD_CSS }</style>
            <div class="features-grid">
                <div class="features-label">
                    <div class="features-label-sticky">
                        <div class="features-label-inner">
                            <h2 class="features-title">{ BRAND }</h2>
                            <p class="features-blurb">{ FEATURES_BLURB }</p>
                            <a href="#" class="cta cta-accent">{ CTA_LABEL }</a>
                        </div>
                    </div>
                </div>

                <div class="features-cards">
                    {
                        props.features.iter().enumerate().map(|(index, feature)| html! {
                            <ScrollRevealCard
                                key={index}
                                title={feature.title}
                                description={feature.description}
                            />
                        }).collect::<Html>()
                    }
                    // Room for the last card to line up with the sticky column
                    <div class="features-spacer"></div>
                </div>
            </div>
        </section>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        width: 100%;
        background: #ffffff;
        color: #111827;
    }

    .hero {
        position: relative;
        height: 68vh;
        width: 100%;
        overflow: hidden;
    }
    .scene-embed {
        width: 100%;
        height: 100%;
    }
    .hero-wash {
        pointer-events: none;
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.4), rgba(255, 255, 255, 0.1), #ffffff);
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        pointer-events: none;
    }
    .hero-inner {
        margin: 0 auto;
        width: 100%;
        max-width: 72rem;
        padding: 0 1.5rem;
    }
    .hero-copy {
        max-width: 42rem;
    }
    .hero-copy a {
        pointer-events: auto;
    }
    .hero-title {
        margin: 0;
        font-size: 2.25rem;
        font-weight: 900;
        letter-spacing: -0.025em;
        color: #111827;
    }
    .hero-tagline {
        margin: 0.75rem 0 0;
        max-width: 36rem;
        font-size: 1rem;
        color: #374151;
    }
    .hero-cta-row {
        margin-top: 1.5rem;
    }

    @keyframes fadeUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .fade-up {
        opacity: 0;
        animation: fadeUp 600ms ease-out forwards;
    }

    .cta {
        display: inline-flex;
        align-items: center;
        border-radius: 9999px;
        padding: 0.625rem 1.25rem;
        font-size: 0.875rem;
        font-weight: 600;
        color: #ffffff;
        text-decoration: none;
    }
    .cta:focus {
        outline: none;
        box-shadow: 0 0 0 2px #ffffff, 0 0 0 4px currentColor;
    }
    .cta-dark {
        background: #111827;
    }
    .cta-dark:hover {
        background: #1f2937;
    }
    .cta-accent {
        margin-top: 1.5rem;
        background: #e11d48;
    }
    .cta-accent:hover {
        background: #f43f5e;
    }

    .features {
        position: relative;
    }
    .features-grid {
        margin: 0 auto;
        display: grid;
        max-width: 72rem;
        grid-template-columns: 1fr;
        gap: 2rem;
        padding: 5rem 1.5rem;
    }
    .features-label-sticky {
        display: flex;
        align-items: flex-start;
        padding-top: 1.5rem;
    }
    .features-title {
        margin: 0;
        font-size: 1.875rem;
        font-weight: 900;
        letter-spacing: -0.025em;
    }
    .features-blurb {
        margin: 1rem 0 0;
        color: #4b5563;
    }
    .features-cards {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .features-spacer {
        height: 30vh;
    }

    @media (min-width: 768px) {
        .hero {
            height: 78vh;
        }
        .hero-title {
            font-size: 3.75rem;
        }
        .hero-tagline {
            font-size: 1.125rem;
        }
        .features-grid {
            grid-template-columns: repeat(12, minmax(0, 1fr));
            padding: 7rem 1.5rem;
        }
        .features-label {
            grid-column: span 5 / span 5;
        }
        .features-cards {
            grid-column: span 7 / span 7;
            gap: 2.5rem;
        }
        .features-label-sticky {
            display: block;
            position: sticky;
            top: 0;
            height: 100vh;
        }
        .features-label-inner {
            padding-top: 5rem;
        }
        .features-title {
            font-size: 3rem;
        }
        .features-blurb {
            max-width: 20rem;
        }
    }
    @media (min-width: 1024px) {
        .features-label {
            grid-column: span 4 / span 4;
        }
        .features-cards {
            grid-column: span 8 / span 8;
        }
    }
"#;
