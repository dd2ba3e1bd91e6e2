use yew::prelude::*;

use crate::motion::{use_scroll_progress, RevealStyle, TrackingWindow};

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Feature card that fades, grows and rises into place as it scrolls
/// through the middle band of the viewport.
///
/// Progress is measured on the outer track, which is never transformed, so
/// the card's own offset and scale don't feed back into the measurement.
#[function_component(ScrollRevealCard)]
pub fn scroll_reveal_card(props: &RevealCardProps) -> Html {
    let track_ref = use_node_ref();
    let progress = use_scroll_progress(track_ref.clone(), TrackingWindow::REVEAL);
    let style = RevealStyle::from_progress(progress);

    html! {
        <div ref={track_ref} class="reveal-card-track">
            <div class="reveal-card" style={style.to_css()}>
                <div class="reveal-card-header">
                    <h3 class="reveal-card-title">{ props.title.clone() }</h3>
                    <span class="reveal-card-badge" aria-hidden="true">{"•"}</span>
                </div>
                <p class="reveal-card-description">{ props.description.clone() }</p>
            </div>
        </div>
    }
}

pub const REVEAL_CARD_CSS: &str = r#"
    .reveal-card {
        border-radius: 1rem;
        border: 1px solid rgba(0, 0, 0, 0.05);
        background: rgba(255, 255, 255, 0.6);
        backdrop-filter: blur(12px);
        -webkit-backdrop-filter: blur(12px);
        padding: 1.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        transition: box-shadow 300ms;
    }
    .reveal-card:hover {
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
    }
    .reveal-card-header {
        display: flex;
        align-items: flex-start;
        justify-content: space-between;
    }
    .reveal-card-title {
        margin: 0;
        font-size: 1.25rem;
        font-weight: 600;
        letter-spacing: -0.025em;
        color: #111827;
    }
    .reveal-card-badge {
        margin-left: 1rem;
        display: inline-flex;
        flex-shrink: 0;
        width: 2rem;
        height: 2rem;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: rgba(244, 63, 94, 0.1);
        color: #e11d48;
        font-weight: 500;
    }
    .reveal-card-description {
        margin: 0.75rem 0 0;
        color: #4b5563;
        line-height: 1.625;
    }
    @media (min-width: 768px) {
        .reveal-card {
            padding: 2rem;
        }
        .reveal-card-title {
            font-size: 1.5rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(title: &'static str, description: &'static str) -> String {
        LocalServerRenderer::<ScrollRevealCard>::with_props(RevealCardProps {
            title: title.into(),
            description: description.into(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_title_and_description() {
        let html = render("Clustering", "Group similar assets.").await;
        assert!(html.contains("Clustering"));
        assert!(html.contains("Group similar assets."));
    }

    #[tokio::test]
    async fn unmeasured_card_rests_at_start_of_reveal() {
        let html = render("Auto-Tagging", "Tags on upload.").await;
        assert!(html.contains(&RevealStyle::from_progress(0.0).to_css()));
    }

    #[tokio::test]
    async fn measured_track_carries_no_transform() {
        let html = render("Clustering", "Group similar assets.").await;
        let opening_tag = |marker: &str| {
            let at = html.find(marker).expect("element rendered");
            let start = html[..at].rfind('<').expect("tag opened");
            let end = at + html[at..].find('>').expect("tag closed");
            (start, &html[start..end])
        };

        let (track_start, track_tag) = opening_tag("reveal-card-track");
        assert!(!track_tag.contains("style"));

        let (card_start, card_tag) = opening_tag("class=\"reveal-card\"");
        assert!(card_start > track_start, "styled card sits inside the track");
        assert!(card_tag.contains("transform"));
    }

    #[tokio::test]
    async fn rendering_is_idempotent() {
        let first = render("Semantic Search", "By meaning.").await;
        let second = render("Semantic Search", "By meaning.").await;
        assert_eq!(first, second);
    }
}
