pub const BRAND: &str = "PIXORA";

pub const HERO_TAGLINE: &str =
    "An intelligent visual library platform that understands your images and brings order to creative chaos.";

pub const FEATURES_BLURB: &str =
    "Scroll to explore how PIXORA elevates your visual asset management with semantic intelligence.";

pub const CTA_LABEL: &str = "Get Started";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Semantic Search",
        description: "Find the right image by meaning, not just keywords. Our vector search understands context and intent.",
    },
    FeatureEntry {
        title: "Auto-Tagging",
        description: "AI-generated tags on upload. Keep your library clean and instantly discoverable without manual effort.",
    },
    FeatureEntry {
        title: "Clustering",
        description: "Group visually similar assets with dynamic, intelligent clusters for faster curation and insight.",
    },
];
