use log::warn;
use stylist::Style;
use yew::prelude::*;

/// Geometry and colour of the decorative grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub spacing_px: u32,
    pub line_width_px: u32,
    pub line_alpha: f64,
    /// Fraction of the height that stays fully visible.
    pub fade_start: f64,
    /// Fraction of the height at which the grid is gone.
    pub fade_end: f64,
}

impl GridSpec {
    pub const DEFAULT: GridSpec = GridSpec {
        spacing_px: 32,
        line_width_px: 1,
        line_alpha: 0.06,
        fade_start: 0.85,
        fade_end: 1.0,
    };

    fn line_color(&self) -> String {
        format!("rgba(0, 0, 0, {})", self.line_alpha)
    }

    /// Two perpendicular line textures, vertical lines first.
    pub fn background_image(&self) -> String {
        let color = self.line_color();
        let width = self.line_width_px;
        format!(
            "linear-gradient(to right, {color} {width}px, transparent {width}px), \
             linear-gradient(to bottom, {color} {width}px, transparent {width}px)"
        )
    }

    pub fn background_size(&self) -> String {
        let s = self.spacing_px;
        format!("{s}px {s}px, {s}px {s}px")
    }

    pub fn mask_image(&self) -> String {
        format!(
            "linear-gradient(to bottom, black {}%, transparent {}%)",
            percent(self.fade_start),
            percent(self.fade_end)
        )
    }

    /// Declarations for the backdrop layer: out of flow, covering its
    /// positioned parent, and transparent to pointer input.
    pub fn layer_css(&self) -> String {
        let mask = self.mask_image();
        format!(
            "position: absolute; \
             inset: 0; \
             pointer-events: none; \
             background-image: {}; \
             background-size: {}; \
             background-position: 0 0, 0 0; \
             -webkit-mask-image: {mask}; \
             mask-image: {mask};",
            self.background_image(),
            self.background_size(),
        )
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn percent(fraction: f64) -> String {
    format!("{}", (fraction * 100.0).round())
}

#[derive(Properties, PartialEq)]
pub struct PatternBackdropProps {
    /// Extra classes merged after the defaults.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub grid: GridSpec,
}

/// Faint full-bleed grid that sits behind its siblings. Never takes pointer
/// input and is hidden from assistive technology.
#[function_component(PatternBackdrop)]
pub fn pattern_backdrop(props: &PatternBackdropProps) -> Html {
    let layer = match Style::new(props.grid.layer_css().as_str()) {
        Ok(style) => Classes::from(style),
        Err(e) => {
            warn!("backdrop style rejected: {}", e);
            Classes::new()
        }
    };

    html! {
        <div aria-hidden="true" class={classes!(layer, props.class.clone())}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[test]
    fn default_grid_draws_faint_lines_every_32px() {
        let grid = GridSpec::default();
        assert_eq!(
            grid.background_image(),
            "linear-gradient(to right, rgba(0, 0, 0, 0.06) 1px, transparent 1px), \
             linear-gradient(to bottom, rgba(0, 0, 0, 0.06) 1px, transparent 1px)"
        );
        assert_eq!(grid.background_size(), "32px 32px, 32px 32px");
    }

    #[test]
    fn mask_fades_over_the_last_fifteen_percent() {
        assert_eq!(
            GridSpec::default().mask_image(),
            "linear-gradient(to bottom, black 85%, transparent 100%)"
        );
    }

    #[test]
    fn layer_lets_pointer_input_through() {
        let css = GridSpec::default().layer_css();
        assert!(css.contains("pointer-events: none;"));
        assert!(css.contains("position: absolute;"));
        assert!(css.contains("inset: 0;"));
        assert!(css.contains("background-size: 32px 32px, 32px 32px;"));
        assert!(css.contains(
            "mask-image: linear-gradient(to bottom, black 85%, transparent 100%);"
        ));
    }

    #[tokio::test]
    async fn backdrop_is_hidden_from_assistive_technology() {
        let html = LocalServerRenderer::<PatternBackdrop>::with_props(PatternBackdropProps {
            class: classes!("hero-grid"),
            grid: GridSpec::DEFAULT,
        })
        .render()
        .await;
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("hero-grid"));
        assert!(!html.contains("<a"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn custom_spacing_is_used_for_both_axes() {
        let grid = GridSpec {
            spacing_px: 48,
            ..GridSpec::DEFAULT
        };
        assert_eq!(grid.background_size(), "48px 48px, 48px 48px");
    }
}
