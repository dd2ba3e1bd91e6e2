use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::BRAND;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(0, 0, 0, 0.05);
                        padding: 2.5rem 0;
                        text-align: center;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                "#}
            </style>
            { copyright_line(year) }
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(copyright_line(2026), "© 2026 PIXORA. All rights reserved.");
    }

    #[tokio::test]
    async fn footer_shows_current_year() {
        let html = LocalServerRenderer::<Footer>::new().render().await;
        let year = Local::now().year();
        assert!(html.contains(&format!("© {} PIXORA", year)));
    }
}
