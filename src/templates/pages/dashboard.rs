use crate::pages::Page;
use crate::templates::components::card;
use crate::templates::desktop_layout;
use crate::views::dashboard::DashboardContent;
use maud::{html, Markup};

pub fn dashboard_page(content: &DashboardContent) -> Markup {
    desktop_layout(
        Page::Dashboard,
        html! {
            section class="hero" {
                h2 { (content.headline) }
                p { (content.inspiration) }
            }

            (card(content.features_heading, html! {
                p { (content.features_intro) }
                dl class="features" {
                    @for (name, description) in content.features {
                        dt { (name) }
                        dd { (description) }
                    }
                }
            }))
        },
    )
}
