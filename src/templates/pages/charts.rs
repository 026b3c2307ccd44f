use crate::charts::Chart;
use crate::pages::Page;
use crate::templates::components::{chart, inline_error};
use crate::templates::desktop_layout;
use crate::views::RenderError;
use maud::html;
use maud::Markup;

pub fn charts_page(page: Page, charts: &[Chart]) -> Markup {
    desktop_layout(
        page,
        html! {
            @for (i, c) in charts.iter().enumerate() {
                (chart(&format!("{}-chart-{}", page.slug(), i), c))
            }
        },
    )
}

pub fn render_error_page(page: Page, err: &RenderError) -> Markup {
    desktop_layout(
        page,
        inline_error(&format!("This page could not be drawn: {err}")),
    )
}
