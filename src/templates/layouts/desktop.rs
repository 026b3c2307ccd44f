use crate::pages::Page;
use maud::{html, Markup, DOCTYPE};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(active: Page, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (active.label()) " · Kijiji Community App" }
                link rel="stylesheet" href="/static/main.css";
                script src=(PLOTLY_JS) defer {};
                script src=(HTMX_JS) defer {};
                script src="/static/charts.js" defer {};
            }
            body {
                div class="app" {
                    aside class="sidebar" {
                        h2 { "Kijiji Community App" }
                        nav aria-label="Select a Page" {
                            p class="sidebar-label" { "Select a Page" }
                            ul {
                                @for page in Page::ALL {
                                    li {
                                        a href=(page.href())
                                            class=[(page == active).then_some("active")]
                                            aria-current=[(page == active).then_some("page")]
                                        {
                                            span class="radio" {}
                                            (page.label())
                                        }
                                    }
                                }
                            }
                        }
                    }
                    main class="content" data-page=(active.slug()) {
                        @if let Some(heading) = active.heading() {
                            h1 { (heading) }
                        }
                        (content)
                    }
                }
            }
        }
    }
}
