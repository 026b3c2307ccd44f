/// Landing page copy.
pub struct DashboardContent {
    pub headline: &'static str,
    pub inspiration: &'static str,
    pub features_heading: &'static str,
    pub features_intro: &'static str,
    pub features: &'static [(&'static str, &'static str)],
}

const FEATURES: &[(&str, &str)] = &[
    (
        "Dashboard",
        "An intuitive interface that provides an overview of the app's capabilities, objectives, and key metrics. Users can quickly understand the scope of the app and its benefits for luxury real estate analysis.",
    ),
    (
        "Exploratory Data Analysis (EDA)",
        "This section offers a comprehensive exploration of the dataset, showcasing various trends and distributions within the luxury rental market. Users can view histograms, box plots, and other visualizations to gain insights into rental prices, property types, and geographical distributions.",
    ),
    (
        "Market Trends",
        "Users can track the evolution of luxury rental prices over time. This feature presents time-series analyses and trend lines, helping investors understand market dynamics and predict future price movements.",
    ),
    (
        "Property Value Prediction",
        "Leveraging machine learning models, this feature allows users to predict the rental value of luxury properties based on specific attributes such as location, property type, size, and amenities. This tool is invaluable for both property owners looking to price their listings accurately and potential tenants seeking to understand the market value.",
    ),
    (
        "Investment Opportunities",
        "This section highlights potential investment opportunities within the luxury rental market. By identifying areas with high rental yields and emerging trends, the app aids investors in making informed decisions about where to allocate their resources.",
    ),
    (
        "Geographical Analysis",
        "Using interactive maps, this feature provides a visual representation of luxury property listings across Ontario. Users can explore the spatial distribution of high-end rentals, identify clusters of luxury properties, and analyze geographical trends.",
    ),
];

pub fn dashboard() -> DashboardContent {
    DashboardContent {
        headline: "🏡 Agba Baller: Luxury Or Nothing",
        inspiration: "The Luxury Property Listing App (aka Agba Baller) is a sophisticated data-driven platform designed to provide detailed market analysis, property valuations, and investment opportunities in the luxury real estate market. Specifically focused on property listings in Ontario with rental prices exceeding 4000 CAD, this app leverages advanced data analytics and machine learning techniques to offer valuable insights to investors, property managers, and prospective tenants.",
        features_heading: "👨🏻‍💻 App Features",
        features_intro: "The app features several key functionalities:",
        features: FEATURES,
    }
}
