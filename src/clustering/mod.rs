//! Geographic price clustering for the map page.

pub mod kmeans;

pub use kmeans::{Features, KMeansOptions};

/// Cluster `(latitude, longitude, price)` rows and flip the label order.
///
/// Each raw label `l` becomes `(k - 1) - l`, where `k` is the effective
/// cluster count. This is a fixed index reversal: k-means numbers its
/// clusters arbitrarily, so a higher label does NOT reliably mean a higher
/// average price.
pub fn cluster(points: &[Features], opts: &KMeansOptions) -> Vec<usize> {
    let fit = kmeans::fit(points, opts);
    reverse_labels(fit.labels, fit.centroids.len())
}

pub fn reverse_labels(labels: Vec<usize>, k: usize) -> Vec<usize> {
    labels.into_iter().map(|l| (k - 1) - l).collect()
}
