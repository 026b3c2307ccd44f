// clustering/kmeans.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Features = [f64; 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeansOptions {
    pub k: usize,
    pub seed: u64,
    /// Independent k-means++ restarts; the lowest inertia wins.
    pub n_init: usize,
    pub max_iter: usize,
    /// Convergence threshold, relative to the mean feature variance.
    pub tolerance: f64,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            k: 5,
            seed: 42,
            n_init: 10,
            max_iter: 300,
            tolerance: 1e-4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    pub centroids: Vec<Features>,
    pub labels: Vec<usize>,
    pub inertia: f64,
}

fn sq_dist(a: &Features, b: &Features) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Index and squared distance of the closest centroid. Ties go to the
/// lower index.
fn nearest(point: &Features, centroids: &[Features]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, c) in centroids.iter().enumerate() {
        let d = sq_dist(point, c);
        if d < best.1 {
            best = (i, d);
        }
    }
    best
}

fn mean_variance(points: &[Features]) -> f64 {
    let n = points.len() as f64;
    let mut total = 0.0;
    for dim in 0..3 {
        let mean = points.iter().map(|p| p[dim]).sum::<f64>() / n;
        total += points.iter().map(|p| (p[dim] - mean).powi(2)).sum::<f64>() / n;
    }
    total / 3.0
}

/// k-means++ seeding: each further centroid is drawn with probability
/// proportional to its squared distance from the closest chosen one.
fn seed_centroids(points: &[Features], k: usize, rng: &mut StdRng) -> Vec<Features> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    let mut dist: Vec<f64> = points.iter().map(|p| sq_dist(p, &centroids[0])).collect();

    while centroids.len() < k {
        let total: f64 = dist.iter().sum();
        let pick = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut chosen = points.len() - 1;
            for (i, d) in dist.iter().enumerate() {
                if target < *d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            rng.gen_range(0..points.len())
        };

        let c = points[pick];
        for (d, p) in dist.iter_mut().zip(points) {
            *d = d.min(sq_dist(p, &c));
        }
        centroids.push(c);
    }
    centroids
}

fn lloyd(points: &[Features], mut centroids: Vec<Features>, opts: &KMeansOptions, tol: f64) -> KMeansFit {
    let k = centroids.len();
    let mut labels = vec![0; points.len()];

    for _ in 0..opts.max_iter {
        for (label, p) in labels.iter_mut().zip(points) {
            *label = nearest(p, &centroids).0;
        }

        let mut sums = vec![[0.0; 3]; k];
        let mut counts = vec![0usize; k];
        for (p, &label) in points.iter().zip(&labels) {
            for dim in 0..3 {
                sums[label][dim] += p[dim];
            }
            counts[label] += 1;
        }

        let mut shift = 0.0;
        for (i, centroid) in centroids.iter_mut().enumerate() {
            // An emptied cluster keeps its previous centroid.
            if counts[i] == 0 {
                continue;
            }
            let n = counts[i] as f64;
            let next = [sums[i][0] / n, sums[i][1] / n, sums[i][2] / n];
            shift += sq_dist(centroid, &next);
            *centroid = next;
        }

        if shift <= tol {
            break;
        }
    }

    let mut inertia = 0.0;
    for (label, p) in labels.iter_mut().zip(points) {
        let (i, d) = nearest(p, &centroids);
        *label = i;
        inertia += d;
    }

    KMeansFit {
        centroids,
        labels,
        inertia,
    }
}

/// Fit k-means and return raw labels. With fewer points than `k`, the
/// effective `k` is the point count; an empty input gives an empty fit.
pub fn fit(points: &[Features], opts: &KMeansOptions) -> KMeansFit {
    let k = opts.k.max(1).min(points.len());
    if k == 0 {
        return KMeansFit {
            centroids: Vec::new(),
            labels: Vec::new(),
            inertia: 0.0,
        };
    }

    let tol = opts.tolerance * mean_variance(points);
    let mut rng = StdRng::seed_from_u64(opts.seed);

    let mut best: Option<KMeansFit> = None;
    for _ in 0..opts.n_init.max(1) {
        let start = seed_centroids(points, k, &mut rng);
        let run = lloyd(points, start, opts, tol);
        if best.as_ref().map_or(true, |b| run.inertia < b.inertia) {
            best = Some(run);
        }
    }

    best.unwrap_or(KMeansFit {
        centroids: Vec::new(),
        labels: vec![0; points.len()],
        inertia: 0.0,
    })
}
