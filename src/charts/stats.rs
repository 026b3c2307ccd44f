// charts/stats.rs
use crate::charts::{Bin, BoxGroup, Point};
use std::collections::BTreeMap;

/// Equal-width bins over `[min, max]`. A degenerate range is widened to
/// `[v - 0.5, v + 0.5]`, the same rule numpy applies.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            start: lo + width * i as f64,
            end: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

/// Quantile with linear interpolation between closest ranks.
/// `sorted` must be ascending and non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

pub fn five_number_summary(name: &str, values: &[f64]) -> Option<BoxGroup> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(BoxGroup {
        name: name.to_string(),
        count: sorted.len(),
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Values grouped by key, groups in order of first appearance.
pub fn group_in_order<'a, I>(pairs: I) -> Vec<(&'a str, Vec<f64>)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    let mut slots: BTreeMap<&str, usize> = BTreeMap::new();
    for (key, value) in pairs {
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(value);
    }
    groups
}

/// Arithmetic mean per key, ordered by key.
pub fn mean_by_key<K, I>(pairs: I) -> Vec<Point>
where
    K: Ord + Into<String>,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (key, value) in pairs {
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, n))| Point {
            x: key.into(),
            y: sum / n as f64,
        })
        .collect()
}

/// The `n` largest points by value. The sort is stable, so ties keep their
/// incoming order.
pub fn top_n(mut points: Vec<Point>, n: usize) -> Vec<Point> {
    points.sort_by(|a, b| b.y.total_cmp(&a.y));
    points.truncate(n);
    points
}
