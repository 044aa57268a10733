use std::collections::HashMap;
use std::hash::Hash;

/// Number of points the KDE curve is sampled at.
const KDE_SAMPLES: usize = 200;

/// Upper bound on histogram bins. Past it the Sturges count is used.
const MAX_BINS: usize = 10_000;

/// Bin edges (`counts.len() + 1` of them) and per-bin counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, .., last] => (last - first) / self.counts.len() as f64,
            _ => 0.0,
        }
    }
}

/// Mean of `values` per key, keys in order of first appearance.
pub fn group_mean<K: Eq + Hash + Clone>(pairs: impl IntoIterator<Item = (K, f64)>) -> Vec<(K, f64)> {
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut sums: Vec<(K, f64, usize)> = Vec::new();

    for (key, value) in pairs {
        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            sums.push((key, 0.0, 0));
            sums.len() - 1
        });
        sums[slot].1 += value;
        sums[slot].2 += 1;
    }

    sums.into_iter()
        .map(|(k, sum, n)| (k, sum / n as f64))
        .collect()
}

/// Occurrences per key, keys in order of first appearance.
pub fn count_by<K: Eq + Hash + Clone>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            counts.push((key, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts
}

/// Linear-interpolated quantile of sorted data, `q` in `[0, 1]`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Histogram with the "auto" bin rule: the narrower of the Sturges and
/// Freedman–Diaconis widths. A constant sample gets one unit-wide bin.
///
/// A few far outliers shrink the Freedman–Diaconis width to almost nothing,
/// so a bin count above [`MAX_BINS`] falls back to Sturges.
pub fn histogram(values: &[f64]) -> Histogram {
    if values.is_empty() {
        return Histogram {
            edges: Vec::new(),
            counts: Vec::new(),
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let range = max - min;

    if range == 0.0 {
        return Histogram {
            edges: vec![min - 0.5, min + 0.5],
            counts: vec![values.len()],
        };
    }

    let n = values.len() as f64;
    let sturges = range / (n.log2() + 1.0);
    let iqr = quantile(&sorted, 0.75) - quantile(&sorted, 0.25);
    let fd = 2.0 * iqr * n.powf(-1.0 / 3.0);
    let width = if fd > 0.0 { fd.min(sturges) } else { sturges };
    let auto_bins = (range / width).ceil();
    let bins = if auto_bins.is_finite() && auto_bins <= MAX_BINS as f64 {
        auto_bins as usize
    } else {
        (range / sturges).ceil() as usize
    }
    .max(1);

    let step = range / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| min + step * i as f64).collect();
    let mut counts = vec![0; bins];
    for &v in values {
        let mut index = ((v - min) / step) as usize;
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }

    Histogram { edges, counts }
}

/// Gaussian KDE over `[min, max]` with Scott's bandwidth, scaled by `scale`
/// (pass `n * bin_width` to overlay it on a count histogram).
///
/// Empty for fewer than two distinct values.
pub fn kde_curve(values: &[f64], scale: f64) -> Vec<[f64; 2]> {
    let n = values.len() as f64;
    if values.len() < 2 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if min >= max {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let bandwidth = variance.sqrt() * n.powf(-0.2);
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * bandwidth * n);

    (0..KDE_SAMPLES)
        .map(|i| {
            let x = min + (max - min) * i as f64 / (KDE_SAMPLES - 1) as f64;
            let density: f64 = values
                .iter()
                .map(|&xi| {
                    let u = (x - xi) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density * scale]
        })
        .collect()
}
