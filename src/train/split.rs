//! Stratified splitting

use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Seeded stratified train/held-out split.
///
/// Indices are grouped by label, shuffled per class with a `StdRng` from
/// `seed`, and the rounded `test_fraction` tail of each class goes to the
/// held-out set. The same inputs always produce the same split.
pub fn stratified_split(
    labels: &[u8],
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(0.0..1.0).contains(&test_fraction) || test_fraction == 0.0 {
        return Err(Error::InvalidInput(format!(
            "test fraction must be in (0, 1), got {test_fraction}"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    for class in class_values(labels) {
        let mut indices: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == class)
            .map(|(i, _)| i)
            .collect();
        indices.shuffle(&mut rng);

        let test_count = ((indices.len() as f64) * test_fraction).round() as usize;
        let split_at = indices.len() - test_count;
        test.extend_from_slice(&indices[split_at..]);
        train.extend_from_slice(&indices[..split_at]);
    }

    train.sort_unstable();
    test.sort_unstable();
    Ok((train, test))
}

/// Deterministic stratified k-fold assignment.
///
/// Within each class, ordered indices are dealt round-robin across folds, so
/// a fixed training split always yields the same folds and every fold sees
/// both classes whenever each class has at least `k` members.
///
/// Returns, per fold, the held-out index set.
pub fn stratified_k_fold(labels: &[u8], k: usize) -> Result<Vec<Vec<usize>>> {
    if k < 2 {
        return Err(Error::InvalidInput(format!(
            "fold count must be at least 2, got {k}"
        )));
    }
    if k > labels.len() {
        return Err(Error::InvalidInput(format!(
            "fold count {k} exceeds {} rows",
            labels.len()
        )));
    }

    let mut folds: Vec<Vec<usize>> = vec![Vec::new(); k];
    for class in class_values(labels) {
        for (position, index) in labels
            .iter()
            .enumerate()
            .filter(|(_, &l)| l == class)
            .map(|(i, _)| i)
            .enumerate()
        {
            folds[position % k].push(index);
        }
    }

    for fold in &mut folds {
        fold.sort_unstable();
    }
    Ok(folds)
}

fn class_values(labels: &[u8]) -> Vec<u8> {
    let mut classes: Vec<u8> = labels.to_vec();
    classes.sort_unstable();
    classes.dedup();
    classes
}
