use std::{fmt, str::FromStr};

use rand::{seq::SliceRandom, Rng};

/// How candidate pools are put into random order.
///
/// `Uniform` is a Fisher-Yates shuffle. `Comparator` is a merge sort driven by
/// a comparator that returns `random() - 0.5` on every comparison. It is not
/// uniform and its bias is that of the merge sort: for three elements the
/// first one stays in front half of the time. The std sorts are not used here
/// as they may panic when a comparator is not a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    #[default]
    Uniform,
    Comparator,
}

pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, mode: ShuffleMode, rng: &mut R) -> Vec<T> {
    match mode {
        ShuffleMode::Uniform => {
            items.shuffle(rng);
            items
        }
        ShuffleMode::Comparator => comparator_sort(items, rng),
    }
}

fn comparator_sort<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let mut left = comparator_sort(items, rng).into_iter().peekable();
    let mut right = comparator_sort(right, rng).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    loop {
        let take_left = match (left.peek(), right.peek()) {
            // A non-positive comparison keeps the left element first.
            (Some(_), Some(_)) => rng.gen::<f64>() - 0.5 <= 0.0,
            _ => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShuffleMode::Uniform => write!(f, "uniform"),
            ShuffleMode::Comparator => write!(f, "comparator"),
        }
    }
}

impl FromStr for ShuffleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(ShuffleMode::Uniform),
            "comparator" | "legacy" => Ok(ShuffleMode::Comparator),
            _ => Err(format!("Unknown shuffle mode '{}', expected uniform or comparator", s)),
        }
    }
}
