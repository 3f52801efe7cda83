//! Locally-confirmed peak/trough detection.

/// A locally confirmed extremum in a numeric series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremumPoint {
    /// Index into the series the extremum was detected on.
    pub index: usize,
    pub value: f64,
}

/// Find confirmed peaks and troughs in `values`.
///
/// An index is a peak when its value is strictly greater than every
/// value within `window` bars on both sides; troughs are symmetric.
/// Equal neighbors never confirm, so flat regions produce nothing, and
/// the first and last `window` bars can never confirm an extremum.
pub fn detect(values: &[f64], window: usize) -> (Vec<ExtremumPoint>, Vec<ExtremumPoint>) {
    let mut peaks = Vec::new();
    let mut troughs = Vec::new();

    if window == 0 || values.len() <= 2 * window {
        return (peaks, troughs);
    }

    for i in window..values.len() - window {
        let candidate = values[i];
        let neighbors = values[i - window..i]
            .iter()
            .chain(values[i + 1..=i + window].iter());

        let mut is_peak = true;
        let mut is_trough = true;
        for &n in neighbors {
            if n >= candidate {
                is_peak = false;
            }
            if n <= candidate {
                is_trough = false;
            }
            if !is_peak && !is_trough {
                break;
            }
        }

        if is_peak {
            peaks.push(ExtremumPoint {
                index: i,
                value: candidate,
            });
        } else if is_trough {
            troughs.push(ExtremumPoint {
                index: i,
                value: candidate,
            });
        }
    }

    (peaks, troughs)
}
