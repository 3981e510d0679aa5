//! Threshold parameters of a share set.

/// Validate the relation between threshold and declared share counts.
///
/// A threshold of one is a degree-zero polynomial and is accepted.
pub fn validate_threshold_config(threshold: usize, participants: usize) -> bool {
    (1..=participants).contains(&threshold)
}
