//! Checkpointed sample generator.
//!
//! Splits a run of `total_points` draws into ten deciles. Each decile emits
//! its point events, then one checkpoint carrying the cumulative π estimate:
//!
//! ```text
//! decile k:  P P P ... P  C(k)        (total_points / 10 points)
//! C(k) = 4 · inside(1..=k) / (total_points · k / 10)
//! ```
//!
//! When `total_points` is not a multiple of ten the remainder is never
//! drawn, and the checkpoint denominator is still `total_points · k / 10`
//! computed in integer arithmetic.

use super::sampler::{Point, Sampler};
use crate::error::{PiError, PiResult};

/// Number of deciles (and therefore checkpoints and frames) in a run.
pub const DECILES: u64 = 10;

/// One item of the generator's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleEvent {
    /// A drawn point and whether it fell inside the unit circle.
    Point {
        /// The sampled point.
        point: Point,
        /// Classification against the unit circle.
        inside: bool,
    },
    /// Running π estimate at a decile boundary.
    Checkpoint(f64),
}

impl SampleEvent {
    /// Short name used in ordering diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Point { .. } => "point event",
            Self::Checkpoint(_) => "checkpoint",
        }
    }
}

/// Lazy, finite, non-restartable stream of [`SampleEvent`]s.
#[derive(Debug)]
pub struct CheckpointedGenerator {
    sampler: Sampler,
    total_points: u64,
    per_decile: u64,
    /// Deciles whose checkpoint has already been emitted.
    decile: u64,
    /// Points emitted in the current decile.
    emitted: u64,
    inside_count: u64,
}

impl CheckpointedGenerator {
    /// Create a generator over `total_points` draws.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidArgument`] if `total_points` is zero.
    pub fn new(sampler: Sampler, total_points: u64) -> PiResult<Self> {
        if total_points < 1 {
            return Err(PiError::invalid_argument(
                "the generator needs at least one point",
            ));
        }

        Ok(Self {
            sampler,
            total_points,
            per_decile: total_points / DECILES,
            decile: 0,
            emitted: 0,
            inside_count: 0,
        })
    }

    /// Requested number of points.
    #[must_use]
    pub const fn total_points(&self) -> u64 {
        self.total_points
    }

    /// Point events emitted before each checkpoint.
    #[must_use]
    pub const fn points_per_decile(&self) -> u64 {
        self.per_decile
    }

    /// Seed of the underlying sampler.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.sampler.seed()
    }

    fn checkpoint(&self, decile: u64) -> f64 {
        let denominator = self.total_points * decile / DECILES;
        if denominator == 0 {
            return 0.0;
        }
        self.inside_count as f64 / denominator as f64 * 4.0
    }
}

impl Iterator for CheckpointedGenerator {
    type Item = SampleEvent;

    fn next(&mut self) -> Option<SampleEvent> {
        if self.decile >= DECILES {
            return None;
        }

        if self.emitted < self.per_decile {
            let (point, inside) = self.sampler.draw_point();
            if inside {
                self.inside_count += 1;
            }
            self.emitted += 1;
            return Some(SampleEvent::Point { point, inside });
        }

        self.decile += 1;
        self.emitted = 0;
        Some(SampleEvent::Checkpoint(self.checkpoint(self.decile)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_deciles = DECILES - self.decile;
        let remaining = if remaining_deciles == 0 {
            0
        } else {
            remaining_deciles * (self.per_decile + 1) - self.emitted
        };
        let remaining = remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CheckpointedGenerator {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn generator(seed: u64, total: u64) -> CheckpointedGenerator {
        CheckpointedGenerator::new(Sampler::new(seed), total).unwrap()
    }

    #[test]
    fn test_zero_points_rejected() {
        let err = CheckpointedGenerator::new(Sampler::new(42), 0).unwrap_err();
        assert!(matches!(err, PiError::InvalidArgument(_)));
    }

    #[test]
    fn test_event_counts_for_100_points() {
        let events: Vec<SampleEvent> = generator(42, 100).collect();
        let points = events
            .iter()
            .filter(|e| matches!(e, SampleEvent::Point { .. }))
            .count();
        let checkpoints = events
            .iter()
            .filter(|e| matches!(e, SampleEvent::Checkpoint(_)))
            .count();

        assert_eq!(points, 100);
        assert_eq!(checkpoints, 10);
        assert_eq!(events.len(), 110);
    }

    #[test]
    fn test_strict_per_decile_order() {
        let events: Vec<SampleEvent> = generator(42, 100).collect();

        for (decile, chunk) in events.chunks(11).enumerate() {
            assert_eq!(chunk.len(), 11, "decile {decile} has wrong length");
            for event in &chunk[..10] {
                assert!(matches!(event, SampleEvent::Point { .. }));
            }
            assert!(matches!(chunk[10], SampleEvent::Checkpoint(_)));
        }
    }

    #[test]
    fn test_checkpoints_are_cumulative() {
        let mut inside = 0u64;
        let mut drawn = 0u64;

        for event in generator(7, 100) {
            match event {
                SampleEvent::Point { inside: hit, .. } => {
                    drawn += 1;
                    if hit {
                        inside += 1;
                    }
                }
                SampleEvent::Checkpoint(pi) => {
                    let expected = inside as f64 / drawn as f64 * 4.0;
                    assert!((pi - expected).abs() < 1e-12);
                }
            }
        }

        assert_eq!(drawn, 100, "final checkpoint denominator must be 100");
    }

    #[test]
    fn test_classification_matches_point() {
        for event in generator(3, 1000) {
            if let SampleEvent::Point { point, inside } = event {
                assert_eq!(inside, crate::engine::sampler::is_in_circle(point));
            }
        }
    }

    #[test]
    fn test_non_multiple_of_ten_truncates() {
        let events: Vec<SampleEvent> = generator(42, 105).collect();
        let points = events
            .iter()
            .filter(|e| matches!(e, SampleEvent::Point { .. }))
            .count();

        assert_eq!(points, 100, "remainder of 5 points is never drawn");
        assert_eq!(events.len(), 110);
    }

    #[test]
    fn test_truncated_denominator() {
        // 105 points: deciles draw 10 each, first denominator is 105 * 1 / 10 = 10,
        // second is 105 * 2 / 10 = 21.
        let mut stream = generator(11, 105);
        let mut inside = 0u64;
        let mut checkpoints = Vec::new();
        let mut inside_at = Vec::new();

        for event in stream.by_ref() {
            match event {
                SampleEvent::Point { inside: true, .. } => inside += 1,
                SampleEvent::Point { .. } => {}
                SampleEvent::Checkpoint(pi) => {
                    checkpoints.push(pi);
                    inside_at.push(inside);
                }
            }
        }

        assert!((checkpoints[0] - inside_at[0] as f64 / 10.0 * 4.0).abs() < 1e-12);
        assert!((checkpoints[1] - inside_at[1] as f64 / 21.0 * 4.0).abs() < 1e-12);
        assert!((checkpoints[9] - inside_at[9] as f64 / 105.0 * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_fewer_than_ten_points() {
        let events: Vec<SampleEvent> = generator(42, 5).collect();

        assert_eq!(events.len(), 10);
        assert!(events.iter().all(|e| matches!(e, SampleEvent::Checkpoint(_))));
        // Denominator 5 * 1 / 10 = 0 reports 0.0; nothing is ever drawn.
        assert_eq!(events[0], SampleEvent::Checkpoint(0.0));
    }

    #[test]
    fn test_exhausted_generator_stays_exhausted() {
        let mut stream = generator(42, 10);
        assert_eq!(stream.by_ref().count(), 20);
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut stream = generator(42, 100);
        assert_eq!(stream.len(), 110);

        for _ in 0..15 {
            stream.next();
        }
        assert_eq!(stream.len(), 95);

        let rest = stream.by_ref().count();
        assert_eq!(rest, 95);
        assert_eq!(stream.len(), 0);
    }

    #[test]
    fn test_reproducibility() {
        let a: Vec<SampleEvent> = generator(42, 1000).collect();
        let b: Vec<SampleEvent> = generator(42, 1000).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_accessors() {
        let stream = generator(5, 250);
        assert_eq!(stream.total_points(), 250);
        assert_eq!(stream.points_per_decile(), 25);
        assert_eq!(stream.seed(), 5);
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(SampleEvent::Checkpoint(3.1).kind(), "checkpoint");
        let point = SampleEvent::Point {
            point: Point::new(0.0, 0.0),
            inside: true,
        };
        assert_eq!(point.kind(), "point event");
    }
}
