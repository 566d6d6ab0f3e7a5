//! Position allocation for reorderable siblings.
//!
//! New siblings are appended one gap past the current maximum. Moves store
//! whatever position the client computed (typically a midpoint between
//! neighbours). Since repeated halving eventually runs out of precision,
//! [`PositionAllocator::renumber`] rewrites a whole sibling set onto
//! evenly spaced positions; it only runs when explicitly requested.

use uuid::Uuid;

use taskboard_entity::Positioned;

/// Distance between freshly allocated neighbours.
pub const POSITION_GAP: f64 = 1000.0;

/// Stateless position arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionAllocator;

impl PositionAllocator {
    /// Position for a new last sibling: `max + 1000`, or `1000` when empty.
    pub fn append_position<T: Positioned>(siblings: &[T]) -> f64 {
        siblings
            .iter()
            .map(Positioned::position)
            .reduce(f64::max)
            .map_or(POSITION_GAP, |max| max + POSITION_GAP)
    }

    /// Positions for `count` siblings created together: 1000, 2000, ...
    pub fn initial_positions(count: usize) -> Vec<f64> {
        (1..=count).map(|i| i as f64 * POSITION_GAP).collect()
    }

    /// Evenly spaced positions preserving the current order.
    ///
    /// Order is position ascending, ties broken by creation time.
    pub fn renumber<T: Positioned>(siblings: &[T]) -> Vec<(Uuid, f64)> {
        let mut ordered: Vec<&T> = siblings.iter().collect();
        ordered.sort_by(|a, b| {
            a.position()
                .total_cmp(&b.position())
                .then_with(|| a.created_at().cmp(&b.created_at()))
        });

        ordered
            .into_iter()
            .zip(Self::initial_positions(siblings.len()))
            .map(|(sibling, position)| (sibling.id(), position))
            .collect()
    }
}
