use super::constants::REVEAL_STAGGER_MS;

/// Delay before the reveal at `position` within one observer batch.
#[inline]
pub fn stagger_delay_ms(position: usize) -> u32 {
    (position as u32).saturating_mul(REVEAL_STAGGER_MS)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub index: usize,
    pub delay_ms: u32,
}

/// Tracks which registered elements have been revealed.
///
/// Elements are addressed by the index they were registered with. A reveal
/// is one-way: once scheduled an element is never scheduled again, even if
/// it leaves and re-enters the viewport.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn with_len(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[inline]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Plan the reveals for one observer batch of `(index, intersecting)`
    /// entries, in the order the observer reported them.
    ///
    /// Only newly intersecting elements are staggered: the Nth one gets
    /// `N * REVEAL_STAGGER_MS`. Unknown indices are ignored.
    pub fn plan_batch<I>(&mut self, entries: I) -> Vec<ScheduledReveal>
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        let mut planned = Vec::new();
        for (index, intersecting) in entries {
            if !intersecting {
                continue;
            }
            match self.revealed.get_mut(index) {
                Some(slot) if !*slot => {
                    *slot = true;
                    planned.push(ScheduledReveal {
                        index,
                        delay_ms: stagger_delay_ms(planned.len()),
                    });
                }
                _ => {}
            }
        }
        planned
    }
}
