use std::collections::HashMap;

/// Fraction of an element's area that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(u32);

/// Entrance animation applied when a target reveals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    Up,
    Left,
    Right,
    Scale,
}

impl RevealVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Up => "scroll-reveal",
            Self::Left => "scroll-reveal-left",
            Self::Right => "scroll-reveal-right",
            Self::Scale => "scroll-reveal-scale",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RevealTarget {
    revealed: bool,
    observed: bool,
}

/// Book-keeping for one-shot reveal transitions.
///
/// The tracker does not talk to the browser itself. Callers feed it
/// visibility ratios and apply the transitions it reports, which keeps the
/// once-only guarantee independent of how often the observer fires.
#[derive(Debug, Default)]
pub struct RevealTracker {
    targets: HashMap<TargetId, RevealTarget>,
    next_id: u32,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new unrevealed, unobserved target.
    pub fn register(&mut self) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.targets.insert(id, RevealTarget::default());
        id
    }

    /// Starts observing every given target that is neither observed nor
    /// already revealed. Returns the targets that were newly attached.
    pub fn attach<I>(&mut self, ids: I) -> Vec<TargetId>
    where
        I: IntoIterator<Item = TargetId>,
    {
        let mut attached = Vec::new();
        for id in ids {
            if let Some(target) = self.targets.get_mut(&id) {
                if !target.observed && !target.revealed {
                    target.observed = true;
                    attached.push(id);
                }
            }
        }
        attached
    }

    /// Applies one observer callback worth of `(target, visible ratio)`
    /// entries and returns the targets that revealed because of it.
    ///
    /// Revealed targets stop being observed, so repeated entries for them
    /// are ignored.
    pub fn on_visibility<I>(&mut self, entries: I) -> Vec<TargetId>
    where
        I: IntoIterator<Item = (TargetId, f64)>,
    {
        let mut revealed = Vec::new();
        for (id, ratio) in entries {
            let Some(target) = self.targets.get_mut(&id) else {
                continue;
            };
            if !target.observed || target.revealed || ratio < REVEAL_THRESHOLD {
                continue;
            }
            target.revealed = true;
            target.observed = false;
            revealed.push(id);
        }
        revealed
    }

    /// Stops observing every target. Returns the targets that were still
    /// being observed.
    pub fn detach(&mut self) -> Vec<TargetId> {
        let mut stopped = self
            .targets
            .iter_mut()
            .filter(|(_, t)| t.observed)
            .map(|(id, t)| {
                t.observed = false;
                *id
            })
            .collect::<Vec<_>>();
        stopped.sort();
        stopped
    }

    /// Forgets a target whose element was destroyed.
    pub fn release(&mut self, id: TargetId) {
        self.targets.remove(&id);
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.targets.get(&id).is_some_and(|t| t.revealed)
    }

    pub fn is_observed(&self, id: TargetId) -> bool {
        self.targets.get(&id).is_some_and(|t| t.observed)
    }

    pub fn observed_count(&self) -> usize {
        self.targets.values().filter(|t| t.observed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(k: usize) -> (RevealTracker, Vec<TargetId>) {
        let mut tracker = RevealTracker::new();
        let ids = (0..k).map(|_| tracker.register()).collect::<Vec<_>>();
        let attached = tracker.attach(ids.clone());
        assert_eq!(attached, ids);
        (tracker, ids)
    }

    #[test]
    fn test_all_targets_reveal_exactly_once() {
        for k in [1, 2, 5, 17] {
            let (mut tracker, ids) = tracker_with(k);
            let mut fired = Vec::new();
            for id in &ids {
                fired.extend(tracker.on_visibility([(*id, 0.5)]));
                // duplicate delivery for the same target
                fired.extend(tracker.on_visibility([(*id, 1.0)]));
            }
            assert_eq!(fired, ids);
            assert!(ids.iter().all(|id| tracker.is_revealed(*id)));
            assert_eq!(tracker.observed_count(), 0);
        }
    }

    #[test]
    fn test_duplicates_within_one_callback() {
        let (mut tracker, ids) = tracker_with(2);
        let fired = tracker.on_visibility([(ids[0], 0.3), (ids[0], 0.9), (ids[1], 0.2)]);
        assert_eq!(fired, vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_below_threshold_does_not_reveal() {
        let (mut tracker, ids) = tracker_with(1);
        assert!(tracker.on_visibility([(ids[0], 0.0)]).is_empty());
        assert!(tracker.on_visibility([(ids[0], 0.09)]).is_empty());
        assert!(!tracker.is_revealed(ids[0]));
        assert!(tracker.is_observed(ids[0]));

        assert_eq!(tracker.on_visibility([(ids[0], REVEAL_THRESHOLD)]), ids);
    }

    #[test]
    fn test_visible_at_attach_reveals_on_first_callback() {
        let (mut tracker, ids) = tracker_with(1);
        // the observer reports the initial intersection right after observe()
        assert_eq!(tracker.on_visibility([(ids[0], 1.0)]), ids);
    }

    #[test]
    fn test_revealed_never_resets() {
        let (mut tracker, ids) = tracker_with(1);
        tracker.on_visibility([(ids[0], 1.0)]);
        tracker.on_visibility([(ids[0], 0.0)]);
        assert!(tracker.is_revealed(ids[0]));
        // re-attaching a revealed target is a no-op
        assert!(tracker.attach(ids.clone()).is_empty());
        assert!(!tracker.is_observed(ids[0]));
    }

    #[test]
    fn test_attach_skips_already_observed() {
        let (mut tracker, ids) = tracker_with(2);
        let extra = tracker.register();
        let attached = tracker.attach(vec![ids[0], extra, ids[1]]);
        assert_eq!(attached, vec![extra]);
    }

    #[test]
    fn test_empty_target_set_is_noop() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.attach(Vec::new()).is_empty());
        assert!(tracker.on_visibility(Vec::new()).is_empty());
        assert!(tracker.detach().is_empty());
    }

    #[test]
    fn test_detach_stops_observation() {
        let (mut tracker, ids) = tracker_with(3);
        tracker.on_visibility([(ids[1], 1.0)]);
        assert_eq!(tracker.detach(), vec![ids[0], ids[2]]);
        assert_eq!(tracker.observed_count(), 0);
        // events after teardown are ignored
        assert!(tracker.on_visibility([(ids[0], 1.0)]).is_empty());
        assert!(!tracker.is_revealed(ids[0]));
    }

    #[test]
    fn test_released_target_is_forgotten() {
        let (mut tracker, ids) = tracker_with(1);
        tracker.release(ids[0]);
        assert!(tracker.on_visibility([(ids[0], 1.0)]).is_empty());
        assert!(!tracker.is_revealed(ids[0]));
        assert!(tracker.attach(ids).is_empty());
    }

    #[test]
    fn test_variant_classes() {
        assert_eq!(RevealVariant::default().class(), "scroll-reveal");
        assert_eq!(RevealVariant::Scale.class(), "scroll-reveal-scale");
    }
}
