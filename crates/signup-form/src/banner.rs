//! Transient success message shown after a saved submission

use chrono::{DateTime, Duration, Utc};

/// Success banner with one-shot deferred hides.
///
/// Every `show` schedules its own hide and none is ever cancelled, so a hide
/// scheduled by an earlier submission may close a banner shown by a later
/// one. Both just apply the same hidden state.
#[derive(Debug, Clone, Default)]
pub struct SuccessBanner {
    visible: bool,
    pending: Vec<DateTime<Utc>>,
}

impl SuccessBanner {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of scheduled hides not yet applied
    pub fn pending_hides(&self) -> usize {
        self.pending.len()
    }

    /// Earliest scheduled hide, if any
    pub fn next_hide(&self) -> Option<DateTime<Utc>> {
        self.pending.iter().min().copied()
    }

    /// Shows the banner and schedules its hide. A deadline past the end of
    /// representable time saturates to `DateTime::<Utc>::MAX_UTC`.
    pub fn show(&mut self, now: DateTime<Utc>, hide_after: Duration) {
        self.visible = true;
        self.pending
            .push(now.checked_add_signed(hide_after).unwrap_or(DateTime::<Utc>::MAX_UTC));
    }

    /// Applies every hide due at `now`. Returns true if any fired.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.pending.len();
        self.pending.retain(|due| *due > now);

        let fired = self.pending.len() < before;
        if fired {
            self.visible = false;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_banner_hides_after_delay() {
        let mut banner = SuccessBanner::default();
        assert!(!banner.is_visible());

        banner.show(at(0), Duration::milliseconds(2_500));
        assert!(banner.is_visible());
        assert_eq!(banner.next_hide(), Some(at(2_500)));

        assert!(!banner.tick(at(2_499)));
        assert!(banner.is_visible());

        assert!(banner.tick(at(2_500)));
        assert!(!banner.is_visible());
        assert_eq!(banner.pending_hides(), 0);
    }

    #[test]
    fn test_huge_delay_saturates() {
        let mut banner = SuccessBanner::default();
        banner.show(at(1_700_000_000_000), Duration::milliseconds(i64::MAX));

        assert!(banner.is_visible());
        assert_eq!(banner.next_hide(), Some(DateTime::<Utc>::MAX_UTC));
        assert!(!banner.tick(at(1_800_000_000_000)));
        assert!(banner.is_visible());
    }

    #[test]
    fn test_earlier_hide_closes_later_show() {
        let mut banner = SuccessBanner::default();
        banner.show(at(0), Duration::milliseconds(2_500));
        banner.show(at(2_000), Duration::milliseconds(2_500));

        assert!(banner.tick(at(2_500)));
        assert!(!banner.is_visible());
        assert_eq!(banner.pending_hides(), 1);

        // the second hide re-applies the same state
        assert!(banner.tick(at(4_500)));
        assert!(!banner.is_visible());
    }
}
