use smallvec::SmallVec;
use tracing::trace;

use crate::core::calendar::Doy;
use crate::core::storm::ActiveSpan;

/// Members of one day, as indices into the binned slice.
pub type BucketMembers = SmallVec<[usize; 8]>;

/// Items active on one calendar day, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub day: Doy,
    pub members: BucketMembers,
}

impl DayBucket {
    #[must_use]
    pub fn new(day: Doy) -> Self {
        Self {
            day,
            members: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Buckets every day of `[window_start, window_end]` with the items whose
/// active span covers it.
///
/// An item occupies each day between its first and last observation even
/// when nothing was observed on that exact day. Items without observations
/// are skipped. A span whose last day indexes before its first (a track
/// crossing New Year) covers no day.
pub fn bin_by_day<T: ActiveSpan>(items: &[T], window_start: Doy, window_end: Doy) -> Vec<DayBucket> {
    let lo = window_start.index();
    let hi = window_end.index();
    let mut buckets: Vec<DayBucket> = (lo..=hi)
        .map(|index| DayBucket::new(Doy::from_index(index as i64)))
        .collect();

    for (member, item) in items.iter().enumerate() {
        let Some((first, last)) = item.active_span() else {
            continue;
        };
        let a = first.index().max(lo);
        let b = last.index().min(hi);
        for index in a..=b {
            buckets[index - lo].members.push(member);
        }
    }

    trace!(
        items = items.len(),
        window_start = lo,
        window_end = hi,
        "binned items by day"
    );
    buckets
}
