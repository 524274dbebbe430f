pub mod binning;
pub mod calendar;
pub mod layout;
pub mod scale;
pub mod storm;
pub mod types;

pub use binning::{BucketMembers, DayBucket, bin_by_day};
pub use calendar::{DAYS_IN_YEAR, Doy, LAST_DAY_INDEX, MonthDate, Moy, REFERENCE_YEAR, index_of};
pub use layout::{DayGraphData, DayWindow, MonthSpan, month_spans};
pub use scale::{AxisScale, DEFAULT_TICK_LIMIT};
pub use storm::{ActiveSpan, Storm, TrackEntry};
pub use types::{Rect, Viewport};
