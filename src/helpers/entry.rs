use chrono::{DateTime, FixedOffset, NaiveTime};
use tracing::debug;

use crate::helpers::calendar::CalendarDay;
use crate::models::clockify::{EntryType, TimeEntryRequest};

// Polish summer time (CEST).
const POLISH_OFFSET: FixedOffset = FixedOffset::east_opt(2 * 3600).unwrap();
const WORK_START: NaiveTime = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
const WORK_END: NaiveTime = NaiveTime::from_hms_opt(16, 0, 0).unwrap();

/// Offset and working hours used to stamp generated entries.
///
/// The offset is applied as-is to every date. The default is `+02:00` all
/// year round; winter dates are not moved to `+01:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetPolicy {
    offset: FixedOffset,
    work_start: NaiveTime,
    work_end: NaiveTime,
}

impl FixedOffsetPolicy {
    pub fn new(offset: FixedOffset, work_start: NaiveTime, work_end: NaiveTime) -> Self {
        Self {
            offset,
            work_start,
            work_end,
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Entry covering the working window of `day`. Weekends must be filtered
    /// out by the caller.
    pub fn build_entry(
        &self,
        day: CalendarDay,
        project_id: &str,
        task_id: &str,
    ) -> TimeEntryRequest {
        debug_assert!(!day.is_weekend(), "no entries are built for weekend days");
        debug!("Building time entry for {}", day);

        TimeEntryRequest {
            billable: true,
            project_id: project_id.to_string(),
            start: self.at(day, self.work_start),
            end: self.at(day, self.work_end),
            task_id: task_id.to_string(),
            entry_type: EntryType::Regular,
        }
    }

    fn at(&self, day: CalendarDay, time: NaiveTime) -> DateTime<FixedOffset> {
        let local = day.date().and_time(time);
        DateTime::from_naive_utc_and_offset(local - self.offset, self.offset)
    }
}

impl Default for FixedOffsetPolicy {
    fn default() -> Self {
        Self::new(POLISH_OFFSET, WORK_START, WORK_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clockify::format_timestamp;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn weekday(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[rstest]
    #[case(weekday(2024, 6, 17), "2024-06-17")]
    #[case(weekday(2024, 12, 2), "2024-12-02")]
    #[case(weekday(2025, 1, 31), "2025-01-31")]
    #[case(weekday(2024, 3, 29), "2024-03-29")]
    fn stamps_eight_to_four_at_plus_two_all_year(
        #[case] day: CalendarDay,
        #[case] iso: &str,
    ) {
        let entry = FixedOffsetPolicy::default().build_entry(day, "proj", "task");

        assert_eq!(
            format_timestamp(&entry.start),
            format!("{iso}T08:00:00+02:00")
        );
        assert_eq!(
            format_timestamp(&entry.end),
            format!("{iso}T16:00:00+02:00")
        );
    }

    #[test]
    fn fills_fixed_fields() {
        let entry =
            FixedOffsetPolicy::default().build_entry(weekday(2024, 6, 3), "p-1", "t-1");

        assert!(entry.billable);
        assert_eq!(entry.project_id, "p-1");
        assert_eq!(entry.task_id, "t-1");
        assert_eq!(entry.entry_type, EntryType::Regular);
        assert_eq!((entry.end - entry.start).num_hours(), 8);
    }

    #[test]
    fn custom_policy_uses_its_own_offset_and_hours() {
        let policy = FixedOffsetPolicy::new(
            FixedOffset::east_opt(3600).unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        );
        let entry = policy.build_entry(weekday(2024, 12, 2), "p", "t");

        assert_eq!(format_timestamp(&entry.start), "2024-12-02T09:30:00+01:00");
        assert_eq!(format_timestamp(&entry.end), "2024-12-02T17:00:00+01:00");
        assert_eq!(entry.start.naive_utc().to_string(), "2024-12-02 08:30:00");
    }

    #[test]
    fn default_policy_is_plus_two_eight_to_four() {
        let expected = FixedOffsetPolicy::new(
            FixedOffset::east_opt(2 * 3600).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        );
        assert_eq!(FixedOffsetPolicy::default(), expected);
        assert_eq!(expected.offset().local_minus_utc(), 7200);
    }
}
