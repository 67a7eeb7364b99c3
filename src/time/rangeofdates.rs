use chrono::{
    Datelike,
    Days,
    NaiveDate
};

/// An inclusive range of calendar dates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    pub fn end_year(&self) -> i32 {
        self.end_date.year()
    }

    /// True if start and end fall in different calendar years.
    pub fn spans_year_boundary(&self) -> bool {
        self.start_year() != self.end_year()
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        self.iter_from(self.start_date)
    }

    /// Iterates the dates of the range from `d` onward; empty if `d` lies after
    /// the end. A `d` before the start is clamped to the start.
    pub fn iter_from(&self, d: NaiveDate) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            next_date: Some(d.max(self.start_date)),
            end_date: self.end_date,
        }
    }
}

pub struct RangeOfDatesIterator {
    next_date: Option<NaiveDate>,
    end_date: NaiveDate,
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next_date.filter(|d| *d <= self.end_date)?;
        self.next_date = current.checked_add_days(Days::new(1));
        Some(current)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let range = RangeOfDates::new(ymd(2021, 12, 31), ymd(2021, 12, 23));
        assert_eq!(range.start_date(), ymd(2021, 12, 23));
        assert_eq!(range.len(), 9);
        assert!(!range.spans_year_boundary());
    }

    #[test]
    fn iter_from_stops_at_end() {
        let range = RangeOfDates::new(ymd(2021, 12, 30), ymd(2022, 1, 2));
        assert!(range.spans_year_boundary());
        let dates: Vec<NaiveDate> = range.iter_from(ymd(2021, 12, 31)).collect();
        assert_eq!(dates, vec![ymd(2021, 12, 31), ymd(2022, 1, 1), ymd(2022, 1, 2)]);
        assert_eq!(range.iter_from(ymd(2022, 1, 3)).count(), 0);
        assert_eq!(range.iter().count(), range.len());
    }

    #[test]
    fn iteration_ends_at_max_date() {
        let range = RangeOfDates::new(NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX);
        assert_eq!(range.iter().count(), 2);
    }
}
