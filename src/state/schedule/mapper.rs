//! Shapes flat schedule records into the views the client renders.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{DayOfWeek, GroupRef, ScheduleRecord};

/// Every lesson of a semester, ordered by day, period start, group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FullSchedule {
    /// Groups in order of first appearance.
    pub groups: Vec<GroupRef>,
    pub rows: Vec<ScheduleRecord>,
}

impl FullSchedule {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lessons of one day split by week parity. Weekly lessons are in both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParityDay {
    pub odd: Vec<ScheduleRecord>,
    pub even: Vec<ScheduleRecord>,
}

/// One group's or one teacher's week.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekSchedule {
    pub days: BTreeMap<DayOfWeek, ParityDay>,
}

impl WeekSchedule {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn lesson_count(&self) -> usize {
        self.days.values().map(|d| d.odd.len() + d.even.len()).sum()
    }
}

fn by_slot(a: &ScheduleRecord, b: &ScheduleRecord) -> Ordering {
    a.day_of_week
        .cmp(&b.day_of_week)
        .then_with(|| a.period.start_time.cmp(&b.period.start_time))
        .then_with(|| a.lesson.group.title.cmp(&b.lesson.group.title))
}

pub fn full_schedule(mut records: Vec<ScheduleRecord>) -> FullSchedule {
    let mut groups: Vec<GroupRef> = Vec::new();
    for record in &records {
        if !groups.iter().any(|g| g.id == record.lesson.group.id) {
            groups.push(record.lesson.group.clone());
        }
    }
    records.sort_by(by_slot);
    FullSchedule {
        groups,
        rows: records,
    }
}

pub fn week_schedule(mut records: Vec<ScheduleRecord>) -> WeekSchedule {
    records.sort_by(by_slot);
    let mut days: BTreeMap<DayOfWeek, ParityDay> = BTreeMap::new();
    for record in records {
        let day = days.entry(record.day_of_week).or_default();
        if record.even_odd.on_odd_weeks() {
            day.odd.push(record.clone());
        }
        if record.even_odd.on_even_weeks() {
            day.even.push(record);
        }
    }
    WeekSchedule { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EvenOdd, LessonInfo, Period};

    fn record(id: i64, day: DayOfWeek, start: &str, parity: EvenOdd, group: (i64, &str)) -> ScheduleRecord {
        ScheduleRecord {
            id,
            day_of_week: day,
            even_odd: parity,
            lesson: LessonInfo {
                id,
                group: GroupRef {
                    id: group.0,
                    title: group.1.to_string(),
                },
                ..LessonInfo::default()
            },
            period: Period {
                id,
                start_time: start.to_string(),
                ..Period::default()
            },
            ..ScheduleRecord::default()
        }
    }

    #[test]
    fn full_schedule_sorts_by_day_then_start() {
        let full = full_schedule(vec![
            record(1, DayOfWeek::Tuesday, "08:20", EvenOdd::Weekly, (1, "A")),
            record(2, DayOfWeek::Monday, "10:00", EvenOdd::Weekly, (2, "B")),
            record(3, DayOfWeek::Monday, "08:20", EvenOdd::Weekly, (1, "A")),
        ]);
        let ids: Vec<i64> = full.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(full.groups.len(), 2);
        assert_eq!(full.groups[0].title, "A");
    }

    #[test]
    fn weekly_lessons_land_in_both_parities() {
        let week = week_schedule(vec![
            record(1, DayOfWeek::Friday, "08:20", EvenOdd::Weekly, (1, "A")),
            record(2, DayOfWeek::Friday, "10:00", EvenOdd::Odd, (1, "A")),
            record(3, DayOfWeek::Friday, "11:50", EvenOdd::Even, (1, "A")),
        ]);
        let friday = &week.days[&DayOfWeek::Friday];
        assert_eq!(friday.odd.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(friday.even.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(week.lesson_count(), 4);
    }
}
