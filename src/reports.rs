use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::Appointment;
use crate::store::ReceptionStore;

/// Appointment counts for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRollup {
    pub date: NaiveDate,
    pub total: u32,
    pub confirmed: u32,
    pub cancelled: u32,
}

/// How many appointments start at a given `HH:MM`, across all days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotCount {
    pub slot: String,
    pub count: u32,
}

/// Reports screen data, single fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub daily: Vec<DailyRollup>,
    pub top_slots: Vec<TimeSlotCount>,
}

/// Groups every appointment by day, oldest day first.
pub fn daily_rollup(appointments: &[Appointment]) -> Vec<DailyRollup> {
    let mut by_day: BTreeMap<NaiveDate, DailyRollup> = BTreeMap::new();

    for appt in appointments {
        let date = appt.date();
        let entry = by_day.entry(date).or_insert(DailyRollup {
            date,
            total: 0,
            confirmed: 0,
            cancelled: 0,
        });
        entry.total += 1;
        if appt.is_confirmed() {
            entry.confirmed += 1;
        }
        if appt.is_cancelled() {
            entry.cancelled += 1;
        }
    }

    by_day.into_values().collect()
}

/// Busiest start times, most frequent first, at most `limit` entries.
/// Equal counts keep the order in which the slot was first seen.
pub fn top_time_slots(appointments: &[Appointment], limit: usize) -> Vec<TimeSlotCount> {
    let mut slots: Vec<TimeSlotCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for appt in appointments {
        let slot = appt.time_of_day();
        match index.get(&slot).copied() {
            Some(i) => slots[i].count += 1,
            None => {
                index.insert(slot.clone(), slots.len());
                slots.push(TimeSlotCount { slot, count: 1 });
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    slots.sort_by(|a, b| b.count.cmp(&a.count));
    slots.truncate(limit);
    slots
}

/// Top-level assembly for the reports screen.
pub fn build_report(store: &ReceptionStore) -> ReportData {
    let appointments = store.appointments();
    let report = ReportData {
        daily: daily_rollup(appointments),
        top_slots: top_time_slots(appointments, config::TOP_SLOT_LIMIT),
    };

    tracing::debug!(
        days = report.daily.len(),
        slots = report.top_slots.len(),
        "Report built"
    );
    report
}
