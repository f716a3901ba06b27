use super::SchedulerApp;
use crate::utils::date::week_start;
use chrono::{Duration, Local};

impl SchedulerApp {
    pub(super) fn first_day_of_week(&self) -> u32 {
        if self.settings.week_starts_monday {
            1
        } else {
            0
        }
    }

    pub(super) fn navigate_previous(&mut self) {
        self.set_week_start(self.week_start - Duration::weeks(1));
    }

    pub(super) fn navigate_next(&mut self) {
        self.set_week_start(self.week_start + Duration::weeks(1));
    }

    pub(super) fn jump_to_today(&mut self) {
        let today = Local::now().date_naive();
        self.set_week_start(week_start(today, self.first_day_of_week()));
    }

    fn set_week_start(&mut self, start: chrono::NaiveDate) {
        if start == self.week_start {
            return;
        }
        self.week_start = start;
        self.events.clear();
        self.events_error = None;
        self.request_events();
    }
}
