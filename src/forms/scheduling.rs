use super::{date, optional, required, time, FormState};
use crate::error::FormError;
use crate::models::{NewShift, Wave};

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftForm {
    pub driver_id: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub wave: Wave,
    pub route_id: String,
    pub backup_driver_id: String,
}

impl Default for ShiftForm {
    fn default() -> Self {
        Self {
            driver_id: String::new(),
            date: String::new(),
            start: "07:00".to_string(),
            end: "17:00".to_string(),
            wave: Wave::First,
            route_id: String::new(),
            backup_driver_id: String::new(),
        }
    }
}

impl FormState for ShiftForm {
    type Output = NewShift;

    fn validate(&self) -> Result<NewShift, FormError> {
        Ok(NewShift {
            driver_id: required(&self.driver_id, "Driver")?,
            date: date(&self.date, "Date")?,
            start: time(&self.start, "Start time")?,
            end: time(&self.end, "End time")?,
            wave: self.wave,
            route_id: optional(&self.route_id),
            backup_driver_id: optional(&self.backup_driver_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::forms::submit;
    use crate::state::{Command, DspStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schedule_shift_without_route() {
        let mut store = DspStore::seeded();
        let before = store.shifts.len();
        let mut form = ShiftForm {
            driver_id: "DRV-003".into(),
            date: "2024-06-12".into(),
            wave: Wave::Second,
            ..Default::default()
        };

        let mut result = None;
        submit(&mut form, |new| result = Some(store.dispatch(Command::ScheduleShift(new)))).unwrap();

        assert!(matches!(result, Some(Ok(_))));
        assert_eq!(store.shifts.len(), before + 1);
        assert_eq!(form, ShiftForm::default());

        let shift = store.shifts.all().last().cloned().unwrap();
        assert_eq!(shift.route_id, None);
        assert_eq!(shift.start, data::time(7, 0));
        assert_eq!(shift.hours(), 10.0);
    }

    #[test]
    fn test_driver_is_required() {
        let form = ShiftForm {
            date: "2024-06-12".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Driver")));
    }

    #[test]
    fn test_malformed_time() {
        let form = ShiftForm {
            driver_id: "DRV-001".into(),
            date: "2024-06-12".into(),
            start: "7am".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidDate("Start time")));
    }
}
