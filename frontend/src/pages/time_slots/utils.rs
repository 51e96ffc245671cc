use crate::{
    api::{TimeSlot, TimeSlotPayload, UpdateTimeSlotPayload},
    utils::{search::filter_by_term, time::is_time_range_valid, validation},
};

pub const TIME_RANGE_MESSAGE: &str = "From time must be earlier than To time";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSlotForm {
    pub id: Option<String>,
    pub name: String,
    pub from: String,
    pub to: String,
}

impl TimeSlotForm {
    pub fn from_slot(slot: &TimeSlot) -> Self {
        Self {
            id: Some(slot.id.clone()),
            name: slot.name.clone(),
            from: slot.from.chars().take(5).collect(),
            to: slot.to.chars().take(5).collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit Time Slot"
        } else {
            "Add Time Slot"
        }
    }

    pub fn to_payload(&self) -> Result<TimeSlotPayload, String> {
        validation::require(&self.name, "Name is required")?;
        validation::require(&self.from, "From time is required")?;
        validation::require(&self.to, "To time is required")?;
        if !is_time_range_valid(&self.from, &self.to) {
            return Err(TIME_RANGE_MESSAGE.to_string());
        }
        Ok(TimeSlotPayload {
            name: self.name.trim().to_string(),
            from: self.from.trim().to_string(),
            to: self.to.trim().to_string(),
        })
    }
}

pub fn update_payload(payload: TimeSlotPayload, warehouse_id: &str) -> UpdateTimeSlotPayload {
    UpdateTimeSlotPayload {
        name: payload.name,
        from: payload.from,
        to: payload.to,
        warehouse_id: warehouse_id.to_string(),
    }
}

pub fn filter_time_slots(items: &[TimeSlot], term: &str) -> Vec<TimeSlot> {
    filter_by_term(items, term, |slot| {
        vec![slot.name.as_str(), slot.from.as_str(), slot.to.as_str()]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, name: &str, from: &str, to: &str) -> TimeSlot {
        TimeSlot {
            id: id.into(),
            name: name.into(),
            from: from.into(),
            to: to.into(),
            warehouse_id: Some("w1".into()),
        }
    }

    #[test]
    fn range_must_run_forwards() {
        let mut form = TimeSlotForm {
            name: "Morning".into(),
            from: "10:00".into(),
            to: "09:00".into(),
            ..TimeSlotForm::default()
        };
        assert_eq!(form.to_payload(), Err(TIME_RANGE_MESSAGE.to_string()));
        form.to = "10:00".into();
        assert_eq!(form.to_payload(), Err(TIME_RANGE_MESSAGE.to_string()));
        form.to = "11:30".into();
        assert!(form.to_payload().is_ok());
    }

    #[test]
    fn edit_form_trims_seconds_for_time_inputs() {
        let form = TimeSlotForm::from_slot(&slot("s1", "Morning", "09:00:00", "11:00:00"));
        assert_eq!(form.from, "09:00");
        assert_eq!(form.to, "11:00");
        assert_eq!(form.title(), "Edit Time Slot");
    }

    #[test]
    fn update_payload_carries_warehouse() {
        let payload = TimeSlotPayload {
            name: "Morning".into(),
            from: "09:00".into(),
            to: "10:00".into(),
        };
        assert_eq!(update_payload(payload, "w7").warehouse_id, "w7");
    }

    #[test]
    fn search_checks_name_and_times() {
        let items = vec![
            slot("s1", "Morning", "09:00", "11:00"),
            slot("s2", "Evening", "17:00", "19:00"),
        ];
        assert_eq!(filter_time_slots(&items, "even")[0].id, "s2");
        assert_eq!(filter_time_slots(&items, "11:00")[0].id, "s1");
        assert_eq!(filter_time_slots(&items, "").len(), 2);
    }
}
