use crate::{
    api::{AccompanyingPerson, VisitorRequestPayload},
    utils::{time::date_part, validation},
};
use chrono::NaiveDate;
use std::{cell::Cell, collections::BTreeMap, rc::Rc};

pub const MAX_ACCOMPANYING: usize = 4;
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Visitor request submitted successfully!";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit request. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccompanyingRow {
    pub key: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccompanyingField {
    Name,
    Phone,
    Email,
}

/// Field name to message; accompanying rows use `accompanying.<index>.<field>`.
pub type VisitorFormErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub visitor_type_id: String,
    pub warehouse_id: String,
    pub warehouse_time_slot_id: String,
    pub date: String,
    pub description: String,
    pub accompanying: Vec<AccompanyingRow>,
    next_key: u32,
}

impl VisitorFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Changing the warehouse always invalidates the chosen slot.
    pub fn set_warehouse(&mut self, warehouse_id: String) {
        if self.warehouse_id != warehouse_id {
            self.warehouse_time_slot_id.clear();
        }
        self.warehouse_id = warehouse_id;
    }

    pub fn can_add_more(&self) -> bool {
        self.accompanying.len() < MAX_ACCOMPANYING
    }

    pub fn add_accompanying(&mut self) -> bool {
        if !self.can_add_more() {
            return false;
        }
        self.next_key = self.next_key.wrapping_add(1);
        self.accompanying.push(AccompanyingRow {
            key: self.next_key,
            ..AccompanyingRow::default()
        });
        true
    }

    pub fn remove_accompanying(&mut self, key: u32) {
        self.accompanying.retain(|row| row.key != key);
    }

    pub fn update_accompanying(&mut self, key: u32, field: AccompanyingField, value: String) {
        if let Some(row) = self.accompanying.iter_mut().find(|row| row.key == key) {
            match field {
                AccompanyingField::Name => row.name = value,
                AccompanyingField::Phone => row.phone = value,
                AccompanyingField::Email => row.email = value,
            }
        }
    }

    pub fn validate(&self, today: NaiveDate) -> VisitorFormErrors {
        let mut errors = VisitorFormErrors::new();
        let mut check = |field: &str, result: Result<(), String>| {
            if let Err(message) = result {
                errors.insert(field.to_string(), message);
            }
        };

        check("name", validation::require(&self.name, "Name is required"));
        check("email", validation::require(&self.email, "Email is required"));
        check("phone", validation::require(&self.phone, "Phone is required"));
        check(
            "visitor_type_id",
            validation::require(&self.visitor_type_id, "Visitor Type is required"),
        );
        check(
            "warehouse_id",
            validation::require(&self.warehouse_id, "Warehouse is required"),
        );
        check(
            "warehouse_time_slot_id",
            validation::require(&self.warehouse_time_slot_id, "Time Slot is required"),
        );
        check("date", date_rule(&self.date, today));
        check(
            "description",
            validation::require(&self.description, "Description is required"),
        );

        for (index, row) in self.accompanying.iter().enumerate() {
            check(
                &format!("accompanying.{}.name", index),
                validation::require(&row.name, "Name is required"),
            );
            check(
                &format!("accompanying.{}.phone", index),
                validation::require(&row.phone, "Phone is required"),
            );
            check(
                &format!("accompanying.{}.email", index),
                validation::require(&row.email, "Email is required"),
            );
        }
        errors
    }

    pub fn to_payload(&self) -> VisitorRequestPayload {
        VisitorRequestPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            visitor_type_id: self.visitor_type_id.clone(),
            warehouse_id: self.warehouse_id.clone(),
            warehouse_time_slot_id: self.warehouse_time_slot_id.clone(),
            date: self.date.clone(),
            description: self.description.trim().to_string(),
            accompanying: self
                .accompanying
                .iter()
                .map(|row| AccompanyingPerson {
                    name: row.name.trim().to_string(),
                    phone: row.phone.trim().to_string(),
                    email: row.email.trim().to_string(),
                })
                .collect(),
        }
    }
}

fn date_rule(value: &str, today: NaiveDate) -> Result<(), String> {
    validation::require(value, "Date is required")?;
    match date_part(value) {
        Some(date) if date >= today => Ok(()),
        Some(_) => Err("Date cannot be in the past".into()),
        None => Err("Invalid date".into()),
    }
}

/// Tags each time-slot fetch so only the response for the latest warehouse
/// selection is applied.
#[derive(Clone, Default)]
pub struct SlotLoadGuard {
    generation: Rc<Cell<u64>>,
}

impl SlotLoadGuard {
    pub fn begin(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 10).unwrap()
    }

    fn filled() -> VisitorFormState {
        VisitorFormState {
            name: "Vera Visitor".into(),
            email: "vera@example.com".into(),
            phone: "5550100".into(),
            visitor_type_id: "t1".into(),
            warehouse_id: "w1".into(),
            warehouse_time_slot_id: "s1".into(),
            date: "2030-01-10".into(),
            description: "Delivery".into(),
            ..VisitorFormState::default()
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = VisitorFormState::default().validate(today());
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
        assert_eq!(
            errors.get("warehouse_time_slot_id").map(String::as_str),
            Some("Time Slot is required")
        );
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate(today()).is_empty());
    }

    #[test]
    fn past_dates_are_rejected() {
        let mut form = filled();
        form.date = "2030-01-09".into();
        assert_eq!(
            form.validate(today()).get("date").map(String::as_str),
            Some("Date cannot be in the past")
        );
    }

    #[test]
    fn changing_or_clearing_warehouse_clears_time_slot() {
        let mut form = filled();
        form.set_warehouse("w1".into());
        assert_eq!(form.warehouse_time_slot_id, "s1");
        form.set_warehouse(String::new());
        assert!(form.warehouse_time_slot_id.is_empty());
        form.warehouse_time_slot_id = "s2".into();
        form.set_warehouse("w2".into());
        assert!(form.warehouse_time_slot_id.is_empty());
    }

    #[test]
    fn accompanying_rows_are_capped() {
        let mut form = filled();
        for _ in 0..MAX_ACCOMPANYING {
            assert!(form.add_accompanying());
        }
        assert!(!form.can_add_more());
        assert!(!form.add_accompanying());
        assert_eq!(form.accompanying.len(), MAX_ACCOMPANYING);

        let key = form.accompanying[1].key;
        form.remove_accompanying(key);
        assert!(form.can_add_more());
        assert!(form.add_accompanying());
        let keys: Vec<u32> = form.accompanying.iter().map(|row| row.key).collect();
        assert_eq!(keys, vec![1, 3, 4, 5]);
    }

    #[test]
    fn accompanying_fields_are_all_required() {
        let mut form = filled();
        form.add_accompanying();
        let key = form.accompanying[0].key;
        form.update_accompanying(key, AccompanyingField::Name, "Sam".into());
        let errors = form.validate(today());
        assert!(!errors.contains_key("accompanying.0.name"));
        assert_eq!(
            errors.get("accompanying.0.phone").map(String::as_str),
            Some("Phone is required")
        );
        assert_eq!(
            errors.get("accompanying.0.email").map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn contact_fields_accept_any_filled_value() {
        let mut form = filled();
        form.phone = "+44 20 7946 0958 x12".into();
        form.email = "front desk".into();
        form.add_accompanying();
        let key = form.accompanying[0].key;
        form.update_accompanying(key, AccompanyingField::Name, "Sam".into());
        form.update_accompanying(key, AccompanyingField::Phone, "123456".into());
        form.update_accompanying(key, AccompanyingField::Email, "sam at example".into());
        assert!(form.validate(today()).is_empty());
    }

    #[test]
    fn payload_carries_trimmed_values_and_companions() {
        let mut form = filled();
        form.name = "  Vera Visitor ".into();
        form.add_accompanying();
        let key = form.accompanying[0].key;
        form.update_accompanying(key, AccompanyingField::Email, " sam@example.com ".into());
        let payload = form.to_payload();
        assert_eq!(payload.name, "Vera Visitor");
        assert_eq!(payload.accompanying[0].email, "sam@example.com");
        assert_eq!(payload.warehouse_time_slot_id, "s1");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = filled();
        form.add_accompanying();
        form.reset();
        assert_eq!(form, VisitorFormState::default());
    }

    #[test]
    fn only_latest_slot_load_is_current() {
        let guard = SlotLoadGuard::default();
        let first = guard.begin();
        let second = guard.clone().begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}
