use crate::{
    api::{Warehouse, WarehousePayload},
    utils::{search::filter_by_term, validation},
};

/// Create (`id == None`) or edit form for one warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseForm {
    pub id: Option<String>,
    pub name: String,
    pub location: String,
}

impl WarehouseForm {
    pub fn from_warehouse(warehouse: &Warehouse) -> Self {
        Self {
            id: Some(warehouse.id.clone()),
            name: warehouse.name.clone(),
            location: warehouse.location.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Warehouse"
        } else {
            "Add Warehouse"
        }
    }

    pub fn to_payload(&self) -> Result<WarehousePayload, String> {
        validation::require(&self.name, "Name is required")?;
        validation::require(&self.location, "Location is required")?;
        Ok(WarehousePayload {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

pub fn filter_warehouses(items: &[Warehouse], term: &str) -> Vec<Warehouse> {
    filter_by_term(items, term, |w| vec![w.name.as_str(), w.location.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouse(id: &str, name: &str, location: &str) -> Warehouse {
        Warehouse {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            is_active: true,
        }
    }

    #[test]
    fn payload_requires_name_and_location() {
        let mut form = WarehouseForm::default();
        assert_eq!(form.to_payload(), Err("Name is required".to_string()));
        form.name = " North ".into();
        assert_eq!(form.to_payload(), Err("Location is required".to_string()));
        form.location = "Dock 4".into();
        assert_eq!(
            form.to_payload(),
            Ok(WarehousePayload {
                name: "North".into(),
                location: "Dock 4".into(),
            })
        );
    }

    #[test]
    fn edit_form_keeps_identity() {
        let form = WarehouseForm::from_warehouse(&warehouse("w1", "North", "Dock 4"));
        assert!(form.is_edit());
        assert_eq!(form.title(), "Edit Warehouse");
        assert_eq!(WarehouseForm::default().title(), "Add Warehouse");
    }

    #[test]
    fn search_covers_name_and_location() {
        let items = vec![
            warehouse("w1", "North", "Dock 4"),
            warehouse("w2", "South", "Harbour Road"),
        ];
        assert_eq!(filter_warehouses(&items, "harbour")[0].id, "w2");
        assert_eq!(filter_warehouses(&items, "NORTH")[0].id, "w1");
        assert_eq!(filter_warehouses(&items, "").len(), 2);
    }
}
