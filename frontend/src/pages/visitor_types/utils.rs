use crate::{
    api::{VisitorType, VisitorTypePayload},
    utils::{search::filter_by_term, validation},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorTypeForm {
    pub id: Option<String>,
    pub name: String,
}

impl VisitorTypeForm {
    pub fn from_visitor_type(visitor_type: &VisitorType) -> Self {
        Self {
            id: Some(visitor_type.id.clone()),
            name: visitor_type.name.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit Visitor Type"
        } else {
            "Add Visitor Type"
        }
    }

    pub fn to_payload(&self) -> Result<VisitorTypePayload, String> {
        validation::require(&self.name, "Name is required")?;
        Ok(VisitorTypePayload {
            name: self.name.trim().to_string(),
        })
    }
}

pub fn filter_visitor_types(items: &[VisitorType], term: &str) -> Vec<VisitorType> {
    filter_by_term(items, term, |t| vec![t.name.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let form = VisitorTypeForm {
            name: "   ".into(),
            ..VisitorTypeForm::default()
        };
        assert_eq!(form.to_payload(), Err("Name is required".to_string()));
    }

    #[test]
    fn edit_form_trims_name() {
        let mut form = VisitorTypeForm::from_visitor_type(&VisitorType {
            id: "t1".into(),
            name: "Courier".into(),
            is_active: true,
        });
        form.name = " Courier Express ".into();
        assert_eq!(form.title(), "Edit Visitor Type");
        assert_eq!(form.to_payload().unwrap().name, "Courier Express");
    }

    #[test]
    fn search_is_case_insensitive() {
        let items = vec![
            VisitorType { id: "t1".into(), name: "Courier".into(), is_active: true },
            VisitorType { id: "t2".into(), name: "Contractor".into(), is_active: true },
        ];
        assert_eq!(filter_visitor_types(&items, "COUR").len(), 1);
        assert_eq!(filter_visitor_types(&items, "co").len(), 2);
    }
}
