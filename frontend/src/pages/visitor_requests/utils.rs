use crate::{
    api::{AccompanyingPerson, VisitorRequest},
    utils::search::filter_by_term,
};

/// Matches name, email, phone or status.
pub fn filter_visitor_requests(items: &[VisitorRequest], term: &str) -> Vec<VisitorRequest> {
    filter_by_term(items, term, |item| {
        vec![
            item.name.as_str(),
            item.email.as_str(),
            item.phone.as_str(),
            item.status.as_str(),
        ]
    })
}

/// Comma-joined column of one companion attribute.
pub fn join_companions(people: &[AccompanyingPerson], pick: fn(&AccompanyingPerson) -> &str) -> String {
    people
        .iter()
        .map(pick)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> VisitorRequest {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Vec<VisitorRequest> {
        vec![
            request(json!({
                "id": "v1", "name": "Alice Smith", "email": "alice@example.com",
                "phone": "5550101", "status": "approved"
            })),
            request(json!({
                "id": "v2", "name": "Bob Jones", "email": "bob@example.com",
                "phone": "5550202", "status": "pending",
                "accompanying": [
                    { "name": "Cara", "phone": "5550303", "email": "cara@example.com" },
                    { "name": "Dan", "phone": "5550404", "email": "" }
                ]
            })),
        ]
    }

    #[test]
    fn search_covers_contact_and_status() {
        let items = sample();
        assert_eq!(filter_visitor_requests(&items, "PENDING")[0].id, "v2");
        assert_eq!(filter_visitor_requests(&items, "alice@")[0].id, "v1");
        assert_eq!(filter_visitor_requests(&items, "0202")[0].id, "v2");
        assert_eq!(filter_visitor_requests(&items, "").len(), 2);
        assert!(filter_visitor_requests(&items, "nobody").is_empty());
    }

    #[test]
    fn companions_join_per_column() {
        let items = sample();
        let people = &items[1].accompanying;
        assert_eq!(join_companions(people, |p| p.name.as_str()), "Cara, Dan");
        assert_eq!(join_companions(people, |p| p.email.as_str()), "cara@example.com");
        assert_eq!(join_companions(&items[0].accompanying, |p| p.name.as_str()), "");
    }
}
