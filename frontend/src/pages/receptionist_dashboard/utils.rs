use crate::{
    api::{Punctuality, RequestStatus, VisitRecordPayload, VisitStatus, VisitorRequest},
    utils::{search::filter_by_term, time::to_datetime_local},
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use qrcode::{render::svg, QrCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceptionView {
    #[default]
    Mine,
    Warehouse,
    Today,
}

impl ReceptionView {
    pub const ALL: [ReceptionView; 3] = [
        ReceptionView::Mine,
        ReceptionView::Warehouse,
        ReceptionView::Today,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReceptionView::Mine => "My Requests",
            ReceptionView::Warehouse => "Warehouse Requests",
            ReceptionView::Today => "Today's Requests",
        }
    }

    pub fn needs_warehouse(&self) -> bool {
        !matches!(self, ReceptionView::Mine)
    }
}

/// Local search over the loaded set; the input slice is never modified.
pub fn filter_requests(items: &[VisitorRequest], term: &str) -> Vec<VisitorRequest> {
    filter_by_term(items, term, |request| {
        vec![
            request.name.as_str(),
            request.email.as_str(),
            request.phone.as_str(),
            request.visitor_type_name.as_str(),
            request.tracking_code.as_deref().unwrap_or_default(),
            request.date.as_str(),
        ]
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceptionStats {
    pub pending_approval: usize,
    pub visited: usize,
    pub no_show: usize,
    pub total: usize,
}

impl ReceptionStats {
    pub fn from_requests(items: &[VisitorRequest]) -> Self {
        items.iter().fold(
            ReceptionStats {
                total: items.len(),
                ..ReceptionStats::default()
            },
            |mut stats, request| {
                if request.status_kind() == RequestStatus::Pending {
                    stats.pending_approval += 1;
                }
                match request.visit_status_kind() {
                    VisitStatus::Visited => stats.visited += 1,
                    VisitStatus::NoShow => stats.no_show += 1,
                    VisitStatus::Pending => {}
                }
                stats
            },
        )
    }
}

/// Editable copy of one request's visit-tracking fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitForm {
    pub request_id: String,
    pub visit_status: VisitStatus,
    pub arrived_at: String,
    pub checked_out_at: String,
    pub punctuality: Punctuality,
}

impl VisitForm {
    pub fn from_request(request: &VisitorRequest) -> Self {
        let local = |value: &Option<String>| {
            value
                .as_deref()
                .map(to_datetime_local)
                .unwrap_or_default()
        };
        Self {
            request_id: request.id.clone(),
            visit_status: request.visit_status_kind(),
            arrived_at: local(&request.arrived_at),
            checked_out_at: local(&request.checked_out_at),
            punctuality: request
                .punctuality
                .as_deref()
                .map(Punctuality::parse)
                .unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> VisitRecordPayload {
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        VisitRecordPayload {
            visit_status: self.visit_status.as_str().to_string(),
            arrived_at: optional(&self.arrived_at),
            checked_out_at: optional(&self.checked_out_at),
            punctuality: self.punctuality.as_str().to_string(),
        }
    }
}

/// Renders `code` as an SVG QR code wrapped in a `data:` URL for `<img src>`.
pub fn qr_data_url(code: &str) -> Option<String> {
    if code.trim().is_empty() {
        return None;
    }
    match QrCode::new(code.as_bytes()) {
        Ok(qr) => {
            let image = qr
                .render::<svg::Color>()
                .min_dimensions(160, 160)
                .quiet_zone(true)
                .build();
            Some(format!(
                "data:image/svg+xml;charset=utf-8,{}",
                utf8_percent_encode(&image, NON_ALPHANUMERIC)
            ))
        }
        Err(err) => {
            log::warn!("could not encode tracking code as QR: {}", err);
            None
        }
    }
}
