mod investigate;

pub use investigate::{
    ActionView, ActivitySection, CorrelationSection, DayView, EventRow, InvestigateParams,
    InvestigateResponse, RegistrantView, ReportView, WhoisSection, WhoisView,
};
