pub mod booking_summary;
pub mod contact_info_service;

pub use booking_summary::{BookingSummary, SummaryRow};
pub use contact_info_service::ContactInfoService;
