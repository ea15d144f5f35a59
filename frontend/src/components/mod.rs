pub mod contact_info_page;

pub use contact_info_page::ContactInfoPage;
