//! Seller inquiry intake entity.

pub mod model;
pub mod status;

pub use model::{CreateSellerInquiry, NewSellerInquiry, SellerInquiry};
pub use status::{ContactMethod, InquiryStatus, InquiryType};
