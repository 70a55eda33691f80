//! One repository per collection.

pub mod agent;
pub mod contact;
pub mod inquiry;
pub mod property;
pub mod review;
pub mod user;

pub use agent::AgentRepository;
pub use contact::ContactMessageRepository;
pub use inquiry::SellerInquiryRepository;
pub use property::PropertyRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
