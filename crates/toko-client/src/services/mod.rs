//! # Domain Services
//!
//! Thin wrappers mapping one REST endpoint to one typed function each.
//! No orchestration beyond request/response unwrapping: anything that
//! looks like business logic lives in `toko-core` (checked before a
//! request leaves) or behind the API (authoritative).

pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod users;
pub mod vouchers;

pub use auth::AuthService;
pub use cart::CartService;
pub use dashboard::DashboardService;
pub use orders::OrderService;
pub use products::ProductService;
pub use users::UserService;
pub use vouchers::VoucherService;
