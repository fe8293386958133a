pub mod customer;
pub mod invoice;
pub mod pagination;
pub mod revenue;
pub mod user;
