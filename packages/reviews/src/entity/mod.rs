pub mod gig;
pub mod review;
pub mod user;
