pub mod gig;
pub mod rating;
pub mod review;
pub mod shared;
