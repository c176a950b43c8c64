pub mod gig;
pub mod review;

pub use gig::GigService;
pub use review::ReviewService;
