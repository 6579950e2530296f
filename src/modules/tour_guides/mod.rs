pub mod controller;
pub mod router;
pub mod service;

pub use router::init_tour_guides_router;
