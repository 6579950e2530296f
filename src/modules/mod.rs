pub mod auth;
pub mod bookings;
pub mod packages;
pub mod reviews;
pub mod tour_guides;
pub mod users;
pub mod wishlist;
