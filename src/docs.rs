use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use travol_core::ErrorResponse;
use travol_db::{DeleteResult, Document, InsertOneResult, UpdateResult};
use travol_models::{
    AdminCheckResponse, BookingStatus, CreateBookingDto, CreatePackageDto, CreateReviewDto,
    CreateTourGuideDto, CreateUserDto, CreateUserResponse, CreateWishlistEntryDto, TokenRequest,
    TokenResponse, TourGuideCheckResponse, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::check_tour_guide,
        crate::modules::users::controller::make_admin,
        crate::modules::users::controller::make_tour_guide,
        crate::modules::bookings::controller::get_bookings,
        crate::modules::bookings::controller::create_booking,
        crate::modules::bookings::controller::get_tourist_bookings,
        crate::modules::bookings::controller::get_guide_bookings,
        crate::modules::bookings::controller::accept_booking,
        crate::modules::bookings::controller::reject_booking,
        crate::modules::packages::controller::get_packages,
        crate::modules::packages::controller::get_package,
        crate::modules::packages::controller::create_package,
        crate::modules::wishlist::controller::add_to_wishlist,
        crate::modules::wishlist::controller::get_wishlist,
        crate::modules::wishlist::controller::get_user_wishlist,
        crate::modules::wishlist::controller::get_wishlist_entry,
        crate::modules::wishlist::controller::delete_wishlist_entry,
        crate::modules::tour_guides::controller::get_tour_guides,
        crate::modules::tour_guides::controller::get_tour_guide,
        crate::modules::tour_guides::controller::get_tour_guide_by_name,
        crate::modules::tour_guides::controller::create_tour_guide,
        crate::modules::reviews::controller::get_reviews,
        crate::modules::reviews::controller::get_review,
        crate::modules::reviews::controller::create_review,
    ),
    components(
        schemas(
            Document,
            InsertOneResult,
            UpdateResult,
            DeleteResult,
            ErrorResponse,
            TokenRequest,
            TokenResponse,
            UserRole,
            CreateUserDto,
            CreateUserResponse,
            AdminCheckResponse,
            TourGuideCheckResponse,
            BookingStatus,
            CreateBookingDto,
            CreatePackageDto,
            CreateWishlistEntryDto,
            CreateTourGuideDto,
            CreateReviewDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Access token issuing"),
        (name = "Users", description = "Registration, role checks and promotion"),
        (name = "Bookings", description = "Tour guide bookings"),
        (name = "Packages", description = "Tour packages"),
        (name = "Wishlist", description = "Saved packages"),
        (name = "Tour Guides", description = "Tour guide profiles"),
        (name = "Reviews", description = "Traveller reviews")
    ),
    info(
        title = "Travol API",
        version = "0.1.0",
        description = "REST backend for a travel-booking marketplace.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
