use utoipa::OpenApi;

use crate::models::{BookingRequest, CreateClassRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::create_class,
        crate::handlers::create_booking
    ),
    components(schemas(CreateClassRequest, BookingRequest)),
    tags(
        (name = "studio", description = "Fitness studio class and booking operations")
    ),
)]
pub struct ApiDoc;
