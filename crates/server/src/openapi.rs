use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a coffee record.
#[derive(ToSchema)]
pub struct CoffeeDoc {
    /// Blank on POST to have one generated.
    pub id: String,
    pub name: String,
}

#[derive(ToSchema)]
pub struct DroidDoc { pub id: String, pub description: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::coffees::list,
        crate::routes::coffees::get,
        crate::routes::coffees::create,
        crate::routes::coffees::put,
        crate::routes::coffees::delete,
        crate::routes::properties::greeting,
        crate::routes::properties::greeting_coffee,
        crate::routes::properties::droid,
    ),
    components(
        schemas(
            HealthResponse,
            CoffeeDoc,
            DroidDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "coffees"),
        (name = "properties")
    )
)]
pub struct ApiDoc;
