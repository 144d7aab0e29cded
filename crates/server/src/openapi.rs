use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct PigDoc { pub id: i32, pub pig_name: String, pub pig_house: String }

#[derive(ToSchema)]
pub struct WolfDoc { pub id: i32, pub wolf_name: String, pub wolf_power: i32 }

#[derive(ToSchema)]
pub struct HouseDoc {
    pub id: i32,
    pub house_type: String,
    pub house_sturdiness: i32,
    pub pig_id: Option<i32>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::pigs::create,
        crate::routes::pigs::list,
        crate::routes::pigs::get,
        crate::routes::pigs::update,
        crate::routes::pigs::delete,
        crate::routes::pigs::houses,
        crate::routes::wolves::create,
        crate::routes::wolves::list,
        crate::routes::wolves::get,
        crate::routes::wolves::update,
        crate::routes::wolves::delete,
        crate::routes::houses::create,
        crate::routes::houses::list,
        crate::routes::houses::get,
        crate::routes::houses::update,
        crate::routes::houses::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            PigDoc,
            WolfDoc,
            HouseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "pigs"),
        (name = "wolves"),
        (name = "houses")
    )
)]
pub struct ApiDoc;
