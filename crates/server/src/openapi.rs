//! OpenAPI document. The entity models live in `models` without schema derives,
//! so their wire shapes are described here.

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(ToSchema)]
pub struct OwnerDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    #[schema(value_type = String, format = Date, example = "1975-08-15")]
    pub birthday: chrono::NaiveDate,
}

#[derive(ToSchema)]
pub struct OwnerInputDoc {
    pub name: String,
    pub address: String,
    #[schema(value_type = String, format = Date, example = "1975-08-15")]
    pub birthday: chrono::NaiveDate,
}

#[derive(ToSchema)]
pub struct OwnerUploadDoc {
    pub name: String,
    pub address: String,
    #[schema(example = "1975-08-15")]
    pub birthday: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<Vec<u8>>,
}

#[derive(ToSchema)]
pub struct PhotoUploadDoc {
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<Vec<u8>>,
}

#[derive(ToSchema)]
pub struct PropertyDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub price: i32,
    pub code_internal: String,
    pub year: i32,
    pub owner_id: i32,
}

#[derive(ToSchema)]
pub struct PropertyInputDoc {
    pub name: String,
    pub address: String,
    pub price: i32,
    pub code_internal: String,
    #[schema(minimum = 1800, maximum = 2024)]
    pub year: i32,
    pub owner_id: i32,
}

#[derive(ToSchema)]
pub struct PropertyImageDoc {
    pub id: i32,
    pub enabled: bool,
    pub property_id: i32,
}

#[derive(ToSchema)]
pub struct PropertyImageUploadDoc {
    pub property_id: i32,
    pub enabled: Option<bool>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
}

#[derive(ToSchema)]
pub struct PropertyImageUpdateDoc {
    pub enabled: bool,
}

#[derive(ToSchema)]
pub struct FileUploadDoc {
    #[schema(value_type = Option<String>, format = Binary)]
    pub file: Option<Vec<u8>>,
}

#[derive(ToSchema)]
pub struct PropertyTraceDoc {
    pub id: i32,
    #[schema(value_type = String, format = Date, example = "2020-07-15")]
    pub date_sale: chrono::NaiveDate,
    pub name: String,
    pub value: i32,
    pub tax: i32,
    pub property_id: i32,
}

#[derive(ToSchema)]
pub struct PropertyTraceInputDoc {
    #[schema(value_type = String, format = Date, example = "2020-07-15")]
    pub date_sale: chrono::NaiveDate,
    pub name: String,
    pub value: i32,
    pub tax: i32,
    pub property_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::owners::list,
        crate::routes::owners::get,
        crate::routes::owners::create,
        crate::routes::owners::update,
        crate::routes::owners::delete,
        crate::routes::owners::get_photo,
        crate::routes::owners::replace_photo,
        crate::routes::owners::properties,
        crate::routes::properties::list,
        crate::routes::properties::filter,
        crate::routes::properties::get,
        crate::routes::properties::create,
        crate::routes::properties::update,
        crate::routes::properties::delete,
        crate::routes::properties::images,
        crate::routes::properties::traces,
        crate::routes::property_images::list,
        crate::routes::property_images::get,
        crate::routes::property_images::create,
        crate::routes::property_images::update,
        crate::routes::property_images::delete,
        crate::routes::property_images::get_file,
        crate::routes::property_images::replace_file,
        crate::routes::property_traces::list,
        crate::routes::property_traces::get,
        crate::routes::property_traces::create,
        crate::routes::property_traces::update,
        crate::routes::property_traces::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            OwnerDoc,
            OwnerInputDoc,
            OwnerUploadDoc,
            PhotoUploadDoc,
            PropertyDoc,
            PropertyInputDoc,
            PropertyImageDoc,
            PropertyImageUploadDoc,
            PropertyImageUpdateDoc,
            FileUploadDoc,
            PropertyTraceDoc,
            PropertyTraceInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "owners"),
        (name = "properties"),
        (name = "property-images"),
        (name = "property-traces")
    )
)]
pub struct ApiDoc;
