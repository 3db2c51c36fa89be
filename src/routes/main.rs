use actix_multipart::form::MultipartForm;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, Responder, get, post, web};
use tera::Context;

use crate::domain::{DEFAULT_CURRENCY, SUPPORTED_CURRENCIES};
use crate::dto::ApiResponse;
use crate::forms::main::VendorForm;
use crate::routes::render_template;
use crate::services::{ServiceError, submissions};

#[get("/")]
pub async fn index() -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "index");
    render_template("main/index.html", &context)
}

#[get("/vendors")]
pub async fn vendors() -> impl Responder {
    let mut context = Context::new();
    context.insert("current_page", "vendors");
    context.insert("currencies", &SUPPORTED_CURRENCIES);
    context.insert("default_currency", DEFAULT_CURRENCY);
    render_template("main/vendors.html", &context)
}

#[post("/api/vendors")]
pub async fn submit_vendor(req: HttpRequest, payload: web::Payload) -> impl Responder {
    if !is_multipart(&req) {
        return HttpResponse::UnsupportedMediaType()
            .json(ApiResponse::failure("Expected multipart form data"));
    }

    let mut payload = payload.into_inner();
    let form = match MultipartForm::<VendorForm>::from_request(&req, &mut payload).await {
        Ok(form) => form.into_inner(),
        Err(err) => {
            log::error!("Failed to read multipart payload: {err}");
            return HttpResponse::InternalServerError().json(ApiResponse::failure("Unexpected error"));
        }
    };

    match submissions::process(form.into_submission()) {
        Ok(summary) => {
            HttpResponse::Ok().json(ApiResponse::success("Submission received. Thank you!", summary))
        }
        Err(ServiceError::Validation(errors)) => HttpResponse::BadRequest()
            .json(ApiResponse::invalid("Invalid form submission", errors)),
        Err(err) => {
            log::error!("Failed to process submission: {err}");
            HttpResponse::InternalServerError().json(ApiResponse::failure("Unexpected error"))
        }
    }
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("multipart/form-data"))
}
