// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{
    PasswordAnalysisResponse, PasswordGenerationRequest, PasswordGenerationResponse,
};
use crate::core::{Config, PolicyError};
use crate::generators;
use crate::models::{CharacterClass, PasswordPolicy};

/// Generate a password
///
/// Generates a password from the requested character classes. Omitted fields
/// fall back to the server's configured defaults.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let policy = build_policy(&config, &generation_req);

    // Validate options
    if policy.length > config.max_password_length {
        warn!("Rejected generation request: length {} > {}", policy.length, config.max_password_length);
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(format!(
            "Password length must be at most {} characters",
            config.max_password_length
        )));
    }

    if policy.classes.is_empty() {
        warn!("Rejected generation request: no character classes");
        return HttpResponse::BadRequest()
            .json(PasswordGenerationResponse::failure(PolicyError::NoClassesEnabled.to_string()));
    }

    let password = generators::generate(&policy);
    let strength = generators::classify(&password);
    debug!("Generated password: length={}, classes={:?}, strength={}", policy.length, policy.classes, strength);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        error: None,
    })
}

fn build_policy(config: &Config, req: &PasswordGenerationRequest) -> PasswordPolicy {
    let defaults = config.default_policy();
    let wanted = [
        (CharacterClass::Uppercase, req.include_uppercase),
        (CharacterClass::Lowercase, req.include_lowercase),
        (CharacterClass::Digit, req.include_numbers),
        (CharacterClass::Special, req.include_symbols),
    ];

    let classes = wanted
        .into_iter()
        .filter(|(class, include)| include.unwrap_or_else(|| defaults.is_enabled(*class)))
        .map(|(class, _)| class);

    PasswordPolicy::new(classes, req.length.unwrap_or(defaults.length))
}

/// Analyze password strength
///
/// Classifies a password and explains which checks it fails.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze (URL-encoded)")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    // The path extractor has already percent-decoded the segment
    let password = path.into_inner();

    let report = generators::assess(&password);
    debug!("Analyzed password: length={}, satisfied={}, strength={}", report.length, report.satisfied, report.label);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: report.label,
        satisfied: report.satisfied,
        feedback: report.feedback(),
        error: None,
    })
}
