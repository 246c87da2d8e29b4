pub mod config;

use actix_web::{
    get,
    http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType},
    web, HttpRequest, HttpResponse, Responder,
};
use log::{debug, info, warn};
use riskscore_model::{
    assess, Assessment, AssessmentError, ConditionFlags, Field, Gender, ProfileInput,
};
use riskscore_report::{render_page, render_summary, REPORT_CONTENT_TYPE, REPORT_FILE_NAME};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

/// Query string submitted by the form. Empty values are the "Select..." placeholder.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct FormQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    age: Option<u8>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    gender: Option<Gender>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    height_feet: Option<u8>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    height_inches: Option<u8>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    weight_lbs: Option<u16>,
    #[serde(default)]
    hypertension: bool,
    #[serde(default)]
    diabetes: bool,
    #[serde(default)]
    smoker: bool,
}

impl FormQuery {
    pub fn into_parts(self) -> (ProfileInput, ConditionFlags) {
        (
            ProfileInput {
                age: self.age,
                gender: self.gender,
                height_feet: self.height_feet,
                height_inches: self.height_inches,
                weight_lbs: self.weight_lbs,
            },
            ConditionFlags {
                has_hypertension: self.hypertension,
                has_diabetes: self.diabetes,
                is_smoker: self.smoker,
            },
        )
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    missing: Vec<Field>,
}

fn evaluate(
    input: &ProfileInput,
    conditions: ConditionFlags,
) -> Result<Assessment, AssessmentError> {
    let outcome = assess(input, conditions);
    match &outcome {
        Ok(assessment) => info!(
            "Computed BMI {} ({})",
            assessment.bmi().value(),
            assessment.bmi().category()
        ),
        Err(AssessmentError::IncompleteInput { missing }) => {
            debug!("Awaiting input, missing fields: {:?}", missing)
        }
        Err(e) => warn!("Failed to assess input {:?}: {}", input, e),
    }
    outcome
}

#[get("/")]
async fn index(req: HttpRequest, query: web::Query<FormQuery>) -> impl Responder {
    let (input, conditions) = query.into_inner().into_parts();
    let outcome = evaluate(&input, conditions);
    let report_href = format!("/report?{}", req.query_string());

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(&input, &conditions, &outcome, &report_href))
}

#[get("/report")]
async fn report(query: web::Query<FormQuery>) -> impl Responder {
    let (input, conditions) = query.into_inner().into_parts();
    match evaluate(&input, conditions) {
        Ok(assessment) => HttpResponse::Ok()
            .content_type(REPORT_CONTENT_TYPE)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(REPORT_FILE_NAME.to_owned())],
            })
            .body(render_summary(&assessment)),
        Err(e) => HttpResponse::BadRequest()
            .content_type(REPORT_CONTENT_TYPE)
            .body(e.to_string()),
    }
}

#[get("/api/assessment")]
async fn assessment_json(query: web::Query<FormQuery>) -> impl Responder {
    let (input, conditions) = query.into_inner().into_parts();
    match evaluate(&input, conditions) {
        Ok(assessment) => HttpResponse::Ok().json(assessment),
        Err(e) => {
            let missing = match &e {
                AssessmentError::IncompleteInput { missing } => missing.clone(),
                AssessmentError::InvalidHeight { .. } => Vec::new(),
            };
            HttpResponse::UnprocessableEntity().json(ErrorBody {
                error: e.to_string(),
                missing,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(report)
        .service(assessment_json);
}
