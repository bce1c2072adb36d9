use actix_web::{HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_VALIDATION_FAILED, ERR_INTERNAL, ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    /// Validation failure carrying every problem found in the request.
    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        }
    }

    /// Store or other server-side failure. `detail` is logged, never returned to the client.
    pub fn internal(detail: impl fmt::Display) -> Self {
        error!("Internal error: {}", detail);
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: ERR_INTERNAL.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest { code, message } => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    success: false,
                    code: code.clone(),
                    message: message.clone(),
                    errors: None,
                })
            }
            ApiError::NotFound { code, message } => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                code: code.clone(),
                message: message.clone(),
                errors: None,
            }),
            ApiError::InternalServerError { code, message } => HttpResponse::InternalServerError()
                .json(ErrorResponse {
                    success: false,
                    code: code.clone(),
                    message: message.clone(),
                    errors: None,
                }),
            ApiError::ValidationError { code, errors } => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    success: false,
                    code: code.clone(),
                    message: ERR_VALIDATION_FAILED.to_string(),
                    errors: Some(errors.clone()),
                })
            }
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::internal(err)
    }
}
