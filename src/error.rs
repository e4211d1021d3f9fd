//! Pipeline error type.
//!
//! Every stage raises the kind it detects and the error propagates unchanged
//! to the caller; there is no local recovery and no partial result. The two
//! table lookups with fallback values (wind direction, wind intensity) are
//! soft defaults and never surface here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A top-level forecast entry was neither a record nor a sequence of
    /// records, or a record inside one failed to decode.
    #[error("unexpected forecast entry shape: {detail}")]
    Schema { detail: String },

    /// One or more required raw fields are absent. The table-level check
    /// reports every missing field at once.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// `hour` outside the fixed three-slot vocabulary. This is the one
    /// lookup without a fallback.
    #[error("unknown hour slot '{value}' (expected one of: manha, tarde, noite)")]
    UnknownHour { value: String },

    /// A sunrise/sunset string without a parseable hour prefix before `h`.
    #[error("cannot parse an hour from time string '{value}' (expected e.g. '06h38')")]
    TimeParse { value: String },

    /// The training partition came out empty, so no model can be fit.
    #[error("cannot fit: all {n} records share the held-out day '{day}'")]
    InsufficientData { day: String, n: usize },
}

impl PipelineError {
    /// Process exit code for the front-end: 2 = malformed input,
    /// 3 = not enough data to fit.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Schema { .. }
            | PipelineError::MissingFields { .. }
            | PipelineError::UnknownHour { .. }
            | PipelineError::TimeParse { .. } => 2,
            PipelineError::InsufficientData { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_all() {
        let err = PipelineError::MissingFields {
            fields: vec!["umi_min".to_string(), "sunset".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("umi_min"));
        assert!(msg.contains("sunset"));
    }

    #[test]
    fn exit_codes_distinguish_input_from_data_errors() {
        let schema = PipelineError::Schema {
            detail: "x".to_string(),
        };
        let thin = PipelineError::InsufficientData {
            day: "Sexta-Feira".to_string(),
            n: 3,
        };
        assert_eq!(schema.exit_code(), 2);
        assert_eq!(thin.exit_code(), 3);
    }
}
