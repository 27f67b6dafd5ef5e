//! Remote error policy
//!
//! The one place that decides what a GraphQL `errors` array means for a
//! directory call. Collapsing is the long-standing behavior: a FORBIDDEN
//! field or an unknown login both read as "no data".

use scm_directory_domain::{DirectoryError, ErrorPolicy, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::graphql::GraphqlOutcome;

/// Reduce an outcome to the `data` tree, `None` meaning absent.
///
/// # Errors
/// Returns `DirectoryError::GraphQl` for an `Errors` outcome under
/// [`ErrorPolicy::Surface`].
pub fn resolve_outcome(outcome: GraphqlOutcome, policy: ErrorPolicy) -> Result<Option<Value>> {
    match outcome {
        GraphqlOutcome::Data(data) => Ok(Some(data)),
        GraphqlOutcome::NullData => {
            debug!("GraphQL response carried no data");
            Ok(None)
        }
        GraphqlOutcome::Errors { errors, .. } => {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            match policy {
                ErrorPolicy::Collapse => {
                    warn!(errors = %messages.join("; "), "GraphQL errors treated as absent data");
                    Ok(None)
                }
                ErrorPolicy::Surface => Err(DirectoryError::GraphQl(messages.join("; "))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::graphql::GraphqlError;

    fn forbidden() -> GraphqlOutcome {
        GraphqlOutcome::Errors {
            errors: vec![GraphqlError {
                message: "Resource not accessible".into(),
                kind: Some("FORBIDDEN".into()),
                path: vec![json!("user"), json!("enterprises")],
            }],
            data: Some(json!({"user": {"enterprises": null}})),
        }
    }

    #[test]
    fn data_passes_through_under_both_policies() {
        for policy in [ErrorPolicy::Collapse, ErrorPolicy::Surface] {
            let resolved = resolve_outcome(GraphqlOutcome::Data(json!({"a": 1})), policy);
            assert_eq!(resolved, Ok(Some(json!({"a": 1}))));
            assert_eq!(resolve_outcome(GraphqlOutcome::NullData, policy), Ok(None));
        }
    }

    #[test]
    fn collapse_discards_errors_and_partial_data() {
        assert_eq!(resolve_outcome(forbidden(), ErrorPolicy::Collapse), Ok(None));
    }

    #[test]
    fn surface_keeps_error_detail() {
        let err = resolve_outcome(forbidden(), ErrorPolicy::Surface).unwrap_err();

        match err {
            DirectoryError::GraphQl(msg) => {
                assert!(msg.contains("FORBIDDEN"));
                assert!(msg.contains("user.enterprises"));
            }
            other => panic!("expected GraphQl error, got {other:?}"),
        }
    }
}
