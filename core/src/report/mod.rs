//! Policy check of resolved references.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ScanError;
use crate::reference::Reference;
use crate::status::{Status, StatusMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub issue: Reference,
    pub status: Status,
}

/// One problem per reference occurrence whose status id is not allowed.
///
/// A reference without an entry in `statuses` is an error, not a skip.
pub fn collect_problems(
    references: &[Reference],
    statuses: &StatusMap,
    allowed: &HashSet<u32>,
) -> Result<Vec<Problem>, ScanError> {
    let mut problems = Vec::new();
    for reference in references {
        let status = statuses
            .get(&reference.key)
            .ok_or_else(|| ScanError::Consistency {
                key: reference.key.clone(),
            })?;
        if !allowed.contains(&status.id) {
            problems.push(Problem {
                issue: reference.clone(),
                status: status.clone(),
            });
        }
    }
    Ok(problems)
}
