//! Human-readable output formatting
//!
//! The trace contract: a successful pop reports the value, a rejected command
//! reports its single error line, and successful create/push report nothing.

use crate::engine::executor::{ExecutionResult, ResultData};

pub fn format_human(result: &ExecutionResult) -> String {
    match &result.data {
        ResultData::Created(_) => String::new(),
        ResultData::Pushed(_) => String::new(),
        ResultData::Popped(info) => format!("Value popped: {}", info.value),
        ResultData::Rejected(err) => err.to_string(),
    }
}
