//! JSON output formatting

use crate::engine::executor::{ExecutionResult, ResultData};
use serde_json::{json, Value};

pub fn format_json(result: &ExecutionResult) -> String {
    let data: Value = match &result.data {
        ResultData::Created(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Pushed(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Popped(info) => serde_json::to_value(info).unwrap_or(json!(null)),
        ResultData::Rejected(err) => serde_json::to_value(err).unwrap_or(json!(null)),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
