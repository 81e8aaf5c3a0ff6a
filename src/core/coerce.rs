//! 未定型 JSON 值轉基本型別
//!
//! 這些轉換都不會失敗：形狀不符時回傳零值，呼叫端欄位維持預設。

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

pub fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => parse_integer(s.trim()).unwrap_or(0),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

/// 同 [`to_i64`]，負數視為 0 (用於數量與尺寸)
pub fn to_u64(value: &Value) -> u64 {
    u64::try_from(to_i64(value)).unwrap_or(0)
}

pub fn to_u32(value: &Value) -> u32 {
    u32::try_from(to_u64(value)).unwrap_or(u32::MAX)
}

pub fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    }
}

pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.as_str(), "1" | "t" | "T" | "TRUE" | "true" | "True"),
        _ => false,
    }
}

pub fn to_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().map(to_string).collect(),
        _ => Vec::new(),
    }
}

/// 物件轉成字串對應表，其他型別回傳空表
pub fn to_string_map(value: &Value) -> BTreeMap<String, String> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), to_string(v))).collect(),
        _ => BTreeMap::new(),
    }
}

fn parse_integer(s: &str) -> Option<i64> {
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}
