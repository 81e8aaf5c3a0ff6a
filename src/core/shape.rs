use serde_json::{Map, Value};

/// 欄位形狀：字串、物件，或兩者組成的陣列
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Absent,
    Scalar(&'a str),
    Object(&'a Map<String, Value>),
    List(&'a [Value]),
}

impl<'a> Shape<'a> {
    /// 數字、布林與 null 不代表實體，視為 `Absent`
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Shape::Scalar(s),
            Value::Object(map) => Shape::Object(map),
            Value::Array(items) => Shape::List(items),
            Value::Null | Value::Bool(_) | Value::Number(_) => Shape::Absent,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Absent => "absent",
            Shape::Scalar(_) => "string",
            Shape::Object(_) => "object",
            Shape::List(_) => "array",
        }
    }
}

/// JSON 陣列的元素，其他值回傳空
pub fn items(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        _ => &[],
    }
}

/// 診斷訊息用的 JSON 型別名稱
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
