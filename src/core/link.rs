use crate::core::coerce;
use crate::core::decode::{self, Decoder};
use crate::core::shape::{self, Shape};
use crate::domain::{IndirectAcquisition, Link, Price, Properties};
use serde_json::Value;

impl Decoder {
    /// 解碼連結陣列；非物件元素變成空連結
    pub fn links(&self, value: &Value, depth: usize) -> Vec<Link> {
        shape::items(value)
            .iter()
            .filter_map(|item| self.link(item, depth))
            .collect()
    }

    /// 只有超過深度上限時回傳 `None`
    pub fn link(&self, value: &Value, depth: usize) -> Option<Link> {
        if !self.within_depth(depth, "link") {
            return None;
        }

        let mut link = Link::default();
        let Value::Object(fields) = value else {
            tracing::debug!("Link is a {}, not an object", shape::kind(value));
            return Some(link);
        };

        for (key, v) in fields {
            match key.as_str() {
                "href" => link.href = coerce::to_string(v),
                "type" => link.media_type = coerce::to_string(v),
                "rel" => link.rel = decode::one_or_many(v),
                "title" => link.title = coerce::to_string(v),
                "height" => link.height = coerce::to_u32(v),
                "width" => link.width = coerce::to_u32(v),
                "bitrate" => link.bitrate = coerce::to_u32(v),
                "duration" => link.duration = coerce::to_string(v),
                "templated" => link.templated = coerce::to_bool(v),
                "properties" => link.properties = self.properties(v, depth),
                "children" => link.children.extend(self.children(v, depth + 1)),
                _ => {}
            }
        }

        Some(link)
    }

    /// 單一子連結物件，或輸出時使用的陣列
    fn children(&self, value: &Value, depth: usize) -> Vec<Link> {
        match Shape::of(value) {
            Shape::Object(_) => self.link(value, depth).into_iter().collect(),
            Shape::List(items) => items
                .iter()
                .filter_map(|item| self.link(item, depth))
                .collect(),
            other => {
                tracing::debug!("Ignoring children given as {}", other.name());
                Vec::new()
            }
        }
    }

    pub fn properties(&self, value: &Value, depth: usize) -> Option<Properties> {
        let Value::Object(fields) = value else {
            tracing::debug!("Ignoring link properties given as {}", shape::kind(value));
            return None;
        };

        let mut properties = Properties::default();
        for (key, v) in fields {
            match key.as_str() {
                "numberOfItems" => properties.number_of_items = coerce::to_u64(v),
                "price" => properties.price = price(v),
                "indirectAcquisition" => {
                    properties.indirect_acquisition = self.acquisitions(v, depth + 1)
                }
                _ => {}
            }
        }
        Some(properties)
    }

    fn acquisitions(&self, value: &Value, depth: usize) -> Vec<IndirectAcquisition> {
        match Shape::of(value) {
            Shape::Object(_) => self.acquisition(value, depth).into_iter().collect(),
            Shape::List(items) => items
                .iter()
                .filter_map(|item| self.acquisition(item, depth))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn acquisition(&self, value: &Value, depth: usize) -> Option<IndirectAcquisition> {
        if !self.within_depth(depth, "indirect acquisition") {
            return None;
        }

        let mut acquisition = IndirectAcquisition::default();
        if let Value::Object(fields) = value {
            for (key, v) in fields {
                match key.as_str() {
                    "type" => acquisition.kind = coerce::to_string(v),
                    "child" => acquisition.child = self.acquisitions(v, depth + 1),
                    _ => {}
                }
            }
        }
        Some(acquisition)
    }
}

fn price(value: &Value) -> Option<Price> {
    let Value::Object(fields) = value else {
        return None;
    };

    let mut price = Price::default();
    for (key, v) in fields {
        match key.as_str() {
            "currency" => price.currency = coerce::to_string(v),
            "value" => price.value = coerce::to_f64(v),
            _ => {}
        }
    }
    Some(price)
}

/// 依序找第一個含有 `rel` 關係的連結
pub fn find_first_by_rel<'a>(links: &'a [Link], rel: &str) -> Option<&'a Link> {
    links.iter().find(|link| link.has_rel(rel))
}

/// 第一個媒體類型包含 `media_type` 的連結 (含 `;profile=...` 參數也算符合)
pub fn find_first_by_type<'a>(links: &'a [Link], media_type: &str) -> Option<&'a Link> {
    links
        .iter()
        .find(|link| link.media_type.contains(media_type))
}
