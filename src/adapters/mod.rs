// 轉接層：feed 文件的實際來源與輸出

pub mod file;
pub mod http;
pub mod storage;

pub use file::FileSource;
pub use http::HttpSource;
pub use storage::LocalStorage;

use crate::domain::ports::FeedSource;
use crate::utils::error::Result;
use crate::utils::validation::is_remote;
use std::collections::HashMap;
use std::time::Duration;

/// http(s) 位置用 HTTP 來源，其他一律當作檔案
pub fn source_for(
    location: &str,
    timeout: Duration,
    headers: HashMap<String, String>,
) -> Result<Box<dyn FeedSource>> {
    if is_remote(location) {
        Ok(Box::new(
            HttpSource::with_timeout(location, timeout)?.with_headers(headers),
        ))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_location() {
        let timeout = Duration::from_secs(5);
        let remote = source_for("https://example.com/opds", timeout, HashMap::new()).unwrap();
        assert_eq!(remote.describe(), "https://example.com/opds");

        let local = source_for("catalog/root.json", timeout, HashMap::new()).unwrap();
        assert_eq!(local.describe(), "catalog/root.json");
    }
}
