use crate::utils::error::Result;
use async_trait::async_trait;

/// 提供完整文件給解碼器；傳輸錯誤在解碼前就回報
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// 日誌用的來源描述
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: FeedSource + ?Sized> FeedSource for Box<T> {
    async fn fetch(&self) -> Result<Vec<u8>> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn max_depth(&self) -> usize;
    fn pretty(&self) -> bool;
    fn timeout_seconds(&self) -> u64;
}
