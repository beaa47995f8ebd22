//! 远程数值序列客户端模块
//!
//! 负责从远程 HTTP 源获取数值序列，包括端点配置、超时控制和响应解码。

pub mod error;
pub mod source;

// 重新导出常用的类型
pub use error::RemoteFetchError;
pub use source::RemoteSource;

use std::str::FromStr;

/// Read and parse a required environment variable.
///
/// Goes through dotenvy so a `.env` file next to the binary works the same
/// as the process environment.
pub fn parse_from_env<T>(key: &str) -> T
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Debug,
{
    let raw =
        dotenvy::var(key).unwrap_or_else(|_| panic!("environment variable {key} is not set"));
    raw.parse()
        .unwrap_or_else(|e| panic!("environment variable {key} is invalid: {e:?}"))
}
