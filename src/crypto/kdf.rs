//! hideit 密钥派生函数（KDF）模块
//!
//! 本模块负责将用户输入的密码，通过 scrypt 算法
//! 派生为 AES-256-GCM 使用的对称密钥。
//!
//! 设计目标：
//! - 抵抗暴力破解（内存困难，单次派生耗时数十毫秒以上）
//! - 每个容器使用独立的随机 salt
//! - 敏感密钥材料在离开作用域后自动清零
//!
//! 注意：参数是容器格式的一部分。
//! 修改任何一个常量都会导致旧容器无法解密。

use zeroize::Zeroizing;

use crate::error::{HideItError, Result};
use crate::format::header::SALT_SIZE;

/// 派生密钥长度（256-bit）
pub const KEY_LEN: usize = 32;

/// scrypt 成本因子 N = 2^14
pub const LOG_N: u8 = 14;

/// scrypt 块大小 r
pub const R: u32 = 8;

/// scrypt 并行度 p
pub const P: u32 = 1;

/// 根据密码和 salt 派生对称加密密钥
///
/// #### 参数
/// - `password`：用户输入的密码（UTF-8 字节）
/// - `salt`：容器头部中的 16 字节随机 salt
///
/// #### 返回
/// - 32 字节派生密钥（自动 zeroize）
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    scrypt_into(password, salt)
}

fn scrypt_into(password: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    // 固定参数下不会失败
    let params =
        scrypt::Params::new(LOG_N, R, P, KEY_LEN).map_err(|_| HideItError::Internal)?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(password, salt, &params, &mut key[..]).map_err(|_| HideItError::Internal)?;

    Ok(key)
}
