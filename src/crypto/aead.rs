//! hideit AEAD 加解密模块
//!
//! 基于 AES-256-GCM，不使用关联数据（AAD）。
//!
//! 安全约束：
//! - nonce 由调用方提供，且每个密钥只能使用一次
//! - 解密失败即表示：密码错误 或 数据被篡改
//! - 不允许在未校验通过的情况下输出任何明文

use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};

use crate::crypto::kdf::KEY_LEN;
use crate::error::{HideItError, Result};
use crate::format::header::NONCE_SIZE;

/// AES-GCM 认证标签长度
pub const TAG_SIZE: usize = 16;

/// 加密数据，返回 `ciphertext ‖ tag`
pub fn encrypt(
    key_bytes: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key_bytes));

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| HideItError::Internal)
}

/// 解密 `ciphertext ‖ tag`
///
/// # 错误
/// - 标签校验失败（包括长度不足一个标签）时返回 IncorrectPasswordOrCorrupted
pub fn decrypt(
    key_bytes: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key_bytes));

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| HideItError::IncorrectPasswordOrCorrupted)
}
