//! hideit 容器编解码
//!
//! 容器布局：
//!
//! ```text
//! offset 0..16   salt
//! offset 16..28  nonce
//! offset 28..EOF ciphertext ‖ tag(16)
//! ```
//!
//! 整个容器一次性在内存中处理，不分块。

use crate::crypto::{aead, kdf};
use crate::error::Result;
use crate::format::header::{HEADER_SIZE, Header};

/// 使用密码封装明文，返回完整容器
///
/// 每次调用都会生成新的 salt 与 nonce，
/// 因此相同输入两次封装的结果不同。
pub fn seal(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    let header = Header::generate();
    let key = kdf::derive_key(password.as_bytes(), &header.salt)?;

    let ciphertext = aead::encrypt(&key, &header.nonce, plaintext)?;

    let mut container = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    header.write(&mut container)?;
    container.extend_from_slice(&ciphertext);

    Ok(container)
}

/// 使用密码打开容器，返回明文
///
/// # 错误
/// - 长度不足 Header：MalformedContainer（不会进行密钥派生）
/// - 密码错误或任一字节被篡改：IncorrectPasswordOrCorrupted
pub fn open(container: &[u8], password: &str) -> Result<Vec<u8>> {
    let (header, ciphertext) = Header::parse(container)?;
    let key = kdf::derive_key(password.as_bytes(), &header.salt)?;

    aead::decrypt(&key, &header.nonce, ciphertext)
}
