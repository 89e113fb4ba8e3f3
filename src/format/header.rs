//! hideit 容器 Header 实现
//!
//! Header 是容器最前面的固定 28 字节：
//!
//! 16 (salt)
//! 12 (nonce)
//!
//! 没有 magic，也没有版本号。布局本身就是兼容性约定，
//! 解密时只能依靠 AEAD 标签来判断密码与数据是否正确。

use std::io::Write;

use rand::{RngCore, rngs::OsRng};

use crate::error::{HideItError, Result};

/// KDF 使用的 salt 长度（字节）
pub const SALT_SIZE: usize = 16;

/// AES-256-GCM nonce 长度（96 bit）
pub const NONCE_SIZE: usize = 12;

/// Header 固定大小
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub salt: [u8; SALT_SIZE],
    pub nonce: [u8; NONCE_SIZE],
}

impl Header {
    /// 生成全新的 salt 与 nonce
    ///
    /// 每次加密都必须调用，严禁复用。
    pub fn generate() -> Self {
        let mut salt = [0u8; SALT_SIZE];
        OsRng.fill_bytes(&mut salt);

        let mut nonce = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);

        Self { salt, nonce }
    }

    pub fn write<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(&self.salt)?;
        writer.write_all(&self.nonce)?;
        Ok(())
    }

    /// 从容器字节中解析 Header，返回 Header 与其后的 `ciphertext ‖ tag`
    pub fn parse(container: &[u8]) -> Result<(Self, &[u8])> {
        if container.len() < HEADER_SIZE {
            return Err(HideItError::MalformedContainer {
                len: container.len(),
            });
        }

        let (salt_bytes, rest) = container.split_at(SALT_SIZE);
        let (nonce_bytes, body) = rest.split_at(NONCE_SIZE);

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(salt_bytes);
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);

        Ok((Self { salt, nonce }, body))
    }
}
