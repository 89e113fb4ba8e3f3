//! hideit：用密码把文件或目录原地加密隐藏，并可还原。
//!
//! - 文件 `X` 加密为 `X.lock`，解密还原为 `X`
//! - 目录 `D` 先打包为 `D.tar`，再加密为 `D.tar.lock`
//!
//! 容器格式：`salt(16) ‖ nonce(12) ‖ ciphertext ‖ tag(16)`，
//! 密钥由 scrypt 派生，数据使用 AES-256-GCM 加密。

mod decrypt;
mod encrypt;
mod folder;

pub mod crypto;
pub mod error;
pub mod format;
pub mod fs;

pub use decrypt::decrypt_file;
pub use encrypt::encrypt_file;
pub use error::{HideItError, Result};
pub use folder::{decrypt_dir, encrypt_dir};
pub use format::container::{open, seal};
pub use fs::paths::is_dir_container;
