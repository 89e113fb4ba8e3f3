use hideit::HideItError;
use hideit::crypto::aead::TAG_SIZE;
use hideit::format::header::{HEADER_SIZE, NONCE_SIZE, SALT_SIZE};

#[test]
fn seal_open_roundtrip() {
    let plaintext = b"hideit test payload";

    let sealed = hideit::seal(plaintext, "test-password").expect("seal");
    assert_eq!(sealed.len(), HEADER_SIZE + plaintext.len() + TAG_SIZE);

    let opened = hideit::open(&sealed, "test-password").expect("open");
    assert_eq!(opened, plaintext);
}

#[test]
fn empty_plaintext_roundtrip() {
    let sealed = hideit::seal(b"", "test-password").expect("seal");
    assert_eq!(sealed.len(), HEADER_SIZE + TAG_SIZE);

    let opened = hideit::open(&sealed, "test-password").expect("open");
    assert!(opened.is_empty());
}

#[test]
fn sealing_twice_differs() {
    // 每次封装都使用新的 salt 和 nonce
    let a = hideit::seal(b"same input", "pw").expect("seal a");
    let b = hideit::seal(b"same input", "pw").expect("seal b");

    assert_ne!(a[..SALT_SIZE], b[..SALT_SIZE], "salt reused");
    assert_ne!(a[SALT_SIZE..HEADER_SIZE], b[SALT_SIZE..HEADER_SIZE], "nonce reused");
    assert_ne!(a, b);

    assert_eq!(hideit::open(&a, "pw").expect("open a"), b"same input");
    assert_eq!(hideit::open(&b, "pw").expect("open b"), b"same input");
}

#[test]
fn wrong_password_is_rejected() {
    let sealed = hideit::seal(b"secret", "correct-password").expect("seal");

    let result = hideit::open(&sealed, "wrong-password");
    assert!(matches!(
        result,
        Err(HideItError::IncorrectPasswordOrCorrupted)
    ));
}

#[test]
fn flipped_bit_in_any_body_byte_is_detected() {
    // 短明文：ciphertext + tag 共 TAG_SIZE + 4 字节，逐字节翻转
    let sealed = hideit::seal(b"tiny", "pw").expect("seal");
    assert_eq!(sealed.len(), HEADER_SIZE + 4 + TAG_SIZE);

    for offset in HEADER_SIZE..sealed.len() {
        let mut tampered = sealed.clone();
        tampered[offset] ^= 1u8 << (offset % 8);

        let result = hideit::open(&tampered, "pw");
        assert!(
            matches!(result, Err(HideItError::IncorrectPasswordOrCorrupted)),
            "bit flip at offset {offset} not detected"
        );
    }
}

#[test]
fn flipped_bit_in_salt_or_nonce_is_detected() {
    let sealed = hideit::seal(b"integrity matters", "pw").expect("seal");

    for offset in [0, SALT_SIZE - 1, SALT_SIZE, SALT_SIZE + NONCE_SIZE - 1] {
        let mut tampered = sealed.clone();
        tampered[offset] ^= 0x80;

        let result = hideit::open(&tampered, "pw");
        assert!(
            matches!(result, Err(HideItError::IncorrectPasswordOrCorrupted)),
            "bit flip at offset {offset} not detected"
        );
    }
}

#[test]
fn short_container_is_malformed() {
    for len in [0, 1, HEADER_SIZE - 1] {
        let bytes = vec![0u8; len];
        match hideit::open(&bytes, "pw") {
            Err(HideItError::MalformedContainer { len: got }) => assert_eq!(got, len),
            other => panic!("unexpected result for {len} bytes: {other:?}"),
        }
    }
}

#[test]
fn header_only_container_fails_authentication() {
    // 头部完整但缺少 tag，按认证失败处理
    let bytes = vec![0u8; HEADER_SIZE];
    assert!(matches!(
        hideit::open(&bytes, "pw"),
        Err(HideItError::IncorrectPasswordOrCorrupted)
    ));
}
