pub mod key_material;

pub use key_material::{decode_secret_bytes, derive_address, KeyMaterial, SECRET_KEY_LEN};
