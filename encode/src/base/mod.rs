mod base16;
pub use base16::Base16;

mod base64;
pub use self::base64::Base64;
