use crate::EncryptorError;
use ::config::{Config, Environment, File};
use cipher::PaddingMode;
use serde::{Deserialize, Serialize};

/// 加载顺序: 默认值, 配置文件(可选), 环境变量(`ENCRYPTOR__AES_PADDING=ecb`).
///
/// 不做全局缓存, 加载后显式传给各个encryptor.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct EncryptorConfig {
    pub aes_padding: PaddingMode,

    // 并行处理RSA分块
    pub rsa_parallel: bool,

    // 裸base64, 不含PEM首尾标记
    pub rsa_public_key: Option<String>,
    pub rsa_private_key: Option<String>,
}

impl EncryptorConfig {
    pub const ENV_PREFIX: &'static str = "ENCRYPTOR";

    pub fn load(file: Option<&str>) -> Result<Self, EncryptorError> {
        Self::load_with_prefix(file, Self::ENV_PREFIX)
    }

    pub fn load_with_prefix(file: Option<&str>, prefix: &str) -> Result<Self, EncryptorError> {
        Self::load_with_env(file, Self::environment(prefix))
    }

    /// `prefix__FIELD`形式的环境变量
    pub fn environment(prefix: &str) -> Environment {
        Environment::with_prefix(prefix)
            .try_parsing(true)
            .separator("__")
    }

    pub fn load_with_env(file: Option<&str>, env: Environment) -> Result<Self, EncryptorError> {
        let default_config = Config::try_from(&Self::default())?;

        let mut config = Config::builder().add_source(default_config);
        if let Some(f) = file {
            config = config.add_source(File::with_name(f).required(false));
        }
        config = config.add_source(env);

        let config: Self = config.build()?.try_deserialize()?;

        log::trace!(
            "aes_padding={:?}, rsa_parallel={}, public key: {}, private key: {}",
            config.aes_padding,
            config.rsa_parallel,
            config.rsa_public_key.is_some(),
            config.rsa_private_key.is_some()
        );

        Ok(config)
    }

    /// 加载失败时记录错误并使用默认配置
    pub fn load_or_default(file: Option<&str>) -> Self {
        crate::log_error(Self::load(file).map_err(anyhow::Error::from)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::EncryptorConfig;
    use crate::EncryptorError;
    use cipher::PaddingMode;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_tmp(name: &str, content: &[u8]) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("encryptor-{name}-{}.json", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    fn config_default() {
        let c = EncryptorConfig::load_with_prefix(None, "ENCRYPTOR_TEST_DEFAULT").unwrap();
        assert_eq!(c, EncryptorConfig::default());
        assert_eq!(c.aes_padding, PaddingMode::Pkcs7);
        assert!(!c.rsa_parallel);
    }

    #[test]
    fn config_file_and_env() {
        let path = write_tmp(
            "config",
            br#"{"aes_padding": "ecb", "rsa_parallel": false, "rsa_public_key": "AAAA"}"#,
        );

        let vars = [("ENCRYPTOR_TEST_FILE__RSA_PARALLEL", "true")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<::config::Map<_, _>>();
        let env = EncryptorConfig::environment("ENCRYPTOR_TEST_FILE").source(Some(vars));
        let c = EncryptorConfig::load_with_env(path.to_str(), env).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(c.aes_padding, PaddingMode::Ecb);
        assert!(c.rsa_parallel);
        assert_eq!(c.rsa_public_key.as_deref(), Some("AAAA"));
        assert_eq!(c.rsa_private_key, None);
    }

    #[test]
    fn config_missing_file() {
        let missing = Some("/nonexistent/encryptor");
        let c = EncryptorConfig::load_with_prefix(missing, "ENCRYPTOR_TEST_MISSING").unwrap();
        assert_eq!(c, EncryptorConfig::default());
    }

    #[test]
    fn config_bad_value() {
        let path = write_tmp("bad-config", br#"{"aes_padding": "cfb"}"#);
        let r = EncryptorConfig::load_with_prefix(path.to_str(), "ENCRYPTOR_TEST_BAD");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(r, Err(EncryptorError::Config(_))));

        let path = write_tmp("bad-config-default", br#"{"aes_padding": "cfb"}"#);
        assert_eq!(
            EncryptorConfig::load_or_default(path.to_str()),
            EncryptorConfig::default()
        );
        let _ = std::fs::remove_file(&path);
    }
}
