//! Configuration resolution.
//!
//! Settings come from four layers, highest precedence first:
//!
//! 1. Command-line flags ([`ConfigOverrides`])
//! 2. Environment variables (first non-empty alias wins)
//! 3. The YAML config file (`~/.razorpay-mcp-server.yaml` unless `--config` is given)
//! 4. Built-in defaults
//!
//! The result is an immutable [`EffectiveConfig`] that is built once at
//! startup and passed explicitly to everything that needs it.
//!
//! ```
//! use std::collections::HashMap;
//! use razorpay_mcp_core::config::{ConfigOverrides, EffectiveConfig, TransportMode};
//!
//! let env: HashMap<String, String> =
//!     HashMap::from([("PORT".to_string(), "9090".to_string())]);
//! let config = EffectiveConfig::resolve(
//!     &ConfigOverrides::default(),
//!     &env,
//!     None,
//!     TransportMode::Http,
//! );
//! assert_eq!(config.address(), ":9090");
//! assert_eq!(config.endpoint_path(), "/mcp");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default HTTP listen address.
pub const DEFAULT_ADDRESS: &str = ":8080";

/// Default HTTP path serving MCP requests.
pub const DEFAULT_ENDPOINT_PATH: &str = "/mcp";

/// File name (without extension) of the config file in the home directory.
pub const CONFIG_FILE_STEM: &str = ".razorpay-mcp-server";

const CONFIG_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];

// Environment variable names. The first non-empty alias wins.
const ENV_KEY: &[&str] = &["RAZORPAY_KEY_ID", "RAZORPAY_API_KEY"];
const ENV_SECRET: &[&str] = &["RAZORPAY_KEY_SECRET", "RAZORPAY_API_SECRET"];
const ENV_LOG_FILE: &[&str] = &["LOG_FILE"];
const ENV_TOOLSETS: &[&str] = &["TOOLSETS"];
const ENV_READ_ONLY: &[&str] = &["READ_ONLY"];
const ENV_ADDRESS: &[&str] = &["ADDRESS"];
const ENV_ENDPOINT_PATH: &[&str] = &["ENDPOINT_PATH"];
const ENV_STATELESS: &[&str] = &["STATELESS"];
const ENV_PORT: &str = "PORT";

// ============================================================================
// Inputs
// ============================================================================

/// Which transport the process is about to run.
///
/// Only HTTP mode honours the platform `PORT` variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportMode {
    /// Streamable HTTP transport.
    Http,
    /// Standard input/output transport.
    Stdio,
}

impl TransportMode {
    /// Short name used in user agents and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Stdio => "stdio",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to environment variables.
///
/// Implemented for the real process environment and for `HashMap`s so the
/// resolver can be exercised without touching global state.
pub trait Environment {
    /// Returns the value of `name`, if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Values supplied explicitly on the command line.
///
/// `None` means "flag not given", which lets lower layers fill the value in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub key: Option<String>,
    pub secret: Option<String>,
    pub log_file: Option<PathBuf>,
    pub toolsets: Option<Vec<String>>,
    pub read_only: Option<bool>,
    pub address: Option<String>,
    pub endpoint_path: Option<String>,
    pub stateless: Option<bool>,
    /// Explicit config file path; replaces the home-directory lookup.
    pub config_file: Option<PathBuf>,
}

/// Toolsets as written in the config file: a YAML list or a comma string.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolsetList {
    List(Vec<String>),
    Csv(String),
}

impl ToolsetList {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::List(items) => items,
            Self::Csv(s) => vec![s],
        }
    }
}

/// Contents of the YAML config file. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub key: Option<String>,
    pub secret: Option<String>,
    pub log_file: Option<PathBuf>,
    pub toolsets: Option<ToolsetList>,
    pub read_only: Option<bool>,
    pub address: Option<String>,
    pub endpoint_path: Option<String>,
    pub stateless: Option<bool>,
}

impl FileConfig {
    /// Parse config file contents.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, yaml_serde::Error> {
        // An empty file is a valid, empty config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        yaml_serde::from_str(content)
    }
}

/// A config file that was found and parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub contents: FileConfig,
}

/// Locate and read the config file.
///
/// With an explicit path the file must exist and parse. Otherwise the home
/// directory is searched for `.razorpay-mcp-server.yaml` (then `.yml`); a
/// missing file yields `Ok(None)` and a malformed one is reported on stderr
/// and skipped.
pub fn read_config_file(explicit: Option<&Path>, home: Option<&Path>) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let contents = FileConfig::from_yaml(&content).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(Some(ConfigFile {
            path: path.to_path_buf(),
            contents,
        }));
    }

    let home = home.ok_or(Error::HomeDirUnavailable)?;
    for ext in CONFIG_FILE_EXTENSIONS {
        let path = home.join(format!("{CONFIG_FILE_STEM}.{ext}"));
        if !path.is_file() {
            continue;
        }
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Ignoring unreadable config file {}: {e}", path.display());
                return Ok(None);
            }
        };
        return match FileConfig::from_yaml(&content) {
            Ok(contents) => Ok(Some(ConfigFile { path, contents })),
            Err(e) => {
                eprintln!("Ignoring malformed config file {}: {e}", path.display());
                Ok(None)
            }
        };
    }
    Ok(None)
}

// ============================================================================
// EffectiveConfig
// ============================================================================

/// Fully resolved settings for one process invocation.
#[derive(Clone, PartialEq)]
pub struct EffectiveConfig {
    key: String,
    secret: String,
    log_file: Option<PathBuf>,
    address: String,
    endpoint_path: String,
    toolsets: Vec<String>,
    read_only: bool,
    stateless: bool,
}

impl EffectiveConfig {
    /// Resolve settings against the process environment and config file.
    pub fn load(overrides: &ConfigOverrides, mode: TransportMode) -> Result<Self> {
        let home = dirs::home_dir();
        let file = read_config_file(overrides.config_file.as_deref(), home.as_deref())?;
        if let Some(file) = &file {
            eprintln!("Using config file: {}", file.path.display());
        }
        Ok(Self::resolve(
            overrides,
            &ProcessEnv,
            file.as_ref().map(|f| &f.contents),
            mode,
        ))
    }

    /// Merge the layers: flag > environment > file > default.
    pub fn resolve(
        overrides: &ConfigOverrides,
        env: &impl Environment,
        file: Option<&FileConfig>,
        mode: TransportMode,
    ) -> Self {
        let file_value = |f: fn(&FileConfig) -> Option<String>| file.and_then(f);

        let key = overrides
            .key
            .clone()
            .or_else(|| env_value(env, ENV_KEY))
            .or_else(|| file_value(|f| f.key.clone()))
            .unwrap_or_default();

        let secret = overrides
            .secret
            .clone()
            .or_else(|| env_value(env, ENV_SECRET))
            .or_else(|| file_value(|f| f.secret.clone()))
            .unwrap_or_default();

        let log_file = overrides
            .log_file
            .clone()
            .or_else(|| env_value(env, ENV_LOG_FILE).map(PathBuf::from))
            .or_else(|| file.and_then(|f| f.log_file.clone()))
            .filter(|p| !p.as_os_str().is_empty());

        let toolsets = overrides
            .toolsets
            .clone()
            .or_else(|| env_value(env, ENV_TOOLSETS).map(|s| vec![s]))
            .or_else(|| file.and_then(|f| f.toolsets.clone()).map(ToolsetList::into_vec))
            .map(normalize_toolsets)
            .unwrap_or_default();

        let read_only = overrides
            .read_only
            .or_else(|| env_value(env, ENV_READ_ONLY).map(|v| parse_bool(&v)))
            .or_else(|| file.and_then(|f| f.read_only))
            .unwrap_or(false);

        let stateless = overrides
            .stateless
            .or_else(|| env_value(env, ENV_STATELESS).map(|v| parse_bool(&v)))
            .or_else(|| file.and_then(|f| f.stateless))
            .unwrap_or(false);

        let mut address = overrides
            .address
            .clone()
            .or_else(|| env_value(env, ENV_ADDRESS))
            .or_else(|| file_value(|f| f.address.clone()))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        // Hosting platforms hand out the port through PORT; it always wins.
        if mode == TransportMode::Http {
            if let Some(port) = env_value(env, &[ENV_PORT]) {
                address = format!(":{port}");
            }
        }

        let endpoint_path = overrides
            .endpoint_path
            .clone()
            .or_else(|| env_value(env, ENV_ENDPOINT_PATH))
            .or_else(|| file_value(|f| f.endpoint_path.clone()))
            .map(normalize_endpoint_path)
            .unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string());

        Self {
            key,
            secret,
            log_file,
            address,
            endpoint_path,
            toolsets,
            read_only,
            stateless,
        }
    }

    /// Razorpay API key id.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Razorpay API key secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Log file path; `None` logs to stderr.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// HTTP listen address, e.g. `:8080` or `127.0.0.1:3000`.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// HTTP path serving MCP requests. Always starts with `/`.
    pub fn endpoint_path(&self) -> &str {
        &self.endpoint_path
    }

    /// Enabled toolset names. Empty enables every toolset.
    pub fn toolsets(&self) -> &[String] {
        &self.toolsets
    }

    /// Whether mutating tools are hidden.
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the HTTP transport runs without session tracking.
    pub fn stateless(&self) -> bool {
        self.stateless
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self::resolve(
            &ConfigOverrides::default(),
            &HashMap::<String, String>::new(),
            None,
            TransportMode::Stdio,
        )
    }
}

impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveConfig")
            .field("key", &redact(&self.key))
            .field("secret", &redact(&self.secret))
            .field("log_file", &self.log_file)
            .field("address", &self.address)
            .field("endpoint_path", &self.endpoint_path)
            .field("toolsets", &self.toolsets)
            .field("read_only", &self.read_only)
            .field("stateless", &self.stateless)
            .finish()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn env_value(env: &impl Environment, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env.var(name))
        .find(|value| !value.is_empty())
}

/// Parse a boolean the way flag libraries conventionally do.
///
/// Unrecognized values read as `false`.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "t" | "T" | "TRUE" | "true" | "True")
}

/// Split comma-separated entries, trim, drop empties and duplicates.
pub fn normalize_toolsets(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in raw {
        for name in entry.split(',') {
            let name = name.trim();
            if !name.is_empty() && !out.iter().any(|n| n == name) {
                out.push(name.to_string());
            }
        }
    }
    out
}

fn normalize_endpoint_path(path: String) -> String {
    let path = path.trim();
    if path.is_empty() {
        DEFAULT_ENDPOINT_PATH.to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "<redacted>" }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve_http(
        overrides: &ConfigOverrides,
        env: &HashMap<String, String>,
        file: Option<&FileConfig>,
    ) -> EffectiveConfig {
        EffectiveConfig::resolve(overrides, env, file, TransportMode::Http)
    }

    // ------------------------------------------------------------------------
    // Defaults
    // ------------------------------------------------------------------------

    #[test]
    fn test_defaults() {
        let config = resolve_http(&ConfigOverrides::default(), &env(&[]), None);
        assert_eq!(config.key(), "");
        assert_eq!(config.secret(), "");
        assert_eq!(config.address(), ":8080");
        assert_eq!(config.endpoint_path(), "/mcp");
        assert!(config.toolsets().is_empty());
        assert!(config.log_file().is_none());
        assert!(!config.read_only());
        assert!(!config.stateless());
    }

    // ------------------------------------------------------------------------
    // Precedence
    // ------------------------------------------------------------------------

    #[test]
    fn test_flag_beats_env_and_file() {
        let overrides = ConfigOverrides {
            key: Some("rzp_flag".into()),
            ..Default::default()
        };
        let file = FileConfig {
            key: Some("rzp_file".into()),
            ..Default::default()
        };
        let config = resolve_http(&overrides, &env(&[("RAZORPAY_KEY_ID", "rzp_env")]), Some(&file));
        assert_eq!(config.key(), "rzp_flag");
    }

    #[test]
    fn test_env_beats_file() {
        let file = FileConfig {
            secret: Some("file-secret".into()),
            ..Default::default()
        };
        let config = resolve_http(
            &ConfigOverrides::default(),
            &env(&[("RAZORPAY_KEY_SECRET", "env-secret")]),
            Some(&file),
        );
        assert_eq!(config.secret(), "env-secret");
    }

    #[test]
    fn test_file_beats_default() {
        let file = FileConfig {
            endpoint_path: Some("/rpc".into()),
            read_only: Some(true),
            ..Default::default()
        };
        let config = resolve_http(&ConfigOverrides::default(), &env(&[]), Some(&file));
        assert_eq!(config.endpoint_path(), "/rpc");
        assert!(config.read_only());
    }

    #[test]
    fn test_env_alias_order() {
        let both = env(&[("RAZORPAY_KEY_ID", "first"), ("RAZORPAY_API_KEY", "second")]);
        assert_eq!(resolve_http(&ConfigOverrides::default(), &both, None).key(), "first");

        let fallback = env(&[("RAZORPAY_KEY_ID", ""), ("RAZORPAY_API_KEY", "second")]);
        assert_eq!(
            resolve_http(&ConfigOverrides::default(), &fallback, None).key(),
            "second"
        );

        let secret = env(&[("RAZORPAY_API_SECRET", "alt")]);
        assert_eq!(
            resolve_http(&ConfigOverrides::default(), &secret, None).secret(),
            "alt"
        );
    }

    #[test]
    fn test_bool_flag_absent_falls_through_to_env() {
        let config = resolve_http(
            &ConfigOverrides::default(),
            &env(&[("READ_ONLY", "true"), ("STATELESS", "1")]),
            None,
        );
        assert!(config.read_only());
        assert!(config.stateless());
    }

    #[test]
    fn test_log_file_from_env() {
        let config = resolve_http(
            &ConfigOverrides::default(),
            &env(&[("LOG_FILE", "/var/log/rzp.log")]),
            None,
        );
        assert_eq!(config.log_file(), Some(Path::new("/var/log/rzp.log")));
    }

    // ------------------------------------------------------------------------
    // Address and endpoint
    // ------------------------------------------------------------------------

    #[test]
    fn test_port_overrides_address_in_http_mode() {
        let config = resolve_http(&ConfigOverrides::default(), &env(&[("PORT", "9090")]), None);
        assert_eq!(config.address(), ":9090");
    }

    #[test]
    fn test_port_overrides_explicit_address_flag() {
        let overrides = ConfigOverrides {
            address: Some("127.0.0.1:3000".into()),
            ..Default::default()
        };
        let config = resolve_http(&overrides, &env(&[("PORT", "9090")]), None);
        assert_eq!(config.address(), ":9090");
    }

    #[test]
    fn test_port_ignored_in_stdio_mode() {
        let config = EffectiveConfig::resolve(
            &ConfigOverrides::default(),
            &env(&[("PORT", "9090")]),
            None,
            TransportMode::Stdio,
        );
        assert_eq!(config.address(), ":8080");
    }

    #[test]
    fn test_address_from_env() {
        let config = resolve_http(
            &ConfigOverrides::default(),
            &env(&[("ADDRESS", "0.0.0.0:7000")]),
            None,
        );
        assert_eq!(config.address(), "0.0.0.0:7000");
    }

    #[test]
    fn test_empty_address_flag_uses_default() {
        let overrides = ConfigOverrides {
            address: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(resolve_http(&overrides, &env(&[]), None).address(), ":8080");
    }

    #[test]
    fn test_endpoint_path_normalization() {
        let cases = [("mcp", "/mcp"), ("/api/mcp", "/api/mcp"), ("", "/mcp"), ("  rpc ", "/rpc")];
        for (input, expected) in cases {
            let overrides = ConfigOverrides {
                endpoint_path: Some(input.into()),
                ..Default::default()
            };
            assert_eq!(resolve_http(&overrides, &env(&[]), None).endpoint_path(), expected);
        }
    }

    // ------------------------------------------------------------------------
    // Toolsets
    // ------------------------------------------------------------------------

    #[test]
    fn test_toolsets_from_env_csv() {
        let config = resolve_http(
            &ConfigOverrides::default(),
            &env(&[("TOOLSETS", "payments, orders,,payments")]),
            None,
        );
        assert_eq!(config.toolsets(), ["payments", "orders"]);
    }

    #[test]
    fn test_toolsets_from_flag_values() {
        let overrides = ConfigOverrides {
            toolsets: Some(vec!["refunds".into(), "orders,payouts".into()]),
            ..Default::default()
        };
        let config = resolve_http(&overrides, &env(&[("TOOLSETS", "payments")]), None);
        assert_eq!(config.toolsets(), ["refunds", "orders", "payouts"]);
    }

    #[test]
    fn test_toolsets_from_file_list_and_string() {
        let list = FileConfig::from_yaml("toolsets:\n  - payments\n  - qr_codes\n").unwrap();
        let config = resolve_http(&ConfigOverrides::default(), &env(&[]), Some(&list));
        assert_eq!(config.toolsets(), ["payments", "qr_codes"]);

        let csv = FileConfig::from_yaml("toolsets: payments,settlements\n").unwrap();
        let config = resolve_http(&ConfigOverrides::default(), &env(&[]), Some(&csv));
        assert_eq!(config.toolsets(), ["payments", "settlements"]);
    }

    #[test]
    fn test_parse_bool() {
        for v in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool(v), "{v} should be true");
        }
        for v in ["0", "f", "false", "no", "yes", ""] {
            assert!(!parse_bool(v), "{v} should be false");
        }
    }

    // ------------------------------------------------------------------------
    // Config file
    // ------------------------------------------------------------------------

    #[test]
    fn test_read_explicit_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "key: rzp_test_abc\nstateless: true\n").unwrap();

        let file = read_config_file(Some(&path), None).unwrap().unwrap();
        assert_eq!(file.path, path);
        assert_eq!(file.contents.key.as_deref(), Some("rzp_test_abc"));
        assert_eq!(file.contents.stateless, Some(true));
    }

    #[test]
    fn test_read_explicit_config_file_missing() {
        let result = read_config_file(Some(Path::new("/nonexistent/rzp.yaml")), None);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_explicit_config_file_malformed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "key: [unterminated\n").unwrap();

        let result = read_config_file(Some(&path), None);
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_home_config_file_found() {
        let home = tempfile::TempDir::new().unwrap();
        std::fs::write(
            home.path().join(".razorpay-mcp-server.yaml"),
            "address: \":9000\"\n",
        )
        .unwrap();

        let file = read_config_file(None, Some(home.path())).unwrap().unwrap();
        assert_eq!(file.contents.address.as_deref(), Some(":9000"));
    }

    #[test]
    fn test_home_config_file_yml_extension() {
        let home = tempfile::TempDir::new().unwrap();
        std::fs::write(home.path().join(".razorpay-mcp-server.yml"), "read_only: true\n").unwrap();

        let file = read_config_file(None, Some(home.path())).unwrap().unwrap();
        assert_eq!(file.contents.read_only, Some(true));
    }

    #[test]
    fn test_home_config_file_absent() {
        let home = tempfile::TempDir::new().unwrap();
        assert!(read_config_file(None, Some(home.path())).unwrap().is_none());
    }

    #[test]
    fn test_home_config_file_malformed_is_skipped() {
        let home = tempfile::TempDir::new().unwrap();
        std::fs::write(home.path().join(".razorpay-mcp-server.yaml"), "{{nope").unwrap();
        assert!(read_config_file(None, Some(home.path())).unwrap().is_none());
    }

    #[test]
    fn test_home_dir_unavailable() {
        let result = read_config_file(None, None);
        assert!(matches!(result, Err(Error::HomeDirUnavailable)));
    }

    #[test]
    fn test_empty_config_file_is_default() {
        assert_eq!(FileConfig::from_yaml("  \n").unwrap(), FileConfig::default());
    }

    // ------------------------------------------------------------------------
    // Debug redaction
    // ------------------------------------------------------------------------

    #[test]
    fn test_debug_redacts_credentials() {
        let overrides = ConfigOverrides {
            key: Some("rzp_live_visible".into()),
            secret: Some("super-secret".into()),
            ..Default::default()
        };
        let config = resolve_http(&overrides, &env(&[]), None);
        let debug = format!("{config:?}");
        assert!(!debug.contains("rzp_live_visible"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    // ------------------------------------------------------------------------
    // Precedence property
    // ------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_key_precedence(
            flag in proptest::option::of("[a-z0-9_]{1,12}"),
            env_val in proptest::option::of("[a-z0-9_]{1,12}"),
            file_val in proptest::option::of("[a-z0-9_]{1,12}"),
        ) {
            let overrides = ConfigOverrides { key: flag.clone(), ..Default::default() };
            let environment = match &env_val {
                Some(v) => env(&[("RAZORPAY_KEY_ID", v.as_str())]),
                None => env(&[]),
            };
            let file = FileConfig { key: file_val.clone(), ..Default::default() };

            let config = resolve_http(&overrides, &environment, Some(&file));
            let expected = flag.or(env_val).or(file_val).unwrap_or_default();
            prop_assert_eq!(config.key(), expected.as_str());
        }

        #[test]
        fn prop_address_precedence(
            flag in proptest::option::of("[0-9]{1,5}"),
            env_val in proptest::option::of("[0-9]{1,5}"),
            file_val in proptest::option::of("[0-9]{1,5}"),
        ) {
            let overrides = ConfigOverrides {
                address: flag.as_ref().map(|p| format!(":{p}")),
                ..Default::default()
            };
            let environment = match &env_val {
                Some(v) => env(&[("ADDRESS", format!(":{v}").as_str())]),
                None => env(&[]),
            };
            let file = FileConfig {
                address: file_val.as_ref().map(|p| format!(":{p}")),
                ..Default::default()
            };

            let config = resolve_http(&overrides, &environment, Some(&file));
            let expected = flag
                .or(env_val)
                .or(file_val)
                .map(|p| format!(":{p}"))
                .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
            prop_assert_eq!(config.address(), expected.as_str());
        }
    }
}
