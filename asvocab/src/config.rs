#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub resolver: ResolverConfig,

	#[serde(default)]
	pub output: OutputConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ResolverConfig {
	#[serde(default)]
	/// what to do when a functional property receives an array with more than one value
	pub functional_arrays: FunctionalArrays,

	#[serde_inline_default(true)]
	/// resolve compacted (`as:Note`) and expanded (full activitystreams IRI) type tags too
	pub accept_prefixed_types: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// indent emitted json documents
	pub pretty: bool,

	#[serde(default)]
	/// attach an activitystreams @context to emitted documents
	pub context: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionalArrays {
	/// keep the first value and log a warning
	#[default]
	First,
	/// fail the whole deserialization
	Reject,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	use super::{Config, FunctionalArrays};

	#[test]
	fn empty_config_uses_defaults() {
		let cfg : Config = toml::from_str("").unwrap();
		assert_eq!(cfg.resolver.functional_arrays, FunctionalArrays::First);
		assert!(cfg.resolver.accept_prefixed_types);
		assert!(cfg.output.pretty);
		assert!(!cfg.output.context);
	}

	#[test]
	fn partial_config_keeps_other_defaults() {
		let cfg : Config = toml::from_str("[resolver]\nfunctional_arrays = \"reject\"\n").unwrap();
		assert_eq!(cfg.resolver.functional_arrays, FunctionalArrays::Reject);
		assert!(cfg.resolver.accept_prefixed_types);
		assert!(cfg.output.pretty);
	}

	#[test]
	fn missing_config_file_falls_back_to_defaults() {
		let path = std::path::PathBuf::from("/definitely/not/a/config.toml");
		let cfg = Config::load(Some(&path));
		assert_eq!(cfg.resolver.functional_arrays, FunctionalArrays::First);
	}
}
