use {
    crate::error::Error,
    config::{Config, ConfigBuilder, Environment, File, builder::DefaultState},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Reads `path` as TOML, then applies environment overrides.
///
/// Nested keys are addressed with a double underscore, e.g. `DATABASE__URL`
/// overrides `url` under `[database]`.
pub fn parse_config<P, D>(path: P) -> Result<D, Error>
where
    P: AsRef<Path>,
    D: DeserializeOwned,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }

    build(Config::builder().add_source(File::from(path)))
}

/// Same as [`parse_config`] but without a file; every key comes from the
/// environment or the target's `Default`.
pub fn parse_env<D>() -> Result<D, Error>
where
    D: DeserializeOwned,
{
    build(Config::builder())
}

fn build<D>(builder: ConfigBuilder<DefaultState>) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let env_override = Environment::default().separator("__").try_parsing(true);

    let config = builder.add_source(env_override).build()?;

    Ok(config.try_deserialize()?)
}
