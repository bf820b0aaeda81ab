/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` and declare the variable prefix
/// they read from; a field `http_port` is read from `<PREFIX>HTTP_PORT`.
pub trait Config: Sized + serde::de::DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(Self::PREFIX).from_env()
    }

    /// Load from an explicit set of variables instead of the process environment.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::PREFIX).from_iter(vars)
    }
}
