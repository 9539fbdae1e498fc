//! Reading configuration from environment variables.

use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Result};

/// Parse the env var `varname` if present. Returns an error if it
/// is present but can't be decoded or parsed.
pub fn opt_get_env<T: FromStr>(varname: &str) -> Result<Option<T>>
    where T::Err: Display
{
    match env::var(varname) {
        Ok(s) => {
            Ok(Some(s.parse().map_err(
                |e| anyhow!("could not parse {varname:?} env var with contents {s:?}: {e}"))?))
        },
        Err(e) => match e {
            env::VarError::NotPresent => Ok(None),
            env::VarError::NotUnicode(_) => bail!("could not decode {varname:?} env var: {e}")
        }
    }
}

/// Parse a truthy/falsy string the way shell users write it.
pub fn parse_bool_flag(s: &str) -> Option<bool> {
    match s {
        "0" | "" | "off" | "false" | "no" => Some(false),
        "1" | "on" | "true" | "yes" => Some(true),
        _ => None
    }
}

/// Missing env var means false.
pub fn get_env_bool(varname: &str) -> Result<bool> {
    match opt_get_env::<String>(varname)? {
        Some(s) => parse_bool_flag(&s).ok_or_else(
            || anyhow!("could not parse {varname:?} env var with contents {s:?} \
                        as a boolean")),
        None => Ok(false)
    }
}
