
use crate::{Error, Result};
use record_store::OpenMode;
use std::{env, net::SocketAddr, str::FromStr, sync::OnceLock, time::Duration};

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Config {
    pub ADDR: SocketAddr,
    pub USER_STORE: String,
    pub REQUEST_STORE: String,
    pub TIMER_PERIOD: Duration,
    pub STORE_OPEN_MODE: OpenMode,
}

impl Config {
    pub fn load_from_env() -> Result<Config> {
        let timer_secs: u64 = get_env_parse_or("SERVICE_TIMER_PERIOD_SECS", 30)?;
        if timer_secs == 0 {
            return Err(Error::ConfigWrongFormat("SERVICE_TIMER_PERIOD_SECS"));
        }

        // Each store name holds one record shape.
        let user_store = get_env_or("SERVICE_USER_STORE", "UserDatabase");
        let request_store = get_env_or("SERVICE_REQUEST_STORE", "RequestDatabase");
        if user_store == request_store {
            return Err(Error::ConfigWrongFormat("SERVICE_REQUEST_STORE"));
        }

        Ok(Config {
            ADDR: get_env_parse_or("SERVICE_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            USER_STORE: user_store,
            REQUEST_STORE: request_store,
            TIMER_PERIOD: Duration::from_secs(timer_secs),
            STORE_OPEN_MODE: get_open_mode("SERVICE_STORE_OPEN_MODE")?,
        })
    }
}

fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(val) => val.parse::<T>().map_err(|_| Error::ConfigWrongFormat(name)),
        Err(_) => Ok(default),
    }
}

fn get_open_mode(name: &'static str) -> Result<OpenMode> {
    match env::var(name).as_deref() {
        Err(_) | Ok("shared") => Ok(OpenMode::Shared),
        Ok("fresh") => Ok(OpenMode::Fresh),
        Ok(_) => Err(Error::ConfigWrongFormat(name)),
    }
}
