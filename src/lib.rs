//! Async client core for the budget tracker REST API.
//!
//! [`session::ApiClient`] attaches the stored bearer token to every call and, when the backend
//! answers `401`, refreshes once and resubmits the request. The [`api`] module adds typed
//! category, transaction and budget endpoints on top, and [`view`] holds the state a front-end
//! renders for the transaction list, budget page and dashboard.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod ext;
pub mod form;
pub mod http;
pub mod model;
pub mod obs;
pub mod query;
pub mod session;
pub mod store;
pub mod view;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, Method};
	pub use rust_decimal::Decimal;
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Date, Duration, Month, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use rust_decimal;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
