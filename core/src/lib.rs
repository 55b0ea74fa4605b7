//! Client core for the todo service.
//!
//! # Overview
//! Two layers:
//! - the Remote Client (`RemoteClient`), one HTTP round trip per list,
//!   get, create, update and delete call;
//! - the View Controller (`ViewController`), which owns the item list, the
//!   edit state and the loading flag, and reconciles local state after each
//!   confirmed mutation.
//!
//! # Design
//! - `TodoClient` is stateless and I/O-free: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `Transport` is the only I/O seam; `ReqwestTransport` is the default.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod http;
pub mod remote;
pub mod transport;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL};
pub use controller::{EditState, Outcome, Rejection, ViewController};
pub use error::TransportError;
pub use gate::{LoadingGate, LoadingGuard};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use remote::RemoteClient;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Item, NewItem};
pub use view::{Controls, ItemView, View};
