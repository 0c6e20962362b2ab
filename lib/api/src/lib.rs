//! # agromatch API
//!
//! The outer surface of agromatch: the JSON request/response envelope and
//! the mode dispatcher that stages inputs, invokes the matching core, and
//! publishes the output table.

pub mod dispatch;
pub mod request;
pub mod response;

pub use dispatch::{run, run_with_store};
pub use request::{Inputs, Outputs, Parameters, Request};
pub use response::{Metrics, Response, Status};
