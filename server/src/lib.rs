pub use context::{ControllerContext, HttpResponse};
pub use controller::Controller;
pub use errors::ServerError;
pub use result::{ActionResult, JsonNetResult, JsonRequestBehavior, ResultError};
pub use server::{serve, start, wrap_router};

pub mod context;
pub mod controller;
pub mod errors;
pub mod result;

mod handlers;
mod server;

pub type ServerResult<T> = Result<T, ServerError>;
