//! Vagrant command dispatcher.
//!
//! operation -> params (typed + validated `Invocation`) -> dispatch (pre-flight,
//! spawn, capture) -> report (text response).

pub mod dispatch;
pub mod operation;
pub mod params;
pub mod report;
pub mod result;

pub use dispatch::Dispatcher;
pub use operation::Operation;
pub use params::Invocation;
pub use report::Report;
pub use result::{DispatchError, ExecutionResult};
