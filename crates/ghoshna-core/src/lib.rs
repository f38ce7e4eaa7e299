//! Page logic for the Ghoshna web client: wire types, session storage,
//! validation and the three page controllers. Nothing here touches the DOM;
//! the browser bundle supplies the transport, the storage and the views.

pub mod announcements;
pub mod api;
pub mod busy;
pub mod config;
pub mod controllers;
pub mod error;
pub mod languages;
pub mod notice;
pub mod page;
pub mod session;
pub mod validation;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use error::{ApiError, PageError, ValidationError};
pub use notice::{Notice, NoticeKind};
pub use page::Page;
