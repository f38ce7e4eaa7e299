//! One controller per page. Each owns its page state and talks to the page
//! through a view trait implemented by the rendering layer.

pub mod auth;
pub mod dashboard;
pub mod translate;

pub use auth::{AuthController, AuthForm, AuthView};
pub use dashboard::{AnnouncementAudio, DashboardController, DashboardView};
pub use translate::{TranslateController, TranslateForm, TranslateView, TranslationDisplay};
