//! Page components for the interactive application
//!
//! Each page is registered under the view key the route table uses for it.

pub mod login;
pub mod question;

use crate::interactive::integration::{PageRegistry, PageRenderer};
use iocraft::prelude::*;
use quiz_nav_core::quiz::{LOGIN_VIEW, QUESTION_VIEW};

pub use login::LoginPage;
pub use question::QuestionPage;

/// Renderers for every view the quiz routes refer to
pub fn quiz_pages() -> PageRegistry {
    let login: PageRenderer = Box::new(|| element!(LoginPage).into());
    let question: PageRenderer = Box::new(|| element!(QuestionPage).into());

    PageRegistry::new()
        .register(LOGIN_VIEW, login)
        .register(QUESTION_VIEW, question)
}
