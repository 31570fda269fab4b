//! Route table of the quiz front-end

use crate::error::RouterResult;
use crate::history::HistoryStrategy;
use crate::route::RouteDefinition;
use crate::router::{create_router, Router};

/// Route name of the sign-in page
pub const LOGIN: &str = "Login";
/// Route name of the question page, served at `/`
pub const QUESTION_PAGE: &str = "QuestionPage";

pub const LOGIN_VIEW: &str = "LoginView";
pub const QUESTION_VIEW: &str = "QuestionView";

/// The application's routes in declaration order
pub fn quiz_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::new("/login", LOGIN, LOGIN_VIEW).with_description("Sign-in form"),
        RouteDefinition::new("/", QUESTION_PAGE, QUESTION_VIEW)
            .with_description("Quiz questions and answer submission"),
    ]
}

/// Router over [`quiz_routes`]
pub fn quiz_router(strategy: HistoryStrategy) -> RouterResult<Router> {
    create_router(quiz_routes(), strategy)
}
