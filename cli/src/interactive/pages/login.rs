//! Sign-in page

use iocraft::prelude::*;

#[component]
pub fn LoginPage(_hooks: Hooks) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "login-page",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding: 2,
            align_items: AlignItems::Center,
        ) {
            Text(content: "Sign in", weight: Weight::Bold, color: Color::Cyan)
            View(height: 1)
            View(border_style: BorderStyle::Round, border_color: Color::Grey, width: 40) {
                Text(content: "Username: ", color: Color::White)
            }
            View(border_style: BorderStyle::Round, border_color: Color::Grey, width: 40) {
                Text(content: "Password: ", color: Color::White)
            }
            View(height: 1)
            Text(content: "Select QuestionPage to start the quiz", color: Color::Grey)
        }
    }
}
