//! Quiz question page

use iocraft::prelude::*;

const SAMPLE_ANSWERS: [&str; 3] = [
    "A. Ownership",
    "B. Garbage collection",
    "C. Reference counting only",
];

#[component]
pub fn QuestionPage(_hooks: Hooks) -> impl Into<AnyElement<'static>> {
    element! {
        View(
            key: "question-page",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding: 2,
        ) {
            Text(content: "Question 1", weight: Weight::Bold, color: Color::Cyan)
            View(height: 1)
            Text(content: "How does Rust manage memory without a garbage collector?")
            View(margin_top: 1, flex_direction: FlexDirection::Column) {
                #(SAMPLE_ANSWERS.iter().map(|answer| element! {
                    Text(key: *answer, content: *answer, color: Color::White)
                }).collect::<Vec<_>>())
            }
        }
    }
}
