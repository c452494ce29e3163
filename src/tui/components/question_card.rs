//! Question card component rendering one question as a radio group.
//!
//! A card is the numbered prompt, one radio line per option, and the
//! recommendation, followed by a blank separator line.

use crate::questionnaire::Question;

use super::text_wrap::wrap_with_prefix;

const OPTION_INDENT: &str = "        ";
const TIP_PREFIX: &str = "    Tip: ";
const TIP_INDENT: &str = "         ";

/// Context for rendering a question card.
#[derive(Debug, Clone, Copy)]
pub struct QuestionCardViewContext<'a> {
    /// 1-based position of the question on its tab.
    pub number: usize,
    /// The question to render.
    pub question: &'a Question,
    /// Option text currently recorded as the answer.
    pub selected: Option<&'a str>,
    /// Index of the option under the focus cursor, if this card has focus.
    pub focused_option: Option<usize>,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Lines produced for one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCard {
    /// Rendered lines, without trailing newlines.
    pub lines: Vec<String>,
    /// Line index of the focused option, when the card has focus.
    pub focus_line: Option<usize>,
}

/// Component rendering a question with its options.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionCardComponent;

impl QuestionCardComponent {
    /// Creates a question card component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the card described by `ctx`.
    #[must_use]
    pub fn view(&self, ctx: &QuestionCardViewContext<'_>) -> RenderedCard {
        let prompt_prefix = format!("{}. ", ctx.number);
        let prompt_indent = " ".repeat(prompt_prefix.len());
        let mut lines = wrap_with_prefix(
            &ctx.question.text,
            &prompt_prefix,
            &prompt_indent,
            ctx.max_width,
        );
        let mut focus_line = None;

        for (index, option) in ctx.question.options.iter().enumerate() {
            let focused = ctx.focused_option == Some(index);
            if focused {
                focus_line = Some(lines.len());
            }
            let cursor = if focused { ">" } else { " " };
            let radio = if ctx.selected == Some(option.as_str()) {
                "(•)"
            } else {
                "( )"
            };
            let prefix = format!("  {cursor} {radio} ");
            lines.extend(wrap_with_prefix(option, &prefix, OPTION_INDENT, ctx.max_width));
        }

        if !ctx.question.recommendation.is_empty() {
            lines.extend(wrap_with_prefix(
                &ctx.question.recommendation,
                TIP_PREFIX,
                TIP_INDENT,
                ctx.max_width,
            ));
        }
        lines.push(String::new());

        RenderedCard { lines, focus_line }
    }
}
