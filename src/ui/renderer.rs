use crate::state::{FocusState, FocusTarget};
use crate::ui::span::{Span, SpanLine, clip_line, line_width};
use crate::ui::style::{Color, Style};
use crate::ui::view::{OutcomeView, RenderView};

const MASK: char = '•';
const HINT: &str = "Tab: next  Space: toggle  Enter: submit  Esc: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub col: u16,
    pub row: u16,
}

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer {
    title: String,
}

impl Renderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Lays the form out for a terminal `width` columns wide. Every frame
    /// line fits on one terminal row.
    pub fn render(&self, view: &RenderView, focus: &FocusState, width: u16) -> RenderFrame {
        let width = usize::from(width.max(1));
        let mut frame = RenderFrame::default();
        let error_style = Style::new().color(Color::Red);

        frame.lines.push(vec![Span::styled(
            self.title.as_str(),
            Style::new().color(Color::Cyan).bold(),
        )]);

        if !view.password_error.is_empty() {
            frame
                .lines
                .push(vec![Span::styled(view.password_error.as_str(), error_style)]);
        }
        let mut password_line = label_spans("Password", focus.is_focused(FocusTarget::Password));
        let label_width = line_width(&password_line);
        // Long passwords scroll: only the tail that fits before the cursor is shown.
        let room = width.saturating_sub(label_width + 1);
        let shown = view.password.chars().count().min(room);
        if view.password.is_empty() {
            password_line.push(Span::styled(
                "Type Password",
                Style::new().color(Color::DarkGrey),
            ));
        } else {
            password_line.push(Span::new(mask(shown)));
        }
        if focus.is_focused(FocusTarget::Password) {
            let col = (label_width + shown).min(width - 1);
            frame.cursor = Some(CursorPos {
                col: u16::try_from(col).unwrap_or(u16::MAX),
                row: u16::try_from(frame.lines.len()).unwrap_or(u16::MAX),
            });
        }
        frame.lines.push(password_line);

        if !view.accept_error.is_empty() {
            frame
                .lines
                .push(vec![Span::styled(view.accept_error.as_str(), error_style)]);
        }
        let mut accept_line = label_spans("Accept Terms", focus.is_focused(FocusTarget::Accept));
        accept_line.push(if view.accept {
            Span::styled("[✓]", Style::new().color(Color::Green))
        } else {
            Span::new("[ ]")
        });
        frame.lines.push(accept_line);

        let submit_style = if view.submit_enabled {
            Style::new().color(Color::Green).bold()
        } else {
            Style::new().color(Color::DarkGrey)
        };
        frame.lines.push(vec![
            focus_marker(focus.is_focused(FocusTarget::Submit)),
            Span::styled("[ Submit ]", submit_style),
        ]);

        let outcome = match &view.outcome {
            Some(OutcomeView::Success(payload)) => {
                Some((payload.as_str(), Style::new().color(Color::Green)))
            }
            Some(OutcomeView::Failure(details)) => Some((details.as_str(), error_style)),
            None => None,
        };
        if let Some((text, style)) = outcome {
            // Response bodies may span several lines; raw mode needs one row per line.
            frame.lines.extend(
                text.lines()
                    .map(|line| vec![Span::styled(printable(line), style)]),
            );
        }

        frame.lines.push(vec![Span::styled(
            HINT,
            Style::new().color(Color::DarkGrey),
        )]);

        frame.lines = frame
            .lines
            .into_iter()
            .map(|line| clip_line(line, width))
            .collect();
        frame
    }
}

fn focus_marker(focused: bool) -> Span {
    if focused {
        Span::styled("› ", Style::new().color(Color::Yellow))
    } else {
        Span::new("  ")
    }
}

fn label_spans(label: &str, focused: bool) -> SpanLine {
    vec![
        focus_marker(focused),
        Span::styled(format!("{label}: "), Style::new().bold()),
    ]
}

fn printable(line: &str) -> String {
    line.replace('\t', "    ")
        .chars()
        .filter(|ch| !ch.is_control())
        .collect()
}

fn mask(count: usize) -> String {
    std::iter::repeat_n(MASK, count).collect()
}

#[cfg(test)]
mod tests {
    use super::{CursorPos, Renderer};
    use crate::state::FocusState;
    use crate::ui::span::{line_text, line_width};
    use crate::ui::view::{OutcomeView, RenderView};

    fn view() -> RenderView {
        RenderView {
            password: "abc1@".to_string(),
            password_error: "too short".to_string(),
            accept: false,
            accept_error: String::new(),
            submit_enabled: false,
            outcome: Some(OutcomeView::Failure("HTTP 500".to_string())),
        }
    }

    #[test]
    fn masks_password_and_shows_errors_above_fields() {
        let frame = Renderer::new("Form").render(&view(), &FocusState::default(), 80);
        let text: Vec<String> = frame.lines.iter().map(line_text).collect();

        assert_eq!(text[0], "Form");
        assert_eq!(text[1], "too short");
        assert_eq!(text[2], "› Password: •••••");
        assert_eq!(text[3], "  Accept Terms: [ ]");
        assert_eq!(text[4], "  [ Submit ]");
        assert_eq!(text[5], "HTTP 500");
        assert!(!text.iter().any(|line| line.contains("abc1@")));
    }

    #[test]
    fn cursor_follows_typed_password() {
        let frame = Renderer::new("Form").render(&view(), &FocusState::default(), 80);
        assert_eq!(frame.cursor, Some(CursorPos { col: 17, row: 2 }));
    }

    #[test]
    fn no_cursor_when_password_unfocused() {
        let mut focus = FocusState::default();
        focus.next();
        let frame = Renderer::new("Form").render(&view(), &focus, 80);
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn multi_line_outcome_gets_one_row_per_line() {
        let mut view = view();
        view.outcome = Some(OutcomeView::Failure("HTTP 500: a\nb".to_string()));
        let frame = Renderer::new("Form").render(&view, &FocusState::default(), 80);
        let text: Vec<String> = frame.lines.iter().map(line_text).collect();

        assert_eq!(text[5], "HTTP 500: a");
        assert_eq!(text[6], "b");
        assert!(text.iter().all(|line| !line.contains('\n')));
        assert_eq!(text.len(), 8);
    }

    #[test]
    fn lines_are_clipped_to_width() {
        let mut view = view();
        view.outcome = Some(OutcomeView::Success("x".repeat(200)));
        let frame = Renderer::new("Form").render(&view, &FocusState::default(), 20);
        assert!(frame.lines.iter().all(|line| line_width(line) <= 20));
    }

    #[test]
    fn long_password_keeps_cursor_on_screen() {
        let mut view = view();
        view.password = "a1@".repeat(20);
        let frame = Renderer::new("Form").render(&view, &FocusState::default(), 20);
        let cursor = frame.cursor.expect("cursor");

        assert_eq!(cursor, CursorPos { col: 19, row: 2 });
        assert_eq!(line_width(&frame.lines[2]), 19);
    }
}
