use crossterm::event::KeyCode;
use gimnasio_overlay::KeyBinding;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

pub(crate) const fn plain(code: KeyCode) -> KeyBinding {
    KeyBinding::plain(code)
}

pub(crate) const fn ctrl(code: KeyCode) -> KeyBinding {
    KeyBinding::ctrl(code)
}

pub(crate) fn key_span(binding: KeyBinding) -> Span<'static> {
    match binding.code() {
        KeyCode::Up if binding.modifiers().is_empty() => "↑".into(),
        KeyCode::Down if binding.modifiers().is_empty() => "↓".into(),
        _ => binding.to_string().into(),
    }
}

/// One dim line of `(keys, description)` pairs, e.g. ` ↑/↓ to select   esc to close`.
pub(crate) fn key_hints_line(pairs: &[(&[KeyBinding], &str)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![" ".into()];
    for (i, (keys, desc)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push("   ".into());
        }
        for (j, key) in keys.iter().enumerate() {
            if j > 0 {
                spans.push("/".into());
            }
            spans.push(key_span(*key));
        }
        spans.push(" ".into());
        spans.push(Span::from(desc.to_string()));
    }
    Line::from(spans).dim()
}

pub(crate) fn render_key_hints(area: Rect, buf: &mut Buffer, pairs: &[(&[KeyBinding], &str)]) {
    Paragraph::new(key_hints_line(pairs)).render(area, buf);
}
