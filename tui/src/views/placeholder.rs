use crossterm::event::KeyEvent;
use gimnasio_protocol::OverlayConfig;
use gimnasio_protocol::OverlayKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;

use super::OverlayView;
use super::ViewContext;

/// Shown for configs no view is registered for.
pub(crate) struct PlaceholderView {
    kind: OverlayKind,
}

impl PlaceholderView {
    pub(crate) fn new(kind: OverlayKind) -> Self {
        Self { kind }
    }
}

pub(crate) fn placeholder(config: &OverlayConfig, _ctx: &ViewContext) -> Box<dyn OverlayView> {
    Box::new(PlaceholderView::new(config.kind()))
}

impl OverlayView for PlaceholderView {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from("Este contenido no está disponible en esta versión."),
            Line::from(format!("({})", self.kind)).dim(),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn handle_key_event(&mut self, _key_event: KeyEvent) -> bool {
        false
    }
}
