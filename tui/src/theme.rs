use gimnasio_overlay::DepthTransform;
use gimnasio_protocol::GradientTheme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Border and title color for panels themed with `gradient`.
pub(crate) fn accent(gradient: GradientTheme) -> Color {
    let (_, (r, g, b)) = gradient.stops();
    Color::Rgb(lighten(r), lighten(g), lighten(b))
}

fn lighten(channel: u8) -> u8 {
    channel.saturating_add((u8::MAX - channel) / 2)
}

fn mix(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}

/// Paint a vertical two-stop gradient as the background of `area`.
pub(crate) fn fill_gradient(area: Rect, buf: &mut Buffer, gradient: GradientTheme) {
    let ((r0, g0, b0), (r1, g1, b1)) = gradient.stops();
    let span = area.height.saturating_sub(1).max(1);
    for (row, y) in (area.top()..area.bottom()).enumerate() {
        let t = row as f32 / f32::from(span);
        let bg = Color::Rgb(mix(r0, r1, t), mix(g0, g1, t), mix(b0, b1, t));
        for x in area.left()..area.right() {
            buf[(x, y)].set_bg(bg);
        }
    }
}

/// Dim everything already drawn in `area`.
pub(crate) fn dim_area(area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::new().add_modifier(Modifier::DIM));
}

/// Terminal rendition of a depth transform: anything darker than the top
/// is drawn dim.
pub(crate) fn depth_style(transform: &DepthTransform) -> Style {
    if transform.brightness < 1.0 {
        Style::new().add_modifier(Modifier::DIM)
    } else {
        Style::new()
    }
}
