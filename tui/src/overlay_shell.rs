//! Frames drawn around content views: a centered modal over a dimmed
//! backdrop, a trailing sidebar, or the whole screen.

use gimnasio_overlay::DepthTransform;
use gimnasio_overlay::KeyBinding;
use gimnasio_overlay::OverlayMetadata;
use gimnasio_overlay::RenderStyle;
use gimnasio_overlay::depth_transform;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::key_hint;
use crate::theme;
use crate::views::OverlayView;

const MODAL_PERCENT: u16 = 60;
const SIDEBAR_PERCENT: u16 = 40;
const MODAL_MIN: (u16, u16) = (40, 12);
const SIDEBAR_MIN_WIDTH: u16 = 32;

/// What a shell needs besides the view itself.
pub(crate) struct ShellFrame<'a> {
    pub(crate) title: &'a str,
    pub(crate) metadata: OverlayMetadata,
    pub(crate) depth: usize,
    pub(crate) close_key: KeyBinding,
}

fn percent(extent: u16, pct: u16) -> u16 {
    (u32::from(extent) * u32::from(pct) / 100) as u16
}

/// Where the panel for `style` sits inside `area`.
pub(crate) fn panel_rect(style: RenderStyle, area: Rect) -> Rect {
    match style {
        RenderStyle::Modal => {
            let width = percent(area.width, MODAL_PERCENT).max(MODAL_MIN.0.min(area.width));
            let height = percent(area.height, MODAL_PERCENT).max(MODAL_MIN.1.min(area.height));
            Rect {
                x: area.x + (area.width - width) / 2,
                y: area.y + (area.height - height) / 2,
                width,
                height,
            }
        }
        RenderStyle::Sidebar => {
            let width =
                percent(area.width, SIDEBAR_PERCENT).max(SIDEBAR_MIN_WIDTH.min(area.width));
            Rect {
                x: area.right() - width,
                width,
                ..area
            }
        }
        RenderStyle::Fullscreen => area,
    }
}

/// `base` shrunk around its center by the transform's scale.
fn receded_rect(base: Rect, transform: &DepthTransform) -> Rect {
    let width = transform.scaled(base.width).min(base.width);
    let height = transform.scaled(base.height).min(base.height);
    Rect {
        x: base.x + (base.width - width) / 2,
        y: base.y + (base.height - height) / 2,
        width,
        height,
    }
}

/// True when (`column`, `row`) is inside `area` but outside the top panel of
/// a shell that closes on backdrop clicks.
pub(crate) fn is_backdrop_hit(style: RenderStyle, area: Rect, column: u16, row: u16) -> bool {
    let position = Position::new(column, row);
    style.closes_on_backdrop()
        && area.contains(position)
        && !panel_rect(style, area).contains(position)
}

/// Draw `view` inside the shell for `frame.metadata.style`.
pub(crate) fn render_shell(
    area: Rect,
    buf: &mut Buffer,
    frame: &ShellFrame<'_>,
    view: &dyn OverlayView,
) {
    let transform = depth_transform(frame.depth);
    if !transform.is_visible() || area.is_empty() {
        return;
    }
    let style = frame.metadata.style;
    let is_top = DepthTransform::is_interactive(frame.depth);

    if is_top && style.closes_on_backdrop() {
        theme::dim_area(area, buf);
    }

    let base = panel_rect(style, area);
    let panel = if is_top {
        base
    } else {
        receded_rect(base, &transform)
    };
    Clear.render(panel, buf);
    theme::fill_gradient(panel, buf, frame.metadata.gradient);

    let content = match style {
        RenderStyle::Fullscreen => render_fullscreen_chrome(panel, buf, frame, &transform),
        RenderStyle::Modal | RenderStyle::Sidebar => {
            render_panel_chrome(panel, buf, frame, &transform)
        }
    };
    view.render(content, buf);

    if !is_top {
        buf.set_style(panel, theme::depth_style(&transform));
    }
}

fn close_hint(close_key: KeyBinding) -> Vec<Span<'static>> {
    vec![key_hint::key_span(close_key), " / x close".into()]
}

fn render_panel_chrome(
    panel: Rect,
    buf: &mut Buffer,
    frame: &ShellFrame<'_>,
    transform: &DepthTransform,
) -> Rect {
    let mut block =
        Block::bordered().border_style(Style::new().fg(theme::accent(frame.metadata.gradient)));
    // Receded entries are blurred; their titles are not legible.
    if transform.blur == 0 {
        block = block
            .title(Line::from(format!(" {} ", frame.title)).bold())
            .title_bottom(
                Line::from(vec![
                    " ".into(),
                    key_hint::key_span(frame.close_key),
                    " to close ".into(),
                ])
                .dim(),
            );
    }
    let inner = block.inner(panel);
    block.render(panel, buf);
    Rect {
        x: inner.x.saturating_add(1).min(inner.right()),
        width: inner.width.saturating_sub(2),
        ..inner
    }
}

fn render_fullscreen_chrome(
    panel: Rect,
    buf: &mut Buffer,
    frame: &ShellFrame<'_>,
    transform: &DepthTransform,
) -> Rect {
    if panel.height < 2 {
        return Rect { height: 0, ..panel };
    }
    let header = Rect { height: 1, ..panel };
    if transform.blur == 0 {
        Paragraph::new(Line::from(format!(" {}", frame.title)).bold()).render(header, buf);
        let hint = Line::from(close_hint(frame.close_key));
        let hint_width = u16::try_from(hint.width())
            .unwrap_or(u16::MAX)
            .saturating_add(1);
        if hint_width < header.width {
            let hint_area = Rect {
                x: header.right() - hint_width,
                width: hint_width,
                ..header
            };
            Paragraph::new(hint.cyan()).render(hint_area, buf);
        }
    }
    Rect {
        x: panel.x.saturating_add(1).min(panel.right()),
        y: panel.y + panel.height.min(2),
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    }
}
