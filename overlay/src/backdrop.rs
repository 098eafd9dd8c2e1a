use gimnasio_protocol::RenderStyle;
use tracing::debug;

use crate::depth::DepthTransform;
use crate::stack::OverlayStack;

/// Handle a click on the backdrop behind the overlay at `depth`.
///
/// Pops and returns `true` only when the overlay is the current top and its
/// render style closes on backdrop clicks. Fullscreen overlays and entries
/// below the top never close implicitly.
pub fn backdrop_click(stack: &OverlayStack, depth: usize, style: RenderStyle) -> bool {
    if !DepthTransform::is_interactive(depth) || !style.closes_on_backdrop() {
        return false;
    }
    if !stack.can_go_back() {
        return false;
    }
    debug!(%style, "backdrop click pops overlay");
    stack.pop();
    true
}
