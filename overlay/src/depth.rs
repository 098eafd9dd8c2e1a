/// Visual recession applied to an overlay sitting `depth` levels below the
/// top of the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthTransform {
    pub scale: f32,
    /// Blur radius in pixels.
    pub blur: u16,
    pub brightness: f32,
    pub z_index: i32,
    pub opacity: f32,
}

const TOP: DepthTransform = DepthTransform {
    scale: 1.0,
    blur: 0,
    brightness: 1.0,
    z_index: 50,
    opacity: 1.0,
};

const ONE_BELOW: DepthTransform = DepthTransform {
    scale: 0.95,
    blur: 5,
    brightness: 0.8,
    z_index: 40,
    opacity: 1.0,
};

const TWO_BELOW: DepthTransform = DepthTransform {
    scale: 0.9,
    blur: 10,
    brightness: 0.6,
    z_index: 30,
    opacity: 0.8,
};

// Three or more levels down: fully hidden.
const BURIED: DepthTransform = DepthTransform {
    scale: 0.85,
    blur: 15,
    brightness: 0.4,
    z_index: 20,
    opacity: 0.0,
};

pub fn depth_transform(depth: usize) -> DepthTransform {
    DepthTransform::for_depth(depth)
}

impl DepthTransform {
    pub const fn for_depth(depth: usize) -> Self {
        match depth {
            0 => TOP,
            1 => ONE_BELOW,
            2 => TWO_BELOW,
            _ => BURIED,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Only the top of the stack receives input.
    pub const fn is_interactive(depth: usize) -> bool {
        depth == 0
    }

    /// Size of an `extent` after applying `scale`, never below 1.
    pub fn scaled(&self, extent: u16) -> u16 {
        let scaled = (f32::from(extent) * self.scale).round() as u16;
        scaled.clamp(1, extent.max(1))
    }
}
