use gimnasio_protocol::ActorSummary;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GimnasioConfig {
    pub overlays: OverlaysConfig,
    /// Learner shown in every content view.
    pub actor: ActorSummary,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaysConfig {
    /// Key that pops the top overlay, e.g. `esc` or `ctrl-w`.
    pub cancel_key: String,

    /// Also draw the one or two overlays under the top, receded.
    pub render_receded: bool,
}

impl Default for OverlaysConfig {
    fn default() -> Self {
        Self {
            cancel_key: "esc".to_string(),
            render_receded: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Capture mouse events (backdrop clicks, wheel scrolling).
    pub mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}
