//! Content views, one per overlay kind.
//!
//! A view only draws the inside of its shell and turns keys into
//! [`AppEvent`]s; it never touches the overlay stack directly.

mod actividad;
mod content;
mod perfil;
mod placeholder;
mod planificacion;
mod tienda;

use crossterm::event::KeyEvent;
use gimnasio_overlay::OverlayKind;
use gimnasio_overlay::OverlayRegistry;
use gimnasio_overlay::default_metadata;
use gimnasio_protocol::ActorSummary;
use gimnasio_protocol::OverlayConfig;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;

use crate::app_event_sender::AppEventSender;

pub(crate) use content::ContentView;
pub(crate) use content::ViewAction;
#[cfg(test)]
pub(crate) use placeholder::PlaceholderView;
#[cfg(test)]
pub(crate) use placeholder::placeholder;

pub(crate) trait OverlayView {
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Returns `true` when the key was consumed.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool;
}

/// Ambient data every view is built with.
#[derive(Clone, Debug)]
pub(crate) struct ViewContext {
    pub(crate) actor: ActorSummary,
    pub(crate) app_event_tx: AppEventSender,
}

/// One `name: value` line per parameter the config declares.
pub(crate) fn param_lines(config: &OverlayConfig) -> Vec<Line<'static>> {
    config
        .params()
        .into_iter()
        .map(|(name, value)| Line::from(vec![format!("{name}: ").dim(), value.to_string().bold()]))
        .collect()
}

pub(crate) type ViewFactory = fn(&OverlayConfig, &ViewContext) -> Box<dyn OverlayView>;

/// Every known kind mapped to its view with the default presentation.
pub(crate) fn registry() -> OverlayRegistry<ViewFactory> {
    let entries: [(OverlayKind, ViewFactory); 11] = [
        (OverlayKind::MiGrupo, perfil::mi_grupo),
        (OverlayKind::MisCursos, perfil::mis_cursos),
        (OverlayKind::MiProgreso, perfil::mi_progreso),
        (OverlayKind::Tienda, tienda::tienda),
        (OverlayKind::Animaciones, tienda::animaciones),
        (OverlayKind::PlanificacionesSector, planificacion::planificaciones_sector),
        (OverlayKind::Planificacion, planificacion::planificacion),
        (OverlayKind::Actividad, actividad::actividad),
        (OverlayKind::LaboratorioEcosistema, actividad::laboratorio_ecosistema),
        (OverlayKind::EjecutarActividad, actividad::ejecutar_actividad),
        (OverlayKind::Resultados, actividad::resultados),
    ];
    entries
        .into_iter()
        .fold(
            OverlayRegistry::builder(placeholder::placeholder as ViewFactory),
            |builder, (kind, factory)| builder.register(kind, factory, default_metadata(kind)),
        )
        .build()
}
