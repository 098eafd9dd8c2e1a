use gimnasio_protocol::OverlayConfig;
use ratatui::style::Stylize;
use ratatui::text::Line;

use super::ContentView;
use super::OverlayView;
use super::ViewAction;
use super::ViewContext;
use crate::app_event::AppEvent;

const ARTICULOS: &[(&str, u64)] = &[
    ("Marco de avatar dorado", 300),
    ("Animación de festejo", 500),
    ("Fondo galáctico", 800),
    ("Mascota robot", 1500),
];

const ANIMACIONES: &[&str] = &["Festejo", "Salto mortal", "Baile robot", "Lluvia de estrellas"];

pub(crate) fn tienda(_config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let puntos = ctx.actor.puntos_totales;
    let mut header = vec![
        Line::from(vec![
            "Tenés ".into(),
            format!("{puntos} puntos").bold(),
            " para canjear.".into(),
        ]),
        Line::default(),
    ];
    header.extend(ARTICULOS.iter().map(|(nombre, costo)| {
        let line = Line::from(format!("  {nombre} · {costo} pts"));
        if *costo <= puntos {
            line.green()
        } else {
            line.dim()
        }
    }));
    let actions = vec![ViewAction::new(
        "Ver animaciones",
        AppEvent::PushOverlay(OverlayConfig::Animaciones),
    )];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

pub(crate) fn animaciones(_config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let mut header = vec![
        Line::from(format!("Animaciones de {}", ctx.actor.nombre)),
        Line::default(),
    ];
    header.extend(ANIMACIONES.iter().map(|nombre| Line::from(format!("  ★ {nombre}"))));
    let actions = vec![ViewAction::new("Volver", AppEvent::PopOverlay)];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}
