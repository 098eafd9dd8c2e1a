use gimnasio_protocol::OverlayConfig;
use ratatui::style::Stylize;
use ratatui::text::Line;

use super::ContentView;
use super::OverlayView;
use super::ViewAction;
use super::ViewContext;
use super::param_lines;
use super::placeholder::placeholder;
use crate::app_event::AppEvent;

const ACTIVIDADES: &[&str] = &["Exploración", "Desafío", "Repaso"];
const PUNTOS_POR_ACTIVIDAD: u64 = 50;

pub(crate) fn actividad(config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let OverlayConfig::Actividad { semana_id } = config else {
        return placeholder(config, ctx);
    };

    let header = param_lines(config);
    let actions = ACTIVIDADES
        .iter()
        .enumerate()
        .map(|(i, nombre)| {
            ViewAction::new(
                format!("Actividad {} · {nombre}", i + 1),
                AppEvent::PushOverlay(OverlayConfig::EjecutarActividad {
                    actividad_id: format!("{semana_id}-actividad-{}", i + 1),
                    semana_id: semana_id.clone(),
                }),
            )
        })
        .collect();
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

pub(crate) fn laboratorio_ecosistema(
    config: &OverlayConfig,
    ctx: &ViewContext,
) -> Box<dyn OverlayView> {
    let OverlayConfig::LaboratorioEcosistema { semana_id } = config else {
        return placeholder(config, ctx);
    };

    let mut header = param_lines(config);
    header.push(Line::default());
    header.push(Line::from("Armá tu ecosistema y observá cómo cambia con cada especie."));
    let actions = vec![ViewAction::new(
        "Iniciar experimento",
        AppEvent::PushOverlay(OverlayConfig::EjecutarActividad {
            actividad_id: format!("{semana_id}-laboratorio"),
            semana_id: semana_id.clone(),
        }),
    )];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

pub(crate) fn ejecutar_actividad(
    config: &OverlayConfig,
    ctx: &ViewContext,
) -> Box<dyn OverlayView> {
    let OverlayConfig::EjecutarActividad { actividad_id, .. } = config else {
        return placeholder(config, ctx);
    };

    let mut header = param_lines(config);
    header.push(Line::default());
    header.push(Line::from(format!(
        "¡Vamos, {}! Respondé y entregá cuando termines.",
        ctx.actor.nombre
    )));
    let actions = vec![
        // Back from the results returns to the week, not to this screen.
        ViewAction::new(
            "Entregar respuestas",
            AppEvent::ReplaceOverlay(OverlayConfig::Resultados {
                actividad_id: actividad_id.clone(),
            }),
        ),
        ViewAction::new("Salir sin terminar", AppEvent::PopOverlay),
    ];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

pub(crate) fn resultados(config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let OverlayConfig::Resultados { actividad_id } = config else {
        return placeholder(config, ctx);
    };

    let header = vec![
        Line::from(format!("¡Actividad {actividad_id} completada!")).green().bold(),
        Line::from(format!(
            "+{PUNTOS_POR_ACTIVIDAD} puntos para {}",
            ctx.actor.display_name()
        )),
    ];
    let actions = vec![
        ViewAction::new("Volver a la semana", AppEvent::PopOverlay),
        ViewAction::new("Volver al inicio", AppEvent::ClearOverlays),
    ];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}
