use gimnasio_protocol::ActorSummary;
use gimnasio_protocol::OverlayConfig;
use ratatui::style::Stylize;
use ratatui::text::Line;

use super::ContentView;
use super::OverlayView;
use super::ViewAction;
use super::ViewContext;
use crate::app_event::AppEvent;

const PUNTOS_POR_NIVEL: u64 = 500;

fn actor_line(actor: &ActorSummary) -> Line<'static> {
    Line::from(vec![
        actor.display_name().bold(),
        format!("  nivel {} · {} puntos", actor.nivel_actual, actor.puntos_totales).dim(),
    ])
}

pub(crate) fn mi_grupo(_config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let header = vec![
        actor_line(&ctx.actor),
        Line::default(),
        Line::from("Tu grupo entrena todas las semanas con nuevas actividades."),
    ];
    let actions = vec![
        ViewAction::new("Ver mi progreso", AppEvent::PushOverlay(OverlayConfig::MiProgreso)),
        ViewAction::new("Ir a mis cursos", AppEvent::PushOverlay(OverlayConfig::MisCursos)),
    ];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

pub(crate) fn mis_cursos(_config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let header = vec![
        actor_line(&ctx.actor),
        Line::default(),
        Line::from("Elegí una planificación para continuar."),
    ];
    let actions = vec![
        ViewAction::new(
            "Mes de la ciencia · Astronomía",
            AppEvent::PushOverlay(OverlayConfig::Planificacion {
                codigo: "2025-11-mes-ciencia".to_string(),
                tema: "astronomia".to_string(),
            }),
        ),
        ViewAction::new(
            "Mes de la ciencia · Química",
            AppEvent::PushOverlay(OverlayConfig::Planificacion {
                codigo: "2025-11-mes-ciencia".to_string(),
                tema: "quimica".to_string(),
            }),
        ),
        ViewAction::new(
            "Todas las planificaciones de Ciencias",
            AppEvent::PushOverlay(OverlayConfig::PlanificacionesSector {
                sector_nombre: "Ciencias".to_string(),
                sector_color: "#10b981".to_string(),
                sector_emoji: "🔬".to_string(),
            }),
        ),
    ];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

/// Points still missing to reach the next level.
fn puntos_para_siguiente_nivel(actor: &ActorSummary) -> u64 {
    (u64::from(actor.nivel_actual) + 1)
        .saturating_mul(PUNTOS_POR_NIVEL)
        .saturating_sub(actor.puntos_totales)
}

pub(crate) fn mi_progreso(_config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let actor = &ctx.actor;
    let faltan = puntos_para_siguiente_nivel(actor);
    let header = vec![
        actor_line(actor),
        Line::default(),
        Line::from(format!("Nivel actual: {}", actor.nivel_actual)),
        Line::from(format!("Puntos totales: {}", actor.puntos_totales)),
        if faltan == 0 {
            Line::from("¡Ya podés subir de nivel!").green()
        } else {
            Line::from(format!(
                "Faltan {faltan} puntos para el nivel {}",
                actor.nivel_actual + 1
            ))
            .dim()
        },
    ];
    let actions = vec![ViewAction::new(
        "Canjear puntos en la tienda",
        AppEvent::PushOverlay(OverlayConfig::Tienda),
    )];
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    #[test]
    fn next_level_threshold() {
        let mut actor = ActorSummary {
            nivel_actual: 3,
            puntos_totales: 1250,
            ..Default::default()
        };
        assert_eq!(750, puntos_para_siguiente_nivel(&actor));
        actor.puntos_totales = 5000;
        assert_eq!(0, puntos_para_siguiente_nivel(&actor));
    }

    #[test]
    fn progreso_shows_actor_and_missing_points() {
        let (ctx, _rx) = testing::context();
        let view = mi_progreso(&OverlayConfig::MiProgreso, &ctx);
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let text = testing::buffer_to_text(&buf, area);
        assert!(text.contains("Lucía Pérez  nivel 3 · 1250 puntos"), "{text}");
        assert!(text.contains("Faltan 750 puntos para el nivel 4"), "{text}");
    }

    #[test]
    fn mis_cursos_opens_a_planificacion() {
        let (ctx, mut rx) = testing::context();
        let mut view = mis_cursos(&OverlayConfig::MisCursos, &ctx);
        view.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            vec![AppEvent::PushOverlay(OverlayConfig::Planificacion {
                codigo: "2025-11-mes-ciencia".to_string(),
                tema: "astronomia".to_string(),
            })],
            testing::drain(&mut rx)
        );
    }
}
