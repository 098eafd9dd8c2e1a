use gimnasio_protocol::OverlayConfig;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

use super::ContentView;
use super::OverlayView;
use super::ViewAction;
use super::ViewContext;
use super::param_lines;
use super::placeholder::placeholder;
use crate::app_event::AppEvent;

/// `(semana_id, label)` of each week, in order.
const SEMANAS: &[(&str, &str)] = &[
    ("quimica", "Laboratorio mágico · Química"),
    ("astronomia", "Astronomía"),
    ("fisica", "Física"),
    ("informatica", "Informática"),
];

/// The only week played in the ecosystem lab instead of the activity grid.
const SEMANA_LABORATORIO: &str = "quimica";

type PlanificacionEntry = (&'static str, &'static str, &'static str);

/// `(codigo, tema, label)` of the planificaciones published for a sector.
fn planificaciones_del_sector(sector: &str) -> &'static [PlanificacionEntry] {
    match sector.trim().to_lowercase().as_str() {
        "ciencias" => &[
            ("2025-11-mes-ciencia", "astronomia", "Mes de la ciencia · Astronomía"),
            ("2025-11-mes-ciencia", "quimica", "Mes de la ciencia · Química"),
            ("2025-11-mes-ciencia", "ecosistemas", "Mes de la ciencia · Ecosistemas"),
        ],
        "matemática" | "matematica" => &[
            ("2025-10-mes-matematica", "geometria", "Mes de la matemática · Geometría"),
            ("2025-10-mes-matematica", "fracciones", "Mes de la matemática · Fracciones"),
        ],
        _ => &[],
    }
}

/// Parses `#rrggbb` (the `#` is optional).
fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub(crate) fn planificaciones_sector(
    config: &OverlayConfig,
    ctx: &ViewContext,
) -> Box<dyn OverlayView> {
    let OverlayConfig::PlanificacionesSector {
        sector_nombre,
        sector_color,
        sector_emoji,
    } = config
    else {
        return placeholder(config, ctx);
    };

    let sector_style = parse_hex_color(sector_color)
        .map(|color| Style::new().fg(color))
        .unwrap_or_default();
    let mut header = vec![Line::from(vec![
        Span::from(format!("{sector_emoji} ")),
        Span::styled(sector_nombre.clone(), sector_style.bold()),
    ])];

    let planificaciones = planificaciones_del_sector(sector_nombre);
    if planificaciones.is_empty() {
        header.push(Line::default());
        header.push(Line::from("Todavía no hay planificaciones para este sector.").dim());
    }
    let actions = planificaciones
        .iter()
        .map(|(codigo, tema, label)| {
            ViewAction::new(
                *label,
                AppEvent::PushOverlay(OverlayConfig::Planificacion {
                    codigo: (*codigo).to_string(),
                    tema: (*tema).to_string(),
                }),
            )
        })
        .collect();
    Box::new(ContentView::new(header, actions, ctx.app_event_tx.clone()))
}

fn abrir_semana(semana_id: &str) -> AppEvent {
    let semana_id = semana_id.to_string();
    if semana_id == SEMANA_LABORATORIO {
        AppEvent::PushOverlay(OverlayConfig::LaboratorioEcosistema { semana_id })
    } else {
        AppEvent::PushOverlay(OverlayConfig::Actividad { semana_id })
    }
}

/// The weeks of a planificación, with the week matching `tema` selected.
pub(crate) fn planificacion(config: &OverlayConfig, ctx: &ViewContext) -> Box<dyn OverlayView> {
    let OverlayConfig::Planificacion { tema, .. } = config else {
        return placeholder(config, ctx);
    };

    let actions = SEMANAS
        .iter()
        .enumerate()
        .map(|(i, (semana_id, label))| {
            ViewAction::new(format!("Semana {} · {label}", i + 1), abrir_semana(semana_id))
        })
        .collect();
    let selected = SEMANAS
        .iter()
        .position(|(semana_id, _)| *semana_id == tema.as_str())
        .unwrap_or(0);
    Box::new(
        ContentView::new(param_lines(config), actions, ctx.app_event_tx.clone())
            .with_selected(selected),
    )
}
