use serde::Deserialize;
use serde::Serialize;
use strum_macros::AsRefStr;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// Descriptor of a screen that can be pushed on top of the hub.
///
/// Each variant carries exactly the parameters its view needs. On the wire
/// the variant is selected by the `type` field (kebab-case) and parameter
/// names are camelCase:
///
/// ```json
/// { "type": "planificacion", "codigo": "2025-11-mes-ciencia", "tema": "astronomia" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum OverlayConfig {
    MiGrupo,
    MisCursos,
    MiProgreso,
    Tienda,
    Animaciones,
    PlanificacionesSector {
        sector_nombre: String,
        sector_color: String,
        sector_emoji: String,
    },
    Planificacion {
        codigo: String,
        tema: String,
    },
    Actividad {
        semana_id: String,
    },
    LaboratorioEcosistema {
        semana_id: String,
    },
    EjecutarActividad {
        actividad_id: String,
        semana_id: String,
    },
    Resultados {
        actividad_id: String,
    },
    /// A `type` this build does not know about (stale stored data or a
    /// partially rolled out screen). Never registered, so it always resolves
    /// to the placeholder view.
    #[serde(other)]
    Unrecognized,
}

/// Field-less discriminant of [`OverlayConfig`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum OverlayKind {
    MiGrupo,
    MisCursos,
    MiProgreso,
    Tienda,
    Animaciones,
    PlanificacionesSector,
    Planificacion,
    Actividad,
    LaboratorioEcosistema,
    EjecutarActividad,
    Resultados,
    Unrecognized,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Every kind a well-typed config can have, i.e. all but `Unrecognized`.
    pub fn known() -> impl Iterator<Item = OverlayKind> {
        <OverlayKind as strum::IntoEnumIterator>::iter()
            .filter(|kind| *kind != OverlayKind::Unrecognized)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("invalid overlay config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl OverlayConfig {
    pub fn kind(&self) -> OverlayKind {
        match self {
            OverlayConfig::MiGrupo => OverlayKind::MiGrupo,
            OverlayConfig::MisCursos => OverlayKind::MisCursos,
            OverlayConfig::MiProgreso => OverlayKind::MiProgreso,
            OverlayConfig::Tienda => OverlayKind::Tienda,
            OverlayConfig::Animaciones => OverlayKind::Animaciones,
            OverlayConfig::PlanificacionesSector { .. } => OverlayKind::PlanificacionesSector,
            OverlayConfig::Planificacion { .. } => OverlayKind::Planificacion,
            OverlayConfig::Actividad { .. } => OverlayKind::Actividad,
            OverlayConfig::LaboratorioEcosistema { .. } => OverlayKind::LaboratorioEcosistema,
            OverlayConfig::EjecutarActividad { .. } => OverlayKind::EjecutarActividad,
            OverlayConfig::Resultados { .. } => OverlayKind::Resultados,
            OverlayConfig::Unrecognized => OverlayKind::Unrecognized,
        }
    }

    /// Human readable title used by renderer shells.
    pub fn title(&self) -> String {
        match self {
            OverlayConfig::MiGrupo => "Mi grupo".to_string(),
            OverlayConfig::MisCursos => "Mis cursos".to_string(),
            OverlayConfig::MiProgreso => "Mi progreso".to_string(),
            OverlayConfig::Tienda => "Tienda".to_string(),
            OverlayConfig::Animaciones => "Animaciones".to_string(),
            OverlayConfig::PlanificacionesSector {
                sector_nombre,
                sector_emoji,
                ..
            } => format!("Planificaciones {sector_emoji} {sector_nombre}"),
            OverlayConfig::Planificacion { codigo, .. } => format!("Planificación {codigo}"),
            OverlayConfig::Actividad { semana_id } => format!("Actividades · {semana_id}"),
            OverlayConfig::LaboratorioEcosistema { semana_id } => {
                format!("Laboratorio · {semana_id}")
            }
            OverlayConfig::EjecutarActividad { actividad_id, .. } => {
                format!("Actividad {actividad_id}")
            }
            OverlayConfig::Resultados { actividad_id } => format!("Resultados · {actividad_id}"),
            OverlayConfig::Unrecognized => "Contenido no disponible".to_string(),
        }
    }

    /// Parameters carried by this config, in declaration order, keyed by
    /// their wire names.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            OverlayConfig::MiGrupo
            | OverlayConfig::MisCursos
            | OverlayConfig::MiProgreso
            | OverlayConfig::Tienda
            | OverlayConfig::Animaciones
            | OverlayConfig::Unrecognized => Vec::new(),
            OverlayConfig::PlanificacionesSector {
                sector_nombre,
                sector_color,
                sector_emoji,
            } => vec![
                ("sectorNombre", sector_nombre.as_str()),
                ("sectorColor", sector_color.as_str()),
                ("sectorEmoji", sector_emoji.as_str()),
            ],
            OverlayConfig::Planificacion { codigo, tema } => {
                vec![("codigo", codigo.as_str()), ("tema", tema.as_str())]
            }
            OverlayConfig::Actividad { semana_id }
            | OverlayConfig::LaboratorioEcosistema { semana_id } => {
                vec![("semanaId", semana_id.as_str())]
            }
            OverlayConfig::EjecutarActividad {
                actividad_id,
                semana_id,
            } => vec![
                ("actividadId", actividad_id.as_str()),
                ("semanaId", semana_id.as_str()),
            ],
            OverlayConfig::Resultados { actividad_id } => {
                vec![("actividadId", actividad_id.as_str())]
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// How a renderer shell lays out an overlay.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RenderStyle {
    /// Centered panel over a dimmed backdrop.
    #[default]
    Modal,
    /// Panel anchored to the trailing edge.
    Sidebar,
    /// Whole viewport, explicit close control only.
    Fullscreen,
}

impl RenderStyle {
    /// Whether a click on the backdrop closes the overlay.
    pub fn closes_on_backdrop(self) -> bool {
        match self {
            RenderStyle::Modal | RenderStyle::Sidebar => true,
            RenderStyle::Fullscreen => false,
        }
    }
}

/// Two-stop background gradient used to theme an overlay.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GradientTheme {
    #[default]
    Slate,
    PurpleIndigo,
    BlueCyan,
    EmeraldTeal,
    AmberOrange,
    PinkRose,
    VioletFuchsia,
}

impl GradientTheme {
    /// `(from, to)` stops as RGB triples.
    pub fn stops(self) -> ((u8, u8, u8), (u8, u8, u8)) {
        match self {
            GradientTheme::Slate => ((0x0f, 0x17, 0x2a), (0x1e, 0x29, 0x3b)),
            GradientTheme::PurpleIndigo => ((0x58, 0x1c, 0x87), (0x31, 0x2e, 0x81)),
            GradientTheme::BlueCyan => ((0x1e, 0x40, 0xaf), (0x0e, 0x74, 0x90)),
            GradientTheme::EmeraldTeal => ((0x06, 0x4e, 0x3b), (0x11, 0x5e, 0x59)),
            GradientTheme::AmberOrange => ((0xb4, 0x53, 0x09), (0xc2, 0x41, 0x0c)),
            GradientTheme::PinkRose => ((0x9d, 0x17, 0x4d), (0x9f, 0x12, 0x39)),
            GradientTheme::VioletFuchsia => ((0x5b, 0x21, 0xb6), (0x86, 0x19, 0x8f)),
        }
    }
}

/// Static presentation data attached to a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayMetadata {
    pub gradient: GradientTheme,
    pub style: RenderStyle,
}

impl OverlayMetadata {
    pub const fn new(gradient: GradientTheme, style: RenderStyle) -> Self {
        Self { gradient, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn planificacion_uses_type_tag_and_camel_case_fields() -> anyhow::Result<()> {
        let config = OverlayConfig::Planificacion {
            codigo: "2025-11-mes-ciencia".to_string(),
            tema: "astronomia".to_string(),
        };
        assert_eq!(
            json!({"type": "planificacion", "codigo": "2025-11-mes-ciencia", "tema": "astronomia"}),
            serde_json::to_value(&config)?
        );

        let ejecutar: OverlayConfig = serde_json::from_value(json!({
            "type": "ejecutar-actividad",
            "actividadId": "quimica-01",
            "semanaId": "quimica",
        }))?;
        assert_eq!(
            OverlayConfig::EjecutarActividad {
                actividad_id: "quimica-01".to_string(),
                semana_id: "quimica".to_string(),
            },
            ejecutar
        );
        Ok(())
    }

    #[test]
    fn unit_variants_serialize_as_bare_tag() -> anyhow::Result<()> {
        assert_eq!(r#"{"type":"mi-grupo"}"#, OverlayConfig::MiGrupo.to_json()?);
        assert_eq!(OverlayConfig::Tienda, OverlayConfig::from_json(r#"{"type":"tienda"}"#)?);
        Ok(())
    }

    #[test]
    fn unknown_tag_becomes_unrecognized() -> anyhow::Result<()> {
        let config = OverlayConfig::from_json(r#"{"type":"laboratorio-fisica","nivel":3}"#)?;
        assert_eq!(OverlayConfig::Unrecognized, config);
        assert_eq!(OverlayKind::Unrecognized, config.kind());
        Ok(())
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = OverlayConfig::from_json(r#"{"type":"planificacion","codigo":"x"}"#)
            .expect_err("tema is required");
        assert!(err.to_string().contains("tema"), "{err}");
    }

    #[test]
    fn kind_names_match_wire_tags() -> anyhow::Result<()> {
        let config = OverlayConfig::LaboratorioEcosistema {
            semana_id: "quimica".to_string(),
        };
        let value = serde_json::to_value(&config)?;
        assert_eq!(json!(config.kind().as_str()), value["type"]);
        assert_eq!(
            OverlayKind::EjecutarActividad,
            "ejecutar-actividad".parse::<OverlayKind>()?
        );
        assert!(!OverlayKind::known().any(|k| k == OverlayKind::Unrecognized));
        assert_eq!(11, OverlayKind::known().count());
        Ok(())
    }

    #[test]
    fn only_fullscreen_ignores_backdrop() {
        assert!(RenderStyle::Modal.closes_on_backdrop());
        assert!(RenderStyle::Sidebar.closes_on_backdrop());
        assert!(!RenderStyle::Fullscreen.closes_on_backdrop());
        assert_eq!(
            OverlayMetadata::new(GradientTheme::Slate, RenderStyle::Modal),
            OverlayMetadata::default()
        );
    }

    #[test]
    fn params_use_wire_names() {
        let config = OverlayConfig::PlanificacionesSector {
            sector_nombre: "Ciencias".to_string(),
            sector_color: "#10b981".to_string(),
            sector_emoji: "🔬".to_string(),
        };
        assert_eq!(
            vec![
                ("sectorNombre", "Ciencias"),
                ("sectorColor", "#10b981"),
                ("sectorEmoji", "🔬"),
            ],
            config.params()
        );
        assert_eq!("Planificaciones 🔬 Ciencias", config.title());
    }
}
