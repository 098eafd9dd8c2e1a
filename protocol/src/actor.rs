use serde::Deserialize;
use serde::Serialize;

/// Profile summary of the logged-in learner. Supplied by the hosting
/// application and handed verbatim to every content view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActorSummary {
    pub id: String,
    pub nombre: String,
    pub apellido: Option<String>,
    pub nivel_actual: u32,
    pub puntos_totales: u64,
    pub avatar_url: Option<String>,
}

impl ActorSummary {
    pub fn display_name(&self) -> String {
        match self.apellido.as_deref().map(str::trim) {
            Some(apellido) if !apellido.is_empty() => format!("{} {apellido}", self.nombre),
            _ => self.nombre.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_name_skips_blank_apellido() {
        let mut actor = ActorSummary {
            nombre: "Lucía".to_string(),
            apellido: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!("Lucía", actor.display_name());

        actor.apellido = Some("Pérez".to_string());
        assert_eq!("Lucía Pérez", actor.display_name());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() -> anyhow::Result<()> {
        let actor: ActorSummary =
            serde_json::from_str(r#"{"nombre":"Tomás","nivelActual":4,"puntosTotales":1250}"#)?;
        assert_eq!(
            ActorSummary {
                nombre: "Tomás".to_string(),
                nivel_actual: 4,
                puntos_totales: 1250,
                ..Default::default()
            },
            actor
        );
        Ok(())
    }
}
