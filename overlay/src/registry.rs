use std::collections::HashMap;

use gimnasio_protocol::GradientTheme;
use gimnasio_protocol::OverlayConfig;
use gimnasio_protocol::OverlayKind;
use gimnasio_protocol::OverlayMetadata;
use gimnasio_protocol::RenderStyle;
use tracing::warn;

/// Presentation defaults for each kind.
pub fn default_metadata(kind: OverlayKind) -> OverlayMetadata {
    use GradientTheme::*;
    use RenderStyle::*;

    match kind {
        OverlayKind::MiGrupo => OverlayMetadata::new(BlueCyan, Fullscreen),
        OverlayKind::MisCursos => OverlayMetadata::new(VioletFuchsia, Fullscreen),
        OverlayKind::MiProgreso => OverlayMetadata::new(EmeraldTeal, Fullscreen),
        OverlayKind::Tienda => OverlayMetadata::new(AmberOrange, Fullscreen),
        OverlayKind::Animaciones => OverlayMetadata::new(PurpleIndigo, Fullscreen),
        OverlayKind::PlanificacionesSector => OverlayMetadata::new(PinkRose, Sidebar),
        OverlayKind::Planificacion => OverlayMetadata::new(PurpleIndigo, Fullscreen),
        OverlayKind::Actividad => OverlayMetadata::new(BlueCyan, Modal),
        OverlayKind::LaboratorioEcosistema => OverlayMetadata::new(EmeraldTeal, Fullscreen),
        OverlayKind::EjecutarActividad => OverlayMetadata::new(VioletFuchsia, Fullscreen),
        OverlayKind::Resultados => OverlayMetadata::new(AmberOrange, Modal),
        OverlayKind::Unrecognized => OverlayMetadata::default(),
    }
}

/// A config resolved to the component that renders it.
#[derive(Debug, PartialEq)]
pub struct Resolved<'a, C> {
    pub component: &'a C,
    pub metadata: OverlayMetadata,
    /// True when the kind had no entry and the placeholder was returned.
    pub fallback: bool,
}

/// Static mapping from [`OverlayKind`] to a component and its metadata.
///
/// `C` is whatever the renderer uses as a component (a constructor fn, a
/// view factory, ...). Lookups never fail: unmapped kinds resolve to the
/// placeholder with default metadata.
#[derive(Debug)]
pub struct OverlayRegistry<C> {
    entries: HashMap<OverlayKind, (C, OverlayMetadata)>,
    placeholder: C,
}

impl<C> OverlayRegistry<C> {
    pub fn builder(placeholder: C) -> OverlayRegistryBuilder<C> {
        OverlayRegistryBuilder {
            entries: HashMap::new(),
            placeholder,
        }
    }

    pub fn resolve(&self, config: &OverlayConfig) -> Resolved<'_, C> {
        let kind = config.kind();
        match self.entries.get(&kind) {
            Some((component, metadata)) => Resolved {
                component,
                metadata: *metadata,
                fallback: false,
            },
            None => {
                warn!(kind = kind.as_str(), "no overlay registered; using placeholder");
                Resolved {
                    component: &self.placeholder,
                    metadata: OverlayMetadata::default(),
                    fallback: true,
                }
            }
        }
    }

    pub fn contains(&self, kind: OverlayKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug)]
pub struct OverlayRegistryBuilder<C> {
    entries: HashMap<OverlayKind, (C, OverlayMetadata)>,
    placeholder: C,
}

impl<C> OverlayRegistryBuilder<C> {
    /// Map `kind` to `component`. A later registration for the same kind
    /// replaces the earlier one.
    pub fn register(mut self, kind: OverlayKind, component: C, metadata: OverlayMetadata) -> Self {
        self.entries.insert(kind, (component, metadata));
        self
    }

    /// Map `kind` using [`default_metadata`].
    pub fn register_default(self, kind: OverlayKind, component: C) -> Self {
        self.register(kind, component, default_metadata(kind))
    }

    pub fn build(self) -> OverlayRegistry<C> {
        OverlayRegistry {
            entries: self.entries,
            placeholder: self.placeholder,
        }
    }
}
