//! The fixed responsible-AI timeline injected into `ia-responsable.json`.

use crate::model::{Event, Timeline, TimelineConfig, Track};

/// Location of the document, relative to the `scripts/` directory the tool
/// is run from.
pub const DEFAULT_DOCUMENT_PATH: &str = "../public/examples/ia-responsable.json";

pub const START_DATE: &str = "2012-01-01";
pub const END_DATE: &str = "2026-12-31";

pub const REGULATION_TRACK: &str = "regulation-track";
pub const FRAMEWORKS_TRACK: &str = "frameworks-track";
pub const INCIDENTS_TRACK: &str = "incidents-track";

/// (id, name, color)
const TRACKS: [(&str, &str, &str); 3] = [
    (REGULATION_TRACK, "Regulación & Legislación", "#EF4444"),
    (FRAMEWORKS_TRACK, "Marcos & Estándares", "#3B82F6"),
    (INCIDENTS_TRACK, "Incidentes & Casos Notables", "#F59E0B"),
];

/// (id, title, description, date, track)
const EVENTS: [(&str, &str, &str, &str, &str); 22] = [
    (
        "evt-1",
        "AlexNet - Boom Deep Learning",
        "AlexNet gana ImageNet, inicia la revolución del deep learning moderno",
        "2012-09-30",
        FRAMEWORKS_TRACK,
    ),
    (
        "evt-2",
        "Google - Sesgo Racial en Fotos",
        "Google Photos etiqueta personas afroamericanas como 'gorilas', primer caso masivo de sesgo algorítmico",
        "2015-07-01",
        INCIDENTS_TRACK,
    ),
    (
        "evt-3",
        "EU GDPR - Aprobación",
        "Unión Europea aprueba GDPR con derecho a explicación de decisiones automatizadas",
        "2016-04-27",
        REGULATION_TRACK,
    ),
    (
        "evt-4",
        "ProPublica - COMPAS Bias",
        "Investigación revela sesgo racial en algoritmo COMPAS usado en sistema judicial de EE.UU.",
        "2016-05-23",
        INCIDENTS_TRACK,
    ),
    (
        "evt-5",
        "Asilomar AI Principles",
        "Conferencia establece 23 principios para IA beneficiosa, firmados por líderes de la industria",
        "2017-01-05",
        FRAMEWORKS_TRACK,
    ),
    (
        "evt-6",
        "IEEE - Ethically Aligned Design",
        "IEEE publica primer borrador de estándares para diseño ético de sistemas autónomos",
        "2017-03-13",
        FRAMEWORKS_TRACK,
    ),
    (
        "evt-7",
        "GDPR - Entrada en Vigor",
        "GDPR se vuelve efectivo, establece multas de hasta €20M o 4% de facturación global",
        "2018-05-25",
        REGULATION_TRACK,
    ),
    (
        "evt-8",
        "Amazon - Sesgo en Reclutamiento",
        "Amazon descarta herramienta de IA para reclutamiento por discriminar contra mujeres",
        "2018-10-10",
        INCIDENTS_TRACK,
    ),
    (
        "evt-9",
        "OECD AI Principles",
        "OCDE adopta 5 principios para IA responsable, adoptados por 42 países",
        "2019-05-22",
        FRAMEWORKS_TRACK,
    ),
    (
        "evt-10",
        "EU White Paper on AI",
        "Comisión Europea publica libro blanco proponiendo marco regulatorio para IA",
        "2020-02-19",
        REGULATION_TRACK,
    ),
    (
        "evt-11",
        "NIST AI Risk Management Framework",
        "NIST lanza borrador de marco de gestión de riesgos de IA con 4 funciones principales",
        "2021-03-17",
        FRAMEWORKS_TRACK,
    ),
    (
        "evt-12",
        "EU AI Act - Primera Propuesta",
        "Comisión Europea propone primera Ley de IA del mundo con clasificación basada en riesgo",
        "2021-04-21",
        REGULATION_TRACK,
    ),
    (
        "evt-13",
        "Facebook Papers - Algorithmic Harm",
        "Filtración revela que Facebook sabía que sus algoritmos causan daño social pero priorizó engagement",
        "2021-10-25",
        INCIDENTS_TRACK,
    ),
    (
        "evt-14",
        "Blueprint for AI Bill of Rights",
        "Casa Blanca publica blueprint con 5 principios para IA responsable en EE.UU.",
        "2022-10-04",
        REGULATION_TRACK,
    ),
    (
        "evt-15",
        "ChatGPT - Regulación Urgente",
        "Explosión de ChatGPT acelera debate regulatorio global sobre IA generativa",
        "2023-01-15",
        INCIDENTS_TRACK,
    ),
    (
        "evt-16",
        "EU AI Act - Aprobación Parlamento",
        "Parlamento Europeo aprueba AI Act con 499 votos a favor, entrará en vigor en 2026",
        "2023-06-14",
        REGULATION_TRACK,
    ),
    (
        "evt-17",
        "Biden - Executive Order on AI",
        "Orden ejecutiva establece nuevos estándares para seguridad y privacidad en IA",
        "2023-10-30",
        REGULATION_TRACK,
    ),
    (
        "evt-18",
        "NIST AI RMF 1.0 - Versión Final",
        "NIST publica versión final del AI Risk Management Framework adoptado globalmente",
        "2024-01-26",
        FRAMEWORKS_TRACK,
    ),
    (
        "evt-19",
        "ISO/IEC 42001 - AI Management",
        "Primera norma ISO internacional para sistemas de gestión de IA",
        "2024-12-18",
        FRAMEWORKS_TRACK,
    ),
    // 2025 onwards are projections.
    (
        "evt-20",
        "China - AI Governance Law",
        "China implementa ley integral de gobernanza de IA con enfoque en control estatal",
        "2025-03-01",
        REGULATION_TRACK,
    ),
    (
        "evt-21",
        "EU AI Act - Entrada en Vigor",
        "AI Act de la UE se vuelve totalmente efectivo, multas hasta €35M o 7% de facturación",
        "2026-06-01",
        REGULATION_TRACK,
    ),
    (
        "evt-22",
        "Global AI Treaty - Negociaciones",
        "ONU inicia negociaciones para primer tratado internacional vinculante sobre IA",
        "2026-09-15",
        REGULATION_TRACK,
    ),
];

/// Build the responsible-AI timeline: three tracks and 22 events from
/// 2012 to 2026, in display order.
pub fn ia_responsable() -> Timeline {
    let tracks = TRACKS
        .iter()
        .map(|&(id, name, color)| Track::new(id, name, color))
        .collect();

    let events = EVENTS
        .iter()
        .map(|&(id, title, description, date, track)| Event {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            track: track.to_string(),
        })
        .collect();

    Timeline {
        config: TimelineConfig {
            start_date: START_DATE.to_string(),
            end_date: END_DATE.to_string(),
            tracks,
        },
        events,
    }
}
