//! Portuguese (Brazil) translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Calculadora de Frete".into());

    // Estimate summary
    t.insert("estimate.route".into(), "Rota".into());
    t.insert("estimate.distance".into(), "Dist\u{00E2}ncia".into());
    t.insert("estimate.axles".into(), "Eixos".into());
    t.insert("estimate.trip_type".into(), "Tipo de viagem".into());
    t.insert("estimate.amount".into(), "Frete estimado".into());
    t.insert("estimate.saved".into(), "Salvo no hist\u{00F3}rico".into());
    t.insert("estimate.not_saved".into(), "N\u{00E3}o salvo (--no-save)".into());
    t.insert("estimate.one_way".into(), "Apenas ida".into());
    t.insert("estimate.round_trip".into(), "Ida e volta".into());

    // History
    t.insert("history.title".into(), "Hist\u{00F3}rico de c\u{00E1}lculos".into());
    t.insert("history.empty".into(), "Nenhum c\u{00E1}lculo registrado ainda".into());
    t.insert("history.date".into(), "Data".into());
    t.insert("history.origin".into(), "Origem".into());
    t.insert("history.destination".into(), "Destino".into());
    t.insert("history.cleared".into(), "Hist\u{00F3}rico limpo".into());
    t.insert("history.clear_confirm".into(), "Use --yes para confirmar a limpeza do hist\u{00F3}rico".into());

    // Statistics
    t.insert("stats.title".into(), "Estat\u{00ED}sticas".into());
    t.insert("stats.no_data".into(), "Sem dados para resumir".into());
    t.insert("stats.window".into(), "Registros considerados".into());
    t.insert("stats.mean".into(), "M\u{00E9}dia".into());
    t.insert("stats.min".into(), "M\u{00ED}nimo".into());
    t.insert("stats.max".into(), "M\u{00E1}ximo".into());

    // Export
    t.insert("export.done".into(), "Hist\u{00F3}rico exportado para".into());

    // Errors
    t.insert("error.validation".into(), "Entrada inv\u{00E1}lida".into());
    t.insert("error.place_not_found".into(), "Local n\u{00E3}o encontrado".into());
    t.insert("error.geocoding".into(), "N\u{00E3}o foi poss\u{00ED}vel localizar o lugar".into());
    t.insert("error.storage".into(), "N\u{00E3}o foi poss\u{00ED}vel salvar o hist\u{00F3}rico".into());
    t.insert("error.export".into(), "Falha na exporta\u{00E7}\u{00E3}o".into());

    t
}
