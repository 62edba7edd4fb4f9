//! Overlay of generated profile fields onto a stored record.
//!
//! Written once and used by every enrichment site, instead of per-field
//! reassignment duplicated per content type. Precedence rule: a generated
//! value replaces the stored one only when it is present and non-empty;
//! everything else keeps the stored value.

use olimpo_types::MythEntity;

use crate::parse::GeneratedProfile;

/// Overlay `profile` onto `entity`, returning the merged record.
///
/// The merge never removes information: an absent or empty generated
/// field leaves the stored field untouched.
pub fn merge_profile(mut entity: MythEntity, profile: GeneratedProfile) -> MythEntity {
    if let Some(descricao) = profile.descricao
        && !descricao.trim().is_empty()
    {
        entity.descricao = descricao;
    }
    if let Some(dominios) = profile.dominios
        && !dominios.is_empty()
    {
        entity.dominios = dominios;
    }
    if let Some(poderes) = profile.poderes
        && !poderes.is_empty()
    {
        entity.poderes = poderes;
    }
    if let Some(simbolos) = profile.simbolos
        && !simbolos.is_empty()
    {
        entity.simbolos = simbolos;
    }
    entity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> MythEntity {
        MythEntity {
            id: String::from("pan"),
            nome: String::from("Pã"),
            categoria: String::from("menor"),
            descricao: String::from("Deus dos pastores."),
            dominios: vec![String::from("Natureza")],
            poderes: vec![String::from("Pânico")],
            simbolos: vec![String::from("Flauta de pã")],
            tags: vec![String::from("natureza")],
        }
    }

    #[test]
    fn present_fields_override_stored_values() {
        let profile = GeneratedProfile {
            descricao: Some(String::from("Deus dos pastores e da música pastoral.")),
            dominios: Some(vec![String::from("Natureza"), String::from("Música")]),
            poderes: None,
            simbolos: None,
        };

        let merged = merge_profile(stored(), profile);
        assert_eq!(merged.descricao, "Deus dos pastores e da música pastoral.");
        assert_eq!(merged.dominios.len(), 2);
        // Untouched fields keep their stored values.
        assert_eq!(merged.poderes, vec!["Pânico".to_owned()]);
        assert_eq!(merged.simbolos, vec!["Flauta de pã".to_owned()]);
    }

    #[test]
    fn empty_values_never_override() {
        let profile = GeneratedProfile {
            descricao: Some(String::from("   ")),
            dominios: Some(Vec::new()),
            poderes: Some(Vec::new()),
            simbolos: None,
        };

        let merged = merge_profile(stored(), profile);
        assert_eq!(merged.descricao, "Deus dos pastores.");
        assert_eq!(merged.dominios, vec!["Natureza".to_owned()]);
        assert_eq!(merged.poderes, vec!["Pânico".to_owned()]);
    }

    #[test]
    fn empty_profile_is_identity() {
        let merged = merge_profile(stored(), GeneratedProfile::default());
        assert_eq!(merged, stored());
    }

    #[test]
    fn merge_never_touches_identity_fields() {
        let profile = GeneratedProfile {
            descricao: Some(String::from("Nova descrição.")),
            dominios: None,
            poderes: None,
            simbolos: None,
        };

        let merged = merge_profile(stored(), profile);
        assert_eq!(merged.id, "pan");
        assert_eq!(merged.nome, "Pã");
        assert_eq!(merged.categoria, "menor");
        assert_eq!(merged.tags, vec!["natureza".to_owned()]);
    }
}
