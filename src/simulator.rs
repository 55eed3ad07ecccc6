//! Orientation simulator: three answers in, a suggested path out
//!
//! A fixed lookup, no scoring. Missions and careers follow the centre of
//! interest; tips stack preference, then bac, then general advice, and only
//! the first three are kept.

use serde::{Deserialize, Serialize};

pub const MAX_MISSIONS: usize = 3;
pub const MAX_CAREERS: usize = 2;
pub const MAX_TIPS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bac {
    #[serde(rename = "Général")]
    General,
    Techno,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interet {
    Sport,
    #[serde(rename = "Réseaux")]
    Reseaux,
    Environnement,
    Marketing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pref {
    Projets,
    #[serde(rename = "Théorie")]
    Theorie,
    Mix,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorAnswers {
    pub bac: Option<Bac>,
    pub interet: Option<Interet>,
    pub pref: Option<Pref>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub mission_ids: Vec<u32>,
    pub career_titles: Vec<String>,
    pub tips: Vec<String>,
}

impl SimulatorAnswers {
    pub fn is_complete(&self) -> bool {
        self.bac.is_some() && self.interet.is_some() && self.pref.is_some()
    }
}

fn missions_and_careers(interet: Option<Interet>) -> ([u32; 3], [&'static str; 2]) {
    match interet {
        Some(Interet::Sport) => ([2, 4, 1], ["Analyste sport", "Data Analyst"]),
        Some(Interet::Reseaux) => ([4, 1, 5], ["Consultant data", "Data Analyst"]),
        Some(Interet::Environnement) => (
            [4, 2, 1],
            ["Analyste énergie / environnement", "Chargé d'études statistiques"],
        ),
        Some(Interet::Marketing) => ([3, 4, 2], ["Analyste marketing", "Data Analyst"]),
        None => ([1, 2, 4], ["Data Analyst", "Chargé d'études statistiques"]),
    }
}

fn pref_tips(pref: Option<Pref>) -> &'static [&'static str] {
    match pref {
        Some(Pref::Projets) => &[
            "💡 Fais les missions 1 et 4 en premier : elles te montrent concrètement comment on nettoie et visualise des données.",
            "🎯 Le BUT SD est très orienté projets ! Tu vas adorer les travaux pratiques et les cas concrets.",
            "🚀 N'hésite pas à tester plusieurs fois les missions pour bien comprendre chaque étape.",
        ],
        Some(Pref::Theorie) => &[
            "📚 Prends le temps de lire les explications 'Ce que tu apprends' dans chaque mission : elles te donnent le contexte théorique.",
            "🧠 Même si tu préfères la théorie, tu vas vite voir qu'elle sert toujours à comprendre des cas pratiques.",
            "💭 Explore aussi la page Formation pour comprendre le programme complet du BUT SD.",
        ],
        Some(Pref::Mix) => &[
            "⚖️ Alterne mission + lecture + chatbot : c'est le meilleur moyen de comprendre à la fois la pratique et les concepts.",
            "🔄 Après chaque mission, prends 2 minutes pour lire 'Ce que tu apprends' et pose tes questions au chatbot.",
            "📖 La combinaison pratique + théorie, c'est exactement ce que propose le BUT SD.",
        ],
        None => &[],
    }
}

fn bac_tips(bac: Option<Bac>) -> &'static [&'static str] {
    match bac {
        Some(Bac::General) => &[
            "✅ Tu as de bonnes bases pour progresser en statistiques et en analyse de données.",
            "🎓 Le BUT SD va te permettre d'appliquer tes connaissances générales à des cas concrets passionnants.",
            "💪 Tes compétences en raisonnement et analyse seront un atout majeur.",
        ],
        Some(Bac::Techno) => &[
            "🔧 Tu vas progresser vite grâce au côté concret et projets du BUT SD.",
            "💼 Tes compétences pratiques sont un atout : le BUT SD valorise beaucoup les projets et les stages.",
            "🌟 Beaucoup d'étudiants de bac techno réussissent très bien en BUT SD. L'important, c'est ta curiosité et ta volonté d'apprendre.",
        ],
        None => &[],
    }
}

const GENERAL_TIPS: [&str; 3] = [
    "🎯 Commence par explorer les missions recommandées pour découvrir concrètement le BUT SD.",
    "💬 N'hésite pas à poser tes questions au chatbot étudiant si tu as des doutes.",
    "📈 Les métiers de la data sont très demandés : tu auras de nombreuses opportunités après le BUT.",
];

/// Suggest missions, careers and tips for a set of answers
pub fn recommend_path(answers: &SimulatorAnswers) -> Recommendation {
    let (missions, careers) = missions_and_careers(answers.interet);

    let tips = pref_tips(answers.pref)
        .iter()
        .chain(bac_tips(answers.bac))
        .chain(GENERAL_TIPS.iter())
        .take(MAX_TIPS)
        .map(|t| t.to_string())
        .collect();

    Recommendation {
        mission_ids: missions.into_iter().take(MAX_MISSIONS).collect(),
        career_titles: careers.into_iter().take(MAX_CAREERS).map(String::from).collect(),
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_drives_missions() {
        let answers = SimulatorAnswers {
            bac: Some(Bac::General),
            interet: Some(Interet::Marketing),
            pref: Some(Pref::Mix),
        };
        let reco = recommend_path(&answers);
        assert_eq!(reco.mission_ids, vec![3, 4, 2]);
        assert_eq!(reco.career_titles, vec!["Analyste marketing", "Data Analyst"]);
    }

    #[test]
    fn test_pref_tips_come_first() {
        let answers = SimulatorAnswers {
            bac: Some(Bac::Techno),
            interet: Some(Interet::Sport),
            pref: Some(Pref::Projets),
        };
        let reco = recommend_path(&answers);
        assert_eq!(reco.tips.len(), 3);
        assert!(reco.tips.iter().all(|t| pref_tips(Some(Pref::Projets)).contains(&t.as_str())));
    }

    #[test]
    fn test_bac_tips_without_pref() {
        let answers = SimulatorAnswers {
            bac: Some(Bac::Techno),
            ..Default::default()
        };
        let reco = recommend_path(&answers);
        assert!(reco.tips[0].starts_with("🔧"));
        assert_eq!(reco.mission_ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_empty_answers_get_general_tips() {
        let reco = recommend_path(&SimulatorAnswers::default());
        assert_eq!(reco.tips, GENERAL_TIPS.map(String::from).to_vec());
        assert_eq!(reco.career_titles, vec!["Data Analyst", "Chargé d'études statistiques"]);
    }

    #[test]
    fn test_answers_deserialize_french_labels() {
        let answers: SimulatorAnswers =
            serde_json::from_str(r#"{"bac": "Général", "interet": "Réseaux", "pref": "Théorie"}"#).unwrap();
        assert!(answers.is_complete());
        assert_eq!(recommend_path(&answers).mission_ids, vec![4, 1, 5]);
    }
}
