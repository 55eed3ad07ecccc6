use butsd_core::missions::match_predict::{Factor, TeamStats, Weights};
use butsd_core::missions::reco::Movie;
use butsd_core::missions::spam::{Label, SpamData};
use butsd_core::missions::{record_completion, MatchPredictMission, RecoMission, SpamMission};
use butsd_core::Progress;

fn match_mission() -> MatchPredictMission {
    let team = |name: &str, shots, possession, fouls| TeamStats {
        name: name.to_string(),
        shots,
        possession,
        fouls,
    };
    MatchPredictMission::new(
        team("Lions", 10, 50, 5),
        team("Aigles", 8, 50, 9),
        Weights {
            shots: 1.5,
            possession: 0.2,
            fouls: -0.8,
        },
    )
}

#[test]
fn test_incomplete_mission_not_recorded() {
    let mut progress = Progress::default();
    let mission = match_mission();
    assert!(!record_completion(&mission, &mut progress));
    assert_eq!(progress, Progress::default());
}

#[test]
fn test_completed_missions_unlock_badges() {
    let mut progress = Progress::default();

    let mut predict = match_mission();
    assert_eq!(predict.answer_quiz(Factor::Shots), Ok(true));
    assert!(record_completion(&predict, &mut progress));
    assert!(!record_completion(&predict, &mut progress));
    assert_eq!(progress.badges, vec!["Explorateur Data"]);

    let movies = vec![
        Movie {
            id: "a".to_string(),
            title: "A".to_string(),
            tags: vec!["sport".to_string(), "doc".to_string()],
        },
        Movie {
            id: "b".to_string(),
            title: "B".to_string(),
            tags: vec!["sport".to_string(), "drame".to_string(), "doc".to_string()],
        },
    ];
    let mut reco = RecoMission::new(movies, Vec::new());
    for tag in ["sport", "doc", "drame"] {
        reco.toggle_tag(tag);
    }
    assert!(record_completion(&reco, &mut progress));

    let data: SpamData = serde_json::from_str(
        r#"{
            "train": [{"text": "Gagne un cadeau", "label": "spam"}],
            "test": [
                {"text": "Cadeau offert !", "label": "spam"},
                {"text": "Réunion demain", "label": "ham"}
            ],
            "spamKeywords": ["cadeau"]
        }"#,
    )
    .unwrap();
    let mut spam = SpamMission::new(data);
    spam.label(0, Label::Spam).unwrap();
    spam.train().unwrap();
    assert_eq!(spam.test(), Ok(100));
    spam.answer_quiz("A");
    assert!(record_completion(&spam, &mut progress));

    assert_eq!(progress.missions_completed, vec![2, 3, 5]);
    assert_eq!(progress.score, 300);
    assert_eq!(progress.badges, vec!["Explorateur Data", "Détective"]);
}
